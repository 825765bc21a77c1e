//! Domain modules (vertical slices): types, wire types, conversions, state.

pub mod chart;
pub mod historical;
