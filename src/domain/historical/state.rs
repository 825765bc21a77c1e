//! Historical request state container — app-owned, SDK-provided update logic.

use super::{Bar, HistoricalParams};
use crate::error::SdkError;
use crate::query::QueryState;
use std::collections::HashMap;

const IDLE: QueryState<Vec<Bar>> = QueryState::Idle;

/// Per-request lifecycle state, keyed by [`HistoricalParams`].
///
/// The app owns instances of this type and drives the transitions around
/// its calls to the sub-client:
///
/// ```rust,ignore
/// state.begin_loading(&params);
/// let result = client.historical().get(&params).await;
/// state.resolve(&params, result);
/// ```
///
/// Success data persists until the next `begin_loading` for the same
/// parameters.
#[derive(Debug, Clone, Default)]
pub struct HistoricalState {
    entries: HashMap<HistoricalParams, QueryState<Vec<Bar>>>,
}

impl HistoricalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition `params` to the loading state.
    pub fn begin_loading(&mut self, params: &HistoricalParams) {
        self.entries.insert(params.clone(), QueryState::Loading);
    }

    /// Resolve the in-flight request: success stores the bars, failure
    /// stores the error's message text unchanged.
    pub fn resolve(&mut self, params: &HistoricalParams, result: Result<Vec<Bar>, SdkError>) {
        let state = match result {
            Ok(bars) => QueryState::Success(bars),
            Err(e) => QueryState::Error(e.to_string()),
        };
        self.entries.insert(params.clone(), state);
    }

    /// Current state for `params`; idle when never requested.
    pub fn get(&self, params: &HistoricalParams) -> &QueryState<Vec<Bar>> {
        self.entries.get(params).unwrap_or(&IDLE)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
