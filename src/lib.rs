//! # chartfeed
//!
//! A Rust client SDK for an OHLCV market-data backend: cached bar queries
//! and chart-series preparation.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — shared newtypes, domain models, chart series types
//! 2. **HTTP API** — `ChartFeedHttp`, one method per REST endpoint
//! 3. **Query** — `QueryCache` keyed by `(endpoint, params)`, with TTL
//!    freshness and per-key coalescing of concurrent requests
//! 4. **High-Level Client** — `ChartFeedClient` with nested sub-clients
//!
//! Chart rendering stays outside the SDK: [`domain::chart`] produces the
//! sorted, epoch-second series and the [`domain::chart::ChartTheme`] the
//! rendering surface consumes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chartfeed::prelude::*;
//!
//! let client = ChartFeedClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let params = HistoricalParams::new("AAPL", Timeframe::Day1, 10);
//! let bars = client.historical().get(&params).await?;
//! let series = to_candlestick_series(&bars);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network address configuration.
pub mod network;

/// Query keys, request state, and the coalescing cache.
pub mod query;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ChartFeedClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Symbol, Timeframe};

    // Domain types — historical bars
    pub use crate::domain::historical::{Bar, HistoricalParams, HistoricalState};

    // Domain types — chart series
    pub use crate::domain::chart::{
        to_candlestick_series, to_line_series, CandlestickPoint, ChartTheme, LinePoint,
    };

    // Errors
    pub use crate::error::{HttpError, SchemaError, SdkError};

    // Network
    pub use crate::network::{API_URL_ENV, DEFAULT_API_URL};

    // Query layer
    pub use crate::query::{ParamValue, QueryKey, QueryParams, QueryState};
    #[cfg(feature = "http")]
    pub use crate::query::QueryCache;

    // High-level client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{ChartFeedClient, ChartFeedClientBuilder, HistoricalClient};
}
