//! Historical-bars domain — validated OHLCV data and its cached accessor.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::query::{QueryKey, QueryParams};
use crate::shared::{Symbol, Timeframe};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use state::HistoricalState;

/// Endpoint name for historical bars; also the first half of the cache key.
pub const ENDPOINT: &str = "historical";

/// One trading interval's OHLCV aggregate for a symbol.
///
/// Immutable once received; produced by validated conversion from
/// [`wire::BarResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub symbol: Symbol,
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub trade_count: u64,
    /// Volume-weighted average price.
    pub vwap: f64,
}

/// Parameters identifying one logical historical-bars request.
///
/// Structural equality doubles as cache identity: two independently built
/// values with the same fields address the same cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoricalParams {
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    pub limit: u32,
}

impl HistoricalParams {
    pub fn new(symbol: impl Into<Symbol>, timeframe: Timeframe, limit: u32) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe,
            limit,
        }
    }

    /// The URL query parameters, in wire order.
    pub fn to_query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("symbol", self.symbol.as_str())
            .with("timeframe", self.timeframe.as_str())
            .with("limit", self.limit)
    }

    /// The full cache key: `("historical", params)`.
    pub fn query_key(&self) -> QueryKey {
        QueryKey::new(ENDPOINT, self.to_query_params())
    }
}
