//! High-level client — `ChartFeedClient` with nested sub-client accessors.
//!
//! The query cache has an explicit lifecycle: it is constructed here, owned
//! by the client, and dropped with it. Nothing in the crate holds
//! process-wide state.

use crate::domain::historical::client::Historical;
use crate::error::SdkError;
use crate::http::ChartFeedHttp;
use crate::query::QueryCache;

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::historical::client::Historical as HistoricalClient;

/// The primary entry point for the chartfeed SDK.
///
/// ```rust,ignore
/// use chartfeed::prelude::*;
///
/// let client = ChartFeedClient::builder()
///     .base_url("http://localhost:8000")
///     .build()?;
///
/// let bars = client
///     .historical()
///     .get(&HistoricalParams::new("AAPL", Timeframe::Day1, 10))
///     .await?;
/// let series = to_candlestick_series(&bars);
/// ```
pub struct ChartFeedClient {
    pub(crate) http: ChartFeedHttp,
    pub(crate) queries: Arc<QueryCache>,
}

impl ChartFeedClient {
    pub fn builder() -> ChartFeedClientBuilder {
        ChartFeedClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn historical(&self) -> Historical<'_> {
        Historical { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Clear all cached query results.
    pub async fn clear_all_caches(&self) {
        self.queries.clear().await;
    }
}

impl Clone for ChartFeedClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            queries: self.queries.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ChartFeedClientBuilder {
    base_url: String,
    cache_ttl: Duration,
}

impl Default for ChartFeedClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::api_url(),
            cache_ttl: Duration::from_secs(60),
        }
    }
}

impl ChartFeedClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// How long a cached query result stays fresh.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<ChartFeedClient, SdkError> {
        Ok(ChartFeedClient {
            http: ChartFeedHttp::new(&self.base_url),
            queries: Arc::new(QueryCache::new(self.cache_ttl)),
        })
    }
}
