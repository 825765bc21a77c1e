//! Historical sub-client — cached, validated bar queries.

use super::wire::BarResponse;
use super::{Bar, HistoricalParams};
use crate::client::ChartFeedClient;
use crate::error::{SchemaError, SdkError};
use tracing::warn;

/// Sub-client for historical bar operations.
pub struct Historical<'a> {
    pub(crate) client: &'a ChartFeedClient,
}

impl<'a> Historical<'a> {
    /// Get the bars for `params`. Uses the query cache.
    ///
    /// Concurrent calls with structurally equal parameters coalesce into a
    /// single network request. Fetch errors propagate with the fetch
    /// layer's message unchanged; a 2xx body that does not match the bar
    /// schema fails with [`SdkError::Schema`].
    pub async fn get(&self, params: &HistoricalParams) -> Result<Vec<Bar>, SdkError> {
        let http = &self.client.http;
        let value = self
            .client
            .queries
            .get_or_fetch(params.query_key(), || async {
                http.get_historical(params).await
            })
            .await?;

        let wire: Vec<BarResponse> = serde_json::from_value((*value).clone()).map_err(|e| {
            warn!(symbol = %params.symbol, error = %e, "historical response failed validation");
            SchemaError::Shape(e)
        })?;

        wire.into_iter()
            .map(Bar::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(SdkError::from)
    }

    /// Invalidate the cached entry for `params`.
    pub async fn invalidate(&self, params: &HistoricalParams) {
        self.client.queries.invalidate(&params.query_key()).await;
    }

    /// Drop all cached query results.
    pub async fn clear_cache(&self) {
        self.client.queries.clear().await;
    }
}
