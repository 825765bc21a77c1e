//! Low-level HTTP client — `ChartFeedHttp`.
//!
//! One method per API endpoint, returning raw JSON. Schema validation
//! happens at the domain boundary (`wire` → domain conversion). Internal
//! to the SDK — the high-level client wraps this.

use crate::domain::historical::{self, HistoricalParams};
use crate::error::HttpError;
use crate::query::QueryParams;

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Low-level HTTP client for the market-data REST API.
///
/// Issues single GET requests: no retries, no auth. Cancellation is
/// best-effort — dropping a request future aborts the in-flight request.
#[derive(Clone)]
pub struct ChartFeedHttp {
    base_url: String,
    client: Client,
}

impl ChartFeedHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Historical bars ──────────────────────────────────────────────────

    pub async fn get_historical(
        &self,
        params: &HistoricalParams,
    ) -> Result<serde_json::Value, HttpError> {
        self.get_json(historical::ENDPOINT, &params.to_query_params())
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// `GET {base}/{endpoint}[?params]`, returning the parsed JSON body
    /// verbatim on 2xx.
    pub(crate) async fn get_json(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<serde_json::Value, HttpError> {
        let url = self.request_url(endpoint, params);
        debug!(%url, "issuing GET");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        debug!(%url, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                text: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            });
        }

        Ok(resp.json().await?)
    }

    /// Query string is appended only when `params` is non-empty.
    fn request_url(&self, endpoint: &str, params: &QueryParams) -> String {
        if params.is_empty() {
            format!("{}/{}", self.base_url, endpoint)
        } else {
            format!("{}/{}?{}", self.base_url, endpoint, params.to_query_string())
        }
    }
}
