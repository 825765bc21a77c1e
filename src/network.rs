//! Network address configuration.

/// Default REST API base URL (local backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable that overrides [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "CHARTFEED_API_URL";

/// Resolve the API base URL: `CHARTFEED_API_URL` if set and non-empty,
/// otherwise [`DEFAULT_API_URL`].
pub fn api_url() -> String {
    match std::env::var(API_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_URL.to_string(),
    }
}
