//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// HTTP-layer errors.
///
/// Transport failures (DNS, connection refused, abort) and non-success
/// statuses travel through the same error channel but stay distinguishable
/// in message text: `Status` carries the canonical status text the server
/// answered with, `Transport` carries the underlying client error.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status} {text}")]
    Status { status: u16, text: String },
}

/// Wire-shape validation errors.
///
/// Raised when a 2xx body parses as JSON but does not match the expected
/// bar schema. Kept distinct from [`HttpError`] so callers can tell a
/// misbehaving backend from an unreachable one.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Response shape mismatch: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("Unparseable timestamp {timestamp:?}: {reason}")]
    Timestamp { timestamp: String, reason: String },

    #[error("Non-finite price in bar at {timestamp:?}")]
    NonFinitePrice { timestamp: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_contains_status_text() {
        let err = HttpError::Status {
            status: 404,
            text: "Not Found".to_string(),
        };
        assert!(err.to_string().contains("Not Found"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_sdk_error_preserves_http_message() {
        let err = SdkError::from(HttpError::Status {
            status: 503,
            text: "Service Unavailable".to_string(),
        });
        assert!(err.to_string().contains("Service Unavailable"));
    }
}
