//! Wire types for historical bar responses (REST).

use serde::{Deserialize, Serialize};

/// Raw bar as the backend sends it.
///
/// `timestamp` stays a string here; parsing and validation happen in the
/// conversion to [`super::Bar`]. Unknown fields are ignored, `trade_count`
/// may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarResponse {
    pub symbol: String,
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    #[serde(default)]
    pub trade_count: u64,
    pub vwap: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_bar() {
        let json = r#"{
            "symbol": "AAPL",
            "timestamp": "2024-01-02T09:30:00Z",
            "open": 187.15,
            "high": 188.44,
            "low": 183.89,
            "close": 185.64,
            "volume": 82488700,
            "trade_count": 1021290,
            "vwap": 185.9465
        }"#;
        let bar: BarResponse = serde_json::from_str(json).unwrap();
        assert_eq!(bar.symbol, "AAPL");
        assert_eq!(bar.volume, 82488700);
    }

    #[test]
    fn test_trade_count_defaults_to_zero() {
        let json = r#"{
            "symbol": "AAPL",
            "timestamp": "2024-01-02 09:30:00",
            "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5,
            "volume": 100, "vwap": 1.25
        }"#;
        let bar: BarResponse = serde_json::from_str(json).unwrap();
        assert_eq!(bar.trade_count, 0);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"symbol": "AAPL", "timestamp": "2024-01-02T09:30:00Z"}"#;
        assert!(serde_json::from_str::<BarResponse>(json).is_err());
    }

    #[test]
    fn test_negative_volume_is_rejected() {
        let json = r#"{
            "symbol": "AAPL",
            "timestamp": "2024-01-02T09:30:00Z",
            "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5,
            "volume": -1, "vwap": 1.25
        }"#;
        assert!(serde_json::from_str::<BarResponse>(json).is_err());
    }
}
