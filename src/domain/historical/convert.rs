//! Conversion: BarResponse → Bar (TryFrom + validation).

use super::wire::BarResponse;
use super::Bar;
use crate::error::SchemaError;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 (`2024-01-02T09:30:00Z`, fractional seconds allowed)
/// and the backend's naive `%Y-%m-%d %H:%M:%S` form, which is UTC.
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, SchemaError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| SchemaError::Timestamp {
            timestamp: raw.to_string(),
            reason: e.to_string(),
        })
}

impl TryFrom<BarResponse> for Bar {
    type Error = SchemaError;

    fn try_from(source: BarResponse) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&source.timestamp)?;

        for price in [source.open, source.high, source.low, source.close, source.vwap] {
            if !price.is_finite() {
                return Err(SchemaError::NonFinitePrice {
                    timestamp: source.timestamp,
                });
            }
        }

        Ok(Bar {
            symbol: source.symbol.into(),
            timestamp,
            open: source.open,
            high: source.high,
            low: source.low,
            close: source.close,
            volume: source.volume,
            trade_count: source.trade_count,
            vwap: source.vwap,
        })
    }
}
