//! Chart domain — series preparation for a rendering surface.
//!
//! The SDK owns the data shapes; the rendering surface (a canvas host,
//! terminal widget, or browser chart) owns sizing and redraw. Series fed
//! to a chart must be non-decreasing in time — most surfaces treat
//! out-of-order input as undefined behavior — so the adapters here sort
//! before handing data over.

pub mod theme;

pub use theme::ChartTheme;

use crate::domain::historical::Bar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One candlestick on a chart. `time` is Unix epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlestickPoint {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// One point on a line or area chart. `time` is Unix epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub time: i64,
    pub value: f64,
}

/// Epoch seconds as the chart surface expects them: the floor of
/// milliseconds over 1000, so sub-second timestamps truncate to the
/// containing second rather than rounding.
fn epoch_seconds(timestamp: &DateTime<Utc>) -> i64 {
    timestamp.timestamp_millis().div_euclid(1000)
}

/// Reshape bars into a candlestick series: OHLC carried through unchanged,
/// ascending by time, stably sorted (equal-time bars keep their input
/// order). Pure — the input is untouched and a fresh series is produced
/// each call.
pub fn to_candlestick_series(bars: &[Bar]) -> Vec<CandlestickPoint> {
    let mut series: Vec<CandlestickPoint> = bars
        .iter()
        .map(|bar| CandlestickPoint {
            time: epoch_seconds(&bar.timestamp),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
        })
        .collect();
    series.sort_by_key(|point| point.time);
    series
}

/// Reshape bars into a line series over closing prices. Same time
/// derivation and ordering guarantees as [`to_candlestick_series`].
pub fn to_line_series(bars: &[Bar]) -> Vec<LinePoint> {
    let mut series: Vec<LinePoint> = bars
        .iter()
        .map(|bar| LinePoint {
            time: epoch_seconds(&bar.timestamp),
            value: bar.close,
        })
        .collect();
    series.sort_by_key(|point| point.time);
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bar_at(timestamp: DateTime<Utc>, open: f64) -> Bar {
        Bar {
            symbol: "AAPL".into(),
            timestamp,
            open,
            high: open + 2.0,
            low: open - 2.0,
            close: open + 1.0,
            volume: 1000,
            trade_count: 10,
            vwap: open + 0.5,
        }
    }

    fn ts(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, h, m, 0).unwrap()
    }

    #[test]
    fn test_epoch_seconds_fixture() {
        let t: DateTime<Utc> = "2024-01-02T09:30:00.000Z".parse().unwrap();
        assert_eq!(epoch_seconds(&t), 1704187800);
    }

    #[test]
    fn test_epoch_seconds_truncates_not_rounds() {
        let whole: DateTime<Utc> = "2024-01-02T09:30:00.000Z".parse().unwrap();
        let fractional: DateTime<Utc> = "2024-01-02T09:30:00.500Z".parse().unwrap();
        assert_eq!(epoch_seconds(&fractional), epoch_seconds(&whole));

        let late: DateTime<Utc> = "2024-01-02T09:30:00.999Z".parse().unwrap();
        assert_eq!(epoch_seconds(&late), 1704187800);
    }

    #[test]
    fn test_pre_epoch_fraction_floors_downward() {
        let t: DateTime<Utc> = "1969-12-31T23:59:59.500Z".parse().unwrap();
        assert_eq!(epoch_seconds(&t), -1);
    }

    #[test]
    fn test_reverse_sorted_input_comes_out_ascending() {
        let bars = vec![bar_at(ts(10, 0), 1.0), bar_at(ts(9, 0), 2.0)];
        let series = to_candlestick_series(&bars);
        assert_eq!(series.len(), 2);
        assert!(series[0].time < series[1].time);
        assert_eq!(series[0].open, 2.0);
        assert_eq!(series[1].open, 1.0);
    }

    #[test]
    fn test_sorted_input_is_preserved() {
        let bars = vec![
            bar_at(ts(9, 0), 1.0),
            bar_at(ts(9, 30), 2.0),
            bar_at(ts(10, 0), 3.0),
        ];
        let series = to_candlestick_series(&bars);
        let times: Vec<i64> = series.iter().map(|p| p.time).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(series[0].open, 1.0);
        assert_eq!(series[2].open, 3.0);
    }

    #[test]
    fn test_duplicate_timestamps_keep_relative_order() {
        let bars = vec![
            bar_at(ts(10, 0), 5.0),
            bar_at(ts(9, 0), 1.0),
            bar_at(ts(9, 0), 2.0),
            bar_at(ts(9, 0), 3.0),
        ];
        let series = to_candlestick_series(&bars);
        assert_eq!(series[0].open, 1.0);
        assert_eq!(series[1].open, 2.0);
        assert_eq!(series[2].open, 3.0);
        assert_eq!(series[3].open, 5.0);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let bars = vec![bar_at(ts(10, 0), 1.0), bar_at(ts(9, 0), 2.0)];
        let snapshot = bars.clone();
        let _ = to_candlestick_series(&bars);
        assert_eq!(bars, snapshot);
    }

    #[test]
    fn test_ohlc_carried_through_unchanged() {
        let bars = vec![bar_at(ts(9, 30), 187.15)];
        let point = to_candlestick_series(&bars)[0];
        assert_eq!(point.open, 187.15);
        assert_eq!(point.high, 189.15);
        assert_eq!(point.low, 185.15);
        assert_eq!(point.close, 188.15);
    }

    #[test]
    fn test_line_series_uses_close() {
        let bars = vec![bar_at(ts(10, 0), 1.0), bar_at(ts(9, 0), 2.0)];
        let series = to_line_series(&bars);
        assert_eq!(series[0].value, 3.0);
        assert_eq!(series[1].value, 2.0);
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        assert!(to_candlestick_series(&[]).is_empty());
        assert!(to_line_series(&[]).is_empty());
    }
}
