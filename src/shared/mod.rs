//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Newtype for asset ticker symbols (e.g. `"AAPL"`, `"BTC-USD"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol(s.to_string()))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol(s))
    }
}

// ─── Timeframe ───────────────────────────────────────────────────────────────

/// Bar aggregation interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1Min")]
    Minute1,
    #[serde(rename = "5Min")]
    Minute5,
    #[serde(rename = "15Min")]
    Minute15,
    #[serde(rename = "30Min")]
    Minute30,
    #[serde(rename = "1H")]
    Hour1,
    #[serde(rename = "4H")]
    Hour4,
    #[default]
    #[serde(rename = "1D")]
    Day1,
    #[serde(rename = "1W")]
    Week1,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1Min",
            Self::Minute5 => "5Min",
            Self::Minute15 => "15Min",
            Self::Minute30 => "30Min",
            Self::Hour1 => "1H",
            Self::Hour4 => "4H",
            Self::Day1 => "1D",
            Self::Week1 => "1W",
        }
    }

    /// Duration of one bar in seconds.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Minute1 => 60,
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Minute30 => 1800,
            Self::Hour1 => 3600,
            Self::Hour4 => 14400,
            Self::Day1 => 86400,
            Self::Week1 => 604800,
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_serde() {
        let sym = Symbol::new("AAPL");
        let json = serde_json::to_string(&sym).unwrap();
        assert_eq!(json, "\"AAPL\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(sym, back);
    }

    #[test]
    fn test_timeframe_serde() {
        let tf: Timeframe = serde_json::from_str("\"4H\"").unwrap();
        assert_eq!(tf, Timeframe::Hour4);
        assert_eq!(tf.seconds(), 14400);
        assert_eq!(serde_json::to_string(&Timeframe::Day1).unwrap(), "\"1D\"");
    }

    #[test]
    fn test_timeframe_default_is_daily() {
        assert_eq!(Timeframe::default(), Timeframe::Day1);
    }
}
