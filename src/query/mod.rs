//! Query layer — cache keys, request state, and the coalescing cache.
//!
//! A query is identified by [`QueryKey`]: an endpoint name plus an ordered
//! parameter list. The same key is used to build the request URL and to
//! address the cache, so two structurally equal parameter sets always
//! resolve to one cache entry regardless of where they were constructed.

#[cfg(feature = "http")]
pub mod cache;
pub mod state;

#[cfg(feature = "http")]
pub use cache::QueryCache;
pub use state::QueryState;

// ─── ParamValue ──────────────────────────────────────────────────────────────

/// A primitive query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(i) => write!(f, "{}", i),
            Self::UInt(u) => write!(f, "{}", u),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u64> for ParamValue {
    fn from(u: u64) -> Self {
        Self::UInt(u)
    }
}

impl From<u32> for ParamValue {
    fn from(u: u32) -> Self {
        Self::UInt(u as u64)
    }
}

// ─── QueryParams ─────────────────────────────────────────────────────────────

/// An ordered mapping of parameter names to primitive values.
///
/// Order is preserved: it is part of structural equality and of the built
/// query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryParams(Vec<(String, ParamValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build the percent-encoded query string (`k=v&k=v`, no leading `?`).
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(&v.to_string())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

// ─── QueryKey ────────────────────────────────────────────────────────────────

/// Cache key: endpoint name + parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    endpoint: String,
    params: QueryParams,
}

impl QueryKey {
    pub fn new(endpoint: impl Into<String>, params: QueryParams) -> Self {
        Self {
            endpoint: endpoint.into(),
            params,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.endpoint)
        } else {
            write!(f, "{}?{}", self.endpoint, self.params.to_query_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn historical_params() -> QueryParams {
        QueryParams::new()
            .with("symbol", "AAPL")
            .with("timeframe", "1D")
            .with("limit", 10u64)
    }

    #[test]
    fn test_query_string_round_trip() {
        let params = QueryParams::new()
            .with("symbol", "BRK.B")
            .with("note", "a b&c=d")
            .with("limit", 100u64);
        let qs = params.to_query_string();

        // Re-parse and compare against the original mapping.
        let decoded: Vec<(String, String)> = qs
            .split('&')
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap();
                (
                    urlencoding::decode(k).unwrap().into_owned(),
                    urlencoding::decode(v).unwrap().into_owned(),
                )
            })
            .collect();
        let original: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_query_string_percent_encodes() {
        let qs = QueryParams::new().with("q", "a b&c").to_query_string();
        assert_eq!(qs, "q=a%20b%26c");
    }

    #[test]
    fn test_empty_params_yield_empty_string() {
        assert_eq!(QueryParams::new().to_query_string(), "");
        assert!(QueryParams::new().is_empty());
    }

    #[test]
    fn test_structurally_equal_keys_collide() {
        // Two independently built keys must address the same map entry.
        let a = QueryKey::new("historical", historical_params());
        let b = QueryKey::new("historical", historical_params());
        assert_eq!(a, b);

        let mut map = HashMap::new();
        map.insert(a, 1);
        assert_eq!(map.get(&b), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_param_order_is_significant() {
        let a = QueryParams::new().with("x", 1u64).with("y", 2u64);
        let b = QueryParams::new().with("y", 2u64).with("x", 1u64);
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_display() {
        let key = QueryKey::new("historical", historical_params());
        assert_eq!(
            key.to_string(),
            "historical?symbol=AAPL&timeframe=1D&limit=10"
        );
        assert_eq!(QueryKey::new("assets", QueryParams::new()).to_string(), "assets");
    }
}
