//! The externally supplied request mapping.
//!
//! A [`Request`] is a flat string-to-string mapping of raw parameter values,
//! owned by the caller and read-only from the chain's perspective. A server
//! layer typically builds one from query parameters or a JSON body; tests and
//! embedders can use [`Request::from_pairs`] or the [`Request::set`] builder.

use std::collections::BTreeMap;

/// Raw request parameters, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    values: BTreeMap<String, String>,
}

impl Request {
    /// An empty request. Applying the chain with it leaves tables unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a request from key/value pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builder-style insertion; later values win.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Build a request from a JSON object of scalar parameters.
    ///
    /// Strings are taken verbatim; numbers and booleans are rendered in their
    /// canonical string forms (`true` becomes `1`, `false` becomes `0`).
    /// Nested arrays/objects and `null` members are not request parameters
    /// and are ignored.
    pub fn from_json_object(value: &serde_json::Value) -> Self {
        let mut values = BTreeMap::new();
        if let serde_json::Value::Object(map) = value {
            for (key, member) in map {
                let raw = match member {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(true) => "1".to_string(),
                    serde_json::Value::Bool(false) => "0".to_string(),
                    _ => continue,
                };
                values.insert(key.clone(), raw);
            }
        }
        Self { values }
    }

    /// Look up the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the caller-owned `disable_generic_filters` flag is set.
    ///
    /// The chain itself never consults this; callers are expected to check it
    /// before invoking the chain at all.
    pub fn generic_filters_disabled(&self) -> bool {
        self.get("disable_generic_filters")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(0)
            != 0
    }
}
