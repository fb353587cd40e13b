//! Request parameter mapping.
//!
//! Every API call carries a flat mapping of string keys to scalar values.
//! [`Params`] owns that mapping and knows how to render itself as query
//! pairs or a form-encoded body; where the values end up is the transport's
//! decision, driven by [`crate::Verb::sends_body`].

use std::collections::BTreeMap;

use derive_more::{Display, From};
use serde::Serialize;

/// A scalar request parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Display, From, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// String value.
    Str(String),
    /// Boolean value, rendered as `true`/`false`.
    Bool(bool),
    /// Integer value.
    Int(i64),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// Mapping of request parameters sent with an API call.
///
/// Insertion order is irrelevant to the remote API; the map keeps keys
/// sorted so rendered output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty parameter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up a parameter by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Returns `true` when the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`Self::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style insert that omits the key when the value is `None`.
    #[must_use]
    pub fn with_opt<K: Into<String>, V: Into<ParamValue>>(mut self, key: K, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Iterate over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as owned string pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    /// Render as a URL query string (no leading `?`).
    pub fn to_query_string(&self) -> crate::Result<String> {
        serde_urlencoded::to_string(self).map_err(Into::into)
    }

    /// Render as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> crate::Result<String> {
        self.to_query_string()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut params = Params::new();
        params.insert("name", "front door");
        params.insert("is_public", true);
        params.insert("limit", 50i64);

        assert_eq!(params.len(), 3);
        assert_eq!(
            params.get("name"),
            Some(&ParamValue::Str("front door".to_owned()))
        );
        assert_eq!(params.get("is_public"), Some(&ParamValue::Bool(true)));
        assert_eq!(params.get("limit"), Some(&ParamValue::Int(50)));
    }

    #[test]
    fn with_opt_omits_absent_values() {
        let params = Params::new()
            .with("page", 1i64)
            .with_opt("limit", Some(25i64))
            .with_opt::<_, i64>("from", None);

        assert!(params.contains_key("limit"));
        assert!(!params.contains_key("from"));
    }

    #[test]
    fn insert_replaces_existing_key() {
        let params = Params::new().with("api_id", "caller").with("api_id", "configured");
        assert_eq!(
            params.get("api_id"),
            Some(&ParamValue::Str("configured".to_owned()))
        );
    }

    #[test]
    fn query_string_rendering() {
        let params = Params::new()
            .with("api_id", "123456")
            .with("include_shared", true)
            .with("limit", 10i64);

        let query = params.to_query_string().expect("query");
        assert_eq!(query, "api_id=123456&include_shared=true&limit=10");
    }

    #[test]
    fn query_string_escapes_values() {
        let params = Params::new().with("id_contains", "front door");
        let query = params.to_query_string().expect("query");
        assert_eq!(query, "id_contains=front+door");
    }

    #[test]
    fn empty_params_render_empty() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string().expect("query"), "");
    }
}
