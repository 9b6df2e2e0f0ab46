//! Purpose: Flat query-string parsing for the framework's query interface.
//! Exports: `Query`.
//! Role: Keep URL query values as plain strings; typed extraction never applies here.
//! Invariants: Duplicate keys resolve to the first occurrence.
//! Invariants: Percent- and plus-decoding follow form-urlencoded rules.

use url::form_urlencoded;

/// A parsed query string. Order-preserving so first-wins lookup is cheap and
/// iteration matches the wire order.
#[derive(Clone, Debug, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Parses the raw query portion of a URL (without the leading `?`).
    pub fn parse(raw: &str) -> Self {
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
