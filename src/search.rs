//! Query-string parameters carried by the people routes.
//!
//! The router hands the raw query string to [`SearchParams`] and renders it
//! back through [`std::fmt::Display`], so every filter control works by
//! deriving a new `SearchParams` from the current one and navigating to it.

use std::fmt;

use url::form_urlencoded;

/// Ordered, multi-valued key/value pairs, e.g. `query=an&centuries=18&centuries=19`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

/// Replacement for a single key in [`SearchParams::with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Clear,
    One(String),
    Many(Vec<String>),
}

impl ParamValue {
    /// Free-text input: an empty string removes the key.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            ParamValue::Clear
        } else {
            ParamValue::One(value)
        }
    }
}

impl From<Option<&str>> for ParamValue {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(v) => ParamValue::One(v.to_string()),
            None => ParamValue::Clear,
        }
    }
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(input: &str) -> Self {
        let input = input.trim_start_matches('?');
        let pairs = form_urlencoded::parse(input.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns a copy with the given keys replaced; every other key keeps its
    /// values and position.
    ///
    /// `One` overwrites the first occurrence in place and drops the rest,
    /// `Many` moves the key to the end with the new values, `Clear` (or an
    /// empty `Many`) removes the key.
    pub fn with<I, K>(&self, updates: I) -> Self
    where
        I: IntoIterator<Item = (K, ParamValue)>,
        K: Into<String>,
    {
        let mut next = self.clone();
        for (key, value) in updates {
            let key = key.into();
            match value {
                ParamValue::Clear => next.remove(&key),
                ParamValue::One(v) => next.set(key, v),
                ParamValue::Many(values) => {
                    next.remove(&key);
                    next.pairs
                        .extend(values.into_iter().map(|v| (key.clone(), v)));
                }
            }
        }
        next
    }

    fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    fn set(&mut self, key: String, value: String) {
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || *k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key, value)),
        }
    }
}

impl From<&str> for SearchParams {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        f.write_str(&encoded)
    }
}

impl<K, V> FromIterator<(K, V)> for SearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
