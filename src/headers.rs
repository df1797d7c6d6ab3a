use derive_more::From;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single header as delivered by the edge platform.
///
/// `key` carries the header name in the case it was transmitted (e.g., `Host`), while the map it
/// lives in is keyed by the lowercase name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderValue {
    pub key: String,
    pub value: String,
}

impl HeaderValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        HeaderValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Request headers: lowercase header name to the ordered list of values received under it.
///
/// Header names keep the order they were received in; new names go after existing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, From)]
#[serde(transparent)]
pub struct Headers(IndexMap<String, Vec<HeaderValue>>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// All values stored under `name`. `name` must be lowercase.
    pub fn get(&self, name: &str) -> Option<&[HeaderValue]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Value of the first record stored under `name`.
    ///
    /// Returns `None` both when the header is absent and when its value list is empty.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.get(name)?.first().map(|it| it.value.as_str())
    }

    /// Replace everything stored under `name` with a single record whose `key` is `name`,
    /// returning the previous values. An existing entry keeps its position.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<Vec<HeaderValue>> {
        let name = name.into();
        let record = HeaderValue::new(name.clone(), value);
        self.0.insert(name, vec![record])
    }

    /// Add a value after any existing ones. The map entry is keyed by the lowercased `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.0
            .entry(key.to_ascii_lowercase())
            .or_default()
            .push(HeaderValue::new(key, value));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[HeaderValue])> {
        self.0
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}
