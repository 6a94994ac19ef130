//! Language-map labels.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A label keyed by language tag, with `"none"` for language-neutral values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(BTreeMap<String, Vec<String>>);

impl Label {
    /// Creates a language-neutral label.
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_language("none", value)
    }

    /// Creates a label in the given language.
    pub fn with_language(language: impl Into<String>, value: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(language.into(), vec![value.into()]);
        Self(map)
    }

    /// Returns the first value recorded for the given language tag.
    pub fn value(&self, language: &str) -> Option<&str> {
        self.0.get(language).and_then(|v| v.first()).map(String::as_str)
    }
}
