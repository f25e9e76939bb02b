//! Element attributes
//!
//! Attributes keep insertion order, which is also the order they are written
//! out in. Replacing a value keeps the key where it was.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One structured index entry, as produced by index directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub entry_type: String,
    pub value: String,
    pub target_id: String,
    pub main: String,
    pub key: Option<String>,
}

impl IndexEntry {
    pub fn new(
        entry_type: impl Into<String>,
        value: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        Self {
            entry_type: entry_type.into(),
            value: value.into(),
            target_id: target_id.into(),
            main: String::new(),
            key: None,
        }
    }

    /// A `single` entry, the most common kind.
    pub fn single(value: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self::new("single", value, target_id)
    }
}

/// Value of an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
    /// Structured index entries; see [`crate::transforms::IndexEntriesTransform`].
    Entries(Vec<IndexEntry>),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Str(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Vec<IndexEntry>> for AttrValue {
    fn from(value: Vec<IndexEntry>) -> Self {
        AttrValue::Entries(value)
    }
}

/// Insertion-ordered attribute map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// String value of an attribute; `None` when absent or not a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(AttrValue::as_str)
    }

    /// Set an attribute. An existing key keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Remove an attribute, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.0.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
