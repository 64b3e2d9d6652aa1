//! Per-form error and touched state.

use serde::Serialize;
use std::collections::BTreeMap;

/// Current error message per field.
///
/// An empty string means the field is valid, and so does a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    messages: BTreeMap<String, String>,
}

impl FormErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the message for a field, or `""` if it has none.
    pub fn get(&self, name: &str) -> &str {
        self.messages.get(name).map(String::as_str).unwrap_or("")
    }

    /// Returns true if the field currently has a non-empty message.
    pub fn has_error(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    /// Returns true if the field has an entry, even an empty one.
    pub fn contains_key(&self, name: &str) -> bool {
        self.messages.contains_key(name)
    }

    /// Number of entries, including empty ones.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of fields with a non-empty message.
    pub fn error_count(&self) -> usize {
        self.messages.values().filter(|m| !m.is_empty()).count()
    }

    /// Iterates over all entries, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }

    /// Iterates over fields with a non-empty message.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, message)| !message.is_empty())
    }

    /// Field names with entries.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub(crate) fn set(&mut self, name: &str, message: String) {
        self.messages.insert(name.to_string(), message);
    }

    pub(crate) fn clear(&mut self) {
        self.messages.clear();
    }
}

impl FromIterator<(String, String)> for FormErrors {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

/// Which fields the user has interacted with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TouchedFields {
    fields: BTreeMap<String, bool>,
}

impl TouchedFields {
    /// Creates an empty touched map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the field is marked touched.
    pub fn is_touched(&self, name: &str) -> bool {
        self.fields.get(name).copied().unwrap_or(false)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names with entries.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub(crate) fn mark(&mut self, name: &str) {
        self.fields.insert(name.to_string(), true);
    }

    pub(crate) fn clear(&mut self) {
        self.fields.clear();
    }
}

impl FromIterator<String> for TouchedFields {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|name| (name, true)).collect(),
        }
    }
}
