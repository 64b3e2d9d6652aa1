//! Validation schema: one rule per field name.

use crate::{SchemaBuilder, ValidationRule};
use std::collections::BTreeMap;

/// The read-only mapping from field name to rule for one form.
///
/// Built once through [`SchemaBuilder`] and never modified afterwards.
/// Cloning is cheap enough to hand one schema to several validators: rules
/// share their predicates and message functions.
#[derive(Debug, Clone, Default)]
pub struct ValidationSchema {
    rules: BTreeMap<String, ValidationRule>,
}

impl ValidationSchema {
    /// Starts building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Creates a schema with no fields.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_rules(rules: BTreeMap<String, ValidationRule>) -> Self {
        Self { rules }
    }

    /// Returns the rule for a field, if declared.
    pub fn get(&self, name: &str) -> Option<&ValidationRule> {
        self.rules.get(name)
    }

    /// Returns true if the field is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Declared field names, in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Iterates over `(field name, rule)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
