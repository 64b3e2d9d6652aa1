//! Builder pattern for creating validation schemas.
//!
//! This module provides fluent builders for rules and schemas.

use crate::{
    CustomCheck, FieldType, FieldValue, NamedCheck, NamedPattern, Result, RuleMessage,
    SchemaError, ValidationRule, ValidationSchema,
};
use regex::Regex;
use std::collections::BTreeMap;

/// Builder for creating a `ValidationSchema`.
///
/// # Example
///
/// ```rust
/// use forms_core::{RuleBuilder, SchemaBuilder, FieldType};
///
/// let schema = SchemaBuilder::new()
///     .field(
///         "name",
///         RuleBuilder::new()
///             .required()
///             .length(2, 50)
///             .field_type(FieldType::Name)
///             .build(),
///     )
///     .field("age", RuleBuilder::new().required().range(1.0, 18.0).build())
///     .build()
///     .expect("valid schema");
///
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(String, ValidationRule)>,
}

impl SchemaBuilder {
    /// Creates an empty schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field with its rule.
    pub fn field(mut self, name: impl Into<String>, rule: ValidationRule) -> Self {
        self.fields.push((name.into(), rule));
        self
    }

    /// Declares multiple fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = (String, ValidationRule)>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Builds the schema.
    ///
    /// # Errors
    ///
    /// Fails on blank or duplicate field names, and on rules whose lower
    /// bound exceeds their upper bound.
    pub fn build(self) -> Result<ValidationSchema> {
        let mut rules = BTreeMap::new();

        for (name, rule) in self.fields {
            if name.trim().is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            check_bounds(&name, &rule)?;
            if rules.contains_key(&name) {
                return Err(SchemaError::duplicate_field(name));
            }
            rules.insert(name, rule);
        }

        Ok(ValidationSchema::from_rules(rules))
    }
}

fn check_bounds(name: &str, rule: &ValidationRule) -> Result<()> {
    if let (Some(min), Some(max)) = (rule.min_length, rule.max_length) {
        if min > max {
            return Err(SchemaError::inverted_bounds(name, min, max));
        }
    }
    if let (Some(min), Some(max)) = (rule.min, rule.max) {
        if min > max {
            return Err(SchemaError::inverted_bounds(
                name,
                crate::format_number(min),
                crate::format_number(max),
            ));
        }
    }
    Ok(())
}

/// Builder for creating a `ValidationRule`.
///
/// # Example
///
/// ```rust
/// use forms_core::{NamedPattern, RuleBuilder};
///
/// let rule = RuleBuilder::new()
///     .required()
///     .named_pattern(NamedPattern::Email)
///     .message("Email address is required")
///     .build();
///
/// assert!(rule.required);
/// assert!(rule.pattern.is_some());
/// ```
#[derive(Debug, Default)]
pub struct RuleBuilder {
    rule: ValidationRule,
}

impl RuleBuilder {
    /// Creates a builder for an empty rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.rule.required = true;
        self
    }

    /// Sets the minimum length.
    pub fn min_length(mut self, min: usize) -> Self {
        self.rule.min_length = Some(min);
        self
    }

    /// Sets the maximum length.
    pub fn max_length(mut self, max: usize) -> Self {
        self.rule.max_length = Some(max);
        self
    }

    /// Sets both length bounds.
    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    /// Sets the minimum numeric value.
    pub fn min(mut self, min: f64) -> Self {
        self.rule.min = Some(min);
        self
    }

    /// Sets the maximum numeric value.
    pub fn max(mut self, max: f64) -> Self {
        self.rule.max = Some(max);
        self
    }

    /// Sets both numeric bounds.
    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// Sets the format pattern.
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.rule.pattern = Some(pattern);
        self
    }

    /// Uses a built-in format as the pattern.
    pub fn named_pattern(self, pattern: NamedPattern) -> Self {
        self.pattern(pattern.regex().clone())
    }

    /// Sets the custom predicate.
    pub fn custom(mut self, check: impl Fn(&FieldValue) -> bool + Send + Sync + 'static) -> Self {
        self.rule.custom = Some(CustomCheck::new(check));
        self
    }

    /// Uses a built-in predicate as the custom check.
    pub fn named_check(mut self, check: NamedCheck) -> Self {
        self.rule.custom = Some(check.into_custom());
        self
    }

    /// Sets the message override.
    pub fn message(mut self, message: impl Into<RuleMessage>) -> Self {
        self.rule.message = Some(message.into());
        self
    }

    /// Sets a computed message override.
    pub fn message_fn(
        self,
        f: impl Fn(Option<&FieldValue>, &ValidationRule) -> String + Send + Sync + 'static,
    ) -> Self {
        self.message(RuleMessage::template(f))
    }

    /// Sets the input kind hint.
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.rule.field_type = Some(field_type);
        self
    }

    /// Builds the rule.
    pub fn build(self) -> ValidationRule {
        self.rule
    }
}
