//! Validation rule types.
//!
//! A `ValidationRule` is the full set of constraints for one form field. The
//! evaluation order of those constraints lives in the validator crate; this
//! module only describes them.

use crate::FieldValue;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Predicate used by a rule's `custom` check.
pub type CustomFn = dyn Fn(&FieldValue) -> bool + Send + Sync;

/// Function form of a rule's message override.
///
/// Receives the value under validation (absent when the field was never
/// filled) and the rule that rejected it.
pub type MessageFn = dyn Fn(Option<&FieldValue>, &ValidationRule) -> String + Send + Sync;

/// A shareable custom check.
#[derive(Clone)]
pub struct CustomCheck(Arc<CustomFn>);

impl CustomCheck {
    /// Wraps a predicate.
    pub fn new(check: impl Fn(&FieldValue) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(check))
    }

    /// Runs the predicate.
    pub fn check(&self, value: &FieldValue) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomCheck(..)")
    }
}

/// Message override for every failing check on a field.
#[derive(Clone)]
pub enum RuleMessage {
    /// Used verbatim, whichever check failed
    Fixed(String),
    /// Computed from the value and the rule
    Template(Arc<MessageFn>),
}

impl RuleMessage {
    /// Creates a fixed message.
    pub fn fixed(message: impl Into<String>) -> Self {
        Self::Fixed(message.into())
    }

    /// Creates a computed message.
    pub fn template(
        f: impl Fn(Option<&FieldValue>, &ValidationRule) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::Template(Arc::new(f))
    }

    /// Renders the message for a failed value.
    pub fn render(&self, value: Option<&FieldValue>, rule: &ValidationRule) -> String {
        match self {
            RuleMessage::Fixed(message) => message.clone(),
            RuleMessage::Template(f) => f(value, rule),
        }
    }
}

impl fmt::Debug for RuleMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleMessage::Fixed(message) => f.debug_tuple("Fixed").field(message).finish(),
            RuleMessage::Template(_) => f.write_str("Template(..)"),
        }
    }
}

impl From<&str> for RuleMessage {
    fn from(message: &str) -> Self {
        RuleMessage::fixed(message)
    }
}

impl From<String> for RuleMessage {
    fn from(message: String) -> Self {
        RuleMessage::Fixed(message)
    }
}

/// Kind of input a field holds.
///
/// A hint for callers choosing message-catalog copy; the validator does not
/// act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Name,
    Email,
    Phone,
    Age,
    Password,
    Otp,
    General,
}

impl FieldType {
    /// All field types, in declaration order.
    pub const ALL: [FieldType; 7] = [
        FieldType::Name,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Age,
        FieldType::Password,
        FieldType::Otp,
        FieldType::General,
    ];

    /// Lowercase name of this field type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Name => "name",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Age => "age",
            FieldType::Password => "password",
            FieldType::Otp => "otp",
            FieldType::General => "general",
        }
    }

    /// Message catalog category holding copy for this field type.
    pub fn catalog_category(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown field type '{}'", s))
    }
}

/// Constraints applied to one form field.
///
/// Every constraint is optional; an empty rule accepts anything.
#[derive(Debug, Clone, Default)]
pub struct ValidationRule {
    /// Field must hold a non-blank value
    pub required: bool,

    /// Minimum length of the display form, in characters
    pub min_length: Option<usize>,

    /// Maximum length of the display form, in characters
    pub max_length: Option<usize>,

    /// Minimum numeric value
    pub min: Option<f64>,

    /// Maximum numeric value
    pub max: Option<f64>,

    /// Format the display form must match
    pub pattern: Option<Regex>,

    /// Additional predicate
    pub custom: Option<CustomCheck>,

    /// Override for every failure message on this field
    pub message: Option<RuleMessage>,

    /// Input kind hint
    pub field_type: Option<FieldType>,
}

impl ValidationRule {
    /// Creates an empty rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the rule carries no constraint at all.
    pub fn is_empty(&self) -> bool {
        !self.required
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.min.is_none()
            && self.max.is_none()
            && self.pattern.is_none()
            && self.custom.is_none()
    }

    /// Short human-readable list of the constraints, for summaries.
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if self.required {
            parts.push("required".to_string());
        }
        if let Some(min) = self.min_length {
            parts.push(format!("min_length={}", min));
        }
        if let Some(max) = self.max_length {
            parts.push(format!("max_length={}", max));
        }
        if let Some(min) = self.min {
            parts.push(format!("min={}", crate::format_number(min)));
        }
        if let Some(max) = self.max {
            parts.push(format!("max={}", crate::format_number(max)));
        }
        if let Some(pattern) = &self.pattern {
            parts.push(format!("pattern=/{}/", pattern.as_str()));
        }
        if self.custom.is_some() {
            parts.push("custom".to_string());
        }
        parts
    }
}
