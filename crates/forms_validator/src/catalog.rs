//! Validation message catalog.
//!
//! Friendlier, category-specific copy for forms that want more than the
//! validator's generic defaults. The validator never consults this table;
//! callers pick a category (for instance from a rule's field type) and a
//! failure kind themselves.

use forms_core::format_number;
use std::collections::HashMap;
use std::fmt;

/// Returned whenever a category or kind has no entry.
pub const FALLBACK_MESSAGE: &str = "Invalid input";

/// A parameter substituted into a message template.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageParam {
    Text(String),
    Number(f64),
}

impl MessageParam {
    fn as_number(&self) -> Option<f64> {
        match self {
            MessageParam::Number(n) => Some(*n),
            MessageParam::Text(_) => None,
        }
    }
}

impl fmt::Display for MessageParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageParam::Text(s) => f.write_str(s),
            MessageParam::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for MessageParam {
    fn from(s: &str) -> Self {
        MessageParam::Text(s.to_string())
    }
}

impl From<String> for MessageParam {
    fn from(s: String) -> Self {
        MessageParam::Text(s)
    }
}

impl From<f64> for MessageParam {
    fn from(n: f64) -> Self {
        MessageParam::Number(n)
    }
}

impl From<i64> for MessageParam {
    fn from(n: i64) -> Self {
        MessageParam::Number(n as f64)
    }
}

impl From<i32> for MessageParam {
    fn from(n: i32) -> Self {
        MessageParam::Number(f64::from(n))
    }
}

impl From<usize> for MessageParam {
    fn from(n: usize) -> Self {
        MessageParam::Number(n as f64)
    }
}

type TemplateFn = fn(&[MessageParam]) -> String;

/// One catalog entry.
#[derive(Clone, Copy)]
pub enum MessageTemplate {
    /// Fixed copy
    Text(&'static str),
    /// Copy built from parameters
    Template(TemplateFn),
}

impl MessageTemplate {
    /// Renders the entry with the given parameters.
    ///
    /// Templates tolerate missing parameters; they render as empty text.
    pub fn render(&self, params: &[MessageParam]) -> String {
        match self {
            MessageTemplate::Text(text) => (*text).to_string(),
            MessageTemplate::Template(f) => f(params),
        }
    }
}

impl fmt::Debug for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageTemplate::Text(text) => f.debug_tuple("Text").field(text).finish(),
            MessageTemplate::Template(_) => f.write_str("Template(..)"),
        }
    }
}

/// Parameter `i` as display text, empty when missing.
fn arg(params: &[MessageParam], i: usize) -> String {
    params.get(i).map(ToString::to_string).unwrap_or_default()
}

/// Lookup table from category and kind to message copy.
///
/// # Example
///
/// ```rust
/// use forms_validator::MessageCatalog;
///
/// let catalog = MessageCatalog::new();
/// assert_eq!(catalog.get_message("age", "min", &[5.into()]), "Age must be at least 5");
/// assert_eq!(catalog.get_message("unknown", "required", &[]), "Invalid input");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    entries: HashMap<&'static str, HashMap<&'static str, MessageTemplate>>,
}

impl MessageCatalog {
    /// Creates the catalog with the built-in copy.
    pub fn new() -> Self {
        use MessageTemplate::{Template, Text};

        let mut entries = HashMap::new();

        entries.insert(
            "name",
            HashMap::from([
                ("required", Text("Please enter a name")),
                (
                    "minLength",
                    Template(|p| format!("Name must be at least {} characters", arg(p, 0))),
                ),
                (
                    "maxLength",
                    Template(|p| format!("Name must be {} characters or less", arg(p, 0))),
                ),
                (
                    "pattern",
                    Text("Name can only contain letters, spaces, and hyphens"),
                ),
            ]),
        );

        entries.insert(
            "email",
            HashMap::from([
                ("required", Text("Email address is required")),
                (
                    "pattern",
                    Text("Please enter a valid email address (e.g., name@example.com)"),
                ),
                (
                    "invalid",
                    Text("This email address doesn't look right. Please check and try again."),
                ),
            ]),
        );

        entries.insert(
            "phone",
            HashMap::from([
                ("required", Text("Phone number is required")),
                (
                    "pattern",
                    Text("Please enter a valid phone number (e.g., +1 234 567 8900)"),
                ),
                ("minLength", Text("Phone number is too short")),
                ("invalid", Text("Please check your phone number and try again")),
            ]),
        );

        entries.insert(
            "age",
            HashMap::from([
                ("required", Text("Please enter age")),
                ("min", Template(|p| format!("Age must be at least {}", arg(p, 0)))),
                ("max", Template(|p| format!("Age must be {} or less", arg(p, 0)))),
                ("pattern", Text("Please enter a valid age (numbers only)")),
                ("invalid", Text("Please enter a valid age between 1 and 18")),
            ]),
        );

        entries.insert(
            "password",
            HashMap::from([
                ("required", Text("Password is required")),
                (
                    "minLength",
                    Template(|p| {
                        format!(
                            "Password must be at least {} characters for security",
                            arg(p, 0)
                        )
                    }),
                ),
                (
                    "pattern",
                    Text("Password must include uppercase, lowercase, number, and special character"),
                ),
                ("weak", Text("Try a stronger password with a mix of characters")),
                ("mismatch", Text("Passwords don't match. Please try again.")),
            ]),
        );

        entries.insert(
            "otp",
            HashMap::from([
                ("required", Text("Please enter the verification code")),
                (
                    "length",
                    Template(|p| format!("Verification code must be {} digits", arg(p, 0))),
                ),
                ("pattern", Text("Verification code should only contain numbers")),
                (
                    "invalid",
                    Text("This code doesn't match. Please check your messages and try again."),
                ),
                ("expired", Text("This code has expired. Please request a new one.")),
            ]),
        );

        entries.insert(
            "interests",
            HashMap::from([
                ("required", Text("Please add at least one interest")),
                (
                    "minItems",
                    Template(|p| {
                        let plural = p.first().and_then(MessageParam::as_number).is_some_and(|n| n > 1.0);
                        format!(
                            "Please add at least {} interest{}",
                            arg(p, 0),
                            if plural { "s" } else { "" }
                        )
                    }),
                ),
                (
                    "maxItems",
                    Template(|p| format!("You can add up to {} interests", arg(p, 0))),
                ),
            ]),
        );

        entries.insert(
            "storyTitle",
            HashMap::from([
                ("required", Text("Please enter a story title")),
                (
                    "minLength",
                    Template(|p| format!("Title should be at least {} characters", arg(p, 0))),
                ),
                (
                    "maxLength",
                    Template(|p| format!("Title is too long (max {} characters)", arg(p, 0))),
                ),
            ]),
        );

        entries.insert(
            "general",
            HashMap::from([
                ("required", Template(|p| format!("{} is required", arg(p, 0)))),
                (
                    "minLength",
                    Template(|p| {
                        format!("{} must be at least {} characters", arg(p, 0), arg(p, 1))
                    }),
                ),
                (
                    "maxLength",
                    Template(|p| format!("{} must be {} characters or less", arg(p, 0), arg(p, 1))),
                ),
                (
                    "invalid",
                    Template(|p| format!("Please enter a valid {}", arg(p, 0).to_lowercase())),
                ),
            ]),
        );

        Self { entries }
    }

    /// Looks up and renders a message.
    ///
    /// Unknown categories and kinds yield [`FALLBACK_MESSAGE`].
    pub fn get_message(&self, category: &str, kind: &str, params: &[MessageParam]) -> String {
        self.template(category, kind)
            .map(|template| template.render(params))
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
    }

    /// Returns the raw entry for a category and kind.
    pub fn template(&self, category: &str, kind: &str) -> Option<&MessageTemplate> {
        self.entries.get(category)?.get(kind)
    }

    /// Known categories, sorted.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<_> = self.entries.keys().copied().collect();
        categories.sort_unstable();
        categories
    }

    /// Kinds defined for a category, sorted. Empty for unknown categories.
    pub fn kinds(&self, category: &str) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self
            .entries
            .get(category)
            .map(|kinds| kinds.keys().copied().collect())
            .unwrap_or_default();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}
