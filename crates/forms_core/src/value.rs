//! Field value representation.
//!
//! Form inputs arrive as loosely typed values: text boxes produce strings,
//! steppers produce numbers, tag pickers produce lists. `FieldValue` models
//! that shape and carries the coercions the rule checks depend on.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Leading numeric prefix accepted by the lenient float parse.
static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("float prefix regex is valid")
});

/// A single form field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null (a cleared input)
    Null,
    /// Boolean value (checkboxes, toggles)
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Text value
    String(String),
    /// List value (multi-selects, tag pickers)
    List(Vec<FieldValue>),
}

/// A full set of form values keyed by field name.
pub type FieldValues = HashMap<String, FieldValue>;

impl FieldValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Returns true for values that count as "no input".
    ///
    /// Null, `false`, zero, NaN and the empty string are falsy. Lists are
    /// never falsy, even when empty.
    pub fn is_falsy(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Bool(b) => !b,
            FieldValue::Number(n) => *n == 0.0 || n.is_nan(),
            FieldValue::String(s) => s.is_empty(),
            FieldValue::List(_) => false,
        }
    }

    /// Length of the display form, in characters.
    pub fn char_len(&self) -> usize {
        match self {
            FieldValue::String(s) => s.chars().count(),
            other => other.to_string().chars().count(),
        }
    }

    /// Coerces the value to a number.
    ///
    /// Numbers pass through unchanged. Anything else is parsed from its
    /// display form, taking the longest numeric prefix after leading
    /// whitespace. Returns `None` when no prefix parses.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::String(s) => parse_float_prefix(s),
            other => parse_float_prefix(&other.to_string()),
        }
    }
}

/// Parses the longest leading float in `input`, ignoring leading whitespace.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let prefix = FLOAT_PREFIX.find(trimmed)?.as_str();

    let unsigned = prefix.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" {
        return Some(if prefix.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    prefix.parse::<f64>().ok()
}

/// Formats a number the way form copy expects it: `5`, `2.5`, `Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => f.write_str(&format_number(*n)),
            FieldValue::String(s) => f.write_str(s),
            FieldValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_null() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for FieldValue {
    /// Converts a JSON value. Objects have no form equivalent and are kept
    /// as their compact JSON text.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(FieldValue::Null, FieldValue::Number),
            serde_json::Value::String(s) => FieldValue::String(s),
            serde_json::Value::Array(items) => {
                FieldValue::List(items.into_iter().map(FieldValue::from).collect())
            }
            obj @ serde_json::Value::Object(_) => FieldValue::String(obj.to_string()),
        }
    }
}
