//! # Forms Validator
//!
//! Validation engine for form schemas. This crate provides:
//!
//! - [`FormValidator`]: evaluates field values against a schema and keeps the
//!   per-field error and touched state for one form session
//! - [`MessageCatalog`]: category-specific message copy, independent of the
//!   validator
//!
//! ## Example
//!
//! ```rust
//! use forms_core::{FieldValue, FieldValues, RuleBuilder, ValidationSchema};
//! use forms_validator::FormValidator;
//!
//! let schema = ValidationSchema::builder()
//!     .field("age", RuleBuilder::new().required().range(1.0, 18.0).build())
//!     .build()
//!     .unwrap();
//! let mut form = FormValidator::new(schema);
//!
//! let mut values = FieldValues::new();
//! values.insert("age".to_string(), FieldValue::from("25"));
//!
//! if !form.validate_all(&values) {
//!     for (field, message) in form.errors().failures() {
//!         println!("{}: {}", field, message);
//!     }
//! }
//! ```

mod catalog;
mod engine;
mod state;

pub use catalog::*;
pub use engine::*;
pub use state::*;
