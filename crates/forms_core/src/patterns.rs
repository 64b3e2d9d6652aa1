//! Common field formats and predicates.
//!
//! Reusable regexes and helper checks so every form validates emails, phone
//! numbers, names and codes the same way. Schema files refer to these by
//! their snake_case names.

use crate::{CustomCheck, FieldValue, SchemaError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Digits are ASCII only: `\d` would also accept other Unicode digits.
macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect(concat!("pattern ", stringify!($name))));
    };
}

// Simplified RFC 5322
pattern!(EMAIL, r"^[^\s@]+@[^\s@]+\.[^\s@]+$");
// Optional leading +, digits and common separators
pattern!(PHONE, r"^\+?[0-9\s\-()]{10,}$");
pattern!(NAME, r"^[a-zA-Z\s\-']+$");
pattern!(DIGITS, r"^[0-9]+$");
pattern!(ALPHANUMERIC, r"^[a-zA-Z0-9]+$");
pattern!(PASSWORD_CHARSET, r"^[A-Za-z0-9@$!%*?&]{8,}$");
pattern!(
    URL,
    r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$"
);
pattern!(USERNAME, r"^[a-zA-Z0-9_-]{3,20}$");
pattern!(AGE, r"^[1-9][0-9]{0,2}$");
pattern!(OTP, r"^[0-9]{4,6}$");
pattern!(INT_PREFIX, r"^[+-]?[0-9]+");

/// Special characters a strong password may contain.
const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Default verification code length.
pub const DEFAULT_OTP_LENGTH: usize = 6;

/// A built-in field format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedPattern {
    Email,
    Phone,
    Name,
    Digits,
    Alphanumeric,
    /// Character set and length of a strong password. The composition
    /// requirement is checked by [`is_strong_password`].
    StrongPassword,
    Url,
    Username,
    /// One to three digits, no leading zero
    Age,
    /// Four to six digit verification code
    Otp,
}

impl NamedPattern {
    pub const ALL: [NamedPattern; 10] = [
        NamedPattern::Email,
        NamedPattern::Phone,
        NamedPattern::Name,
        NamedPattern::Digits,
        NamedPattern::Alphanumeric,
        NamedPattern::StrongPassword,
        NamedPattern::Url,
        NamedPattern::Username,
        NamedPattern::Age,
        NamedPattern::Otp,
    ];

    /// Snake_case name used in schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamedPattern::Email => "email",
            NamedPattern::Phone => "phone",
            NamedPattern::Name => "name",
            NamedPattern::Digits => "digits",
            NamedPattern::Alphanumeric => "alphanumeric",
            NamedPattern::StrongPassword => "strong_password",
            NamedPattern::Url => "url",
            NamedPattern::Username => "username",
            NamedPattern::Age => "age",
            NamedPattern::Otp => "otp",
        }
    }

    /// The compiled regex for this format.
    pub fn regex(&self) -> &'static Regex {
        match self {
            NamedPattern::Email => &EMAIL,
            NamedPattern::Phone => &PHONE,
            NamedPattern::Name => &NAME,
            NamedPattern::Digits => &DIGITS,
            NamedPattern::Alphanumeric => &ALPHANUMERIC,
            NamedPattern::StrongPassword => &PASSWORD_CHARSET,
            NamedPattern::Url => &URL,
            NamedPattern::Username => &USERNAME,
            NamedPattern::Age => &AGE,
            NamedPattern::Otp => &OTP,
        }
    }
}

impl fmt::Display for NamedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamedPattern {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedPattern::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SchemaError::unknown_pattern(s))
    }
}

/// Checks if an email address is valid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Checks if a phone number is valid.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

/// Checks if a person's name is valid: letters, spaces, hyphens and
/// apostrophes, at least two characters once trimmed.
pub fn is_valid_name(name: &str) -> bool {
    NAME.is_match(name) && name.trim().chars().count() >= 2
}

/// Checks if an age is an integer between 1 and 150.
///
/// Text is read up to the first non-digit, so `"7 years"` counts as 7.
pub fn is_valid_age(age: &str) -> bool {
    INT_PREFIX
        .find(age.trim_start())
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .is_some_and(|n| (1..=150).contains(&n))
}

/// Numeric counterpart of [`is_valid_age`].
pub fn is_valid_age_number(age: f64) -> bool {
    !age.is_nan() && (1.0..=150.0).contains(&age)
}

/// Checks if a password is strong: eight or more characters drawn from
/// letters, digits and `@$!%*?&`, with at least one lowercase letter, one
/// uppercase letter, one digit and one special character.
pub fn is_strong_password(password: &str) -> bool {
    PASSWORD_CHARSET.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Checks if a verification code is all digits and exactly `length` long.
pub fn is_valid_otp(code: &str, length: usize) -> bool {
    DIGITS.is_match(code) && code.len() == length
}

/// Checks if a string contains only digits.
pub fn is_digits_only(value: &str) -> bool {
    DIGITS.is_match(value)
}

/// Checks if the trimmed value's length falls within the optional bounds.
pub fn is_valid_length(value: &str, min: Option<usize>, max: Option<usize>) -> bool {
    let length = value.trim().chars().count();
    if min.is_some_and(|min| length < min) {
        return false;
    }
    if max.is_some_and(|max| length > max) {
        return false;
    }
    true
}

/// A built-in predicate usable as a rule's custom check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedCheck {
    ValidEmail,
    ValidPhone,
    ValidName,
    ValidAge,
    StrongPassword,
    /// Six digit verification code
    ValidOtp,
    DigitsOnly,
}

impl NamedCheck {
    pub const ALL: [NamedCheck; 7] = [
        NamedCheck::ValidEmail,
        NamedCheck::ValidPhone,
        NamedCheck::ValidName,
        NamedCheck::ValidAge,
        NamedCheck::StrongPassword,
        NamedCheck::ValidOtp,
        NamedCheck::DigitsOnly,
    ];

    /// Snake_case name used in schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamedCheck::ValidEmail => "valid_email",
            NamedCheck::ValidPhone => "valid_phone",
            NamedCheck::ValidName => "valid_name",
            NamedCheck::ValidAge => "valid_age",
            NamedCheck::StrongPassword => "strong_password",
            NamedCheck::ValidOtp => "valid_otp",
            NamedCheck::DigitsOnly => "digits_only",
        }
    }

    /// Evaluates the predicate against a field value.
    pub fn check(&self, value: &FieldValue) -> bool {
        if let (NamedCheck::ValidAge, FieldValue::Number(n)) = (self, value) {
            return is_valid_age_number(*n);
        }

        let text = value.to_string();
        match self {
            NamedCheck::ValidEmail => is_valid_email(&text),
            NamedCheck::ValidPhone => is_valid_phone(&text),
            NamedCheck::ValidName => is_valid_name(&text),
            NamedCheck::ValidAge => is_valid_age(&text),
            NamedCheck::StrongPassword => is_strong_password(&text),
            NamedCheck::ValidOtp => is_valid_otp(&text, DEFAULT_OTP_LENGTH),
            NamedCheck::DigitsOnly => is_digits_only(&text),
        }
    }

    /// Wraps the predicate for use in a rule.
    pub fn into_custom(self) -> CustomCheck {
        CustomCheck::new(move |value| self.check(value))
    }
}

impl fmt::Display for NamedCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamedCheck {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedCheck::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SchemaError::unknown_check(s))
    }
}
