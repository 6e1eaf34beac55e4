//! Field-level validation for raw user records.

use crate::record::RawRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Error messages, one per field rule
pub mod messages {
    pub const NAME_MISSING: &str = "Name is missing or empty.";
    pub const AGE_INVALID: &str = "Age must be a positive integer.";
    pub const EMAIL_INVALID: &str = "Invalid email format.";
    pub const EMAIL_MISSING: &str = "Email is missing.";
}

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Verdict for one record: valid iff no errors were collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Check one raw record against the field rules.
///
/// Rules are evaluated independently and all violations collected, in
/// name/age/email order. The two email rules are mutually exclusive: a
/// present email is checked for format, an absent one reported as missing.
/// Malformed values become errors, never panics.
#[must_use]
pub fn validate_record(record: &RawRecord) -> ValidationResult {
    let mut errors = Vec::new();

    if !has_nonempty_name(record) {
        errors.push(messages::NAME_MISSING.to_string());
    }

    if positive_age(record).is_none() {
        errors.push(messages::AGE_INVALID.to_string());
    }

    match record.get("email") {
        Some(email) => {
            if !is_valid_email(email) {
                errors.push(messages::EMAIL_INVALID.to_string());
            }
        }
        None => errors.push(messages::EMAIL_MISSING.to_string()),
    }

    ValidationResult { errors }
}

fn has_nonempty_name(record: &RawRecord) -> bool {
    record
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty())
}

/// The record's `age` when it is a positive JSON integer.
/// A missing key, a non-integer value, and zero or below all yield None.
pub(crate) fn positive_age(record: &RawRecord) -> Option<i64> {
    record
        .get("age")
        .and_then(Value::as_i64)
        .filter(|age| *age > 0)
}

fn is_valid_email(email: &Value) -> bool {
    email.as_str().is_some_and(|e| EMAIL_REGEX.is_match(e))
}
