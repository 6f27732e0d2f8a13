//! Declarative field rules shared by every form.
//!
//! A [`Schema`] collects at most one message per field: the first rule that fails wins and
//! later rules on the same field are skipped, mirroring how the site shows a single inline
//! error under each input.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Ordered map of field name to the message shown next to that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already carries an error.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn extend(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.insert(field, message);
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

/// Implemented by every form payload that can be checked before submission.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// Accumulates per-field errors for one validation pass.
#[derive(Debug, Default)]
pub struct Schema {
    errors: FieldErrors,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a rule chain for a string field.
    pub fn field<'s>(&'s mut self, name: &'static str, value: &'s str) -> FieldRules<'s> {
        FieldRules {
            errors: &mut self.errors,
            name,
            value,
            failed: false,
        }
    }

    /// A boolean that must be `true`, e.g. an agreement checkbox.
    pub fn must_be_true(&mut self, name: &'static str, value: bool, message: &str) -> &mut Self {
        if !value {
            self.errors.insert(name, message);
        }
        self
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        self.errors.into_result()
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

/// Rule chain for a single field; stops evaluating after the first failure.
pub struct FieldRules<'s> {
    errors: &'s mut FieldErrors,
    name: &'static str,
    value: &'s str,
    failed: bool,
}

impl<'s> FieldRules<'s> {
    fn check(mut self, passes: impl FnOnce(&str) -> bool, message: &str) -> Self {
        if !self.failed && !passes(self.value) {
            self.errors.insert(self.name, message);
            self.failed = true;
        }
        self
    }

    /// Non-empty once surrounding whitespace is trimmed.
    pub fn required(self, message: &str) -> Self {
        self.check(|value| !value.trim().is_empty(), message)
    }

    /// At least `min` UTF-16 code units, whitespace included, so an astral character such as
    /// an emoji counts twice.
    pub fn min_len(self, min: usize, message: &str) -> Self {
        self.check(|value| value.encode_utf16().count() >= min, message)
    }

    pub fn email(self, message: &str) -> Self {
        self.check(is_email, message)
    }

    pub fn pattern(self, regex: &Regex, message: &str) -> Self {
        self.check(|value| regex.is_match(value), message)
    }

    pub fn equals(self, other: &str, message: &str) -> Self {
        self.check(|value| value == other, message)
    }

    pub fn is_valid(&self) -> bool {
        !self.failed
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
            .expect("email pattern compiles")
    })
}

/// Strict address check used by the schema-driven forms.
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_regex().is_match(value)
}

fn loose_email_regex() -> &'static Regex {
    static LOOSE: OnceLock<Regex> = OnceLock::new();
    LOOSE.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("loose email pattern compiles"))
}

/// Permissive `something@something.something` check used by the contact form.
pub fn looks_like_email(value: &str) -> bool {
    loose_email_regex().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_failing_rule_wins_per_field() {
        let mut schema = Schema::new();
        schema
            .field("email", "")
            .required("Email is required")
            .email("Email is invalid");
        let errors = schema.finish().expect_err("empty email fails");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn min_len_counts_units_not_bytes() {
        let mut schema = Schema::new();
        schema.field("name", "Zü").min_len(2, "too short");
        assert!(schema.finish().is_ok());
    }

    #[test]
    fn min_len_counts_utf16_units() {
        let mut schema = Schema::new();
        schema.field("company_name", "😀").min_len(2, "too short");
        assert!(schema.finish().is_ok());

        let mut schema = Schema::new();
        schema.field("company_name", "é").min_len(2, "too short");
        assert_eq!(
            schema.finish().expect_err("one unit is short").get("company_name"),
            Some("too short")
        );
    }

    #[test]
    fn must_be_true_records_message() {
        let mut schema = Schema::new();
        schema.must_be_true("agree_to_terms", false, "You must agree");
        let errors = schema.into_errors();
        assert_eq!(errors.get("agree_to_terms"), Some("You must agree"));
    }

    #[test]
    fn strict_email_accepts_common_addresses() {
        assert!(is_email("ops@chainlink.pro"));
        assert!(is_email("first.last+tag@sub.example.co"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("a..b@example.com"));
        assert!(!is_email(".lead@example.com"));
        assert!(!is_email("user@example"));
    }

    #[test]
    fn loose_email_only_needs_at_and_dot() {
        assert!(looks_like_email("x@y.z"));
        assert!(!looks_like_email("x@y"));
        assert!(!looks_like_email("plain"));
    }

    #[test]
    fn errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.insert("password", "first");
        errors.insert("password", "second");
        assert_eq!(errors.get("password"), Some("first"));
        assert_eq!(errors.to_string(), "password: first");
    }
}
