use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::validation::FieldRules;

pub const MIN_PASSWORD_LENGTH: usize = 8;

const TOO_SHORT: &str = "Password must be at least 8 characters";
const NEEDS_LOWERCASE: &str = "Password must contain at least one lowercase letter";
const NEEDS_UPPERCASE: &str = "Password must contain at least one uppercase letter";
const NEEDS_DIGIT: &str = "Password must contain at least one number";
const NEEDS_SPECIAL: &str = "Password must contain at least one special character";

/// Which strength rules a signup variant enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordPolicy {
    /// Lowercase, uppercase, and digit. Used by the auth modal.
    #[default]
    Standard,
    /// Standard plus a special character. Used by the full signup page.
    Strict,
}

struct Predicates {
    lowercase: Regex,
    uppercase: Regex,
    digit: Regex,
    special: Regex,
}

fn predicates() -> &'static Predicates {
    static PREDICATES: OnceLock<Predicates> = OnceLock::new();
    PREDICATES.get_or_init(|| Predicates {
        lowercase: Regex::new("[a-z]").expect("lowercase pattern compiles"),
        uppercase: Regex::new("[A-Z]").expect("uppercase pattern compiles"),
        digit: Regex::new("[0-9]").expect("digit pattern compiles"),
        special: Regex::new("[^A-Za-z0-9]").expect("special pattern compiles"),
    })
}

impl PasswordPolicy {
    /// Appends this policy's rules to a field chain, in the order the messages are reported.
    pub fn apply<'s>(self, rules: FieldRules<'s>) -> FieldRules<'s> {
        let p = predicates();
        let rules = rules.min_len(MIN_PASSWORD_LENGTH, TOO_SHORT);
        match self {
            PasswordPolicy::Standard => rules
                .pattern(&p.lowercase, NEEDS_LOWERCASE)
                .pattern(&p.uppercase, NEEDS_UPPERCASE)
                .pattern(&p.digit, NEEDS_DIGIT),
            PasswordPolicy::Strict => rules
                .pattern(&p.uppercase, NEEDS_UPPERCASE)
                .pattern(&p.lowercase, NEEDS_LOWERCASE)
                .pattern(&p.digit, NEEDS_DIGIT)
                .pattern(&p.special, NEEDS_SPECIAL),
        }
    }
}

/// Live checklist shown beside the password input; each predicate is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub min_length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        let p = predicates();
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            lowercase: p.lowercase.is_match(password),
            uppercase: p.uppercase.is_match(password),
            digit: p.digit.is_match(password),
            special: p.special.is_match(password),
        }
    }

    pub fn satisfies(&self, policy: PasswordPolicy) -> bool {
        let standard = self.min_length && self.lowercase && self.uppercase && self.digit;
        match policy {
            PasswordPolicy::Standard => standard,
            PasswordPolicy::Strict => standard && self.special,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::Schema;

    fn first_error(policy: PasswordPolicy, password: &str) -> Option<String> {
        let mut schema = Schema::new();
        policy.apply(schema.field("password", password));
        schema.into_errors().get("password").map(str::to_string)
    }

    #[test]
    fn standard_policy_reports_lowercase_before_uppercase() {
        assert_eq!(
            first_error(PasswordPolicy::Standard, "ABCDEFGH1").as_deref(),
            Some(NEEDS_LOWERCASE)
        );
        assert_eq!(
            first_error(PasswordPolicy::Standard, "abcdefgh1").as_deref(),
            Some(NEEDS_UPPERCASE)
        );
        assert_eq!(first_error(PasswordPolicy::Standard, "Abcdefg1"), None);
    }

    #[test]
    fn strict_policy_requires_special_character() {
        assert_eq!(
            first_error(PasswordPolicy::Strict, "Abcdefg1").as_deref(),
            Some(NEEDS_SPECIAL)
        );
        assert_eq!(first_error(PasswordPolicy::Strict, "Abcdef1!"), None);
    }

    #[test]
    fn length_is_checked_first() {
        assert_eq!(
            first_error(PasswordPolicy::Strict, "aB1!").as_deref(),
            Some(TOO_SHORT)
        );
    }

    #[test]
    fn strength_predicates_are_independent() {
        let strength = PasswordStrength::evaluate("abc12345");
        assert!(strength.min_length);
        assert!(strength.lowercase);
        assert!(!strength.uppercase);
        assert!(strength.digit);
        assert!(!strength.special);
        assert!(!strength.satisfies(PasswordPolicy::Standard));
        assert!(PasswordStrength::evaluate("Abc123!x").satisfies(PasswordPolicy::Strict));
    }
}
