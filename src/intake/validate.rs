//! Per-field answer validation.
//!
//! Email and phone get pattern checks; everything else falls back to a
//! minimum-length check. An answer that fails validation re-prompts the
//! same field without advancing the intake.

use std::sync::LazyLock;

use regex::Regex;

use super::schema::Field;

// Matches local@domain.tld with no whitespace or '@' inside local/domain
// and a tld of 2+ alphanumerics. Anchored at the start only.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[a-zA-Z0-9]{2,}").expect("valid email regex"));

// A leading '+' or digit followed by at least 6 digits, dashes or spaces.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+\d][\d\-\s]{6,}$").expect("valid phone regex"));

/// Validator variants, dispatched per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Email,
    Phone,
    /// Default: trimmed length must be at least 2.
    MinLength,
}

impl Validator {
    /// The validator responsible for a field.
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::EmailAddress => Self::Email,
            Field::PhoneNumber => Self::Phone,
            _ => Self::MinLength,
        }
    }

    /// Whether `raw` is an acceptable answer.
    pub fn accepts(&self, raw: &str) -> bool {
        match self {
            Self::Email => EMAIL_RE.is_match(raw),
            Self::Phone => PHONE_RE.is_match(raw),
            Self::MinLength => raw.trim().len() >= 2,
        }
    }

    /// The message re-rendered until a valid answer is submitted.
    pub fn rejection_message(&self) -> &'static str {
        match self {
            Self::Email => "Please enter a valid email address.",
            Self::Phone => "Please enter a valid phone number.",
            Self::MinLength => "Please provide a valid response.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_per_field() {
        assert_eq!(Validator::for_field(Field::EmailAddress), Validator::Email);
        assert_eq!(Validator::for_field(Field::PhoneNumber), Validator::Phone);
        assert_eq!(Validator::for_field(Field::FullName), Validator::MinLength);
        assert_eq!(Validator::for_field(Field::TechStack), Validator::MinLength);
    }

    #[test]
    fn email_accepts_full_address() {
        assert!(Validator::Email.accepts("john@example.com"));
        assert!(Validator::Email.accepts("a.b+c@sub.domain.io"));
    }

    #[test]
    fn email_rejects_missing_tld() {
        assert!(!Validator::Email.accepts("john@example"));
        assert!(!Validator::Email.accepts("john@example.c"));
        assert!(!Validator::Email.accepts("not-an-email"));
        assert!(!Validator::Email.accepts("spaces in@local.com"));
    }

    #[test]
    fn phone_accepts_international_formats() {
        assert!(Validator::Phone.accepts("+1 555-123-4567"));
        assert!(Validator::Phone.accepts("5551234567"));
        assert!(Validator::Phone.accepts("020 7946 0958"));
    }

    #[test]
    fn phone_rejects_short_or_lettered() {
        assert!(!Validator::Phone.accepts("12345"));
        assert!(!Validator::Phone.accepts("call me maybe"));
        assert!(!Validator::Phone.accepts("+1 (555) 123"));
    }

    #[test]
    fn min_length_requires_two_trimmed_chars() {
        assert!(Validator::MinLength.accepts("Bo"));
        assert!(Validator::MinLength.accepts("  ab  "));
        assert!(!Validator::MinLength.accepts("a"));
        assert!(!Validator::MinLength.accepts("  a  "));
        assert!(!Validator::MinLength.accepts(""));
    }

    #[test]
    fn rejection_messages_match_fields() {
        assert_eq!(
            Validator::for_field(Field::EmailAddress).rejection_message(),
            "Please enter a valid email address."
        );
        assert_eq!(
            Validator::for_field(Field::PhoneNumber).rejection_message(),
            "Please enter a valid phone number."
        );
        assert_eq!(
            Validator::for_field(Field::CurrentLocation).rejection_message(),
            "Please provide a valid response."
        );
    }
}
