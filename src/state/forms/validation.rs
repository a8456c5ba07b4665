//! Contact form validation
//!
//! Every field is checked on each run, so several errors can surface at once.
//! A field without an error has no entry in [`ValidationErrors`].

use super::field::FieldName;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Permissive address check: `<non-space>+@<non-space>+.<non-space>+` anywhere in the value
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Exactly ten ASCII digits, nothing else
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Phone number is invalid";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Per-field error messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, &'static str>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Drop the error for one field, leaving the others in place
    pub fn clear(&mut self, field: FieldName) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }
}

impl FromIterator<(FieldName, &'static str)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (FieldName, &'static str)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Raw values fed to the validator
#[derive(Debug, Clone, Copy)]
pub struct FieldValues<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
}

/// Result of a validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub errors: ValidationErrors,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    is_blank(value).then_some(message)
}

fn check_email(value: &str) -> Option<&'static str> {
    if is_blank(value) {
        Some(EMAIL_REQUIRED)
    } else if !EMAIL_PATTERN.is_match(value) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn check_phone(value: &str) -> Option<&'static str> {
    if is_blank(value) {
        Some(PHONE_REQUIRED)
    } else if !PHONE_PATTERN.is_match(value) {
        Some(PHONE_INVALID)
    } else {
        None
    }
}

/// Validate all five fields
pub fn validate(values: FieldValues<'_>) -> Validation {
    let checks = [
        (
            FieldName::FirstName,
            required(values.first_name, FIRST_NAME_REQUIRED),
        ),
        (
            FieldName::LastName,
            required(values.last_name, LAST_NAME_REQUIRED),
        ),
        (FieldName::Email, check_email(values.email)),
        (FieldName::Phone, check_phone(values.phone)),
        (
            FieldName::Message,
            required(values.message, MESSAGE_REQUIRED),
        ),
    ];

    let errors = checks
        .into_iter()
        .filter_map(|(field, error)| error.map(|message| (field, message)))
        .collect();

    Validation { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_values() -> FieldValues<'static> {
        FieldValues {
            first_name: "Vedant",
            last_name: "Kesharia",
            email: "user@example.com",
            phone: "1234567890",
            message: "Hello there",
        }
    }

    #[test]
    fn test_valid_values_produce_no_errors() {
        let result = validate(valid_values());
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_each_empty_field_yields_exactly_one_error() {
        let cases = [
            (FieldName::FirstName, FIRST_NAME_REQUIRED),
            (FieldName::LastName, LAST_NAME_REQUIRED),
            (FieldName::Email, EMAIL_REQUIRED),
            (FieldName::Phone, PHONE_REQUIRED),
            (FieldName::Message, MESSAGE_REQUIRED),
        ];

        for (field, expected) in cases {
            let mut values = valid_values();
            match field {
                FieldName::FirstName => values.first_name = "",
                FieldName::LastName => values.last_name = "",
                FieldName::Email => values.email = "",
                FieldName::Phone => values.phone = "",
                FieldName::Message => values.message = "",
            }

            let result = validate(values);
            assert!(!result.is_valid(), "{field} should be rejected");
            assert_eq!(result.errors.len(), 1, "{field}");
            assert_eq!(result.errors.get(field), Some(expected));
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let values = FieldValues {
            first_name: "   ",
            message: "\n\t ",
            ..valid_values()
        };
        let result = validate(values);
        assert_eq!(
            result.errors.get(FieldName::FirstName),
            Some(FIRST_NAME_REQUIRED)
        );
        assert_eq!(result.errors.get(FieldName::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_email_rules() {
        for bad in ["bad", "userexample.com", "user@example", "user@.com", "@example.com"] {
            let result = validate(FieldValues {
                email: bad,
                ..valid_values()
            });
            assert_eq!(
                result.errors.get(FieldName::Email),
                Some(EMAIL_INVALID),
                "{bad:?} should be invalid"
            );
        }

        for good in ["user@example.com", "a@b.c", "first.last@sub.domain.org"] {
            let result = validate(FieldValues {
                email: good,
                ..valid_values()
            });
            assert!(result.is_valid(), "{good:?} should be accepted");
        }
    }

    #[test]
    fn test_email_pattern_is_a_search_not_a_full_match() {
        let result = validate(FieldValues {
            email: "reach me at user@example.com please",
            ..valid_values()
        });
        assert!(result.is_valid());
    }

    #[test]
    fn test_phone_rules() {
        for bad in ["123", "12345678901", "123456789a", "123-456-7890", " 1234567890", "١٢٣٤٥٦٧٨٩٠"] {
            let result = validate(FieldValues {
                phone: bad,
                ..valid_values()
            });
            assert_eq!(
                result.errors.get(FieldName::Phone),
                Some(PHONE_INVALID),
                "{bad:?} should be invalid"
            );
        }

        let result = validate(FieldValues {
            phone: "1234567890",
            ..valid_values()
        });
        assert!(result.is_valid());
    }

    #[test]
    fn test_mixed_scenario_reports_all_errors() {
        let result = validate(FieldValues {
            first_name: "",
            last_name: "Kesharia",
            email: "bad",
            phone: "123",
            message: "",
        });

        let expected: ValidationErrors = [
            (FieldName::FirstName, FIRST_NAME_REQUIRED),
            (FieldName::Email, EMAIL_INVALID),
            (FieldName::Phone, PHONE_INVALID),
            (FieldName::Message, MESSAGE_REQUIRED),
        ]
        .into_iter()
        .collect();

        assert!(!result.is_valid());
        assert_eq!(result.errors, expected);
        assert!(result.errors.get(FieldName::LastName).is_none());
    }

    #[test]
    fn test_clear_removes_only_one_field() {
        let mut errors: ValidationErrors = [
            (FieldName::Email, EMAIL_INVALID),
            (FieldName::Phone, PHONE_INVALID),
        ]
        .into_iter()
        .collect();

        errors.clear(FieldName::Email);
        assert!(errors.get(FieldName::Email).is_none());
        assert_eq!(errors.get(FieldName::Phone), Some(PHONE_INVALID));
    }
}
