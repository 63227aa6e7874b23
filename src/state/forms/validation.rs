//! Field rules and the derived set of validation errors

use super::field::FieldName;
use super::form_state::FormState;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

/// Minimum number of characters for a first name.
pub const FIRST_NAME_MIN: usize = 5;

/// A violated field rule. `Display` renders the user-facing rule message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} must have at least {min} characters.")]
    TooShort { field: FieldName, min: usize },
    #[error("{field} is a required field.")]
    MissingRequiredField { field: FieldName },
    #[error("{field} must be a valid email address.")]
    InvalidFormat { field: FieldName },
}

impl FieldError {
    pub fn field(&self) -> FieldName {
        match self {
            Self::TooShort { field, .. }
            | Self::MissingRequiredField { field }
            | Self::InvalidFormat { field } => *field,
        }
    }
}

/// Return true if `email` looks like a deliverable address.
///
/// The local part is a dot-separated atom run or a quoted string; the domain
/// is a bracketed IPv4 literal or dotted labels ending in a 2+ letter TLD.
///
/// ```ignore
/// assert!(is_valid_email("ksachi@mihama.co.jp"));
/// assert!(!is_valid_email("f"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(concat!(
            r#"^(?:[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*|".+")"#,
            r"@(?:\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]",
            r"|(?:[a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,})$",
        ))
        .expect("valid email regex")
    });
    RE.is_match(email)
}

/// Check one field value against its rule.
///
/// Lengths count characters and nothing is trimmed, so `"USS  "` passes the
/// first-name rule.
pub fn validate_field(field: FieldName, value: &str) -> Result<(), FieldError> {
    match field {
        FieldName::FirstName if value.chars().count() < FIRST_NAME_MIN => {
            Err(FieldError::TooShort {
                field,
                min: FIRST_NAME_MIN,
            })
        }
        FieldName::LastName if value.is_empty() => {
            Err(FieldError::MissingRequiredField { field })
        }
        FieldName::Email if !is_valid_email(value) => Err(FieldError::InvalidFormat { field }),
        _ => Ok(()),
    }
}

/// Currently violated rules, keyed and ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, FieldError>,
}

impl ValidationErrors {
    /// Validate every field of `form` from scratch
    pub fn from_form(form: &FormState) -> Self {
        let mut errors = Self::default();
        for field in FieldName::ALL {
            errors.revalidate(field, form.value(field));
        }
        errors
    }

    /// Re-derive the entry for one field from its current value.
    /// Returns true if the field is now valid.
    pub fn revalidate(&mut self, field: FieldName, value: &str) -> bool {
        match validate_field(field, value) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(err) => {
                self.errors.insert(err.field(), err);
                false
            }
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Errors in field order
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_first_name_too_short() {
            let err = validate_field(FieldName::FirstName, "Koko").unwrap_err();
            assert_eq!(err.to_string(), "firstName must have at least 5 characters.");
        }

        #[test]
        fn test_empty_first_name_reports_length() {
            let err = validate_field(FieldName::FirstName, "").unwrap_err();
            assert!(matches!(err, FieldError::TooShort { min: 5, .. }));
        }

        #[test]
        fn test_first_name_counts_trailing_spaces() {
            assert!(validate_field(FieldName::FirstName, "USS  ").is_ok());
        }

        #[test]
        fn test_first_name_counts_chars_not_bytes() {
            assert!(validate_field(FieldName::FirstName, "éééé").is_err());
            assert!(validate_field(FieldName::FirstName, "ééééé").is_ok());
        }

        #[test]
        fn test_last_name_required() {
            let err = validate_field(FieldName::LastName, "").unwrap_err();
            assert_eq!(err.to_string(), "lastName is a required field.");
            assert!(validate_field(FieldName::LastName, "K").is_ok());
        }

        #[test]
        fn test_email_invalid() {
            let err = validate_field(FieldName::Email, "f").unwrap_err();
            assert_eq!(err.to_string(), "email must be a valid email address.");
        }

        #[test]
        fn test_empty_email_is_invalid_format() {
            let err = validate_field(FieldName::Email, "").unwrap_err();
            assert_eq!(err, FieldError::InvalidFormat { field: FieldName::Email });
        }

        #[test]
        fn test_message_has_no_rule() {
            assert!(validate_field(FieldName::Message, "").is_ok());
            assert!(validate_field(FieldName::Message, "Love you admiral~ <3").is_ok());
        }

        #[test]
        fn test_error_knows_its_field() {
            let err = validate_field(FieldName::LastName, "").unwrap_err();
            assert_eq!(err.field(), FieldName::LastName);
        }
    }

    mod email_pattern {
        use super::*;

        #[test]
        fn test_accepts_common_addresses() {
            for email in [
                "ksachi@mihama.co.jp",
                "bremmygurl@azurlane.co.jp",
                "first.last@example.com",
                "a-b_c+d@sub-domain.example.org",
            ] {
                assert!(is_valid_email(email), "{email} should be valid");
            }
        }

        #[test]
        fn test_accepts_quoted_local_and_ip_literal() {
            assert!(is_valid_email("\"john doe\"@example.com"));
            assert!(is_valid_email("admin@[192.168.0.1]"));
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            for email in [
                "",
                "f",
                "no-at-sign.com",
                "user@",
                "@example.com",
                "user@localhost",
                "user@example.c",
                "us er@example.com",
                "user..name@example.com",
                "user@example.com trailing",
            ] {
                assert!(!is_valid_email(email), "{email:?} should be invalid");
            }
        }
    }

    mod validation_errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_has_three_errors() {
            let errors = ValidationErrors::from_form(&FormState::new());
            assert_eq!(errors.len(), 3);
            assert!(!errors.get(FieldName::Message).is_some());
        }

        #[test]
        fn test_iter_is_in_field_order() {
            let errors = ValidationErrors::from_form(&FormState::new());
            let fields: Vec<_> = errors.iter().map(FieldError::field).collect();
            assert_eq!(
                fields,
                vec![FieldName::FirstName, FieldName::LastName, FieldName::Email]
            );
        }

        #[test]
        fn test_revalidate_removes_fixed_error() {
            let mut errors = ValidationErrors::default();
            assert!(!errors.revalidate(FieldName::FirstName, "Koko"));
            assert_eq!(errors.len(), 1);
            assert!(errors.revalidate(FieldName::FirstName, "Kokor"));
            assert!(errors.is_empty());
        }

        #[test]
        fn test_revalidate_replaces_entry() {
            let mut errors = ValidationErrors::default();
            errors.revalidate(FieldName::Email, "");
            errors.revalidate(FieldName::Email, "f");
            assert_eq!(errors.len(), 1);
            assert!(matches!(
                errors.get(FieldName::Email),
                Some(FieldError::InvalidFormat { .. })
            ));
        }
    }
}
