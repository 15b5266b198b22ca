//! Request validation run by callers before filtering.
//!
//! The matching engine accepts any well-typed criteria; these checks
//! reject requests that are well-typed but unreasonable (malformed email,
//! out-of-bounds experience, inverted ranges). All violations are
//! collected so a caller can report them together.

use crate::types::FilterCriteria;
use data_loader::Years;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 20;
pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_EXPERIENCE_YEARS: Years = 50;

static RE_EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

static RE_PHONE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-\(\)]{7,20}$").ok());

/// A single rejected field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be at most {max} characters (got {length})")]
    NameTooLong { length: usize, max: usize },

    #[error("phoneNumber must be at most {max} characters (got {length})")]
    PhoneTooLong { length: usize, max: usize },

    #[error("Invalid phone number format. Use international format with 7-20 digits: {0}")]
    InvalidPhone(String),

    #[error("email must be at most {max} characters (got {length})")]
    EmailTooLong { length: usize, max: usize },

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("{field} must be between 0 and {max} (got {value})")]
    ExperienceOutOfBounds {
        field: &'static str,
        value: Years,
        max: Years,
    },

    #[error("Maximum experience must be greater than or equal to minimum experience ({min} > {max})")]
    InvertedExperience { min: Years, max: Years },
}

/// Check criteria against the request rules
///
/// Returns every violation found, in field order.
pub fn validate(criteria: &FilterCriteria) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(name) = &criteria.name {
        let length = name.chars().count();
        if length > MAX_NAME_LEN {
            errors.push(ValidationError::NameTooLong { length, max: MAX_NAME_LEN });
        }
    }

    if let Some(phone) = criteria.phone_number.as_deref() {
        validate_phone(phone, &mut errors);
    }

    if let Some(email) = criteria.email.as_deref() {
        validate_email(email, &mut errors);
    }

    let mut bounds_ok = true;
    for (field, value) in [
        ("minExperience", criteria.min_experience),
        ("maxExperience", criteria.max_experience),
    ] {
        if let Some(value) = value {
            if value > MAX_EXPERIENCE_YEARS {
                bounds_ok = false;
                errors.push(ValidationError::ExperienceOutOfBounds {
                    field,
                    value,
                    max: MAX_EXPERIENCE_YEARS,
                });
            }
        }
    }

    // The ordering check only runs once both bounds are individually valid
    if let (true, Some(min), Some(max)) = (bounds_ok, criteria.min_experience, criteria.max_experience) {
        if max < min {
            errors.push(ValidationError::InvertedExperience { min, max });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn validate_phone(phone: &str, errors: &mut Vec<ValidationError>) {
    let length = phone.chars().count();
    if length > MAX_PHONE_LEN {
        errors.push(ValidationError::PhoneTooLong { length, max: MAX_PHONE_LEN });
        return;
    }

    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return;
    }

    let cleaned = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .count();
    let pattern_ok = RE_PHONE.as_ref().is_none_or(|re| re.is_match(trimmed));
    if !pattern_ok || cleaned < MIN_PHONE_DIGITS {
        errors.push(ValidationError::InvalidPhone(trimmed.to_string()));
    }
}

fn validate_email(email: &str, errors: &mut Vec<ValidationError>) {
    let length = email.chars().count();
    if length > MAX_EMAIL_LEN {
        errors.push(ValidationError::EmailTooLong { length, max: MAX_EMAIL_LEN });
        return;
    }

    let trimmed = email.trim();
    if trimmed.is_empty() {
        return;
    }
    if RE_EMAIL.as_ref().is_some_and(|re| !re.is_match(trimmed)) {
        errors.push(ValidationError::InvalidEmail(trimmed.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let criteria = FilterCriteria::new()
            .with_name("  John Doe  ")
            .with_email("john@example.com")
            .with_phone_number("+1-234-567-8900")
            .with_experience(Some(2), Some(5))
            .with_skills(["python", "java", "", "Python"]);

        assert!(validate(&criteria).is_ok());
    }

    #[test]
    fn test_invalid_email() {
        let errors = validate(&FilterCriteria::new().with_email("invalid-email")).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidEmail("invalid-email".to_string())]);
    }

    #[test]
    fn test_invalid_phone() {
        let errors = validate(&FilterCriteria::new().with_phone_number("123")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidPhone(_)));
    }

    #[test]
    fn test_phone_needs_seven_digits_after_cleanup() {
        // Passes the character-class pattern but has too few digits
        let errors = validate(&FilterCriteria::new().with_phone_number("12 - 34 ()")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidPhone(_)));
    }

    #[test]
    fn test_inverted_experience() {
        let errors = validate(&FilterCriteria::new().with_experience(Some(10), Some(5))).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvertedExperience { min: 10, max: 5 }]);
    }

    #[test]
    fn test_excessive_experience() {
        let errors = validate(&FilterCriteria::new().with_experience(None, Some(100))).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::ExperienceOutOfBounds { field: "maxExperience", value: 100, .. }
        ));
    }

    #[test]
    fn test_blank_contact_fields_are_ignored() {
        let criteria = FilterCriteria::new().with_email("  ").with_phone_number("");
        assert!(validate(&criteria).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let criteria = FilterCriteria::new()
            .with_name("x".repeat(101))
            .with_email("nope")
            .with_experience(Some(60), Some(55));
        let errors = validate(&criteria).unwrap_err();

        // name, email, min bound, max bound
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_out_of_bounds_skips_ordering_check() {
        let errors = validate(&FilterCriteria::new().with_experience(Some(60), Some(55))).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ExperienceOutOfBounds { field: "minExperience", value: 60, max: 50 },
                ValidationError::ExperienceOutOfBounds { field: "maxExperience", value: 55, max: 50 },
            ]
        );

        // one bound out of range, the other fine: still no ordering error
        let errors = validate(&FilterCriteria::new().with_experience(Some(70), Some(10))).unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}
