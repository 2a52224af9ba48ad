// ============================================================================
// VALIDATORS - pure field predicates with fixed user-facing messages
// ============================================================================
// Invalid or unparseable input is a failing result, never an error or panic.
// Message text is part of the UI contract and must not drift.
// ============================================================================

use chrono::{Datelike, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldValidationResult {
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl FieldValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(message: &'static str) -> Self {
        Self {
            valid: false,
            message: Some(message),
        }
    }
}

/// Shape check equivalent to `x@y.z`: no whitespace, exactly one `@` with a
/// non-empty local part, and a dot inside the domain with characters on both
/// sides.
fn email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .as_bytes()
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && i < domain.len() - 1)
}

pub fn validate_email(value: &str) -> FieldValidationResult {
    let email = value.trim();
    if email.is_empty() {
        return FieldValidationResult::fail("Email is required");
    }
    if !email_shape(email) {
        return FieldValidationResult::fail("Please enter a valid email address");
    }
    FieldValidationResult::ok()
}

pub fn validate_password(value: &str) -> FieldValidationResult {
    if value.is_empty() {
        return FieldValidationResult::fail("Password is required");
    }
    if value.chars().count() < 6 {
        return FieldValidationResult::fail("Password must be at least 6 characters");
    }
    FieldValidationResult::ok()
}

/// Digits, spaces, `+`, `-` and parentheses only, at least 10 characters.
pub fn validate_phone(value: &str) -> FieldValidationResult {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    if !allowed || value.chars().count() < 10 {
        return FieldValidationResult::fail("Please enter a valid phone number");
    }
    FieldValidationResult::ok()
}

pub fn validate_name(value: &str) -> FieldValidationResult {
    if value.trim().chars().count() < 2 {
        return FieldValidationResult::fail("Name must be at least 2 characters");
    }
    FieldValidationResult::ok()
}

pub fn validate_terms(agreed: bool) -> FieldValidationResult {
    if !agreed {
        return FieldValidationResult::fail("You must agree to the terms and conditions");
    }
    FieldValidationResult::ok()
}

pub fn validate_date_of_birth(value: &str) -> FieldValidationResult {
    validate_date_of_birth_at(value, Utc::now().year())
}

/// Age is current year minus birth year, unadjusted for month/day, and must
/// land in [0, 120]. An empty value is accepted (the field is optional).
pub fn validate_date_of_birth_at(value: &str, current_year: i32) -> FieldValidationResult {
    let value = value.trim();
    if value.is_empty() {
        return FieldValidationResult::ok();
    }

    let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
        return FieldValidationResult::fail("Please enter a valid date of birth");
    };

    let age = current_year - date.year();
    if !(0..=120).contains(&age) {
        return FieldValidationResult::fail("Please enter a valid date of birth");
    }
    FieldValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_without_at_or_dot_fails_with_message() {
        for bad in ["plainaddress", "missing.domain", "user@nodot", "user@.", "@x.y", "user@", "a b@c.d", "user@@x.y"] {
            let res = validate_email(bad);
            assert!(!res.valid, "{} should fail", bad);
            assert_eq!(res.message, Some("Please enter a valid email address"));
        }
    }

    #[test]
    fn email_empty_gets_the_required_message() {
        let res = validate_email("   ");
        assert!(!res.valid);
        assert_eq!(res.message, Some("Email is required"));
    }

    #[test]
    fn email_xyz_shape_passes() {
        for good in ["a@b.c", "user@example.com", "first.last@sub.domain.org"] {
            assert!(validate_email(good).valid, "{} should pass", good);
        }
    }

    #[test]
    fn password_boundary_is_six() {
        assert!(!validate_password("12345").valid);
        assert!(validate_password("123456").valid);
        let res = validate_password("");
        assert_eq!(res.message, Some("Password is required"));
        let res = validate_password("short");
        assert_eq!(res.message, Some("Password must be at least 6 characters"));
    }

    #[test]
    fn phone_requires_allowed_charset_and_length() {
        assert!(validate_phone("+1 (555) 123-4567").valid);
        assert!(validate_phone("0123456789").valid);
        assert!(!validate_phone("123456789").valid); // too short
        assert!(!validate_phone("12345abcde").valid); // letters
    }

    #[test]
    fn name_must_have_two_trimmed_chars() {
        assert!(!validate_name(" a ").valid);
        assert!(!validate_name("").valid);
        assert!(validate_name("Al").valid);
        assert!(validate_name("  Bo  ").valid);
    }

    #[test]
    fn terms_must_be_accepted() {
        assert!(!validate_terms(false).valid);
        assert!(validate_terms(true).valid);
    }

    #[test]
    fn date_of_birth_age_window() {
        assert!(validate_date_of_birth_at("1990-06-15", 2026).valid);
        assert!(validate_date_of_birth_at("2026-01-01", 2026).valid); // age 0
        assert!(validate_date_of_birth_at("1906-01-01", 2026).valid); // age 120
        assert!(!validate_date_of_birth_at("1905-12-31", 2026).valid); // age 121
        assert!(!validate_date_of_birth_at("2027-01-01", 2026).valid); // age -1
    }

    #[test]
    fn unparseable_date_fails_instead_of_panicking() {
        let res = validate_date_of_birth_at("next tuesday", 2026);
        assert!(!res.valid);
        assert_eq!(res.message, Some("Please enter a valid date of birth"));
        assert!(!validate_date_of_birth_at("1990-13-40", 2026).valid);
    }

    #[test]
    fn empty_date_of_birth_is_accepted() {
        assert!(validate_date_of_birth_at("", 2026).valid);
    }
}
