//! Login form rules.

use catalog_core::Credentials;

use crate::{ValidationResult, text_len, is_blank};

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
pub const USERNAME_TOO_LONG: &str = "Username must be less than 20 characters";
pub const USERNAME_INVALID_CHARS: &str =
    "Username can only contain letters, numbers, and underscores";

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const PASSWORD_TOO_LONG: &str = "Password must be less than 50 characters";
pub const PASSWORD_NEEDS_LETTER: &str = "Password must contain at least one letter";
pub const PASSWORD_NEEDS_NUMBER: &str = "Password must contain at least one number";

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 20;
const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 50;

pub fn validate_username(username: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if is_blank(username) {
        errors.push(USERNAME_REQUIRED.to_string());
    } else {
        let len = text_len(username);
        if len < USERNAME_MIN {
            errors.push(USERNAME_TOO_SHORT.to_string());
        }
        if len > USERNAME_MAX {
            errors.push(USERNAME_TOO_LONG.to_string());
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            errors.push(USERNAME_INVALID_CHARS.to_string());
        }
    }

    ValidationResult::from_errors(errors)
}

pub fn validate_password(password: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if is_blank(password) {
        errors.push(PASSWORD_REQUIRED.to_string());
    } else {
        let len = text_len(password);
        if len < PASSWORD_MIN {
            errors.push(PASSWORD_TOO_SHORT.to_string());
        }
        if len > PASSWORD_MAX {
            errors.push(PASSWORD_TOO_LONG.to_string());
        }
        if !password.chars().any(|c| c.is_ascii_alphabetic()) {
            errors.push(PASSWORD_NEEDS_LETTER.to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push(PASSWORD_NEEDS_NUMBER.to_string());
        }
    }

    ValidationResult::from_errors(errors)
}

/// Username messages followed by password messages.
pub fn validate_credentials(credentials: &Credentials) -> ValidationResult {
    validate_username(&credentials.username).merge(validate_password(&credentials.password))
}
