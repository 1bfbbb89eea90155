//! Email and password format checks.
//!
//! Both checks are small hand-written scanners equivalent to:
//!
//! - email: `^[A-Za-z0-9.]+@university\.com$`
//! - password: `^[A-Z][A-Za-z]{4,}[0-9]{3,}$`

use crate::error::ValidationError;

/// Domain every student email must use.
pub const EMAIL_DOMAIN: &str = "@university.com";

/// Shown when an email fails [`validate_email`].
pub const EMAIL_ERROR: &str = "Invalid email format. Must end with @university.com";

/// Shown when a password fails [`validate_password`].
pub const PASSWORD_ERROR: &str =
    "Invalid password format. Must start with uppercase, contain at least 5 letters followed by 3+ digits";

const MIN_PASSWORD_LETTERS: usize = 5;
const MIN_PASSWORD_DIGITS: usize = 3;

/// Returns `true` if `email` is a non-empty run of ASCII alphanumerics and
/// dots followed by exactly `@university.com`.
pub fn validate_email(email: &str) -> bool {
    let Some(local) = email.strip_suffix(EMAIL_DOMAIN) else {
        return false;
    };
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.')
}

/// Returns `true` if `password` starts with an uppercase letter, has at
/// least five letters in total, and ends in a run of three or more digits
/// with nothing after it.
pub fn validate_password(password: &str) -> bool {
    let bytes = password.as_bytes();

    match bytes.first() {
        Some(b) if b.is_ascii_uppercase() => {}
        _ => return false,
    }

    let letters = bytes
        .iter()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if letters < MIN_PASSWORD_LETTERS {
        return false;
    }

    let digits = &bytes[letters..];
    digits.len() >= MIN_PASSWORD_DIGITS && digits.iter().all(u8::is_ascii_digit)
}

/// [`validate_email`] as a `Result`.
pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

/// [`validate_password`] as a `Result`.
pub fn check_password(password: &str) -> Result<(), ValidationError> {
    if validate_password(password) {
        Ok(())
    } else {
        Err(ValidationError::Password)
    }
}
