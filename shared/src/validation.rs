//! Input validation functions
//!
//! Plain validators return `Result<(), String>`; the `*_field` variants wrap
//! them for use with `#[validate(custom(function = ...))]` on request types.

use once_cell::sync::Lazy;
use validator::ValidationError;

static EMAIL_REGEX: Lazy<regex_lite::Regex> = Lazy::new(|| {
    regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// bcrypt only looks at the first 72 bytes of a password
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Validate email format (surrounding whitespace is ignored)
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(format!(
            "Password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        ));
    }
    Ok(())
}

/// Reject empty or whitespace-only text
pub fn validate_not_blank(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Value cannot be blank".to_string());
    }
    Ok(())
}

fn to_field_error(code: &'static str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|msg| {
        let mut err = ValidationError::new(code);
        err.message = Some(msg.into());
        err
    })
}

pub fn email_field(email: &str) -> Result<(), ValidationError> {
    to_field_error("INVALID_EMAIL", validate_email(email))
}

pub fn password_field(password: &str) -> Result<(), ValidationError> {
    to_field_error("INVALID_PASSWORD", validate_password(password))
}

pub fn not_blank_field(value: &str) -> Result<(), ValidationError> {
    to_field_error("NOT_BLANK", validate_not_blank(value))
}
