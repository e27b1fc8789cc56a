//! Input validation utilities

use contesthub_common::{AppError, AppResult};
use validator::Validate;

use crate::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password length against provider limits
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 6 characters");
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err("Password must be at most 128 characters");
    }
    Ok(())
}

/// Validate credentials before they reach the identity provider.
pub fn validate_credentials(email: &str, password: &str) -> AppResult<()> {
    validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;
    validate_password(password).map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(())
}

/// Run derive-based validation and map failures into the error taxonomy.
pub fn check(payload: &impl Validate) -> AppResult<()> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}
