//! Password policy for new passwords.

use gameshelf_core::config::AuthConfig;
use gameshelf_core::error::AppError;

/// Longest accepted password, in bytes.
const MAX_LENGTH: usize = 128;

/// Validates new passwords against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Checks a password against the length policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        if password.len() > MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at most {MAX_LENGTH} bytes long"
            )));
        }
        if password.trim().is_empty() {
            return Err(AppError::validation("Password must not be blank"));
        }
        Ok(())
    }

    /// Validates that a new password differs from the old one.
    pub fn validate_not_same(&self, old_password: &str, new_password: &str) -> Result<(), AppError> {
        if old_password == new_password {
            return Err(AppError::validation(
                "New password cannot be the same as old password",
            ));
        }
        Ok(())
    }

    /// Validates that the confirmation matches the new password.
    pub fn validate_confirmation(&self, new_password: &str, confirm: &str) -> Result<(), AppError> {
        if new_password != confirm {
            return Err(AppError::validation("Passwords do not match"));
        }
        Ok(())
    }
}
