//! Simulated sign-in credentials.
//!
//! Validation is local; nothing is sent anywhere and the password is
//! dropped once checked.

use crate::domain::foundation::ValidationError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Credentials typed into the sign-in form.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks the form rules and returns the identity to attach to the session.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the email is blank
    /// - `PasswordTooShort` if the password has fewer than [`MIN_PASSWORD_LEN`] characters
    pub fn validate(self) -> Result<String, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(email.to_string())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
