//! Error types for the domain layer.
//!
//! Validation messages are shown to end users as-is, so they are written in
//! the application's locale (pt-BR).

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("O campo '{field}' é obrigatório.")]
    EmptyField { field: String },

    #[error("A senha deve ter pelo menos {min} caracteres.")]
    PasswordTooShort { min: usize },

    #[error("O campo '{field}' tem formato inválido: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::EmptyField { field } | ValidationError::InvalidFormat { field, .. } => {
                Some(field)
            }
            ValidationError::PasswordTooShort { .. } => Some("password"),
        }
    }
}
