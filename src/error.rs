//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation failures live in [`crate::domain::ValidationError`] and are wrapped
//! transparently so they surface unchanged at every layer.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the address book or its records.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur in the command layer.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command was called with the wrong number of arguments
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// A book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}

/// Errors that can occur while persisting or restoring the book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("Failed to access address book file: {0}")]
    Io(#[from] std::io::Error),

    /// The book file is not valid JSON for an address book
    #[error("Failed to parse address book file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("Alice".to_string());
        assert_eq!(err.to_string(), "Contact not found: Alice");

        let err = BookError::PhoneNotFound("0501234567".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 0501234567");

        let err = CommandError::Usage("add <name> <phone>");
        assert_eq!(err.to_string(), "Usage: add <name> <phone>");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert!(err.to_string().contains("BIRTHDAY_WINDOW_DAYS"));
    }

    #[test]
    fn test_validation_error_passes_through_unchanged() {
        let err = BookError::from(ValidationError::EmptyName);
        assert_eq!(err.to_string(), ValidationError::EmptyName.to_string());

        let err = CommandError::from(ValidationError::InvalidPhone("123".to_string()));
        assert!(err.to_string().contains("123"));
    }
}
