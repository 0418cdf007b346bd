//! Custom error types for the phonebook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ValidationError;

/// The main error type for phonebook operations
#[derive(Error, Debug)]
pub enum PhonebookError {
    /// Malformed phone number or birthday
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Wrong argument count or shape for a shell command
    #[error("Usage error in '{command}': expected {usage}")]
    Usage {
        command: &'static str,
        usage: &'static str,
    },

    /// Unrecognized shell command verb
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Backup and restore errors
    #[error("Backup error: {0}")]
    Backup(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PhonebookError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a usage error for a shell command
    pub fn usage(command: &'static str, usage: &'static str) -> Self {
        Self::Usage { command, usage }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a usage error
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

impl From<std::io::Error> for PhonebookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PhonebookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for phonebook operations
pub type PhonebookResult<T> = Result<T, PhonebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhonebookError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = PhonebookError::contact_not_found("Oleh");
        assert_eq!(err.to_string(), "Contact not found: Oleh");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_from_model_error() {
        let err: PhonebookError = ValidationError::InvalidPhone.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: phone must be 10 digits");
    }

    #[test]
    fn test_usage_error() {
        let err = PhonebookError::usage("phone", "phone <name>");
        assert!(err.is_usage());
        assert_eq!(
            err.to_string(),
            "Usage error in 'phone': expected phone <name>"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PhonebookError = io_err.into();
        assert!(matches!(err, PhonebookError::Io(_)));
    }
}
