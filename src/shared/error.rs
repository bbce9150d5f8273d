//! Shared Error Types
//!
//! Errors that describe bad input rather than server failures. They are
//! independent of axum and MongoDB so they can be raised from the shared
//! types themselves.
//!
//! # Usage
//!
//! ```rust
//! use recipes::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "title must not be empty");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
