/**
 * Backend Error Types
 *
 * This module defines the error type returned by the store, the repository
 * and the HTTP handlers.
 *
 * # Error Categories
 *
 * ## Store Errors
 *
 * - `ConnectionError` - MongoDB unreachable after every connect attempt
 * - `StoreError` - A query, update, insert or decode failed
 * - `AggregateLoadError` - One or more recipes of a bulk load failed
 *
 * ## Request Errors
 *
 * - `NotFound` - No recipe matches the requested id
 * - `SharedError` - Validation of the request body failed
 * - `HandlerError` - Any other request-level failure with an explicit status
 *
 * `MetricsError` wraps failures of the Prometheus registry.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use recipes::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("tacos");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "recipe id is empty");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The store could not be reached after every connect attempt
    #[error("Connection error after {attempts} attempt(s): {message}")]
    ConnectionError {
        /// Number of attempts made
        attempts: u32,
        /// Message of the last failure
        message: String,
    },

    /// No document matches the requested id
    #[error("Recipe {id} not found")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// Query, update, insert or decode failure
    #[error("Store error: {message}")]
    StoreError {
        /// Human-readable error message
        message: String,
    },

    /// One or more upserts of a bulk load failed
    #[error("{} error(s) occurred while loading recipes: {}", failures.len(), failures.join("; "))]
    AggregateLoadError {
        /// One message per failed recipe
        failures: Vec<String>,
    },

    /// Handler error (e.g. empty id, malformed body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Shared error (validation)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Metrics registration or encoding error
    #[error("Metrics error: {0}")]
    MetricsError(#[from] prometheus::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new not-found error for `id`
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a new store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    /// Create a new connection error
    pub fn connection(attempts: u32, message: impl Into<String>) -> Self {
        Self::ConnectionError {
            attempts,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `SharedError` - 400 Bad Request
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::ConnectionError { .. }
            | Self::StoreError { .. }
            | Self::AggregateLoadError { .. }
            | Self::MetricsError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for errors that mean the requested recipe does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<mongodb::error::Error> for BackendError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::store(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for BackendError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::store(format!("can't encode recipe: {}", err))
    }
}
