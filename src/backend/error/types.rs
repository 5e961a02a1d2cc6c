/**
 * Backend Error Types
 *
 * This module defines the error taxonomy used by HTTP handlers. Every
 * handler returns `Result<_, ApiError>`; the `IntoResponse` impl in
 * `conversion.rs` maps each variant to a status code and JSON body.
 *
 * # Status Code Mapping
 *
 * - `Validation` - 400 Bad Request
 * - `Authentication` - 401 Unauthorized
 * - `NotFound` - 404 Not Found
 * - `Conflict` - 409 Conflict
 * - `Shared` - 400 or 500 depending on the wrapped error
 * - `Persistence` / `Internal` - 500 Internal Server Error
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// All failure modes a handler can surface to a client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body or parameter failed validation
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Credentials or token rejected
    #[error("{message}")]
    Authentication {
        /// Human-readable error message
        message: String,
    },

    /// Requested entity does not exist
    #[error("{resource} not found")]
    NotFound {
        /// What was looked up
        resource: String,
    },

    /// Uniqueness or version conflict
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Error from the shared types layer
    #[error(transparent)]
    Shared(#[from] SharedError),

    /// Database error. The client sees an opaque message; the real error
    /// is logged server-side.
    #[error("Internal server error")]
    Persistence(#[from] sqlx::Error),

    /// Anything else that should not leak details to the client
    #[error("Internal server error")]
    Internal {
        /// Logged, never sent to the client
        message: String,
    },
}

impl ApiError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Authentication { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Shared(err) => match err {
                SharedError::Serialization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::Validation { .. } => StatusCode::BAD_REQUEST,
            },
            Self::Persistence(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
