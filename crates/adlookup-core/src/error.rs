//! Error types for directory normalization.
//!
//! This module provides the error taxonomy for the adlookup workspace,
//! including stable error codes and structured error responses.

use serde::Serialize;
use thiserror::Error;

/// Main error type for directory normalization operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required attribute or buffer was absent from an entry
    #[error("Missing attribute: {0}")]
    MissingAttribute(String),

    /// GUID buffer of the wrong length or unparsable GUID string
    #[error("Invalid GUID: {0}")]
    InvalidGuid(String),

    /// Malformed generalized-time string
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Malformed distinguished name
    #[error("Invalid distinguished name: {0}")]
    InvalidDn(String),
}

/// Specialized result type for directory normalization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Structured error response for serialization.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
    /// Optional request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Error detail structure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAttribute(_) => "MISSING_ATTRIBUTE",
            Self::InvalidGuid(_) => "INVALID_GUID",
            Self::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
            Self::InvalidDn(_) => "INVALID_DN",
        }
    }

    /// Converts the error into an [`ErrorResponse`].
    #[must_use]
    pub fn into_error_response(self) -> ErrorResponse {
        self.into_error_response_with_id(None)
    }

    /// Converts the error into an [`ErrorResponse`] with a request ID.
    #[must_use]
    pub fn into_error_response_with_id(self, request_id: Option<String>) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                details: None,
            },
            request_id,
        }
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Self {
        Self::InvalidGuid(err.to_string())
    }
}
