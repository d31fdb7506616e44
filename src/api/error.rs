//! Transport error type for the blog API client
//!
//! The backend reports failures as `{"message": "..."}` JSON payloads, and
//! this client deliberately collapses every failure mode (connection refused,
//! 4xx, 5xx, unparseable body) into one kind carrying that human-readable
//! message. Callers decide how loud to be about it.

use thiserror::Error;

/// The single error kind surfaced by the request client
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A request did not complete with a usable response
    #[error("{message}")]
    RequestFailed { message: String },
}

impl ApiError {
    /// Build the error from any displayable source
    pub fn failed(message: impl Into<String>) -> Self {
        ApiError::RequestFailed {
            message: message.into(),
        }
    }

    /// The human-readable message carried by this error
    pub fn message(&self) -> &str {
        match self {
            ApiError::RequestFailed { message } => message,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::failed(err.to_string())
    }
}
