//! Error handling for the roomshare client

use std::fmt;
use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for listing operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure, no response was received
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The store answered with a 5xx status
    #[error("Server error (Status: {status}): {message}")]
    Server {
        status: StatusCode,
        message: String,
    },

    /// The store rejected the request (4xx other than 404), or the payload
    /// failed local validation before dispatch
    #[error("Validation error: {0}")]
    Validation(String),

    /// The listing does not exist in the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// A mutation was attempted without a signed-in user
    #[error("You need to be signed in to do that")]
    AuthRequired,

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new validation error
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }

    /// Create a new not-found error
    pub fn not_found<T: fmt::Display>(msg: T) -> Self {
        Error::NotFound(msg.to_string())
    }

    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// Classify a non-2xx response.
    ///
    /// 404 maps to `NotFound`, any other 4xx to `Validation`, everything
    /// else to `Server`.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        if status == StatusCode::NOT_FOUND {
            Error::NotFound(message)
        } else if status.is_client_error() {
            Error::Validation(message)
        } else {
            Error::Server { status, message }
        }
    }

    /// Whether the user may sensibly retry the action that produced this error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Server { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
