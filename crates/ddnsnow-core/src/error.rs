//! Error types for DDNS Now record management
//!
//! Every failure is detected locally where possible, so callers can tell a
//! rejected mutation apart from a provider-side rejection.

use thiserror::Error;

use crate::validation::Violations;

/// Result type alias for DDNS Now operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for DDNS Now operations
#[derive(Error, Debug)]
pub enum Error {
    /// The control panel page could not be parsed
    #[error("parse html: {0}")]
    Parse(String),

    /// An addition violated one or more validation rules
    #[error("{0}")]
    Conflict(Violations),

    /// The record to look up or remove is not stored
    #[error("record not found: {0}")]
    NotFound(String),

    /// The backend rejected a submission (`result == "NG"`)
    #[error("ddnsnow: code={code}, msg={message}")]
    Provider {
        /// `errorcode` from the response, verbatim
        code: i64,
        /// `errormsg` from the response, verbatim
        message: String,
    },

    /// The response body did not have the expected shape
    #[error("decode response: {0}")]
    Decode(String),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a conflict error from collected violations
    pub fn conflict(violations: Violations) -> Self {
        Self::Conflict(violations)
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a provider error carrying the backend's code and message
    pub fn provider(code: i64, message: impl Into<String>) -> Self {
        Self::Provider {
            code,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// True for rejected additions
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// True when a lookup or removal target is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
