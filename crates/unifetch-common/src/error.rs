//! Error types for unifetch lookups

use thiserror::Error;

/// Result type alias for record retrieval
pub type Result<T> = std::result::Result<T, RetrievalError>;

/// Failure of the metadata lookup.
///
/// Only the record side of a lookup produces this error. Sequence lookups
/// collapse every failure into an absent value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    /// Upstream answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The request never produced a response (DNS, connect, TLS, reset...)
    #[error("Network error: {0}")]
    Transport(String),

    /// A success response whose body was not valid JSON
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl RetrievalError {
    /// Create a status error
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// HTTP status carried by the error, if the upstream answered at all
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}
