//! Error types for the unifetch CLI
//!
//! User-facing errors with messages that say what to try next.

use thiserror::Error;
use unifetch_common::RetrievalError;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// The metadata lookup failed; nothing was displayed or exported
    #[error("Failed to fetch UniProt data for '{accession}' ({source}). Please check the accession ID and try again.")]
    Retrieval {
        accession: String,
        #[source]
        source: RetrievalError,
    },

    /// Writing output failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP client could not be constructed
    #[error("Failed to initialise HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or command-line flags.")]
    Config(String),
}

impl CliError {
    /// Create a retrieval error for `accession`
    pub fn retrieval(accession: impl Into<String>, source: RetrievalError) -> Self {
        Self::Retrieval {
            accession: accession.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
