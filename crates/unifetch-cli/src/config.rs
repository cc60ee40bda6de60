//! Configuration management for the unifetch CLI
//!
//! Settings come from environment variables (a `.env` file is honoured) and
//! may be overridden by command-line flags.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Public UniProt REST base URL
pub const DEFAULT_BASE_URL: &str = "https://rest.uniprot.org";

/// Environment variable overriding the upstream base URL
pub const BASE_URL_ENV: &str = "UNIFETCH_BASE_URL";

/// Environment variable setting an optional request timeout in seconds
pub const TIMEOUT_ENV: &str = "UNIFETCH_API_TIMEOUT_SECS";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Upstream base URL, without trailing slash
    pub base_url: String,

    /// Per-request timeout; `None` leaves the HTTP stack's default in place
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Defaults: public UniProt, no explicit timeout
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.set_base_url(url);
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                CliError::config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    TIMEOUT_ENV, raw
                ))
            })?;
            config.timeout_secs = Some(secs);
        }

        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the base URL; a trailing slash is dropped
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
