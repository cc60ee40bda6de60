//! `unifetch config` command implementation
//!
//! Shows the effective configuration.

use crate::config::{Config, BASE_URL_ENV, TIMEOUT_ENV};
use crate::error::{CliError, Result};
use colored::Colorize;

/// Get configuration value
pub fn get(key: &str, config: &Config) -> Result<()> {
    println!("{}", lookup_key(key, config)?);
    Ok(())
}

/// Show all configuration
pub fn show(config: &Config) -> Result<()> {
    println!("{}", "unifetch Configuration:".cyan().bold());
    println!();
    println!("{:<15} {}", "base_url:", config.base_url());
    println!("{:<15} {}", "timeout_secs:", format_timeout(config));
    println!();
    println!("{}", "Environment Variables:".cyan());
    println!("  {:<27} - Upstream base URL", BASE_URL_ENV);
    println!("  {:<27} - Request timeout in seconds", TIMEOUT_ENV);

    Ok(())
}

fn lookup_key(key: &str, config: &Config) -> Result<String> {
    match key {
        "base_url" => Ok(config.base_url().to_string()),
        "timeout_secs" => Ok(format_timeout(config)),
        _ => Err(CliError::config(format!(
            "Unknown config key: {}. Valid keys: base_url, timeout_secs",
            key
        ))),
    }
}

fn format_timeout(config: &Config) -> String {
    config
        .timeout_secs
        .map_or_else(|| "none".to_string(), |secs| secs.to_string())
}
