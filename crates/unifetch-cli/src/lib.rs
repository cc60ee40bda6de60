//! unifetch CLI Library
//!
//! Look up UniProtKB entries by accession and export them as CSV.
//!
//! # Overview
//!
//! - **Lookup**: resolve an accession into its record and sequence (`unifetch fetch`)
//! - **Export**: write the lookup as a single-row CSV file (`unifetch export`)
//! - **Configuration**: inspect effective settings (`unifetch config`)
//!
//! # Example
//!
//! ```no_run
//! use unifetch_cli::api::UniProtClient;
//! use unifetch_cli::workflow;
//!
//! # async fn demo() -> unifetch_cli::Result<()> {
//! let client = UniProtClient::new("https://rest.uniprot.org", None)?;
//! match workflow::lookup(&client, "P69905").await {
//!     Ok(lookup) => println!("{} {}", lookup.record.protein_name, lookup.sequence_display()),
//!     Err(e) => eprintln!("lookup failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};
pub use workflow::{lookup, Lookup};

use clap::{Parser, Subcommand};

/// unifetch - UniProt accession lookup and CSV export
#[derive(Parser, Debug)]
#[command(name = "unifetch")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// UniProt REST base URL
    #[arg(long, env = "UNIFETCH_BASE_URL", global = true)]
    pub base_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up an accession and print its record and sequence
    Fetch {
        /// UniProt accession ID (e.g., "P69905")
        accession: String,

        /// Output format (table, json, compact)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Look up an accession and export it as CSV
    Export {
        /// UniProt accession ID (e.g., "P69905")
        accession: String,

        /// Output file path, or "-" for stdout
        #[arg(short, long, default_value = export::DEFAULT_EXPORT_FILE)]
        output: String,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Get configuration value
    Get {
        /// Configuration key (base_url, timeout_secs)
        key: String,
    },

    /// Show all configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_defaults_to_uniprot_data_csv() {
        let cli = Cli::try_parse_from(["unifetch", "export", "P69905"]).unwrap();
        match cli.command {
            Commands::Export { accession, output } => {
                assert_eq!(accession, "P69905");
                assert_eq!(output, "uniprot_data.csv");
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["unifetch", "fetch", "P69905", "-v", "--base-url", "http://x"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://x"));
    }
}
