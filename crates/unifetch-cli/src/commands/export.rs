//! `unifetch export` command implementation
//!
//! Looks up one accession and writes it as a single-row CSV document.

use crate::api::UniProtClient;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::export;
use crate::workflow;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Output path meaning "write to stdout"
pub const STDOUT_PATH: &str = "-";

/// Run the export command
pub async fn run(accession: String, output: String, config: &Config) -> Result<()> {
    let client = UniProtClient::from_config(config)?;

    info!(accession = %accession, output = %output, "Exporting UniProt entry");
    let lookup = workflow::lookup(&client, &accession)
        .await
        .map_err(|e| CliError::retrieval(&accession, e))?;

    let row = lookup.export_row();

    if output == STDOUT_PATH {
        export::write_csv(std::io::stdout().lock(), &row)?;
        return Ok(());
    }

    export::write_csv_file(Path::new(&output), &row)?;

    println!("{} Exported {} to {}", "✓".green(), accession.cyan(), output.cyan());
    if lookup.sequence.is_none() {
        println!("{} Sequence unavailable; the Sequence column is empty.", "!".yellow());
    }

    Ok(())
}
