//! `unifetch fetch` command implementation
//!
//! Looks up one accession and prints the record with its sequence.

use crate::api::UniProtClient;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::workflow::{self, Lookup};
use colored::Colorize;
use tracing::info;
use unifetch_common::ExportRow;

/// Run the fetch command
pub async fn run(accession: String, format: String, config: &Config) -> Result<()> {
    // Reject a bad format before touching the network
    let format = OutputFormat::parse(&format)?;

    let client = UniProtClient::from_config(config)?;

    info!(accession = %accession, "Fetching UniProt entry");
    let lookup = workflow::lookup(&client, &accession)
        .await
        .map_err(|e| CliError::retrieval(&accession, e))?;

    print!("{}", render(&lookup, format)?);

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
    Compact,
}

impl OutputFormat {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            _ => Err(CliError::config(format!(
                "Unknown format: '{}'. Use table, json, or compact",
                s
            ))),
        }
    }
}

fn render(lookup: &Lookup, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => format_as_table(lookup),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(lookup)?),
        OutputFormat::Compact => format_as_compact(lookup),
    })
}

/// Format as a one-row table with a caption line
fn format_as_table(lookup: &Lookup) -> String {
    use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

    let record = &lookup.record;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(ExportRow::HEADERS)
        .add_row(vec![
            record.accession.as_str(),
            record.gene_name.as_str(),
            record.protein_name.as_str(),
            record.species.as_str(),
            lookup.sequence_display(),
        ]);

    format!(
        "{}\n{}\n",
        table,
        format!("UniProt data for accession ID: {}", record.accession).dimmed()
    )
}

/// Tab-separated, one line
fn format_as_compact(lookup: &Lookup) -> String {
    let record = &lookup.record;
    format!(
        "{}\t{}\t{}\t{}\t{}\n",
        record.accession,
        record.gene_name,
        record.protein_name,
        record.species,
        lookup.sequence_display()
    )
}
