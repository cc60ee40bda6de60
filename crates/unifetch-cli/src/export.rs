//! CSV export of a single lookup
//!
//! One header row (`Accession,Gene Name,Protein Name,Species,Sequence`) and
//! exactly one data row per export.

use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use unifetch_common::ExportRow;

/// File name used when no output path is given
pub const DEFAULT_EXPORT_FILE: &str = "uniprot_data.csv";

/// Serialize `row` as a CSV document to `writer`
pub fn write_csv<W: Write>(writer: W, row: &ExportRow) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.serialize(row)?;
    csv.flush()?;

    Ok(())
}

/// Render `row` as a CSV document
pub fn to_csv(row: &ExportRow) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, row)?;

    // csv only emits the UTF-8 it was given
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the CSV document to `path`, replacing any existing file
pub fn write_csv_file(path: &Path, row: &ExportRow) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), row)?;

    debug!(path = %path.display(), accession = %row.accession, "Exported CSV");
    Ok(())
}
