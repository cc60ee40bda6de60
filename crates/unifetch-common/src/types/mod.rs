//! Domain types shared across unifetch
//!
//! A lookup produces one [`Record`] and, independently, an optional
//! [`Sequence`]. [`ExportRow`] is the flattened union of both used for CSV.

mod record;
mod sequence;

pub use record::Record;
pub use sequence::Sequence;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback text for any record field the upstream response does not carry
pub const NOT_AVAILABLE: &str = "N/A";

/// Walk `path` through nested JSON objects and return the string found there.
///
/// Any missing intermediate, a non-string leaf, or an empty string resolves to
/// `default`. Never panics.
///
/// ```
/// use unifetch_common::types::lookup_str;
///
/// let body = serde_json::json!({ "organism": { "scientificName": "Mus musculus" } });
/// assert_eq!(lookup_str(&body, &["organism", "scientificName"], "N/A"), "Mus musculus");
/// assert_eq!(lookup_str(&body, &["organism", "commonName"], "N/A"), "N/A");
/// ```
pub fn lookup_str(value: &Value, path: &[&str], default: &str) -> String {
    path.iter()
        .try_fold(value, |node, key| node.get(*key))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// One CSV data row: the record's four fields plus the sequence.
///
/// Derived on demand from a record and an optional sequence; never stored.
/// Field renames are the exported column headers, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Accession")]
    pub accession: String,

    #[serde(rename = "Gene Name")]
    pub gene_name: String,

    #[serde(rename = "Protein Name")]
    pub protein_name: String,

    #[serde(rename = "Species")]
    pub species: String,

    /// Empty when the sequence was absent, never the sentinel
    #[serde(rename = "Sequence")]
    pub sequence: String,
}

impl ExportRow {
    /// Column headers in export order
    pub const HEADERS: [&'static str; 5] =
        ["Accession", "Gene Name", "Protein Name", "Species", "Sequence"];

    /// Merge a record with the outcome of its sequence lookup
    pub fn new(record: &Record, sequence: Option<&Sequence>) -> Self {
        Self {
            accession: record.accession.clone(),
            gene_name: record.gene_name.clone(),
            protein_name: record.protein_name.clone(),
            species: record.species.clone(),
            sequence: sequence.map(|s| s.as_str().to_string()).unwrap_or_default(),
        }
    }
}
