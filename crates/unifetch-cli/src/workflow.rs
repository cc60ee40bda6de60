//! Accession lookup workflow
//!
//! Resolves one accession into a [`Lookup`]: the record first, then the
//! sequence. The calls are sequential because a record failure ends the
//! lookup before the sequence endpoint is touched.

use crate::api::UniProtClient;
use serde::Serialize;
use tracing::{info, instrument};
use unifetch_common::{ExportRow, Record, RetrievalError, Sequence, NOT_AVAILABLE};

/// Outcome of one successful lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    #[serde(flatten)]
    pub record: Record,

    /// `None` when the sequence could not be retrieved or was empty
    pub sequence: Option<Sequence>,
}

impl Lookup {
    /// Sequence text for display, [`NOT_AVAILABLE`] when absent
    pub fn sequence_display(&self) -> &str {
        self.sequence.as_ref().map_or(NOT_AVAILABLE, Sequence::as_str)
    }

    /// Row for CSV export, empty sequence field when absent
    pub fn export_row(&self) -> ExportRow {
        ExportRow::new(&self.record, self.sequence.as_ref())
    }
}

/// Resolve `accession` against UniProt.
///
/// A record failure is returned as-is and the sequence is never requested.
/// Once the record is in hand the lookup succeeds whatever the sequence
/// endpoint does.
#[instrument(skip(client))]
pub async fn lookup(client: &UniProtClient, accession: &str) -> Result<Lookup, RetrievalError> {
    let record = client.fetch_record(accession).await?;
    let sequence = client.fetch_sequence(accession).await;

    info!(has_sequence = sequence.is_some(), "Lookup complete");

    Ok(Lookup { record, sequence })
}
