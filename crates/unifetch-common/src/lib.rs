//! unifetch Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, pure transforms, and error handling for the unifetch workspace.
//!
//! # Overview
//!
//! - **Types**: `Record`, `Sequence` and `ExportRow`, plus the response-shape
//!   translation from UniProt JSON and FASTA bodies
//! - **Error Handling**: `RetrievalError` for failed metadata lookups
//! - **Logging**: subscriber setup shared by every binary
//!
//! # Example
//!
//! ```
//! use unifetch_common::types::{Record, Sequence};
//!
//! let body = serde_json::json!({
//!     "primaryAccession": "P69905",
//!     "organism": { "scientificName": "Homo sapiens" }
//! });
//! let record = Record::from_entry("P69905", &body);
//! assert_eq!(record.species, "Homo sapiens");
//! assert_eq!(record.protein_name, "N/A");
//!
//! let sequence = Sequence::from_fasta(">sp|P69905|HBA_HUMAN\nMVLSPAD\nKTNVKAA\n");
//! assert_eq!(sequence.unwrap().as_str(), "MVLSPADKTNVKAA");
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RetrievalError};
pub use types::{ExportRow, Record, Sequence, NOT_AVAILABLE};
