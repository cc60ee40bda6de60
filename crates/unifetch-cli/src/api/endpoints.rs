//! UniProtKB endpoint URL builders
//!
//! The accession is inserted verbatim; no encoding or validation happens here.

/// Entry metadata as JSON
pub fn entry_json_url(base_url: &str, accession: &str) -> String {
    format!("{}/uniprotkb/{}?format=json", base_url, accession)
}

/// Entry sequence as FASTA
pub fn entry_fasta_url(base_url: &str, accession: &str) -> String {
    format!("{}/uniprotkb/{}.fasta", base_url, accession)
}
