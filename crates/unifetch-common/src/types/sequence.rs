use serde::{Deserialize, Serialize};

/// Concatenated residue string for one accession.
///
/// Only constructed non-empty; absence is `Option::<Sequence>::None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(String);

impl Sequence {
    /// Parse a single-record FASTA body.
    ///
    /// Drops exactly the first line and joins the rest with no separator.
    /// Returns `None` when nothing is left, so an empty sequence and a
    /// missing one are the same outcome.
    pub fn from_fasta(body: &str) -> Option<Self> {
        let residues: String = body.lines().skip(1).collect();

        if residues.is_empty() {
            None
        } else {
            Some(Self(residues))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
