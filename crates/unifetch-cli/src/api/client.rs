//! HTTP client for the UniProt REST API
//!
//! The two fetchers fail differently:
//!
//! - [`UniProtClient::fetch_record`] is fail-loud and returns a
//!   [`RetrievalError`] on any transport or status failure.
//! - [`UniProtClient::fetch_sequence`] is fail-soft; every failure is logged
//!   and becomes `None`.

use crate::api::endpoints;
use crate::config::Config;
use crate::error::Result;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use unifetch_common::{Record, RetrievalError, Sequence};

/// Client for UniProtKB entry lookups
///
/// Holds no per-lookup state; every call is independent.
#[derive(Debug, Clone)]
pub struct UniProtClient {
    client: Client,
    base_url: String,
}

impl UniProtClient {
    /// Create a new client.
    ///
    /// Without a timeout, requests wait as long as the HTTP stack allows.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Create from CLI configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url(), config.timeout())
    }

    /// Fetch entry metadata and translate it into a [`Record`].
    ///
    /// Missing fields in a successful response are not errors; they become
    /// the sentinel. A non-2xx status, a transport failure, or a body that is
    /// not JSON is.
    #[instrument(skip(self))]
    pub async fn fetch_record(&self, accession: &str) -> std::result::Result<Record, RetrievalError> {
        let url = endpoints::entry_json_url(&self.base_url, accession);
        debug!(url = %url, "Requesting entry metadata");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch data from UniProt API");
                RetrievalError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "UniProt API returned an error status");
            return Err(RetrievalError::status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read UniProt API response body");
            RetrievalError::transport(e.to_string())
        })?;

        let entry: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "UniProt API response was not valid JSON");
            RetrievalError::decode(e.to_string())
        })?;

        let record = Record::from_entry(accession, &entry);
        debug!(
            gene_name = %record.gene_name,
            protein_name = %record.protein_name,
            species = %record.species,
            "Resolved entry metadata"
        );

        Ok(record)
    }

    /// Fetch the FASTA sequence for an entry.
    ///
    /// Never fails: status errors, transport errors, and a body with no
    /// residue lines all yield `None`.
    #[instrument(skip(self))]
    pub async fn fetch_sequence(&self, accession: &str) -> Option<Sequence> {
        let url = endpoints::entry_fasta_url(&self.base_url, accession);
        debug!(url = %url, "Requesting entry sequence");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Failed to fetch sequence from UniProt API");
                return None;
            },
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "UniProt sequence endpoint returned an error status");
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Failed to read UniProt sequence body");
                return None;
            },
        };

        let sequence = Sequence::from_fasta(&body);
        match &sequence {
            Some(seq) => debug!(length = seq.len(), "Resolved entry sequence"),
            None => debug!("Sequence body had no residue lines"),
        }

        sequence
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
