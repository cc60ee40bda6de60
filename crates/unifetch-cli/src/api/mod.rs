//! UniProt REST client
//!
//! HTTP access to the two UniProtKB endpoints a lookup needs.

pub mod client;
pub mod endpoints;

pub use client::UniProtClient;
