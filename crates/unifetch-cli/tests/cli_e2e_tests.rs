//! End-to-end tests for the unifetch binary
//!
//! These run the compiled binary against a wiremock upstream and check:
//! - fetch output formats
//! - CSV export to a file and to stdout
//! - the single aggregate error on record failure

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Helper to create a mock entry response
fn mock_entry() -> serde_json::Value {
    json!({
        "primaryAccession": "P12345",
        "proteinDescription": {
            "recommendedName": { "fullName": { "value": "Hemoglobin" } }
        },
        "organism": { "scientificName": "Homo sapiens" }
    })
}

async fn mock_upstream(entry_status: u16, fasta: Option<&str>) -> MockServer {
    let server = MockServer::start().await;

    let entry = if entry_status == 200 {
        ResponseTemplate::new(200).set_body_json(mock_entry())
    } else {
        ResponseTemplate::new(entry_status)
    };

    Mock::given(method("GET"))
        .and(path("/uniprotkb/P12345"))
        .and(query_param("format", "json"))
        .respond_with(entry)
        .mount(&server)
        .await;

    let fasta = match fasta {
        Some(body) => ResponseTemplate::new(200).set_body_string(body),
        None => ResponseTemplate::new(404),
    };

    Mock::given(method("GET"))
        .and(path("/uniprotkb/P12345.fasta"))
        .respond_with(fasta)
        .mount(&server)
        .await;

    server
}

fn unifetch(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("unifetch").unwrap();
    cmd.env_remove("UNIFETCH_API_TIMEOUT_SECS")
        .env("NO_COLOR", "1")
        .arg("--base-url")
        .arg(server.uri());
    cmd
}

// ============================================================================
// fetch
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_compact_format() {
    let server = mock_upstream(200, Some(">sp|P12345|TEST\nMVHL\nTPEEK\n")).await;

    unifetch(&server)
        .args(["fetch", "P12345", "--format", "compact"])
        .assert()
        .success()
        .stdout("P12345\tP12345\tHemoglobin\tHomo sapiens\tMVHLTPEEK\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_table_format_absent_sequence() {
    let server = mock_upstream(200, None).await;

    unifetch(&server)
        .args(["fetch", "P12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Protein Name"))
        .stdout(predicate::str::contains("Hemoglobin"))
        .stdout(predicate::str::contains("N/A"))
        .stdout(predicate::str::contains("UniProt data for accession ID: P12345"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_json_format() {
    let server = mock_upstream(200, None).await;

    let output = unifetch(&server)
        .args(["fetch", "P12345", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["accession"], "P12345");
    assert_eq!(value["species"], "Homo sapiens");
    assert!(value["sequence"].is_null());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_not_found_fails() {
    let server = mock_upstream(404, None).await;

    unifetch(&server)
        .args(["fetch", "P12345"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to fetch UniProt data for 'P12345'"))
        .stderr(predicate::str::contains("status: 404"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_unknown_format() {
    let server = mock_upstream(200, None).await;

    unifetch(&server)
        .args(["fetch", "P12345", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

// ============================================================================
// export
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_export_default_file() {
    let server = mock_upstream(200, Some(">sp|P12345|TEST\nMVHLTPEEK\n")).await;
    let dir = TempDir::new().unwrap();

    unifetch(&server)
        .current_dir(dir.path())
        .args(["export", "P12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    let content = fs::read_to_string(dir.path().join("uniprot_data.csv")).unwrap();
    assert_eq!(
        content,
        "Accession,Gene Name,Protein Name,Species,Sequence\n\
         P12345,P12345,Hemoglobin,Homo sapiens,MVHLTPEEK\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_absent_sequence_to_stdout() {
    let server = mock_upstream(200, None).await;

    unifetch(&server)
        .args(["export", "P12345", "--output", "-"])
        .assert()
        .success()
        .stdout(
            "Accession,Gene Name,Protein Name,Species,Sequence\n\
             P12345,P12345,Hemoglobin,Homo sapiens,\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_record_failure_writes_nothing() {
    let server = mock_upstream(500, Some(">sp|P12345|TEST\nMVHLTPEEK\n")).await;
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.csv");

    unifetch(&server)
        .args(["export", "P12345", "-o"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("status: 500"));

    assert!(!out.exists());
}

// ============================================================================
// config
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_config_get_base_url() {
    let server = MockServer::start().await;

    unifetch(&server)
        .args(["config", "get", "base_url"])
        .assert()
        .success()
        .stdout(format!("{}\n", server.uri()));
}
