//! Integration tests for validate-dataset
//!
//! Runs the CLI dispatcher end to end against a wiremock stand-in for the
//! SHACL validator:
//! - verdict rendering and exit codes for each result tag
//! - request payload and endpoint routing per profile
//! - missing files and invalid choices never reach the network
//! - transport failures end the run cleanly with exit code 1

use clap::Parser;
use proptest::prelude::*;
use serde_json::json;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use validate_dataset::{run_cli, DatasetCli, ExitCode, ValidationRequest, ValidationType};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const METADATA: &str = r#"@prefix dcat: <http://www.w3.org/ns/dcat#> .
@prefix dct: <http://purl.org/dc/terms/> .

<https://example.org/dataset/1> a dcat:Dataset ;
    dct:title "Example cohort"@en .
"#;

/// Output captured from one CLI run
struct RunOutput {
    code: ExitCode,
    stdout: String,
    stderr: String,
}

/// Helper to write a metadata fixture
fn metadata_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Helper to run the CLI with captured output
async fn run(args: &[&str]) -> RunOutput {
    colored::control::set_override(false);
    let mut argv = vec!["validate-dataset"];
    argv.extend_from_slice(args);
    let cli = DatasetCli::try_parse_from(argv).unwrap();

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run_cli(cli, &mut stdout, &mut stderr).await;
    RunOutput {
        code,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

async fn run_validate(server: &MockServer, file: &Path, extra: &[&str]) -> RunOutput {
    let endpoint = server.uri();
    let file = file.to_str().unwrap();
    let mut args = vec!["validate", file, "--endpoint", endpoint.as_str()];
    args.extend_from_slice(extra);
    run(&args).await
}

fn numbered_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            line.starts_with("  ")
                && trimmed
                    .split_once(". ")
                    .is_some_and(|(n, _)| n.parse::<usize>().is_ok())
        })
        .collect()
}

#[tokio::test]
async fn test_success_exits_zero() {
    let server = MockServer::start().await;
    let file = metadata_file(METADATA);

    Mock::given(method("POST"))
        .and(path("/healthri/api/validate"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({
            "contentToValidate": METADATA,
            "contentSyntax": "text/turtle",
            "validationType": "v2.0.0"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "SUCCESS"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_validate(&server, file.path(), &[]).await;

    assert_eq!(output.code, ExitCode::Success);
    assert!(output.stdout.contains("🔍 Validating dataset metadata..."));
    assert!(output.stdout.contains("Profile: healthri/v2.0.0"));
    assert!(output.stdout.contains("✅ Validation passed!"));
    assert!(output.stderr.is_empty());
}

#[tokio::test]
async fn test_failure_lists_each_error_in_order() {
    let server = MockServer::start().await;
    let file = metadata_file(METADATA);

    Mock::given(method("POST"))
        .and(path("/healthri/api/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "FAILURE",
            "reports": {"error": [{"msg": "bad"}, {"msg": "worse"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_validate(&server, file.path(), &[]).await;

    assert_eq!(output.code, ExitCode::Failure);
    assert!(output.stdout.contains("❌ Validation failed."));
    assert!(output.stdout.contains("🔧 Issues found:"));
    assert_eq!(
        numbered_lines(&output.stdout),
        vec![r#"  1. {"msg":"bad"}"#, r#"  2. {"msg":"worse"}"#]
    );
}

#[tokio::test]
async fn test_failure_without_error_list() {
    let server = MockServer::start().await;
    let file = metadata_file(METADATA);

    Mock::given(method("POST"))
        .and(path("/healthri/api/validate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result": "FAILURE", "reports": {}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = run_validate(&server, file.path(), &[]).await;

    assert_eq!(output.code, ExitCode::Failure);
    assert!(output.stdout.contains("❌ Validation failed."));
    assert!(numbered_lines(&output.stdout).is_empty());
}

#[tokio::test]
async fn test_unexpected_result_dumps_body() {
    let server = MockServer::start().await;
    let file = metadata_file(METADATA);

    Mock::given(method("POST"))
        .and(path("/healthri/api/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":"MAYBE"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_validate(&server, file.path(), &[]).await;

    assert_eq!(output.code, ExitCode::Failure);
    assert!(output
        .stdout
        .contains("⚠️  Validation completed with unexpected result."));
    assert!(output.stdout.contains(r#"Response: {"result":"MAYBE"}"#));
}

#[tokio::test]
async fn test_profile_selects_endpoint_and_type() {
    let server = MockServer::start().await;
    let file = metadata_file(METADATA);

    Mock::given(method("POST"))
        .and(path("/dcat-ap/api/validate"))
        .and(body_json(json!({
            "contentToValidate": METADATA,
            "contentSyntax": "text/turtle",
            "validationType": "v3.0.1.Full1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "SUCCESS"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_validate(
        &server,
        file.path(),
        &["--domain", "dcat-ap", "--type", "v3.0.1.Full1"],
    )
    .await;

    assert_eq!(output.code, ExitCode::Success);
    assert!(output.stdout.contains("Profile: dcat-ap/v3.0.1.Full1"));
}

#[tokio::test]
async fn test_missing_file_makes_no_request() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.ttl");

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "SUCCESS"})))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_validate(&server, &missing, &[]).await;

    assert_eq!(output.code, ExitCode::Failure);
    let lines: Vec<&str> = output.stdout.lines().collect();
    assert!(lines[0].starts_with("🔍 Validating dataset metadata"));
    assert_eq!(
        lines.last().copied(),
        Some(format!("File not found: {}", missing.display()).as_str())
    );
    assert!(output.stderr.is_empty());
    assert!(!output.stdout.contains("Validation passed"));
}

#[tokio::test]
async fn test_invalid_choice_rejected_before_request() {
    let server = MockServer::start().await;
    let file = metadata_file(METADATA);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "SUCCESS"})))
        .expect(0)
        .mount(&server)
        .await;

    let endpoint = server.uri();
    for (flag, value) in [("--type", "v4.0.0"), ("--domain", "nl-dcat")] {
        let result = DatasetCli::try_parse_from([
            "validate-dataset",
            "validate",
            file.path().to_str().unwrap(),
            "--endpoint",
            endpoint.as_str(),
            flag,
            value,
        ]);
        assert!(result.is_err());
    }
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let server = MockServer::start().await;
    let file = metadata_file(METADATA);

    Mock::given(method("POST"))
        .and(path("/healthri/api/validate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_validate(&server, file.path(), &[]).await;

    assert_eq!(output.code, ExitCode::Failure);
    assert!(output.stderr.contains("Could not reach validation service"));
    assert!(output.stderr.contains("500"));
}

#[tokio::test]
async fn test_unreachable_service_is_reported() {
    let file = metadata_file(METADATA);
    let server = MockServer::start().await;
    let endpoint = server.uri();
    drop(server);

    let output = run(&[
        "validate",
        file.path().to_str().unwrap(),
        "--endpoint",
        endpoint.as_str(),
        "--timeout",
        "5",
    ])
    .await;

    assert_eq!(output.code, ExitCode::Failure);
    assert!(output.stderr.contains("Could not reach validation service"));
}

#[tokio::test]
async fn test_non_json_response_is_reported() {
    let server = MockServer::start().await;
    let file = metadata_file(METADATA);

    Mock::given(method("POST"))
        .and(path("/healthri/api/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_validate(&server, file.path(), &[]).await;

    assert_eq!(output.code, ExitCode::Failure);
    assert!(output
        .stderr
        .contains("Invalid response from validation service"));
}

#[tokio::test]
async fn test_info_lists_profiles() {
    let output = run(&["info"]).await;

    assert_eq!(output.code, ExitCode::Success);
    for name in ["healthri", "dcat-ap", "v2.0.0", "v3.Full1", "v3.0.1.Full1"] {
        assert!(output.stdout.contains(name), "missing {name}");
    }
}

fn validation_type() -> impl Strategy<Value = ValidationType> {
    prop::sample::select(ValidationType::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_request_carries_content_and_type_verbatim(
        content in any::<String>(),
        validation_type in validation_type(),
    ) {
        let request = ValidationRequest::new(content.clone(), validation_type);
        let json = serde_json::to_value(&request).unwrap();

        prop_assert_eq!(json["contentToValidate"].as_str(), Some(content.as_str()));
        prop_assert_eq!(json["validationType"].as_str(), Some(validation_type.as_str()));
        prop_assert_eq!(json["contentSyntax"].as_str(), Some("text/turtle"));
    }
}
