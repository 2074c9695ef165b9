//! CLI integration tests
//!
//! End-to-end tests for the lizzycalc binary using assert_cmd.

mod common;

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{MockServer, ResponseTemplate};

/// Get the lizzycalc binary, isolated from the caller's config and env
fn lizzycalc_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lizzycalc").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("LIZZYCALC_URL")
        .env_remove("LIZZYCALC_TIMEOUT")
        .env_remove("LIZZYCALC_AUTO_REFRESH")
        .env_remove("LIZZYCALC_LOG_LEVEL")
        .env_remove("LIZZYCALC_LOG_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

/// Run a blocking command without stalling the mock server's runtime
async fn run(mut cmd: Command) -> assert_cmd::assert::Assert {
    let output = tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap();
    output.assert()
}

#[test]
fn test_version_output() {
    let dir = TempDir::new().unwrap();
    lizzycalc_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lizzycalc"));
}

#[test]
fn test_help_shows_all_commands() {
    let dir = TempDir::new().unwrap();
    lizzycalc_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_calc_validation_error_without_network() {
    let dir = TempDir::new().unwrap();
    lizzycalc_cmd(&dir)
        .args(["--url", "http://127.0.0.1:1", "calc", "abc", "+", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Enter numbers"));
}

#[test]
fn test_calc_unknown_operation_rejected() {
    let dir = TempDir::new().unwrap();
    lizzycalc_cmd(&dir)
        .args(["calc", "2", "%", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid operation"));
}

#[test]
fn test_invalid_url_rejected() {
    let dir = TempDir::new().unwrap();
    lizzycalc_cmd(&dir)
        .args(["--url", "calc.local", "calc", "2", "+", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("client.base_url"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_calc_success() {
    let server = MockServer::start().await;
    mount_calculate(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"result": 5})),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let url = server.uri();
    let mut cmd = lizzycalc_cmd(&dir);
    cmd.args(["--url", url.as_str(), "calc", "2", "+", "3"]);

    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("= 5"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_calc_backend_error() {
    let server = MockServer::start().await;
    mount_calculate(
        &server,
        ResponseTemplate::new(400).set_body_json(json!({"message": "division by zero"})),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let mut cmd = lizzycalc_cmd(&dir);
    cmd.env("LIZZYCALC_URL", server.uri())
        .args(["calc", "1", "/", "0"]);

    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn test_calc_service_unavailable() {
    let dir = TempDir::new().unwrap();
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{}", port);
    lizzycalc_cmd(&dir)
        .args(["--url", url.as_str(), "calc", "1", "+", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Server unavailable"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_history_json_uses_config_file() {
    let server = MockServer::start().await;
    mount_history(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"items": [history_json(1, 2.0, "+", 3.0, 5.0)]})),
    )
    .await;

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("lizzycalc.toml"),
        format!("[client]\nbase_url = \"{}\"\n", server.uri()),
    )
    .unwrap();
    let mut cmd = lizzycalc_cmd(&dir);
    cmd.args(["history", "--json"]);

    let assert = run(cmd).await.success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["items"][0]["result"], 5.0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_session_reads_stdin() {
    let server = MockServer::start().await;
    mount_calculate(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"result": 12})),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let url = server.uri();
    let mut cmd = lizzycalc_cmd(&dir);
    cmd.args(["--url", url.as_str(), "session"])
        .write_stdin("3 x 4\nquit\n");

    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("= 12"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("lizzycalc.toml");

    lizzycalc_cmd(&dir)
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .success();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[client]"));
}

#[test]
fn test_config_init_no_overwrite() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("lizzycalc.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    lizzycalc_cmd(&dir)
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, "existing content");
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    lizzycalc_cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lizzycalc"));
}
