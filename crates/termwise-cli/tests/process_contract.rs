use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::tempdir;

fn cli_bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_termwise"))
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn seed_process_contract_prints_builtin_terms() {
    let output = Command::new(cli_bin_path())
        .arg("seed")
        .output()
        .expect("run seed");

    assert_success(&output);
    let seeds: Value = serde_json::from_slice(&output.stdout).expect("seed json");
    assert_eq!(seeds.as_array().map(Vec::len), Some(16));
}

#[test]
fn search_process_contract_learns_before_searching() {
    let output = Command::new(cli_bin_path())
        .args(["search", "ma", "--learn", "mac", "--limit", "2"])
        .env_remove("TERMWISE_MAX_SUGGESTIONS")
        .output()
        .expect("run search");

    assert_success(&output);
    let outcome: Value = serde_json::from_slice(&output.stdout).expect("outcome json");
    let suggestions = outcome["suggestions"].as_array().expect("suggestions");
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0]["text"], "mac");
    assert_eq!(suggestions[0]["fresh_user_term"], true);
}

#[test]
fn search_process_contract_rejects_zero_limit() {
    let output = Command::new(cli_bin_path())
        .args(["search", "ma", "--limit", "0"])
        .output()
        .expect("run search");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--limit"));
}

#[test]
fn repl_process_contract_writes_request_log() {
    let temp = tempdir().expect("tempdir");
    let log_path = temp.path().join("requests.jsonl");

    let mut child = Command::new(cli_bin_path())
        .args([
            "repl",
            "--request-log",
            log_path.to_str().expect("log path"),
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn repl");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"react\n:select 1\n:quit\n")
        .expect("write script");
    let output = child.wait_with_output().expect("wait repl");

    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);

    let log = fs::read_to_string(&log_path).expect("read request log");
    let operations = log
        .lines()
        .map(|line| {
            let entry: Value = serde_json::from_str(line).expect("log entry");
            entry["operation"].as_str().unwrap_or_default().to_string()
        })
        .collect::<Vec<_>>();
    assert_eq!(operations, vec!["search".to_string(), "select".to_string()]);
}
