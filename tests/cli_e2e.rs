//! End-to-end CLI tests for chatcompress.
//!
//! These tests run the actual binary inside a temporary directory and check
//! the files it leaves behind.
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

const REFERENCE: &str = r#"{"requests":[{"message":{"text":"hi"}},{"message":{"text":""}},{"message":{}},{"message":{"text":"bye"}}]}"#;

/// Creates a temporary directory holding `chat.json`.
fn setup_fixture() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("chat.json"), REFERENCE).unwrap();
    dir
}

fn chatcompress(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chatcompress").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

// ============================================================================
// Default invocation
// ============================================================================

#[test]
fn test_no_arguments_uses_default_paths() {
    let dir = setup_fixture();

    chatcompress(&dir).assert().success();

    let output = fs::read_to_string(dir.path().join("chat_compressed.json")).unwrap();
    assert_eq!(output, "[\n  \"hi\",\n  \"bye\"\n]\n");
    assert!(dir.path().join("chat.json").exists());
}

#[test]
fn test_no_arguments_prints_nothing() {
    let dir = setup_fixture();

    chatcompress(&dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert!(dir.path().join("chat_compressed.json").exists());
}

#[test]
fn test_verbose_prints_report() {
    let dir = setup_fixture();

    chatcompress(&dir)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("chatcompress v"))
        .stdout(predicate::str::contains("Found 2 messages in 4 requests"))
        .stdout(predicate::str::contains("Done!"));
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_custom_input_and_output() {
    let dir = setup_fixture();
    fs::rename(dir.path().join("chat.json"), dir.path().join("export.json")).unwrap();

    chatcompress(&dir)
        .args(["export.json", "-o", "messages.json"])
        .assert()
        .success();

    let decoded: Vec<String> =
        serde_json::from_str(&fs::read_to_string(dir.path().join("messages.json")).unwrap())
            .unwrap();
    assert_eq!(decoded, vec!["hi", "bye"]);
}

#[test]
fn test_jsonl_format() {
    let dir = setup_fixture();

    chatcompress(&dir)
        .args(["--format", "jsonl"])
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("chat_compressed.json")).unwrap();
    assert_eq!(output, "\"hi\"\n\"bye\"\n");
    assert!(dir.path().join("chat.json").exists());
}

#[test]
fn test_format_follows_output_extension() {
    let dir = setup_fixture();

    chatcompress(&dir)
        .args(["-o", "messages.jsonl"])
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("messages.jsonl")).unwrap();
    assert_eq!(output, "\"hi\"\n\"bye\"\n");
}

#[test]
fn test_non_ascii_written_as_escapes() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("chat.json"),
        r#"{"requests":[{"message":{"text":"héllo 🎉"}}]}"#,
    )
    .unwrap();

    chatcompress(&dir).assert().success();

    let output = fs::read_to_string(dir.path().join("chat_compressed.json")).unwrap();
    assert_eq!(output, "[\n  \"h\\u00e9llo \\ud83c\\udf89\"\n]\n");
}

#[test]
fn test_delete_input_removes_source() {
    let dir = setup_fixture();

    chatcompress(&dir)
        .args(["-f", "jsonl", "--delete-input", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted chat.json"));

    assert!(!dir.path().join("chat.json").exists());
    assert!(dir.path().join("chat_compressed.json").exists());
}

#[test]
fn test_help_lists_flags() {
    let dir = setup_fixture();

    chatcompress(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--delete-input"))
        .stdout(predicate::str::contains("--format"));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();

    chatcompress(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("chat.json"));

    assert!(!dir.path().join("chat_compressed.json").exists());
}

#[test]
fn test_malformed_json_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("chat.json"), "{ this is not json").unwrap();

    chatcompress(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_same_input_and_output_with_delete_is_rejected() {
    let dir = setup_fixture();

    chatcompress(&dir)
        .args(["chat.json", "-o", "chat.json", "--delete-input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));

    assert_eq!(
        fs::read_to_string(dir.path().join("chat.json")).unwrap(),
        REFERENCE
    );
}

#[test]
fn test_unknown_format_rejected() {
    let dir = setup_fixture();

    chatcompress(&dir).args(["--format", "csv"]).assert().failure();
}

#[test]
fn test_unknown_output_extension_needs_format() {
    let dir = setup_fixture();

    chatcompress(&dir)
        .args(["-o", "messages.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));

    assert!(!dir.path().join("messages.txt").exists());
    assert!(dir.path().join("chat.json").exists());
}
