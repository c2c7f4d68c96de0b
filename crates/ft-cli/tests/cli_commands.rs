//! Integration tests for the `fortune` CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a small set of fortune tables.
fn test_data() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mapping_double.json"),
        r#"[
    {"Number": 42, "SingedIdentifier": "X"},
    {"Number": 7}
]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("mapping_single.json"),
        r#"[
    {"Number": 5, "SignedIdentifier": "S"},
    {"Number": 1234, "SignedIdentifier": "S"}
]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("solutions.json"),
        r#"[
    {"Identifier": "X", "zhHant": "您的得分為90分", "en": "Your fortune score is 90分"},
    {"Identifier": "S", "zhHant": "平穩之象，得分60分", "en": ""}
]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("levels.json"),
        r#"[
    {"Identifier": "X", "zhHant": "上上籤", "en": "Excellent"},
    {"Identifier": "S", "zhHant": "中籤", "en": "Average"}
]"#,
    )
    .unwrap();
    dir
}

fn fortune() -> Command {
    let mut cmd = Command::cargo_bin("fortune").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn data_arg(dir: &TempDir) -> String {
    dir.path().to_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// reveal
// ---------------------------------------------------------------------------

#[test]
fn reveal_double_number() {
    let dir = test_data();
    fortune()
        .args(["reveal", "42", "--instant", "-d", &data_arg(&dir)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("#0042")
                .and(predicate::str::contains("上上籤"))
                .and(predicate::str::contains("您的得分為90分"))
                .and(predicate::str::contains("運勢評分")),
        );
}

#[test]
fn reveal_in_english() {
    let dir = test_data();
    fortune()
        .args(["reveal", "42", "--instant", "--lang", "en", "-d", &data_arg(&dir)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Excellent")
                .and(predicate::str::contains("Fortune Score"))
                .and(predicate::str::contains("90")),
        );
}

#[test]
fn reveal_single_number_falls_back_to_chinese_text() {
    let dir = test_data();
    fortune()
        .args(["reveal", "1234", "--instant", "--lang", "en", "-d", &data_arg(&dir)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("#1234")
                .and(predicate::str::contains("Average"))
                .and(predicate::str::contains("平穩之象，得分60分")),
        );
}

#[test]
fn reveal_json() {
    let dir = test_data();
    let output = fortune()
        .args(["reveal", "42", "--json", "-d", &data_arg(&dir)])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["number"], 42);
    assert_eq!(json["display_number"], "#0042");
    assert_eq!(json["identifier"], "X");
    assert_eq!(json["mapping"], "double");
    assert_eq!(json["language"], "zh");
    assert_eq!(json["level_label"], "上上籤");
    assert_eq!(json["score"], 90);
}

#[test]
fn reveal_lenient_input() {
    let dir = test_data();
    fortune()
        .args(["reveal", "42abc", "--json", "-d", &data_arg(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"number\": 42"));
}

#[test]
fn reveal_out_of_range_fails() {
    let dir = test_data();
    fortune()
        .args(["reveal", "10000", "--instant", "-d", &data_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Number out of range (0-9999)"));
}

#[test]
fn reveal_small_number_ignores_single_mapping() {
    let dir = test_data();
    fortune()
        .args(["reveal", "5", "--instant", "-d", &data_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Number out of range (0-9999)"));
}

#[test]
fn reveal_entry_without_identifier_fails() {
    let dir = test_data();
    fortune()
        .args(["reveal", "7", "--instant", "-d", &data_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Number out of range (0-9999)"));
}

#[test]
fn reveal_not_a_number_fails() {
    let dir = test_data();
    fortune()
        .args(["reveal", "lucky", "--instant", "-d", &data_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Number out of range (0-9999)"));
}

#[test]
fn reveal_unknown_language_fails() {
    let dir = test_data();
    fortune()
        .args(["reveal", "42", "--instant", "--lang", "fr", "-d", &data_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language"));
}

#[test]
fn reveal_missing_data_fails() {
    let dir = TempDir::new().unwrap();
    fortune()
        .args(["reveal", "42", "--instant", "-d", &data_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// ---------------------------------------------------------------------------
// interactive
// ---------------------------------------------------------------------------

#[test]
fn interactive_switches_language_without_new_lookup() {
    let dir = test_data();
    fortune()
        .args(["interactive", "--instant", "-d", &data_arg(&dir)])
        .write_stdin("42\n:en\nreset\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("上上籤")
                .and(predicate::str::contains("Excellent"))
                .and(predicate::str::contains("Your fortune score is 90分"))
                .and(predicate::str::contains("cleared")),
        );
}

#[test]
fn interactive_reports_bad_numbers_and_continues() {
    let dir = test_data();
    fortune()
        .args(["interactive", "--instant", "-d", &data_arg(&dir)])
        .write_stdin("99999\n42\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Number out of range (0-9999)"))
        .stdout(predicate::str::contains("#0042"));
}

#[test]
fn interactive_unknown_command() {
    let dir = test_data();
    fortune()
        .args(["interactive", "--instant", "-d", &data_arg(&dir)])
        .write_stdin(":fr\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown command"));
}

// ---------------------------------------------------------------------------
// tables
// ---------------------------------------------------------------------------

#[test]
fn tables_summary() {
    let dir = test_data();
    fortune()
        .args(["tables", "-d", &data_arg(&dir)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("mapping_double.json")
                .and(predicate::str::contains("mapping_single.json"))
                .and(predicate::str::contains("solutions.json"))
                .and(predicate::str::contains("levels.json")),
        );
}

#[test]
fn tables_bad_json_fails() {
    let dir = test_data();
    fs::write(dir.path().join("levels.json"), "not json").unwrap();
    fortune()
        .args(["tables", "-d", &data_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

// ---------------------------------------------------------------------------
// bundled data
// ---------------------------------------------------------------------------

#[test]
fn bundled_data_covers_both_mappings() {
    let data = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data");
    for number in ["0", "99", "100", "4321", "9999"] {
        fortune()
            .args(["reveal", number, "--json", "-d", data])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"score\""));
    }
}
