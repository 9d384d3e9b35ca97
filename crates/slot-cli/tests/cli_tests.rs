//! Integration tests for the `slot` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the check,
//! optimal, and analyze subcommands through the actual binary, including
//! stdin piping, file input, policy flags, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the slots.json fixture.
fn slots_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/slots.json")
}

/// Helper: read the slots.json fixture as a string.
fn slots_json() -> String {
    std::fs::read_to_string(slots_json_path()).expect("slots.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_detects_conflict_near_reserved_slot() {
    Command::cargo_bin("slot")
        .unwrap()
        .args(["check", "--time", "2025-06-19 13:30", "-i", slots_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""hasConflict":true"#));
}

#[test]
fn check_clear_time_reports_no_conflict() {
    Command::cargo_bin("slot")
        .unwrap()
        .args(["check", "--time", "2025-06-19 16:00", "-i", slots_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""hasConflict":false"#))
        .stdout(predicate::str::contains("No conflict"));
}

#[test]
fn check_reads_slots_from_stdin() {
    Command::cargo_bin("slot")
        .unwrap()
        .args(["check", "--time", "2025-06-19 13:30"])
        .write_stdin(slots_json())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""hasConflict":true"#));
}

#[test]
fn check_honors_min_gap_flag() {
    // 14:00 is exactly one hour after the reserved 13:00 start: fine at the
    // default gap, too close under a 120-minute policy.
    Command::cargo_bin("slot")
        .unwrap()
        .args(["check", "--time", "2025-06-19 14:00", "-i", slots_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""hasConflict":false"#));

    Command::cargo_bin("slot")
        .unwrap()
        .args([
            "check",
            "--time",
            "2025-06-19 14:00",
            "-i",
            slots_json_path(),
            "--min-gap",
            "120",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""hasConflict":true"#));
}

#[test]
fn check_rejects_malformed_time() {
    Command::cargo_bin("slot")
        .unwrap()
        .args(["check", "--time", "invalid-time", "-i", slots_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn check_rejects_malformed_slot_file() {
    Command::cargo_bin("slot")
        .unwrap()
        .args(["check", "--time", "2025-06-19 13:30"])
        .write_stdin(r#"{"not":"an array"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Optimal subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn optimal_reports_widest_open_gap() {
    // Eligible pairs in the fixture are (10:00, 11:00) and (14:00, 15:00),
    // both 60 minutes; the first wins.
    Command::cargo_bin("slot")
        .unwrap()
        .args(["optimal", "-i", slots_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""gapMinutes":60"#))
        .stdout(predicate::str::contains("Optimal slot calculated"));
}

#[test]
fn optimal_on_empty_list_prints_sentinel() {
    Command::cargo_bin("slot")
        .unwrap()
        .arg("optimal")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""gapMinutes":0"#))
        .stdout(predicate::str::contains("No qualifying gap found"));
}

#[test]
fn optimal_output_is_valid_json() {
    let output = Command::cargo_bin("slot")
        .unwrap()
        .args(["optimal", "-i", slots_json_path()])
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(parsed["optimal"]["optimalTimeStamp"].is_i64());
    assert_eq!(parsed["optimal"]["gapMinutes"], 60);
}

// ─────────────────────────────────────────────────────────────────────────────
// Analyze subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn analyze_prints_identifier_length() {
    Command::cargo_bin("slot")
        .unwrap()
        .args(["analyze", "slot-001"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn analyze_empty_identifier_is_zero() {
    Command::cargo_bin("slot")
        .unwrap()
        .args(["analyze", ""])
        .assert()
        .success()
        .stdout("0\n");
}
