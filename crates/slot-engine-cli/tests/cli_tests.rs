//! Integration tests for the `slots` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the compute, next,
//! and validate subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, stride configuration, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("fixture must exist")
}

/// A `slots` command isolated from the caller's environment.
fn slots() -> Command {
    let mut cmd = Command::cargo_bin("slots").unwrap();
    cmd.env_remove("SLOTS_STRIDE_MINUTES").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("command should run");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// compute
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn compute_file_to_stdout() {
    let slots = stdout_json(slots().args(["compute", "-i", fixture("request.json").as_str()]));

    // Monday 09:00-12:00, 60 minutes: the confirmed 10:00-11:00 booking blocks
    // three starts; the cancelled one and Tuesday's booking block nothing.
    assert_eq!(
        slots,
        json!([
            {"startTime": "09:00", "endTime": "10:00", "available": true},
            {"startTime": "09:30", "endTime": "10:30", "available": false},
            {"startTime": "10:00", "endTime": "11:00", "available": false},
            {"startTime": "10:30", "endTime": "11:30", "available": false},
            {"startTime": "11:00", "endTime": "12:00", "available": true}
        ])
    );
}

#[test]
fn compute_stdin_to_stdout() {
    slots()
        .arg("compute")
        .write_stdin(read_fixture("request.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"[{"startTime":"09:00""#));
}

#[test]
fn compute_file_to_file_pretty() {
    let output_path = std::env::temp_dir().join("slots-test-compute-output.json");
    let _ = std::fs::remove_file(&output_path);

    slots()
        .args(["compute", "--pretty", "-i", fixture("request.json").as_str(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.contains("\n  {"), "pretty output should be indented");
    let parsed: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(5));

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn stride_flag_overrides_default() {
    let slots = stdout_json(slots().args([
        "compute",
        "--stride",
        "60",
        "-i",
        fixture("request.json").as_str(),
    ]));

    let starts: Vec<&str> = slots
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["startTime"].as_str().unwrap())
        .collect();
    assert_eq!(starts, ["09:00", "10:00", "11:00"]);
}

#[test]
fn stride_from_environment() {
    let mut cmd = slots();
    cmd.env("SLOTS_STRIDE_MINUTES", "90")
        .args(["compute", "-i", fixture("request.json").as_str()]);

    let slots = stdout_json(&mut cmd);

    // 09:00 and 10:30 starts; 12:00 + 60 would pass closing time.
    assert_eq!(slots.as_array().map(Vec::len), Some(2));
}

#[test]
fn zero_duration_fails_with_reason() {
    let mut request: Value = serde_json::from_str(&read_fixture("request.json")).unwrap();
    request["serviceDurationMinutes"] = json!(0);

    slots()
        .arg("compute")
        .write_stdin(request.to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to compute slots"))
        .stderr(predicate::str::contains("Invalid service duration: 0 minutes"));
}

#[test]
fn closed_day_prints_empty_array() {
    let mut request: Value = serde_json::from_str(&read_fixture("request.json")).unwrap();
    request["date"] = json!("2026-03-15"); // Sunday

    slots()
        .arg("compute")
        .write_stdin(request.to_string())
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn invalid_json_fails() {
    slots()
        .arg("compute")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse slot request"));
}

#[test]
fn missing_input_file_fails() {
    slots()
        .args(["compute", "-i", "/nonexistent/request.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn unwritable_output_path_fails() {
    slots()
        .args([
            "compute",
            "-i",
            fixture("request.json").as_str(),
            "-o",
            "/nonexistent/dir/slots.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to write file: /nonexistent/dir/slots.json",
        ));
}

// ─────────────────────────────────────────────────────────────────────────────
// next
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn next_returns_first_available() {
    let next = stdout_json(slots().args(["next", "-i", fixture("request.json").as_str()]));

    assert_eq!(
        next,
        json!({"startTime": "09:00", "endTime": "10:00", "available": true})
    );
}

#[test]
fn next_returns_null_when_fully_booked() {
    let mut request: Value = serde_json::from_str(&read_fixture("request.json")).unwrap();
    request["bookings"] = json!([{"startTime": "09:00", "endTime": "12:00"}]);

    slots()
        .arg("next")
        .write_stdin(request.to_string())
        .assert()
        .success()
        .stdout("null\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// validate
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validate_accepts_good_hours() {
    slots()
        .args(["validate", "-i", fixture("hours.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 6 open day(s)"));
}

#[test]
fn validate_rejects_overnight_hours() {
    slots()
        .args(["validate", "-i", fixture("overnight_hours.json").as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid operating hours"))
        .stderr(predicate::str::contains("friday"));
}

#[test]
fn validate_rejects_missing_day() {
    slots()
        .arg("validate")
        .write_stdin(r#"{"monday": {"isOpen": false}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no entry for tuesday"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn verbose_logs_go_to_stderr() {
    slots()
        .args(["-v", "compute", "-i", fixture("request.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stderr(predicate::str::contains("computed slots"));
}

#[test]
fn help_lists_subcommands() {
    slots()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compute"))
        .stdout(predicate::str::contains("next"))
        .stdout(predicate::str::contains("validate"));
}
