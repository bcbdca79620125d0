//! CLI end-to-end tests against the simulated device.
//!
//! Validates:
//! - A threshold-bounded run writes a well-formed LUT file and exits 0
//! - `-v` caps the number of entries kept in the file
//! - A zero-minute session writes the bare prefix
//! - Append mode merges an existing file and keeps overwritten keys out
//! - A malformed existing file aborts with the parse exit code, file untouched
//! - Connection failures exit with the connection code and write nothing

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

const PREFIX: &str = "cal,temp_lut=";

/// Get a Command for the templut binary.
fn templut() -> Command {
    let mut cmd = cargo_bin_cmd!("templut");
    cmd.timeout(Duration::from_secs(60));
    cmd
}

/// Split the file body into (key, values) groups.
fn groups(content: &str) -> Vec<Vec<f64>> {
    let body = content.strip_prefix(PREFIX).expect("prefix must be present");
    if body.is_empty() {
        return Vec::new();
    }
    let tokens: Vec<f64> = body
        .split(',')
        .map(|token| token.parse().expect("numeric token"))
        .collect();
    assert_eq!(tokens.len() % 9, 0, "token stream must group into 9s");
    tokens.chunks(9).map(|chunk| chunk.to_vec()).collect()
}

#[test]
fn threshold_run_writes_a_well_formed_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("lut.ini");

    templut()
        .args(["sim:7", "-t", "36", "-f", out.to_str().unwrap()])
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("Connection established"))
        .stdout(predicate::str::contains("written to the file"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(!content.ends_with(','));

    let entries = groups(&content);
    assert!(!entries.is_empty(), "a warming board must produce entries");
    for pair in entries.windows(2) {
        assert!(pair[0][0] < pair[1][0], "keys must be sorted ascending");
    }
    for entry in &entries {
        assert!(entry[0] < 36.0, "no key at or above the threshold");
    }
}

#[test]
fn values_option_caps_the_output_entries() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("lut.ini");

    templut()
        .args(["sim:11", "-t", "36", "-v", "5", "-f", out.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(groups(&content).len(), 5);
}

#[test]
fn zero_minute_session_writes_the_bare_prefix() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("lut.ini");

    templut()
        .args(["sim", "-T", "0", "-f", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), PREFIX);
}

#[test]
fn append_mode_merges_the_existing_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("lut.ini");
    fs::write(&out, "cal,temp_lut=10,1,2,3,4,5,6,7,8").unwrap();

    templut()
        .args(["sim:3", "-t", "36", "-a", "-f", out.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let entries = groups(&content);
    assert!(entries.len() > 1, "sampling must add to the seeded table");

    // Key 10 sorts below every simulated temperature.
    assert_eq!(entries[0], vec![10.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
}

#[test]
fn append_mode_creates_a_missing_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("fresh.ini");

    templut()
        .args(["sim", "-T", "0", "-a", "-f", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), PREFIX);
}

#[test]
fn malformed_append_file_aborts_without_touching_it() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("lut.ini");
    let malformed = "cal,temp_lut=10,1,2";
    fs::write(&out, malformed).unwrap();

    templut()
        .args(["sim", "-t", "36", "-a", "-f", out.to_str().unwrap()])
        .assert()
        .failure()
        .code(11)
        .stderr(predicate::str::contains("malformed table file"));

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        malformed,
        "a failed parse must never rewrite the file"
    );
}

#[test]
fn hardware_locator_without_driver_exits_with_connection_code() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("lut.ini");

    templut()
        .args(["ip:192.168.2.1", "-f", out.to_str().unwrap()])
        .assert()
        .failure()
        .code(10)
        .stderr(predicate::str::contains("error"));

    assert!(!out.exists(), "no file may be written on connection failure");
}

#[test]
fn auto_discovery_without_a_device_exits_with_connection_code() {
    templut().args(["auto"]).assert().failure().code(10);
}

#[test]
fn invalid_locator_exits_with_connection_code() {
    templut()
        .args(["bogus"])
        .assert()
        .failure()
        .code(10)
        .stderr(predicate::str::contains("invalid device uri"));
}
