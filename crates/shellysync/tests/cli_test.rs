//! Integration tests for the `shellysync` binary.
//!
//! These tests validate argument parsing, help output, and the failure
//! paths that never open an RPC channel — all without a live device.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `shellysync` binary with env isolation.
fn shellysync_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("shellysync");
    cmd.env_remove("SHELLYSYNC_TIMEOUT")
        .env_remove("SHELLYSYNC_OUTPUT");
    cmd.arg("--color").arg("never");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn no_args_shows_help() {
    let output = shellysync_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn help_lists_resource_commands() {
    shellysync_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("identity")
            .and(predicate::str::contains("input"))
            .and(predicate::str::contains("switch"))
            .and(predicate::str::contains("device")),
    );
}

#[test]
fn version_flag() {
    shellysync_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shellysync"));
}

// ── Import identifier validation (no RPC traffic) ───────────────────

#[test]
fn input_import_rejects_bare_address() {
    shellysync_cmd()
        .args(["input", "import", "10.0.0.5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid import ID format"));
}

#[test]
fn switch_import_rejects_non_numeric_index() {
    shellysync_cmd()
        .args(["switch", "import", "10.0.0.5:zzz"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid switch ID"));
}

#[test]
fn identity_import_rejects_composite_id() {
    shellysync_cmd()
        .args(["identity", "import", "10.0.0.5:0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid import ID format"));
}

// ── Write preconditions (no RPC traffic) ────────────────────────────

#[test]
fn identity_set_requires_a_name() {
    shellysync_cmd()
        .args(["identity", "set", "192.0.2.1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid Name"));
}

#[test]
fn identity_set_rejects_cleared_name_before_rpc() {
    shellysync_cmd()
        .args(["identity", "set", "192.0.2.1", "--clear-name"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid Name"));
}

#[test]
fn identity_set_name_and_clear_name_conflict() {
    shellysync_cmd()
        .args(["identity", "set", "192.0.2.1", "--name", "x", "--clear-name"])
        .assert()
        .code(2);
}

// ── Enum flag validation ────────────────────────────────────────────

#[test]
fn input_set_rejects_unknown_type() {
    shellysync_cmd()
        .args(["input", "set", "192.0.2.1", "--type", "dimmer"])
        .assert()
        .code(2)
        .stderr(
            predicate::str::contains("dimmer").and(predicate::str::contains("switch")),
        );
}

#[test]
fn switch_set_rejects_unknown_initial_state() {
    shellysync_cmd()
        .args(["switch", "set", "192.0.2.1", "--initial-state", "sideways"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("restore_last"));
}
