//! Integration tests for argument parsing, `version`, and error reporting.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::sandbox::CliSandbox;

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    CliSandbox::new()
        .agentos()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Install and manage AgentOS"));
}

#[test]
fn test_cli_help_lists_commands() {
    CliSandbox::new()
        .agentos()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("uninstall"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn test_cli_help_hides_location_overrides() {
    CliSandbox::new()
        .agentos()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--scripts-dir").not())
        .stdout(predicate::str::contains("--script-timeout").not());
}

#[test]
fn test_cli_version_flag_shows_version() {
    CliSandbox::new()
        .agentos()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("agentos"));
}

#[test]
fn test_version_command_shows_version_and_status() {
    CliSandbox::new()
        .agentos()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("Base"))
        .stdout(predicate::str::contains("Project"));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let sandbox = CliSandbox::new();
    sandbox.write_config(
        "version: 1.4.3\nproject_types:\n  default:\n    instructions: i\n    standards: s\n",
    );
    let output = sandbox
        .agentos()
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["status"]["base_installed"], true);
    assert_eq!(value["status"]["base_version"], "1.4.3");
    assert_eq!(value["status"]["project_installed"], false);
}

#[test]
fn test_version_survives_malformed_config() {
    let sandbox = CliSandbox::new();
    sandbox.write_config("version: [oops\n");
    let output = sandbox
        .agentos()
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["status"]["base_installed"], false);
}

// --- Argument validation ---

#[test]
fn test_script_timeout_out_of_range_is_usage_error() {
    CliSandbox::new()
        .agentos()
        .args(["--script-timeout", "0", "version"])
        .assert()
        .code(2);
}

#[test]
fn test_update_check_conflicts_with_project() {
    CliSandbox::new()
        .agentos()
        .args(["update", "--check", "--project"])
        .assert()
        .code(2);
}

#[test]
fn test_invalid_project_type_exits_one() {
    CliSandbox::new()
        .agentos()
        .args(["install", "--project", "--project-type", "bad type"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project type 'bad type'"));
}

#[test]
fn test_invalid_project_type_json_error_object() {
    let output = CliSandbox::new()
        .agentos()
        .args(["install", "--project-type", "../etc", "--json"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "validation_error");
}

// --- Update ---

#[test]
fn test_project_update_without_project_is_a_noop() {
    CliSandbox::new()
        .agentos()
        .args(["update", "--project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No project installation found"));
}

#[test]
fn test_full_update_on_empty_system_installs_nothing() {
    let sandbox = CliSandbox::new();
    sandbox
        .agentos()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("No AgentOS installation found"));
    assert!(!sandbox.base.exists());
}
