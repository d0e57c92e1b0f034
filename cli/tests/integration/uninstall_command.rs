//! `agentos uninstall` end to end.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::sandbox::CliSandbox;

#[test]
fn test_project_uninstall_is_idempotent() {
    let sandbox = CliSandbox::new();
    std::fs::create_dir_all(sandbox.project.join(".agent-os").join("instructions"))
        .expect("mkdir");
    std::fs::write(sandbox.project.join(".cursorrules"), "rules").expect("write");

    sandbox
        .agentos()
        .args(["uninstall", "--project", "--yes"])
        .assert()
        .success();
    assert!(!sandbox.project.join(".agent-os").exists());
    assert!(!sandbox.project.join(".cursorrules").exists());

    sandbox
        .agentos()
        .args(["uninstall", "--project", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to remove"));
}

#[test]
fn test_uninstall_without_terminal_or_yes_keeps_files() {
    let sandbox = CliSandbox::new();
    std::fs::create_dir_all(sandbox.project.join(".agent-os")).expect("mkdir");

    sandbox
        .agentos()
        .args(["uninstall", "--project"])
        .assert()
        .success();

    assert!(sandbox.project.join(".agent-os").is_dir());
}

#[test]
fn test_full_uninstall_json_report() {
    let sandbox = CliSandbox::new();
    sandbox.write_config("version: 1.4.3\n");
    std::fs::create_dir_all(sandbox.project.join(".agent-os")).expect("mkdir");

    let output = sandbox
        .agentos()
        .args(["uninstall", "--yes", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["removed"], true);
    assert_eq!(value["project"], "removed");
    assert_eq!(value["base"], "removed");
    assert!(!sandbox.base.exists());
}
