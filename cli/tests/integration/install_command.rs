//! `agentos install` against real shell scripts.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::sandbox::CliSandbox;

/// `base.sh` that records its arguments, writes a config, and publishes
/// `project.sh` into the base like the real script does.
fn base_script(sandbox: &CliSandbox) {
    sandbox.script(
        "base.sh",
        r#"printf '%s\n' "$@" > "$HOME/base.args"
mkdir -p "$HOME/.agent-os/setup"
cat > "$HOME/.agent-os/config.yml" <<'YAML'
version: 1.4.3
agents:
  claude_code:
    enabled: true
project_types:
  default:
    instructions: ~/.agent-os/instructions
    standards: ~/.agent-os/standards
YAML
cp "$(dirname "$0")/project.sh" "$HOME/.agent-os/setup/project.sh"
echo "base installed""#,
    );
}

fn project_script(sandbox: &CliSandbox) {
    sandbox.script(
        "project.sh",
        r#"printf '%s\n' "$@" > "$HOME/project.args"
mkdir -p .agent-os .claude"#,
    );
}

#[test]
fn test_missing_scripts_exit_one() {
    CliSandbox::new()
        .agentos()
        .arg("install")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("base.sh"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_base_install_without_terminal_skips_project() {
    let sandbox = CliSandbox::new();
    base_script(&sandbox);
    project_script(&sandbox);

    let output = sandbox
        .agentos()
        .args(["install", "--claude-code", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["installed"], true);
    assert_eq!(value["location"], "base");
    assert_eq!(value["project"], false);
    assert_eq!(value["status"]["base_version"], "1.4.3");
    assert_eq!(sandbox.read(sandbox.home.join("base.args")), "--claude-code\n");
    assert!(!sandbox.project.join(".agent-os").exists());
}

#[test]
fn test_base_install_with_yes_also_installs_project() {
    let sandbox = CliSandbox::new();
    base_script(&sandbox);
    project_script(&sandbox);

    sandbox
        .agentos()
        .args(["install", "--yes", "--claude-code", "--project-type", "rails_app"])
        .assert()
        .success();

    assert!(sandbox.project.join(".agent-os").is_dir());
    assert_eq!(
        sandbox.read(sandbox.home.join("project.args")),
        "--claude-code\n--project-type=rails_app\n"
    );
}

#[test]
fn test_project_install_without_base_passes_no_base() {
    let sandbox = CliSandbox::new();
    project_script(&sandbox);

    sandbox
        .agentos()
        .args(["install", "--project", "--cursor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("without a base installation"));

    assert_eq!(
        sandbox.read(sandbox.home.join("project.args")),
        "--no-base\n--cursor\n--project-type=default\n"
    );
}

#[test]
fn test_failing_script_reports_exit_code_and_stderr() {
    let sandbox = CliSandbox::new();
    sandbox.script("base.sh", "echo 'git: command not found' >&2\nexit 3");

    sandbox
        .agentos()
        .arg("install")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exit code 3"))
        .stderr(predicate::str::contains("git: command not found"));
}

#[test]
fn test_hung_script_is_killed_after_timeout() {
    let sandbox = CliSandbox::new();
    sandbox.script("base.sh", "sleep 30");

    let started = std::time::Instant::now();
    sandbox
        .agentos()
        .args(["--script-timeout", "1", "install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timed out"));
    assert!(started.elapsed() < std::time::Duration::from_secs(20));
}

#[test]
fn test_scripts_see_scrubbed_environment() {
    let sandbox = CliSandbox::new();
    sandbox.script(
        "base.sh",
        r#"echo "${AGENTOS_SECRET:-unset} $PATH" > "$HOME/env.txt""#,
    );

    sandbox
        .agentos()
        .env("AGENTOS_SECRET", "leak")
        .arg("install")
        .assert()
        .success();

    assert_eq!(
        sandbox.read(sandbox.home.join("env.txt")),
        "unset /usr/local/bin:/usr/bin:/bin\n"
    );
}
