//! Install status gathering against real temp directories.

use agentos_cli::application::services::install_status::gather_status;
use agentos_cli::domain::Integration;
use agentos_cli::infra::StdFs;

use crate::helpers::{Sandbox, VALID_CONFIG};

#[test]
fn test_nothing_installed() {
    let sandbox = Sandbox::new();
    let status = gather_status(&sandbox.config, &StdFs, &sandbox.layout);

    assert!(!status.base_installed);
    assert!(status.base_path.is_none());
    assert!(!status.project_installed);
    assert!(status.project_agents.is_empty());
    assert!(status.project_type.is_none());
}

#[test]
fn test_base_and_project_installed() {
    let sandbox = Sandbox::new();
    sandbox.install_base(VALID_CONFIG);
    sandbox.install_project(&[".claude", ".cursorrules"]);

    let status = gather_status(&sandbox.config, &StdFs, &sandbox.layout);

    assert!(status.base_installed);
    assert_eq!(status.base_path.as_deref(), Some(sandbox.base.as_path()));
    assert_eq!(status.base_version.as_deref(), Some("1.4.3"));
    assert!(status.project_installed);
    assert_eq!(status.project_path, Some(sandbox.layout.project_dir()));
    assert!(status.has_agent(Integration::ClaudeCode));
    assert!(status.has_agent(Integration::Cursor));
    assert_eq!(status.project_type.as_deref(), Some("default"));
}

#[test]
fn test_malformed_config_reads_as_not_installed() {
    let sandbox = Sandbox::new();
    sandbox.install_base("version: [1.4\n  broken");
    sandbox.install_project(&[".cursor"]);

    let status = gather_status(&sandbox.config, &StdFs, &sandbox.layout);

    assert!(!status.base_installed);
    assert!(status.base_version.is_none());
    assert!(status.project_installed, "project detection is independent of the config");
    assert!(status.has_agent(Integration::Cursor));
}

#[test]
fn test_config_violating_default_project_type_reads_as_not_installed() {
    let sandbox = Sandbox::new();
    sandbox.install_base(
        "version: 1.0.0\nproject_types:\n  rails:\n    instructions: i\n    standards: s\n",
    );

    let status = gather_status(&sandbox.config, &StdFs, &sandbox.layout);

    assert!(!status.base_installed);
}

#[test]
fn test_markers_without_project_tree() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.project.join(".claude")).expect("mkdir");

    let status = gather_status(&sandbox.config, &StdFs, &sandbox.layout);

    assert!(!status.project_installed);
    assert!(status.has_agent(Integration::ClaudeCode));
}
