//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator at the command boundary.

use std::path::PathBuf;

use thiserror::Error;

// ── Configuration errors ──────────────────────────────────────────────────────

/// The persisted base configuration is unreadable, malformed, or violates an
/// invariant.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to read configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Default project type '{name}' not found in project_types (available: {available})")]
    UnknownDefaultProjectType { name: String, available: String },
}

// ── Installation errors ───────────────────────────────────────────────────────

/// A side-effecting install, update, or uninstall step failed.
#[derive(Debug, Error)]
pub enum InstallationError {
    #[error("Installation script '{name}' not found. Searched:\n{searched}")]
    ScriptNotFound { name: String, searched: String },

    #[error("Failed to execute installation script {}: {source}", script.display())]
    Spawn {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Script {} failed with exit code {}{}", script.display(), code.map_or_else(|| "unknown".to_string(), |c| c.to_string()), format_script_output(stderr, stdout))]
    ScriptFailed {
        script: PathBuf,
        code: Option<i32>,
        stderr: String,
        stdout: String,
    },

    #[error("Script {} timed out after {secs}s. The installation may have hung.", script.display())]
    Timeout { script: PathBuf, secs: u64 },

    #[error(transparent)]
    InvalidProjectType(#[from] ValidationError),

    #[error("Failed to remove {}: {source}", path.display())]
    Removal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_script_output(stderr: &str, stdout: &str) -> String {
    let mut out = String::new();
    if !stderr.trim().is_empty() {
        out.push_str("\nError output: ");
        out.push_str(stderr.trim());
    }
    if !stdout.trim().is_empty() {
        out.push_str("\nStandard output: ");
        out.push_str(stdout.trim());
    }
    out
}

// ── Validation errors ─────────────────────────────────────────────────────────

/// User input rejected before any side effect happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Invalid project type '{0}': must contain only alphanumeric characters, dashes, and underscores"
    )]
    InvalidProjectType(String),
}
