//! Installation value types: locations, integrations, options, and status.
//!
//! This module is intentionally free of I/O, async, and external layer imports.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;

/// Name used when no project type is requested.
pub const DEFAULT_PROJECT_TYPE: &str = "default";

#[allow(clippy::expect_used)] // Pattern is a compile-time constant
static PROJECT_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9_-]+$").expect("valid regex"));

// ── Enumerations ──────────────────────────────────────────────────────────────

/// Where an installation lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallLocation {
    /// Per-user tree under `~/.agent-os/`.
    Base,
    /// Per-project tree under `./.agent-os/`.
    Project,
}

/// Optional AI assistant integration. Declaration order is the reporting order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Integration {
    ClaudeCode,
    Cursor,
}

impl Integration {
    /// Every integration, in declaration order.
    pub const ALL: [Integration; 2] = [Integration::ClaudeCode, Integration::Cursor];

    /// Config key and display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ClaudeCode => "claude_code",
            Self::Cursor => "cursor",
        }
    }

    /// Flag understood by the install scripts.
    #[must_use]
    pub fn script_flag(self) -> &'static str {
        match self {
            Self::ClaudeCode => "--claude-code",
            Self::Cursor => "--cursor",
        }
    }

    /// Paths, relative to the project root, whose presence marks the
    /// integration as installed. Cursor has a legacy single-file form.
    #[must_use]
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Self::ClaudeCode => &[".claude"],
            Self::Cursor => &[".cursor", ".cursorrules"],
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Project type ──────────────────────────────────────────────────────────────

/// Checks that a project type is safe to hand to an install script.
///
/// # Errors
///
/// Returns an error unless the value is non-empty and consists solely of
/// ASCII letters, digits, `-`, and `_`.
pub fn validate_project_type(value: &str) -> Result<(), ValidationError> {
    if PROJECT_TYPE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidProjectType(value.to_string()))
    }
}

/// A validated project type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectType(String);

impl ProjectType {
    /// # Errors
    ///
    /// Returns an error if `value` fails [`validate_project_type`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_project_type(&value)?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectType {
    fn default() -> Self {
        Self(DEFAULT_PROJECT_TYPE.to_string())
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Install options ───────────────────────────────────────────────────────────

/// One requested install operation.
///
/// Built through [`InstallOptions::builder`]. After construction only
/// `no_base` changes, when the orchestrator falls back to a standalone
/// project install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    pub location: InstallLocation,
    pub overwrite_instructions: bool,
    pub overwrite_standards: bool,
    pub overwrite_config: bool,
    pub claude_code: bool,
    pub cursor: bool,
    pub project_type: ProjectType,
    pub no_base: bool,
}

impl InstallOptions {
    #[must_use]
    pub fn builder(location: InstallLocation) -> InstallOptionsBuilder {
        InstallOptionsBuilder {
            location,
            overwrite_instructions: false,
            overwrite_standards: false,
            overwrite_config: false,
            claude_code: false,
            cursor: false,
            project_type: DEFAULT_PROJECT_TYPE.to_string(),
            no_base: false,
        }
    }

    /// Whether the given integration was requested.
    #[must_use]
    pub fn integration(&self, integration: Integration) -> bool {
        match integration {
            Integration::ClaudeCode => self.claude_code,
            Integration::Cursor => self.cursor,
        }
    }
}

/// Builder for [`InstallOptions`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
#[must_use]
pub struct InstallOptionsBuilder {
    location: InstallLocation,
    overwrite_instructions: bool,
    overwrite_standards: bool,
    overwrite_config: bool,
    claude_code: bool,
    cursor: bool,
    project_type: String,
    no_base: bool,
}

impl InstallOptionsBuilder {
    pub fn overwrite_instructions(mut self, yes: bool) -> Self {
        self.overwrite_instructions = yes;
        self
    }

    pub fn overwrite_standards(mut self, yes: bool) -> Self {
        self.overwrite_standards = yes;
        self
    }

    pub fn overwrite_config(mut self, yes: bool) -> Self {
        self.overwrite_config = yes;
        self
    }

    pub fn claude_code(mut self, yes: bool) -> Self {
        self.claude_code = yes;
        self
    }

    pub fn cursor(mut self, yes: bool) -> Self {
        self.cursor = yes;
        self
    }

    /// Enable or disable one integration.
    pub fn integration(self, integration: Integration, yes: bool) -> Self {
        match integration {
            Integration::ClaudeCode => self.claude_code(yes),
            Integration::Cursor => self.cursor(yes),
        }
    }

    pub fn project_type(mut self, name: impl Into<String>) -> Self {
        self.project_type = name.into();
        self
    }

    pub fn no_base(mut self, yes: bool) -> Self {
        self.no_base = yes;
        self
    }

    /// # Errors
    ///
    /// Returns an error if the project type is not `[A-Za-z0-9_-]+`.
    pub fn build(self) -> Result<InstallOptions, ValidationError> {
        Ok(InstallOptions {
            location: self.location,
            overwrite_instructions: self.overwrite_instructions,
            overwrite_standards: self.overwrite_standards,
            overwrite_config: self.overwrite_config,
            claude_code: self.claude_code,
            cursor: self.cursor,
            project_type: ProjectType::new(self.project_type)?,
            no_base: self.no_base,
        })
    }
}

// ── Install status ────────────────────────────────────────────────────────────

/// Snapshot of what is installed. Recomputed on every query, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallStatus {
    pub base_installed: bool,
    pub base_path: Option<PathBuf>,
    pub base_version: Option<String>,
    pub project_installed: bool,
    pub project_path: Option<PathBuf>,
    pub project_agents: BTreeSet<Integration>,
    pub project_type: Option<String>,
}

impl InstallStatus {
    /// Whether the given integration was detected in the project.
    #[must_use]
    pub fn has_agent(&self, integration: Integration) -> bool {
        self.project_agents.contains(&integration)
    }
}
