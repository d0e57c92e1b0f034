//! Domain types and validators for the AgentOS base configuration.
//!
//! Pure functions only; no I/O.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigurationError;
use crate::domain::install::Integration;

/// Top-level configuration stored in `~/.agent-os/config.yml`.
///
/// Written by the base install script; this crate only reads it. The legacy
/// `agent_os_version` key is accepted for the version field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentOsConfig {
    /// Semantic version of the installed base.
    #[serde(alias = "agent_os_version")]
    pub version: String,
    /// Per-integration settings.
    #[serde(default)]
    pub agents: BTreeMap<Integration, AgentConfig>,
    /// Named instruction/standards bundles.
    #[serde(default)]
    pub project_types: BTreeMap<String, ProjectTypeConfig>,
    /// Must name an entry of `project_types`.
    #[serde(default = "default_project_type")]
    pub default_project_type: String,
}

/// Settings for a single integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub enabled: bool,
    #[serde(
        default,
        alias = "additional_config",
        skip_serializing_if = "Option::is_none"
    )]
    pub extra: Option<BTreeMap<String, String>>,
}

/// Template locations for one project type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTypeConfig {
    pub instructions: String,
    pub standards: String,
}

fn default_project_type() -> String {
    "default".to_string()
}

impl AgentOsConfig {
    /// Parse and validate a YAML document. `origin` is only used for error
    /// messages.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Parse` if the document does not match the
    /// schema, or `ConfigurationError::UnknownDefaultProjectType` if
    /// `default_project_type` is not a key of `project_types`.
    pub fn from_yaml(content: &str, origin: &Path) -> Result<Self, ConfigurationError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|source| ConfigurationError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_project_type` is missing from `project_types`.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.project_types.contains_key(&self.default_project_type) {
            return Err(ConfigurationError::UnknownDefaultProjectType {
                name: self.default_project_type.clone(),
                available: self
                    .project_types
                    .keys()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        Ok(())
    }

    /// Integrations marked `enabled`, in declaration order.
    pub fn enabled_integrations(&self) -> impl Iterator<Item = Integration> + '_ {
        self.agents
            .iter()
            .filter(|(_, agent)| agent.enabled)
            .map(|(integration, _)| *integration)
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
