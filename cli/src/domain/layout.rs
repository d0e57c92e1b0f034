//! Well-known filesystem locations for base and project installations.

use std::path::{Path, PathBuf};

use crate::domain::install::Integration;

/// Directory name used for both the base and the project tree.
pub const AGENT_OS_DIR: &str = ".agent-os";
/// Base configuration file name, inside the base directory.
pub const BASE_CONFIG_FILE: &str = "config.yml";
/// Base install script.
pub const BASE_SCRIPT: &str = "base.sh";
/// Project install script.
pub const PROJECT_SCRIPT: &str = "project.sh";

/// Resolved locations for one process: where the base lives and which
/// directory counts as the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    base_dir: PathBuf,
    project_root: PathBuf,
}

impl InstallLayout {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            project_root: project_root.into(),
        }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    #[must_use]
    pub fn base_config_file(&self) -> PathBuf {
        self.base_dir.join(BASE_CONFIG_FILE)
    }

    /// `project.sh` as copied into the base by `base.sh`.
    #[must_use]
    pub fn base_project_script(&self) -> PathBuf {
        self.base_dir.join("setup").join(PROJECT_SCRIPT)
    }

    /// Script directories inside the base, searched after the bundled location.
    #[must_use]
    pub fn base_script_dirs(&self) -> Vec<PathBuf> {
        vec![self.base_dir.join("setup"), self.base_dir.join("scripts")]
    }

    #[must_use]
    pub fn project_dir(&self) -> PathBuf {
        self.project_root.join(AGENT_OS_DIR)
    }

    /// Marker paths for one integration.
    pub fn integration_markers(&self, integration: Integration) -> impl Iterator<Item = PathBuf> + '_ {
        integration
            .markers()
            .iter()
            .map(|marker| self.project_root.join(marker))
    }

    /// Every path a project install may create: the project tree followed by
    /// each integration's markers.
    #[must_use]
    pub fn project_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.project_dir()];
        for integration in Integration::ALL {
            paths.extend(self.integration_markers(integration));
        }
        paths
    }
}
