//! Process-wide settings resolved from flags, environment, and platform dirs.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ScriptLocator;
use crate::domain::InstallLayout;
use crate::domain::layout::AGENT_OS_DIR;

/// System-wide script directories, searched last.
const SYSTEM_SCRIPT_DIRS: &[&str] = &["/usr/local/share/agentos/setup", "/usr/share/agentos/setup"];

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base installation directory (`~/.agent-os` unless overridden).
    pub base_dir: PathBuf,
    /// Directory treated as the project.
    pub project_root: PathBuf,
    /// Bundled scripts directory, if one could be determined.
    pub bundled_scripts_dir: Option<PathBuf>,
    /// Hard limit for each script run.
    pub script_timeout: Duration,
}

impl Settings {
    /// Resolve settings for this process.
    ///
    /// `base_dir` and `scripts_dir` come from `--home` / `AGENTOS_HOME` and
    /// `--scripts-dir` / `AGENTOS_SCRIPTS_DIR`. Without a scripts override the
    /// bundled location is `<exe dir>/../share/agentos/setup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home or current directory cannot be determined.
    pub fn resolve(
        base_dir: Option<PathBuf>,
        scripts_dir: Option<PathBuf>,
        script_timeout: Duration,
    ) -> Result<Self> {
        let base_dir = match base_dir {
            Some(dir) => dir,
            None => dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?
                .join(AGENT_OS_DIR),
        };
        let project_root = std::env::current_dir().context("cannot determine current directory")?;
        let bundled_scripts_dir = scripts_dir.or_else(exe_relative_scripts_dir);

        let settings = Self {
            base_dir,
            project_root,
            bundled_scripts_dir,
            script_timeout,
        };
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }

    #[must_use]
    pub fn layout(&self) -> InstallLayout {
        InstallLayout::new(&self.base_dir, &self.project_root)
    }

    /// Script search order: bundled, then the base install, then system-wide.
    #[must_use]
    pub fn script_locator(&self) -> ScriptLocator {
        let mut dirs: Vec<PathBuf> = self.bundled_scripts_dir.iter().cloned().collect();
        dirs.extend(self.layout().base_script_dirs());
        dirs.extend(SYSTEM_SCRIPT_DIRS.iter().map(PathBuf::from));
        ScriptLocator::new(dirs)
    }
}

fn exe_relative_scripts_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.parent()?.join("share").join("agentos").join("setup"))
}
