//! Application service — install, update, and uninstall orchestration.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Script execution, filesystem access, and prompts are routed through
//! injected port traits.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::ports::{
    ConfigStore, Confirmer, DEFAULT_SCRIPT_TIMEOUT, LocalFs, ProgressReporter, ScriptRunner,
};
use crate::application::services::install_status::gather_status;
use crate::application::services::script_locator::ScriptLocator;
use crate::domain::layout::{BASE_SCRIPT, PROJECT_SCRIPT};
use crate::domain::{
    DEFAULT_PROJECT_TYPE, InstallLayout, InstallLocation, InstallOptions, InstallStatus,
    InstallationError, Integration, validate_project_type,
};

// ── Public types ──────────────────────────────────────────────────────────────

/// What happened to one half of an uninstall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// Something existed and was deleted.
    Removed,
    /// Nothing existed.
    NothingToRemove,
    /// The user declined the confirmation prompt.
    Declined,
    /// Removal failed; the other half still removed something.
    Failed(String),
    /// Not attempted (project-only uninstall leaves the base alone).
    Skipped,
}

/// Per-half outcome of an uninstall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallReport {
    pub project: Removal,
    pub base: Removal,
}

impl UninstallReport {
    /// `true` if either half removed something.
    #[must_use]
    pub fn removed_anything(&self) -> bool {
        self.project == Removal::Removed || self.base == Removal::Removed
    }
}

// ── Orchestrator ──────────────────────────────────────────────────────────────

/// Coordinates base and project installs against the current install status.
pub struct Installer<'a, R, C, F> {
    runner: &'a R,
    config: &'a C,
    fs: &'a F,
    layout: &'a InstallLayout,
    locator: &'a ScriptLocator,
    reporter: &'a dyn ProgressReporter,
    confirmer: &'a dyn Confirmer,
    timeout: Duration,
}

impl<'a, R, C, F> Installer<'a, R, C, F>
where
    R: ScriptRunner,
    C: ConfigStore,
    F: LocalFs,
{
    pub fn new(
        runner: &'a R,
        config: &'a C,
        fs: &'a F,
        layout: &'a InstallLayout,
        locator: &'a ScriptLocator,
        reporter: &'a dyn ProgressReporter,
        confirmer: &'a dyn Confirmer,
    ) -> Self {
        Self {
            runner,
            config,
            fs,
            layout,
            locator,
            reporter,
            confirmer,
            timeout: DEFAULT_SCRIPT_TIMEOUT,
        }
    }

    /// Override the per-script timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Current installation status.
    pub fn status(&self) -> InstallStatus {
        gather_status(self.config, self.fs, self.layout)
    }

    /// Install base or project components.
    ///
    /// A project install without a usable base sets `options.no_base` and
    /// uses a standalone `project.sh` instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the script is missing, cannot be started, exits
    /// non-zero, or times out.
    pub async fn install(&self, options: &mut InstallOptions) -> Result<bool, InstallationError> {
        match options.location {
            InstallLocation::Base => self.install_base(options).await.map(|()| true),
            InstallLocation::Project => self.install_project(options).await,
        }
    }

    /// Refresh installed content by reinstalling with overwrites forced on.
    ///
    /// Only what is already installed gets refreshed: a full update
    /// reinstalls the base if present and then the project if present.
    /// Returns `Ok(false)` without running anything when there is nothing to
    /// update.
    ///
    /// # Errors
    ///
    /// Returns an error if any script run fails.
    pub async fn update(&self, project_only: bool) -> Result<bool, InstallationError> {
        let status = self.status();
        if project_only {
            return self.update_project(&status).await;
        }
        if !status.base_installed && !status.project_installed {
            tracing::info!("no installation to update");
            return Ok(false);
        }

        if status.base_installed {
            let options = self.base_update_options()?;
            self.install_base(&options).await?;
        }
        if status.project_installed {
            self.update_project(&status).await?;
        }
        Ok(true)
    }

    /// Remove the project installation and, unless `project_only`, the base.
    ///
    /// A full uninstall attempts both halves and succeeds if either one
    /// removed something. There is no rollback.
    ///
    /// # Errors
    ///
    /// Returns an error if a removal fails and the other half removed nothing.
    pub fn uninstall(&self, project_only: bool) -> Result<UninstallReport, InstallationError> {
        if project_only {
            return Ok(UninstallReport {
                project: self.remove_project()?,
                base: Removal::Skipped,
            });
        }

        match (self.remove_project(), self.remove_base()) {
            (Ok(project), Ok(base)) => Ok(UninstallReport { project, base }),
            (Err(e), Ok(Removal::Removed)) => {
                tracing::warn!(error = %e, "project removal failed, base removed");
                Ok(UninstallReport {
                    project: Removal::Failed(e.to_string()),
                    base: Removal::Removed,
                })
            }
            (Ok(Removal::Removed), Err(e)) => {
                tracing::warn!(error = %e, "base removal failed, project removed");
                Ok(UninstallReport {
                    project: Removal::Removed,
                    base: Removal::Failed(e.to_string()),
                })
            }
            (Err(e), _) | (_, Err(e)) => Err(e),
        }
    }

    // ── Install steps ─────────────────────────────────────────────────────────

    async fn install_base(&self, options: &InstallOptions) -> Result<(), InstallationError> {
        let script = self.locator.locate(self.fs, BASE_SCRIPT)?;
        let args = base_script_args(options);

        self.reporter.step("Installing AgentOS base components...");
        self.run(&script, &args).await?;
        self.reporter.success("Base installation completed");
        Ok(())
    }

    async fn install_project(
        &self,
        options: &mut InstallOptions,
    ) -> Result<bool, InstallationError> {
        let script = self.project_script(options)?;
        validate_project_type(options.project_type.as_str())?;
        let args = project_script_args(options);

        self.reporter.step("Installing AgentOS project components...");
        self.run(&script, &args).await?;
        self.reporter.success("Project installation completed");
        Ok(true)
    }

    /// The base copy of `project.sh`, or a standalone one with `no_base` set.
    fn project_script(&self, options: &mut InstallOptions) -> Result<PathBuf, InstallationError> {
        if !options.no_base {
            let from_base = self.layout.base_project_script();
            if self.fs.is_executable_file(&from_base) {
                return Ok(from_base);
            }
            tracing::info!(
                path = %from_base.display(),
                "base project script unavailable, installing without base"
            );
            options.no_base = true;
        }
        self.locator.locate(self.fs, PROJECT_SCRIPT)
    }

    async fn run(&self, script: &Path, args: &[String]) -> Result<(), InstallationError> {
        tracing::info!(script = %script.display(), ?args, "running install script");
        let output = self.runner.run_script(script, args, self.timeout).await?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(InstallationError::ScriptFailed {
                script: script.to_path_buf(),
                code: output.status.code(),
                stderr,
                stdout,
            });
        }
        if !stdout.trim().is_empty() {
            tracing::debug!(script = %script.display(), output = %stdout.trim(), "script output");
        }
        Ok(())
    }

    // ── Update steps ──────────────────────────────────────────────────────────

    /// Base reinstall options: every overwrite on, integrations as enabled in
    /// the current config (all of them when the config is unavailable).
    fn base_update_options(&self) -> Result<InstallOptions, InstallationError> {
        let enabled: Vec<Integration> = match self.config.load() {
            Ok(Some(cfg)) => cfg.enabled_integrations().collect(),
            Ok(None) | Err(_) => Integration::ALL.to_vec(),
        };

        let mut builder = InstallOptions::builder(InstallLocation::Base)
            .overwrite_instructions(true)
            .overwrite_standards(true)
            .overwrite_config(true);
        for integration in Integration::ALL {
            builder = builder.integration(integration, enabled.contains(&integration));
        }
        Ok(builder.build()?)
    }

    async fn update_project(&self, status: &InstallStatus) -> Result<bool, InstallationError> {
        if !status.project_installed {
            tracing::info!("no project installation to update");
            return Ok(false);
        }

        let mut builder = InstallOptions::builder(InstallLocation::Project)
            .overwrite_instructions(true)
            .overwrite_standards(true)
            .project_type(
                status
                    .project_type
                    .as_deref()
                    .unwrap_or(DEFAULT_PROJECT_TYPE),
            );
        for integration in Integration::ALL {
            builder = builder.integration(integration, status.has_agent(integration));
        }
        let mut options = builder.build()?;
        self.install_project(&mut options).await
    }

    // ── Uninstall steps ───────────────────────────────────────────────────────

    fn remove_project(&self) -> Result<Removal, InstallationError> {
        let present: Vec<PathBuf> = self
            .layout
            .project_paths()
            .into_iter()
            .filter(|path| self.fs.exists(path))
            .collect();
        if present.is_empty() {
            return Ok(Removal::NothingToRemove);
        }

        let prompt = format!(
            "Remove project installation at {}?",
            self.layout.project_root().display()
        );
        if !self.confirmer.confirm(&prompt) {
            return Ok(Removal::Declined);
        }

        self.reporter.step("Removing project AgentOS installation...");
        for path in &present {
            self.remove_path(path)?;
        }
        self.reporter.success("Project installation removed");
        Ok(Removal::Removed)
    }

    fn remove_base(&self) -> Result<Removal, InstallationError> {
        let base = self.layout.base_dir();
        if !self.fs.exists(base) {
            return Ok(Removal::NothingToRemove);
        }

        let prompt = format!("Remove base installation at {}?", base.display());
        if !self.confirmer.confirm(&prompt) {
            return Ok(Removal::Declined);
        }

        self.reporter.step("Removing base AgentOS installation...");
        self.remove_path(base)?;
        self.reporter.success("Base installation removed");
        Ok(Removal::Removed)
    }

    fn remove_path(&self, path: &Path) -> Result<(), InstallationError> {
        let result = if self.fs.is_dir(path) {
            self.fs.remove_dir_all(path)
        } else {
            self.fs.remove_file(path)
        };
        result.map_err(|source| InstallationError::Removal {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "removed");
        Ok(())
    }
}

// ── Script arguments ──────────────────────────────────────────────────────────

/// Flags for `base.sh`, one per set option.
#[must_use]
pub fn base_script_args(options: &InstallOptions) -> Vec<String> {
    let flags = [
        (options.overwrite_instructions, "--overwrite-instructions"),
        (options.overwrite_standards, "--overwrite-standards"),
        (options.overwrite_config, "--overwrite-config"),
        (options.claude_code, Integration::ClaudeCode.script_flag()),
        (options.cursor, Integration::Cursor.script_flag()),
    ];
    flags
        .into_iter()
        .filter(|(set, _)| *set)
        .map(|(_, flag)| flag.to_string())
        .collect()
}

/// Flags for `project.sh`. The project type is always passed, in
/// `--project-type=NAME` form.
#[must_use]
pub fn project_script_args(options: &InstallOptions) -> Vec<String> {
    let flags = [
        (options.no_base, "--no-base"),
        (options.overwrite_instructions, "--overwrite-instructions"),
        (options.overwrite_standards, "--overwrite-standards"),
        (options.claude_code, Integration::ClaudeCode.script_flag()),
        (options.cursor, Integration::Cursor.script_flag()),
    ];
    let mut args: Vec<String> = flags
        .into_iter()
        .filter(|(set, _)| *set)
        .map(|(_, flag)| flag.to_string())
        .collect();
    args.push(format!("--project-type={}", options.project_type));
    args
}
