//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{AgentOsConfig, ConfigurationError, InstallationError};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Hard limit for a single install script run.
pub const DEFAULT_SCRIPT_TIMEOUT: Duration = Duration::from_secs(600);

// ── Script Runner Port ────────────────────────────────────────────────────────

/// Abstracts script execution so the orchestrator can be tested without
/// spawning processes.
#[allow(async_fn_in_trait)]
pub trait ScriptRunner {
    /// Run `script` with `args`, capturing stdout and stderr.
    ///
    /// A non-zero exit is returned as a normal `Output`; interpreting it is
    /// the caller's job.
    ///
    /// # Errors
    ///
    /// Returns `InstallationError::Spawn` if the process cannot be started and
    /// `InstallationError::Timeout` if it runs longer than `timeout`. On
    /// timeout the child must be killed, not left orphaned.
    async fn run_script(
        &self,
        script: &Path,
        args: &[String],
        timeout: Duration,
    ) -> Result<Output, InstallationError>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Read access to the persisted base configuration.
pub trait ConfigStore {
    /// Load the base configuration, returning `None` if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// validated.
    fn load(&self) -> Result<Option<AgentOsConfig>, ConfigurationError>;

    /// Location of the configuration file.
    fn path(&self) -> &Path;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the filesystem checks and removals the orchestrator performs.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    /// Regular file with at least one execute bit set.
    fn is_executable_file(&self, path: &Path) -> bool;
    /// # Errors
    ///
    /// Returns an error if the directory cannot be removed.
    fn remove_dir_all(&self, path: &Path) -> std::io::Result<()>;
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    fn remove_file(&self, path: &Path) -> std::io::Result<()>;
}

// ── Interaction Ports ─────────────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

/// Asks the user before destructive steps.
pub trait Confirmer {
    /// Returns `true` when the user agrees. Implementations must not block
    /// when no terminal is attached.
    fn confirm(&self, prompt: &str) -> bool;
}

// ── Release Port ──────────────────────────────────────────────────────────────

/// Looks up the latest published AgentOS release.
pub trait ReleaseChecker {
    /// Latest release version without a leading `v`.
    ///
    /// # Errors
    ///
    /// Returns an error if the release list cannot be fetched or is empty.
    fn latest_version(&self) -> Result<String>;
}
