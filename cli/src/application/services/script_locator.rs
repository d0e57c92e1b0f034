//! Application service — install script discovery.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::application::ports::LocalFs;
use crate::domain::InstallationError;

/// Ordered list of directories that may hold the install scripts.
///
/// The first directory containing an executable file with the requested name
/// wins. Candidates are supplied by the caller so tests can point at temp
/// directories.
#[derive(Debug, Clone, Default)]
pub struct ScriptLocator {
    dirs: Vec<PathBuf>,
}

impl ScriptLocator {
    #[must_use]
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Find `name` in the candidate directories.
    ///
    /// Files that exist but are not executable are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `InstallationError::ScriptNotFound` listing every searched path
    /// when no candidate matches.
    pub fn locate(&self, fs: &impl LocalFs, name: &str) -> Result<PathBuf, InstallationError> {
        for dir in &self.dirs {
            let candidate = dir.join(name);
            if fs.is_executable_file(&candidate) {
                tracing::debug!(script = %candidate.display(), "found install script");
                return Ok(candidate);
            }
            if fs.exists(&candidate) {
                tracing::warn!(
                    script = %candidate.display(),
                    "script found but not executable, skipping"
                );
            }
        }

        let mut searched = String::new();
        for dir in &self.dirs {
            let _ = writeln!(searched, "  {}", dir.join(name).display());
        }
        Err(InstallationError::ScriptNotFound {
            name: name.to_string(),
            searched: searched.trim_end().to_string(),
        })
    }
}
