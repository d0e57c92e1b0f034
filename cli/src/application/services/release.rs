//! Application service — compare the installed base against the latest release.

use anyhow::{Context, Result};

use crate::application::ports::ReleaseChecker;

/// Result of a release check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseCheck {
    /// No base installed; only the latest version is known.
    NotInstalled { latest: String },
    /// Installed version is the latest (or newer).
    UpToDate { installed: String },
    /// A newer release exists.
    Available { installed: String, latest: String },
}

/// Compare `installed` against the latest published release.
///
/// # Errors
///
/// Returns an error if the lookup fails or either version is not valid semver.
pub fn check_release(checker: &impl ReleaseChecker, installed: Option<&str>) -> Result<ReleaseCheck> {
    let latest = checker.latest_version()?;
    let Some(installed) = installed else {
        return Ok(ReleaseCheck::NotInstalled { latest });
    };

    let latest_ver = semver::Version::parse(&latest)
        .with_context(|| format!("invalid release version: {latest}"))?;
    let installed_ver = semver::Version::parse(installed.trim_start_matches('v'))
        .with_context(|| format!("invalid installed version: {installed}"))?;

    if latest_ver <= installed_ver {
        Ok(ReleaseCheck::UpToDate {
            installed: installed.to_string(),
        })
    } else {
        Ok(ReleaseCheck::Available {
            installed: installed.to_string(),
            latest,
        })
    }
}
