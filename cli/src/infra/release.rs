//! Infrastructure implementation of the `ReleaseChecker` port.

use anyhow::{Context, Result};

use crate::application::ports::ReleaseChecker;

/// Latest release lookup against GitHub releases of the AgentOS repository.
pub struct GithubReleaseChecker;

impl ReleaseChecker for GithubReleaseChecker {
    fn latest_version(&self) -> Result<String> {
        let releases = self_update::backends::github::ReleaseList::configure()
            .repo_owner("buildermethods")
            .repo_name("agent-os")
            .build()
            .context("failed to configure release check")?
            .fetch()
            .context("failed to check latest version from GitHub")?;

        let latest = releases
            .first()
            .ok_or_else(|| anyhow::anyhow!("no AgentOS releases published"))?;
        let version = latest.version.trim_start_matches('v');
        if version.is_empty() {
            anyhow::bail!("invalid release tag from GitHub");
        }
        tracing::debug!(version, "latest AgentOS release");
        Ok(version.to_string())
    }
}
