//! Application service — installation status gathering use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use crate::application::ports::{ConfigStore, LocalFs};
use crate::domain::{DEFAULT_PROJECT_TYPE, InstallLayout, InstallStatus, Integration};

/// Gather the current installation status.
///
/// This function is infallible: an unreadable or invalid base configuration
/// is logged and reported as "base not installed".
///
/// The project type is not read back from the project tree: an installed
/// project always reports [`DEFAULT_PROJECT_TYPE`].
pub fn gather_status(
    config: &impl ConfigStore,
    fs: &impl LocalFs,
    layout: &InstallLayout,
) -> InstallStatus {
    let base_config = match config.load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring invalid base configuration");
            None
        }
    };

    let base_installed = base_config.is_some();
    let project_dir = layout.project_dir();
    let project_installed = fs.is_dir(&project_dir);

    let project_agents = Integration::ALL
        .into_iter()
        .filter(|integration| {
            layout
                .integration_markers(*integration)
                .any(|marker| fs.exists(&marker))
        })
        .collect();

    let status = InstallStatus {
        base_installed,
        base_path: base_installed.then(|| layout.base_dir().to_path_buf()),
        base_version: base_config.map(|cfg| cfg.version),
        project_installed,
        project_path: project_installed.then_some(project_dir),
        project_agents,
        project_type: project_installed.then(|| DEFAULT_PROJECT_TYPE.to_string()),
    };
    tracing::debug!(?status, "gathered install status");
    status
}
