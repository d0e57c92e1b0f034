//! Version command

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::install_status::gather_status;
use crate::commands::Services;
use crate::infra::StdFs;
use crate::output::json;

/// Run the version command.
///
/// Status is best effort: configuration problems are logged and the base is
/// reported as not installed rather than failing the command.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn run(app: &AppContext) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let services = Services::new(&app.settings);
    let status = gather_status(&services.config, &StdFs, &services.layout);

    if app.is_json() {
        return json::print(&serde_json::json!({
            "version": version,
            "status": status,
        }));
    }
    app.renderer().render_version(version, &status);
    Ok(())
}
