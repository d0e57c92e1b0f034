//! `agentos uninstall [--project]` — remove installations.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::Removal;
use crate::commands::Services;
use crate::output::{TerminalReporter, json};

/// Arguments for the uninstall command.
#[derive(Args, Debug)]
pub struct UninstallArgs {
    /// Remove from the current project only
    #[arg(long)]
    pub project: bool,
}

/// Run `agentos uninstall`.
///
/// # Errors
///
/// Returns an error if a removal fails and nothing else was removed.
pub fn run(app: &AppContext, args: &UninstallArgs) -> Result<()> {
    let services = Services::new(&app.settings);
    let reporter = TerminalReporter::new(&app.output);
    let report = services.installer(app, &reporter).uninstall(args.project)?;
    reporter.finish();

    if app.is_json() {
        return json::print(&serde_json::json!({
            "removed": report.removed_anything(),
            "project": removal_code(&report.project),
            "base": removal_code(&report.base),
        }));
    }
    app.renderer().render_uninstall(&report);
    Ok(())
}

fn removal_code(removal: &Removal) -> &'static str {
    match removal {
        Removal::Removed => "removed",
        Removal::NothingToRemove => "nothing_to_remove",
        Removal::Declined => "declined",
        Removal::Failed(_) => "failed",
        Removal::Skipped => "skipped",
    }
}
