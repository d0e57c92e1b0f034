//! `agentos update`: refresh installed content, or check for a newer release.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{ConfigStore as _, ReleaseChecker};
use crate::application::services::release::{ReleaseCheck, check_release};
use crate::commands::Services;
use crate::output::{TerminalReporter, json};

/// Arguments for the update command.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Update the current project installation only
    #[arg(long)]
    pub project: bool,

    /// Only check whether a newer AgentOS release is available
    #[arg(long, conflicts_with = "project")]
    pub check: bool,
}

/// Run `agentos update`.
///
/// # Errors
///
/// Returns an error if an install script fails, or with `--check` if the
/// release lookup fails.
pub async fn run(app: &AppContext, args: &UpdateArgs, checker: &impl ReleaseChecker) -> Result<()> {
    let services = Services::new(&app.settings);
    if args.check {
        return check(app, &services, checker);
    }

    let reporter = TerminalReporter::new(&app.output);
    let installer = services.installer(app, &reporter);
    let updated = installer.update(args.project).await?;
    reporter.finish();

    if app.is_json() {
        return json::print(&serde_json::json!({
            "updated": updated,
            "project_only": args.project,
        }));
    }
    if !updated && args.project {
        app.output.info(&format!(
            "No project installation found in {}",
            services.layout.project_root().display()
        ));
    } else if !updated {
        app.output
            .info("No AgentOS installation found. Run: agentos install");
    }
    Ok(())
}

fn check(app: &AppContext, services: &Services, checker: &impl ReleaseChecker) -> Result<()> {
    // Status problems are not fatal here; treat them as "not installed".
    let installed = services.config.load().ok().flatten().map(|c| c.version);
    // self_update performs blocking HTTP, which must not run on a runtime worker.
    let result = tokio::task::block_in_place(|| check_release(checker, installed.as_deref()))?;

    if app.is_json() {
        let (installed, latest, available) = match &result {
            ReleaseCheck::NotInstalled { latest } => (None, latest.as_str(), false),
            ReleaseCheck::UpToDate { installed } => (Some(installed.as_str()), installed.as_str(), false),
            ReleaseCheck::Available { installed, latest } => {
                (Some(installed.as_str()), latest.as_str(), true)
            }
        };
        return json::print(&serde_json::json!({
            "installed": installed,
            "latest": latest,
            "update_available": available,
        }));
    }

    app.renderer().render_release(&result);
    Ok(())
}
