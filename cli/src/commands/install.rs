//! `agentos install` — base or project installation.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::Confirmer;
use crate::commands::Services;
use crate::domain::{DEFAULT_PROJECT_TYPE, InstallLocation, InstallOptions, ValidationError};
use crate::output::{TerminalReporter, json};

/// Arguments for the install command.
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Install to the current project only (skip base installation)
    #[arg(long)]
    pub project: bool,

    /// Overwrite existing instruction files
    #[arg(long)]
    pub overwrite_instructions: bool,

    /// Overwrite existing standards files
    #[arg(long)]
    pub overwrite_standards: bool,

    /// Overwrite existing config.yml
    #[arg(long)]
    pub overwrite_config: bool,

    /// Enable Claude Code integration
    #[arg(long)]
    pub claude_code: bool,

    /// Enable Cursor integration
    #[arg(long)]
    pub cursor: bool,

    /// Project type for customized setup
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PROJECT_TYPE)]
    pub project_type: String,

    /// Install the project without a base installation
    #[arg(long)]
    pub no_base: bool,
}

impl InstallArgs {
    /// Validated options for `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the project type is invalid.
    pub fn options(&self, location: InstallLocation) -> Result<InstallOptions, ValidationError> {
        InstallOptions::builder(location)
            .overwrite_instructions(self.overwrite_instructions)
            .overwrite_standards(self.overwrite_standards)
            .overwrite_config(self.overwrite_config)
            .claude_code(self.claude_code)
            .cursor(self.cursor)
            .project_type(self.project_type.as_str())
            .no_base(self.no_base)
            .build()
    }
}

/// Run `agentos install`.
///
/// # Errors
///
/// Returns an error if the options are invalid or an install script fails.
pub async fn run(app: &AppContext, args: &InstallArgs) -> Result<()> {
    let location = if args.project {
        InstallLocation::Project
    } else {
        InstallLocation::Base
    };
    // Validate both halves up front so nothing runs with a bad project type.
    let mut options = args.options(location)?;
    let mut project_options = args.options(InstallLocation::Project)?;

    let services = Services::new(&app.settings);
    let reporter = TerminalReporter::new(&app.output);
    let installer = services.installer(app, &reporter);

    installer.install(&mut options).await?;

    let project_done = match location {
        InstallLocation::Project => Some(&options),
        InstallLocation::Base => {
            if app.confirm("Install AgentOS to current project as well?") {
                installer.install(&mut project_options).await?;
                Some(&project_options)
            } else {
                None
            }
        }
    };
    reporter.finish();

    if app.is_json() {
        let location = match location {
            InstallLocation::Base => "base",
            InstallLocation::Project => "project",
        };
        return json::print(&serde_json::json!({
            "installed": true,
            "location": location,
            "project": project_done.is_some(),
            "no_base": project_done.is_some_and(|o| o.no_base),
            "status": installer.status(),
        }));
    }

    if project_done.is_some_and(|o| o.no_base) {
        app.output
            .info("Project installed without a base installation");
    }
    if project_done.is_none() {
        app.output.info("Next: agentos install --project");
    }
    Ok(())
}
