//! Human-readable rendering of install status, uninstall reports and release checks.

use owo_colors::OwoColorize as _;

use crate::application::services::release::ReleaseCheck;
use crate::application::{Removal, UninstallReport};
use crate::domain::{InstallStatus, Integration};
use crate::output::OutputContext;

/// A single status line and the marker it is printed with.
#[derive(Debug, PartialEq, Eq)]
enum Notice {
    Done(String),
    Note(String),
    Caution(String),
}

/// Renders results for a terminal.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// `agentos version` output.
    pub fn render_version(&self, version: &str, status: &InstallStatus) {
        if self.ctx.quiet {
            println!("{version}");
            return;
        }
        println!("  {} {version}", "agentos".style(self.ctx.styles.name));
        println!();
        self.render_status(status);
    }

    /// Base and project sections of an install status.
    pub fn render_status(&self, status: &InstallStatus) {
        self.ctx.header("Base");
        if status.base_installed {
            self.ctx.kv("Installed:", "yes");
            if let Some(path) = &status.base_path {
                self.ctx.kv("Path:     ", &path.display().to_string());
            }
            self.ctx
                .kv("Version:  ", status.base_version.as_deref().unwrap_or("unknown"));
        } else {
            self.ctx.kv("Installed:", "no");
        }

        println!();
        self.ctx.header("Project");
        if status.project_installed {
            self.ctx.kv("Installed:", "yes");
            if let Some(path) = &status.project_path {
                self.ctx.kv("Path:     ", &path.display().to_string());
            }
            self.ctx.kv("Agents:   ", &agents_line(status));
            if let Some(project_type) = &status.project_type {
                self.ctx.kv("Type:     ", project_type);
            }
        } else {
            self.ctx.kv("Installed:", "no");
        }
    }

    /// One line per half of an uninstall.
    pub fn render_uninstall(&self, report: &UninstallReport) {
        self.render_removal("Project", &report.project);
        self.render_removal("Base", &report.base);
    }

    fn render_removal(&self, what: &str, removal: &Removal) {
        if let Some(notice) = removal_notice(what, removal) {
            self.emit(&notice);
        }
    }

    /// Result of `update --check`.
    pub fn render_release(&self, check: &ReleaseCheck) {
        let (notice, hint) = release_notice(check);
        self.emit(&notice);
        if let Some(hint) = hint
            && !self.ctx.quiet
        {
            println!("    Run: {hint}");
        }
    }

    fn emit(&self, notice: &Notice) {
        match notice {
            Notice::Done(msg) => self.ctx.success(msg),
            Notice::Note(msg) => self.ctx.info(msg),
            Notice::Caution(msg) => self.ctx.warn(msg),
        }
    }
}

/// Removed and skipped halves print nothing; the reporter already covered them.
fn removal_notice(what: &str, removal: &Removal) -> Option<Notice> {
    match removal {
        Removal::Removed | Removal::Skipped => None,
        Removal::NothingToRemove => Some(Notice::Note(format!("{what}: nothing to remove"))),
        Removal::Declined => Some(Notice::Note(format!("{what}: kept"))),
        Removal::Failed(reason) => Some(Notice::Caution(format!("{what}: {reason}"))),
    }
}

fn release_notice(check: &ReleaseCheck) -> (Notice, Option<&'static str>) {
    match check {
        ReleaseCheck::NotInstalled { latest } => (
            Notice::Note(format!("AgentOS is not installed (latest release: {latest})")),
            Some("agentos install"),
        ),
        ReleaseCheck::UpToDate { installed } => (
            Notice::Done(format!("AgentOS {installed} is up to date")),
            None,
        ),
        ReleaseCheck::Available { installed, latest } => (
            Notice::Caution(format!("Update available: {installed} → {latest}")),
            Some("agentos update"),
        ),
    }
}

fn agents_line(status: &InstallStatus) -> String {
    let names: Vec<&str> = Integration::ALL
        .into_iter()
        .filter(|i| status.has_agent(*i))
        .map(Integration::name)
        .collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
