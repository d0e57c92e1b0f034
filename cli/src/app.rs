//! Application context — unified state passed to every command handler.
//!
//! Constructed once from the top-level CLI flags. Adding a cross-cutting
//! concern means one field change here; command signatures stay the same.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use console::Term;

use crate::application::ports::Confirmer;
use crate::infra::Settings;
use crate::output::{HumanRenderer, OutputContext};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Answer yes to every confirmation prompt.
    pub yes: bool,
}

/// Location and timeout overrides.
pub struct SettingsFlags {
    pub home: Option<PathBuf>,
    pub scripts_dir: Option<PathBuf>,
    pub script_timeout: Duration,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    pub output: OutputFlags,
    pub behaviour: BehaviourFlags,
    pub settings: SettingsFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Resolved directories and script timeout.
    pub settings: Settings,
    /// When `true`, confirmations are answered yes without prompting.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the home or current directory cannot be determined.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        let settings = Settings::resolve(
            flags.settings.home,
            flags.settings.scripts_dir,
            flags.settings.script_timeout,
        )?;

        Ok(Self {
            // JSON output owns stdout; progress lines would corrupt it.
            output: OutputContext::new(flags.output.no_color, flags.output.quiet || flags.output.json),
            mode,
            settings,
            non_interactive: flags.behaviour.yes,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    #[must_use]
    pub fn renderer(&self) -> HumanRenderer<'_> {
        HumanRenderer::new(&self.output)
    }
}

impl Confirmer for AppContext {
    /// `--yes` answers for the user. Without a terminal nothing is confirmed.
    fn confirm(&self, prompt: &str) -> bool {
        if self.non_interactive {
            return true;
        }
        if !Term::stderr().is_term() {
            tracing::warn!(prompt, "no terminal to confirm on, assuming no");
            self.output
                .warn(&format!("{prompt} (no terminal; pass --yes to confirm)"));
            return false;
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "confirmation prompt failed");
                false
            })
    }
}
