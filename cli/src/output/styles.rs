//! Colour roles for `agentos` terminal output.

use owo_colors::Style;

/// One `Style` per kind of line the CLI prints.
///
/// The default value is colourless, so every role renders text unchanged.
#[derive(Default, Clone, Copy)]
pub struct Styles {
    /// `✓` after a finished step or install.
    pub ok: Style,
    /// `⚠` / `!` markers for skipped or partially failed work.
    pub caution: Style,
    /// `✗` on fatal errors.
    pub failure: Style,
    /// `ℹ` notes such as "nothing to remove".
    pub note: Style,
    /// `→` in front of a script step when no spinner is shown.
    pub step: Style,
    /// Keys in the status listing.
    pub label: Style,
    /// "Base" and "Project" section titles.
    pub section: Style,
    /// The program name in `agentos version`.
    pub name: Style,
}

impl Styles {
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn colored() -> Self {
        Self {
            ok: Style::new().green(),
            caution: Style::new().yellow(),
            failure: Style::new().red().bold(),
            note: Style::new().blue(),
            step: Style::new().cyan(),
            label: Style::new().dimmed(),
            section: Style::new().bold().underline(),
            name: Style::new().bold(),
        }
    }

    /// Colours only when the caller decided the terminal can show them.
    #[must_use]
    pub fn for_terminal(use_colors: bool) -> Self {
        if use_colors {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}
