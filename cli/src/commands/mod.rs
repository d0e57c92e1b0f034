//! Command implementations

pub mod install;
pub mod uninstall;
pub mod update;
pub mod version;

use crate::app::AppContext;
use crate::application::{Installer, ScriptLocator};
use crate::domain::InstallLayout;
use crate::infra::{Settings, StdFs, TokioScriptRunner, YamlConfigStore};
use crate::output::TerminalReporter;

/// Production installer wiring.
pub type LocalInstaller<'a> = Installer<'a, TokioScriptRunner, YamlConfigStore, StdFs>;

/// Owns the infrastructure a command hands to the installer by reference.
pub struct Services {
    pub runner: TokioScriptRunner,
    pub config: YamlConfigStore,
    pub layout: InstallLayout,
    pub locator: ScriptLocator,
}

impl Services {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let layout = settings.layout();
        Self {
            runner: TokioScriptRunner::default(),
            config: YamlConfigStore::new(layout.base_config_file()),
            locator: settings.script_locator(),
            layout,
        }
    }

    #[must_use]
    pub fn installer<'a>(
        &'a self,
        app: &'a AppContext,
        reporter: &'a TerminalReporter<'a>,
    ) -> LocalInstaller<'a> {
        Installer::new(
            &self.runner,
            &self.config,
            &StdFs,
            &self.layout,
            &self.locator,
            reporter,
            app,
        )
        .with_timeout(app.settings.script_timeout)
    }
}
