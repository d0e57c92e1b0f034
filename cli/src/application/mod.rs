//! Application layer — port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod ports;
pub mod services;

pub use ports::{
    ConfigStore, Confirmer, DEFAULT_SCRIPT_TIMEOUT, LocalFs, ProgressReporter, ReleaseChecker,
    ScriptRunner,
};
pub use services::installer::{Installer, Removal, UninstallReport};
pub use services::script_locator::ScriptLocator;
