//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution,
//! filesystem access, configuration loading, and release lookups.
//!
//! Imports from `crate::domain` and `crate::application` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod fs;
pub mod release;
pub mod settings;

pub use command_runner::TokioScriptRunner;
pub use config::YamlConfigStore;
pub use fs::StdFs;
pub use release::GithubReleaseChecker;
pub use settings::Settings;
