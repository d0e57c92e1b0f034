//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod install;
pub mod layout;

pub use config::{AgentConfig, AgentOsConfig, ProjectTypeConfig};
pub use error::{ConfigurationError, InstallationError, ValidationError};
pub use install::{
    DEFAULT_PROJECT_TYPE, InstallLocation, InstallOptions, InstallStatus, Integration,
    ProjectType, validate_project_type,
};
pub use layout::InstallLayout;
