//! AgentOS CLI - installer and configuration manager for AgentOS

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use agentos_cli::domain::{ConfigurationError, InstallationError, ValidationError};
use agentos_cli::logging::init_tracing;
use agentos_cli::output::{OutputContext, json};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let as_json = cli.json;
    let no_color = cli.no_color;

    if let Err(e) = cli.run().await {
        tracing::debug!(error = ?e, "command failed");
        let message = format!("{e:#}");
        if as_json {
            match json::format_error(&message, error_code(&e)) {
                Ok(text) => println!("{text}"),
                Err(_) => eprintln!("Error: {message}"),
            }
        } else {
            OutputContext::new(no_color, false).error(&message);
        }
        std::process::exit(1);
    }
}

/// Machine-readable code for the JSON error object.
fn error_code(e: &anyhow::Error) -> &'static str {
    if e.downcast_ref::<InstallationError>().is_some() {
        "installation_error"
    } else if e.downcast_ref::<ConfigurationError>().is_some() {
        "configuration_error"
    } else if e.downcast_ref::<ValidationError>().is_some() {
        "validation_error"
    } else {
        "error"
    }
}
