//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use agentos_cli::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags, SettingsFlags};
use agentos_cli::commands;
use agentos_cli::infra::GithubReleaseChecker;

/// Install and manage AgentOS for AI coding agents
#[derive(Parser)]
#[command(
    name = "agentos",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Base installation directory
    #[arg(long, global = true, hide = true, env = "AGENTOS_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Directory holding base.sh and project.sh
    #[arg(long, global = true, hide = true, env = "AGENTOS_SCRIPTS_DIR", value_name = "DIR")]
    pub scripts_dir: Option<PathBuf>,

    /// Seconds before an install script is killed
    #[arg(
        long,
        global = true,
        hide = true,
        env = "AGENTOS_SCRIPT_TIMEOUT",
        value_name = "SECS",
        default_value_t = 600,
        value_parser = clap::value_parser!(u64).range(1..=3600)
    )]
    pub script_timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install AgentOS base and/or project components
    Install(commands::install::InstallArgs),

    /// Update existing AgentOS installations
    Update(commands::update::UpdateArgs),

    /// Remove AgentOS installations
    Uninstall(commands::uninstall::UninstallArgs),

    /// Show version and installation status
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            verbose: _,
            home,
            scripts_dir,
            script_timeout,
            command,
        } = self;

        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes },
            settings: SettingsFlags {
                home,
                scripts_dir,
                script_timeout: Duration::from_secs(script_timeout),
            },
        })?;

        match command {
            Command::Install(args) => commands::install::run(&app, &args).await,
            Command::Update(args) => commands::update::run(&app, &args, &GithubReleaseChecker).await,
            Command::Uninstall(args) => commands::uninstall::run(&app, &args),
            Command::Version => commands::version::run(&app),
        }
    }
}
