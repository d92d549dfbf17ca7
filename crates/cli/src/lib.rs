//! Kiln CLI library
//!
//! Command-line access to template hooks: list what a template defines and
//! run a single lifecycle hook against a project directory.

pub mod cmd;
pub mod context;
pub mod error;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kiln - project template hooks
#[derive(Parser, Debug)]
#[command(name = "kiln")]
#[command(about = "Discover and run project template hooks")]
#[command(version)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, env = "KILN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "KILN_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for kiln CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage template hooks (list, run)
    #[command(subcommand)]
    Hooks(HooksCommands),
}

/// Commands for inspecting and executing hooks
#[derive(Subcommand, Debug)]
pub enum HooksCommands {
    /// List the hooks a template defines
    List {
        /// Template root containing the `hooks/` directory
        #[arg(short, long, default_value = ".", value_name = "DIR")]
        template: PathBuf,
    },

    /// Run a single hook
    Run(cmd::hooks::RunCommand),
}

/// Main entry point for the CLI logic
pub fn run(cli: Cli) -> Result<()> {
    kiln_config::logging::init(cli.verbose, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    let config = kiln_config::Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Hooks(HooksCommands::List { template }) => cmd::hooks::run_list(&template),
        Commands::Hooks(HooksCommands::Run(run_cmd)) => run_cmd.execute(&config),
    }
}
