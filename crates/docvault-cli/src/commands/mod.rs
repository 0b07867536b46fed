//! CLI command definitions and dispatch.

pub mod config;
pub mod replay;
pub mod users;
pub mod validate;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use docvault_core::config::AppConfig;
use docvault_core::error::AppError;

/// DocVault: in-memory document manager
#[derive(Debug, Parser)]
#[command(name = "docvault-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file; built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Configuration inspection
    Config(config::ConfigArgs),
    /// Check a file against the upload policy
    Validate(validate::ValidateArgs),
    /// List users available as permission targets
    Users,
    /// Run a JSON-lines command script against a fresh vault
    Replay(replay::ReplayArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config_path = self.config.as_deref();
        match &self.command {
            Commands::Config(args) => config::execute(args, config_path, self.format),
            Commands::Validate(args) => validate::execute(args, config_path, self.format),
            Commands::Users => users::execute(config_path, self.format),
            Commands::Replay(args) => replay::execute(args, config_path, self.format).await,
        }
    }
}

/// Helper: load configuration from the optional file plus environment
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}
