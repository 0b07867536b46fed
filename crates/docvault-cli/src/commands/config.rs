//! Configuration inspection CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use docvault_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            match format {
                OutputFormat::Json => output::print_item(&config),
                OutputFormat::Table => {
                    println!("Configuration ({})", config_path.unwrap_or("defaults"));
                    output::print_kv(
                        "Allowed MIME types",
                        &config.upload.allowed_mime_types.join(", "),
                    );
                    output::print_kv(
                        "Max upload size",
                        &format!(
                            "{} bytes ({})",
                            config.upload.max_size_bytes,
                            config.upload.max_size_label()
                        ),
                    );
                    output::print_kv(
                        "Simulated latency",
                        &format!("{} ms", config.upload.simulated_latency_ms),
                    );
                    output::print_kv("Folder delete policy", config.folders.delete_policy.as_str());
                    output::print_kv("Users", &config.users.len().to_string());
                    output::print_kv(
                        "Logging",
                        &format!("{} ({})", config.logging.level, config.logging.format),
                    );
                }
            }
        }
    }

    Ok(())
}
