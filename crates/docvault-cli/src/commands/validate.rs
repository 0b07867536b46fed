//! Upload policy check CLI command.

use clap::Args;

use crate::output::{self, OutputFormat};
use docvault_core::error::AppError;
use docvault_entity::document::FileDescriptor;
use docvault_service::UploadPolicy;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// File name including extension
    pub name: String,

    /// MIME type reported for the file
    #[arg(short, long)]
    pub mime_type: String,

    /// File size in bytes
    #[arg(short, long)]
    pub size: u64,
}

/// Validate a file descriptor against the configured upload policy
pub fn execute(
    args: &ValidateArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let policy = UploadPolicy::from_config(&config.upload);
    let descriptor = FileDescriptor::new(args.name.clone(), args.mime_type.clone(), args.size);

    let status = policy.status(&descriptor);
    match format {
        OutputFormat::Json => output::print_item(&status),
        OutputFormat::Table if status.success => {
            output::print_success(&status.message);
            output::print_kv("Title", descriptor.stem());
        }
        OutputFormat::Table => {}
    }

    if status.success {
        Ok(())
    } else {
        Err(AppError::validation(status.message))
    }
}
