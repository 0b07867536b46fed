//! User directory CLI command.

use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use docvault_core::error::AppError;
use docvault_entity::user::UserDirectory;

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Display name
    name: String,
}

/// List the configured user directory
pub fn execute(config_path: Option<&str>, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let directory = UserDirectory::from_config(&config.users);

    let rows: Vec<UserRow> = directory
        .iter()
        .map(|u| UserRow {
            id: u.id.to_string(),
            name: u.display_name.clone(),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
