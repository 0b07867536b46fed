//! Parsing of line-delimited JSON commands.

use docvault_core::error::{AppError, ErrorKind};

use super::types::Command;

/// Maximum accepted length of one command line in bytes.
const MAX_COMMAND_SIZE: usize = 65_536;

/// Parses one JSON command line.
pub fn parse_command(raw: &str) -> Result<Command, AppError> {
    if raw.len() > MAX_COMMAND_SIZE {
        return Err(AppError::validation(format!(
            "Command exceeds maximum size of {MAX_COMMAND_SIZE} bytes"
        )));
    }

    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::validation("Empty command"));
    }

    serde_json::from_str(raw).map_err(|e| {
        AppError::with_source(ErrorKind::Validation, format!("Invalid command: {e}"), e)
    })
}
