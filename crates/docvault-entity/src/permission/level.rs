//! Per-user permission levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Capability granted to a single user on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    /// Can view the document.
    View,
    /// Can edit the document.
    Edit,
    /// Can download the document.
    Download,
}

impl PermissionLevel {
    /// Return the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Download => "download",
        }
    }

    /// Human-readable label, e.g. `"Can edit"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::View => "Can view",
            Self::Edit => "Can edit",
            Self::Download => "Can download",
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PermissionLevel {
    type Err = docvault_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "download" => Ok(Self::Download),
            _ => Err(docvault_core::AppError::validation(format!(
                "Invalid permission level: '{s}'. Expected one of: view, edit, download"
            ))),
        }
    }
}
