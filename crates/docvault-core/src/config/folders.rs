//! Folder behavior configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// What happens to a folder's contents when the folder is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderDeletePolicy {
    /// Refuse to delete a folder that still has subfolders or documents.
    #[default]
    Reject,
    /// Delete the folder, every descendant folder, and all their documents.
    Cascade,
    /// Delete only the folder record, leaving contents with a dangling parent.
    Orphan,
}

impl FolderDeletePolicy {
    /// Return the policy as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Cascade => "cascade",
            Self::Orphan => "orphan",
        }
    }
}

impl fmt::Display for FolderDeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FolderDeletePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "cascade" => Ok(Self::Cascade),
            "orphan" => Ok(Self::Orphan),
            _ => Err(AppError::validation(format!(
                "Invalid folder delete policy: '{s}'. Expected one of: reject, cascade, orphan"
            ))),
        }
    }
}

/// Folder settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderConfig {
    /// Policy applied by folder deletion.
    #[serde(default)]
    pub delete_policy: FolderDeletePolicy,
}
