//! Coarse document visibility.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visibility flag on a document. Not an enforcement mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Only the owner.
    #[default]
    Private,
    /// Users with an explicit permission entry.
    Restricted,
    /// Anyone.
    Public,
}

impl AccessLevel {
    /// All levels, from most to least restrictive.
    pub const ALL: [AccessLevel; 3] = [Self::Private, Self::Restricted, Self::Public];

    /// Return the access level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Restricted => "restricted",
            Self::Public => "public",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = docvault_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "private" => Ok(Self::Private),
            "restricted" => Ok(Self::Restricted),
            "public" => Ok(Self::Public),
            _ => Err(docvault_core::AppError::validation(format!(
                "Invalid access level: '{s}'. Expected one of: private, restricted, public"
            ))),
        }
    }
}
