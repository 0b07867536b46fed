//! User directory configuration.

use serde::{Deserialize, Serialize};

/// A user entry offered as a permission target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntryConfig {
    /// Opaque user identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl UserEntryConfig {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// The built-in directory used when no users are configured.
pub fn default_users() -> Vec<UserEntryConfig> {
    vec![
        UserEntryConfig::new("user1", "John Doe"),
        UserEntryConfig::new("user2", "Jane Smith"),
        UserEntryConfig::new("user3", "Mike Johnson"),
    ]
}
