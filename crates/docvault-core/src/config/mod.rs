//! Application configuration schemas.
//!
//! Configuration is deserialized via the `config` crate from built-in
//! defaults, an optional TOML file, and `DOCVAULT__`-prefixed environment
//! variables, in that order of precedence.

pub mod folders;
pub mod logging;
pub mod upload;
pub mod users;

use serde::{Deserialize, Serialize};

pub use self::folders::{FolderConfig, FolderDeletePolicy};
pub use self::logging::LoggingConfig;
pub use self::upload::UploadConfig;
pub use self::users::UserEntryConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upload validation settings.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Folder behavior settings.
    #[serde(default)]
    pub folders: FolderConfig,
    /// Users that can be granted document permissions.
    #[serde(default = "users::default_users")]
    pub users: Vec<UserEntryConfig>,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload: UploadConfig::default(),
            folders: FolderConfig::default(),
            users: users::default_users(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// When `path` is given the file must exist; otherwise only defaults and
    /// environment variables apply.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("DOCVAULT")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("upload.allowed_mime_types")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app_config.validate()?;
        tracing::debug!(
            policy = %app_config.folders.delete_policy,
            max_size_bytes = app_config.upload.max_size_bytes,
            "Configuration loaded"
        );
        Ok(app_config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.upload.allowed_mime_types.is_empty() {
            return Err(AppError::configuration(
                "upload.allowed_mime_types must not be empty",
            ));
        }
        if self.upload.max_size_bytes == 0 {
            return Err(AppError::configuration(
                "upload.max_size_bytes must be greater than zero",
            ));
        }
        if let Some(user) = self.users.iter().find(|u| u.id.trim().is_empty()) {
            return Err(AppError::configuration(format!(
                "User '{}' has an empty id",
                user.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize_from_empty_document() {
        let config: AppConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.upload.max_size_bytes, 10 * 1024 * 1024);
        assert_eq!(config.upload.allowed_mime_types.len(), 4);
        assert_eq!(config.folders.delete_policy, FolderDeletePolicy::Reject);
        assert_eq!(config.users.len(), 3);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_override() {
        let config: AppConfig = serde_json::from_str(
            r#"{"folders": {"delete_policy": "cascade"}, "upload": {"simulated_latency_ms": 0}}"#,
        )
        .expect("deserialize");
        assert_eq!(config.folders.delete_policy, FolderDeletePolicy::Cascade);
        assert_eq!(config.upload.simulated_latency_ms, 0);
        assert_eq!(config.upload.max_size_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_validate_rejects_empty_allow_list() {
        let mut config = AppConfig::default();
        config.upload.allowed_mime_types.clear();
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_load_without_file() {
        let config = AppConfig::load(None).expect("load defaults");
        assert_eq!(config.upload.allowed_mime_types.len(), 4);
    }
}
