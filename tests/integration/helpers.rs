//! Shared test helpers for integration tests.

#![allow(dead_code)]

use docvault_core::config::{AppConfig, FolderDeletePolicy};
use docvault_core::types::{DocumentId, FolderId};
use docvault_entity::document::{DocumentMetadata, FileDescriptor};
use docvault_service::{CommandDispatcher, CommandOutcome, DocVault};

pub const MIB: u64 = 1024 * 1024;

/// Test vault context
pub struct TestVault {
    /// The vault under test
    pub vault: DocVault,
    /// The config it was built from
    pub config: AppConfig,
}

impl TestVault {
    /// Create a vault with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a vault using the given folder delete policy
    pub fn with_policy(policy: FolderDeletePolicy) -> Self {
        let mut config = AppConfig::default();
        config.folders.delete_policy = policy;
        Self::with_config(config)
    }

    /// Create a vault from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            vault: DocVault::new(&config),
            config,
        }
    }

    /// Create a folder, panicking on failure
    pub fn mkdir(&self, name: &str, parent: FolderId) -> FolderId {
        self.vault
            .folders()
            .create_folder(name, Some(parent))
            .expect("create folder")
            .expect("non-blank name")
            .id
    }

    /// Register a small PDF in the given folder
    pub fn upload_pdf(&self, name: &str, folder: FolderId) -> DocumentId {
        self.vault
            .documents()
            .create_document(
                &FileDescriptor::new(name, "application/pdf", 1024),
                &DocumentMetadata::empty(),
                Some(folder),
            )
            .expect("create document")
            .id
    }

    /// A dispatcher over this vault
    pub fn dispatcher(&self) -> CommandDispatcher {
        CommandDispatcher::new(self.vault.clone())
    }
}

/// Send a JSON command through a dispatcher
pub async fn send(dispatcher: &mut CommandDispatcher, command: serde_json::Value) -> CommandOutcome {
    dispatcher.dispatch_line(&command.to_string()).await
}
