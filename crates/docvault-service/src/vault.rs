//! The assembled document vault.

use std::sync::Arc;

use tracing::info;

use docvault_core::config::AppConfig;
use docvault_entity::user::UserDirectory;

use crate::document::{AccessService, DocumentService, TagService};
use crate::folder::FolderService;
use crate::store::DocumentStore;
use crate::upload::{UploadForm, UploadPolicy, UploadService};

/// One store plus every service operating on it, wired from configuration.
#[derive(Debug, Clone)]
pub struct DocVault {
    store: Arc<DocumentStore>,
    documents: DocumentService,
    tags: TagService,
    access: AccessService,
    folders: FolderService,
    uploads: UploadService,
    users: Arc<UserDirectory>,
}

impl DocVault {
    /// Builds a vault holding only the root folder.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_store(config, Arc::new(DocumentStore::new()))
    }

    /// Builds a vault around an existing store.
    pub fn with_store(config: &AppConfig, store: Arc<DocumentStore>) -> Self {
        let policy = UploadPolicy::from_config(&config.upload);
        let documents = DocumentService::new(Arc::clone(&store), policy);
        let uploads = UploadService::from_config(documents.clone(), &config.upload);
        let users = Arc::new(UserDirectory::from_config(&config.users));

        info!(
            delete_policy = %config.folders.delete_policy,
            max_size_bytes = config.upload.max_size_bytes,
            latency_ms = config.upload.simulated_latency_ms,
            users = users.len(),
            "Document vault initialized"
        );

        Self {
            tags: TagService::new(Arc::clone(&store)),
            access: AccessService::new(Arc::clone(&store)),
            folders: FolderService::new(Arc::clone(&store), config.folders.delete_policy),
            documents,
            uploads,
            users,
            store,
        }
    }

    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    pub fn documents(&self) -> &DocumentService {
        &self.documents
    }

    pub fn tags(&self) -> &TagService {
        &self.tags
    }

    pub fn access(&self) -> &AccessService {
        &self.access
    }

    pub fn folders(&self) -> &FolderService {
        &self.folders
    }

    pub fn uploads(&self) -> &UploadService {
        &self.uploads
    }

    /// Users that may be granted permissions.
    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    /// A fresh upload form using this vault's upload policy.
    pub fn new_upload_form(&self) -> UploadForm {
        UploadForm::new(self.documents.policy().clone())
    }
}
