//! Applies commands to a vault and its upload form.

use tracing::{debug, warn};

use docvault_core::result::AppResult;
use docvault_core::types::{DocumentId, UserId};
use docvault_entity::document::{Document, DocumentMetadata, FileDescriptor};

use super::outcome::CommandOutcome;
use super::parser::parse_command;
use super::types::Command;
use crate::upload::UploadForm;
use crate::vault::DocVault;

/// Drives one vault session: the shared services plus the single upload
/// form a session owns.
#[derive(Debug)]
pub struct CommandDispatcher {
    vault: DocVault,
    form: UploadForm,
}

impl CommandDispatcher {
    /// Creates a dispatcher with an idle upload form.
    pub fn new(vault: DocVault) -> Self {
        let form = vault.new_upload_form();
        Self { vault, form }
    }

    pub fn vault(&self) -> &DocVault {
        &self.vault
    }

    pub fn form(&self) -> &UploadForm {
        &self.form
    }

    /// Parses and applies one JSON command line.
    pub async fn dispatch_line(&mut self, raw: &str) -> CommandOutcome {
        match parse_command(raw) {
            Ok(command) => self.dispatch(command).await,
            Err(err) => {
                warn!(error = %err, "Rejected command line");
                CommandOutcome::failure(&err)
            }
        }
    }

    /// Applies a command. Failures are reported in the outcome, never
    /// propagated.
    pub async fn dispatch(&mut self, command: Command) -> CommandOutcome {
        let name = command.name();
        debug!(command = name, "Dispatching command");

        match self.apply(command).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(command = name, kind = %err.kind, error = %err.message, "Command failed");
                CommandOutcome::failure(&err)
            }
        }
    }

    async fn apply(&mut self, command: Command) -> AppResult<CommandOutcome> {
        let vault = &self.vault;
        match command {
            Command::SelectFile {
                name,
                mime_type,
                size_bytes,
            } => {
                let status = self
                    .form
                    .select_file(FileDescriptor::new(name, mime_type, size_bytes))?;
                let message = status.message.clone();
                CommandOutcome::success(message).with_payload(&self.form)
            }
            Command::ClearFile => {
                self.form.clear_file()?;
                CommandOutcome::ok().with_payload(&self.form)
            }
            Command::SetTitle { title } => {
                self.form.set_title(title)?;
                CommandOutcome::ok().with_payload(&self.form)
            }
            Command::SetDescription { description } => {
                self.form.set_description(description)?;
                CommandOutcome::ok().with_payload(&self.form)
            }
            Command::SetTags { tags } => {
                self.form.set_tags_text(tags)?;
                CommandOutcome::ok().with_payload(&self.form)
            }
            Command::Submit { folder_id } => {
                let document = vault.uploads().submit(&mut self.form, folder_id).await?;
                CommandOutcome::success(format!("Uploaded '{}'", document.title))
                    .with_payload(&document)
            }
            Command::Form => CommandOutcome::ok().with_payload(&self.form),
            Command::CreateDocument {
                name,
                mime_type,
                size_bytes,
                title,
                description,
                tags,
                folder_id,
            } => {
                let descriptor = FileDescriptor::new(name, mime_type, size_bytes);
                let metadata = DocumentMetadata {
                    title,
                    description,
                    tags_text: tags,
                };
                let document = vault
                    .documents()
                    .create_document(&descriptor, &metadata, folder_id)?;
                CommandOutcome::success(format!("Created '{}'", document.title))
                    .with_payload(&document)
            }
            Command::DeleteDocument { document_id } => {
                if vault.documents().delete_document(document_id) {
                    Ok(CommandOutcome::success("Document deleted"))
                } else {
                    Ok(not_found_noop(document_id))
                }
            }
            Command::Select { document_id } => {
                if let Some(id) = document_id.filter(|id| vault.documents().get(*id).is_none()) {
                    return Ok(not_found_noop(id));
                }
                vault.documents().select(document_id);
                CommandOutcome::ok().with_payload(&vault.documents().selected())
            }
            Command::AddTag { document_id, tag } => {
                document_outcome(vault.tags().add_tag(document_id, &tag), document_id)
            }
            Command::RemoveTag { document_id, tag } => {
                document_outcome(vault.tags().remove_tag(document_id, &tag), document_id)
            }
            Command::SetAccess {
                document_id,
                access,
            } => document_outcome(vault.access().set_access(document_id, access), document_id),
            Command::AssignPermission {
                document_id,
                user_id,
                level,
            } => {
                let user_id = UserId::new(user_id.as_str().trim());
                if user_id.as_str().is_empty() {
                    return Ok(CommandOutcome::success("No user selected; nothing changed"));
                }
                let message = format!(
                    "{}: {}",
                    vault.users().display_name(&user_id),
                    level.label()
                );
                match vault
                    .access()
                    .assign_permission(document_id, user_id, level)
                {
                    Some(document) => CommandOutcome::success(message).with_payload(&document),
                    None => Ok(not_found_noop(document_id)),
                }
            }
            Command::RevokePermission {
                document_id,
                user_id,
            } => document_outcome(
                vault.access().revoke_permission(document_id, &user_id),
                document_id,
            ),
            Command::CreateFolder { name, parent_id } => {
                match vault.folders().create_folder(&name, parent_id)? {
                    Some(folder) => CommandOutcome::success(format!("Created folder '{}'", folder.name))
                        .with_payload(&folder),
                    None => Ok(CommandOutcome::success("Folder name is blank; nothing created")),
                }
            }
            Command::DeleteFolder { folder_id } => {
                let existed = vault.folders().get(folder_id).is_some();
                vault.folders().delete_folder(folder_id)?;
                if existed {
                    Ok(CommandOutcome::success("Folder deleted"))
                } else {
                    Ok(CommandOutcome::success(format!(
                        "Folder {folder_id} not found; nothing changed"
                    )))
                }
            }
            Command::Navigate { folder_id } => {
                vault.folders().navigate(folder_id);
                CommandOutcome::ok().with_payload(&vault.folders().list_children(folder_id))
            }
            Command::List { folder_id } => {
                let folder_id = folder_id.unwrap_or_else(|| vault.folders().current_folder_id());
                CommandOutcome::ok().with_payload(&vault.folders().list_children(folder_id))
            }
            Command::ResolveParent { folder_id } => {
                CommandOutcome::ok().with_payload(&vault.folders().resolve_parent(folder_id))
            }
            Command::Snapshot => CommandOutcome::ok().with_payload(&vault.store().snapshot()),
            Command::Users => CommandOutcome::ok().with_payload(vault.users()),
        }
    }
}

fn not_found_noop(document_id: DocumentId) -> CommandOutcome {
    CommandOutcome::success(format!("Document {document_id} not found; nothing changed"))
}

fn document_outcome(
    document: Option<Document>,
    document_id: DocumentId,
) -> AppResult<CommandOutcome> {
    match document {
        Some(document) => CommandOutcome::ok().with_payload(&document),
        None => Ok(not_found_noop(document_id)),
    }
}
