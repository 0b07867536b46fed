//! Command script replay.
//!
//! A script is a file of JSON commands, one per line, in the same format
//! the session host reads from stdin. Blank lines and lines starting with
//! `#` are skipped.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use docvault_core::error::{AppError, ErrorKind};
use docvault_entity::document::Document;
use docvault_entity::folder::Folder;
use docvault_service::command::parse_command;
use docvault_service::{CommandDispatcher, CommandOutcome, DocVault, StoreSnapshot};

/// Arguments for the replay command
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Path to the command script
    pub file: String,

    /// Stop at the first failed command
    #[arg(long)]
    pub stop_on_error: bool,

    /// Commit uploads immediately instead of waiting the simulated latency
    #[arg(long)]
    pub no_delay: bool,
}

/// One replayed command for table output
#[derive(Debug, Serialize, Tabled)]
struct ReplayRow {
    /// Script line number
    line: usize,
    /// Command name
    command: String,
    /// Whether it succeeded
    ok: bool,
    /// Feedback message
    message: String,
}

impl ReplayRow {
    fn new(line: usize, command: impl Into<String>, outcome: &CommandOutcome) -> Self {
        Self {
            line,
            command: command.into(),
            ok: outcome.ok,
            message: outcome.message.clone().unwrap_or_default(),
        }
    }
}

/// Full replay result for JSON output
#[derive(Debug, Serialize)]
struct ReplayReport<'a> {
    /// One entry per executed command
    results: &'a [ReplayRow],
    /// Store state after the script
    snapshot: &'a StoreSnapshot,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
}

/// Document display row
#[derive(Debug, Serialize, Tabled)]
struct DocumentRow {
    /// Document ID
    id: String,
    /// Title
    title: String,
    /// MIME type
    #[tabled(rename = "type")]
    file_type: String,
    /// Human-readable size
    size: String,
    /// Comma-separated tags
    tags: String,
    /// Access level
    access: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id.to_string(),
            name: f.name.clone(),
        }
    }
}

impl From<&Document> for DocumentRow {
    fn from(d: &Document) -> Self {
        Self {
            id: d.id.to_string(),
            title: d.title.clone(),
            file_type: d.file_type.clone(),
            size: d.display_size(),
            tags: d.tags.iter().collect::<Vec<_>>().join(", "),
            access: d.access.to_string(),
        }
    }
}

/// Execute a replay
pub async fn execute(
    args: &ReplayArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;
    if args.no_delay {
        config.upload.simulated_latency_ms = 0;
    }

    let script = tokio::fs::read_to_string(&args.file)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Io,
                format!("Failed to read '{}': {}", args.file, e),
                e,
            )
        })?;

    let mut dispatcher = CommandDispatcher::new(DocVault::new(&config));
    let rows = run_script(&mut dispatcher, &script, args.stop_on_error).await;
    let failed = rows.iter().filter(|r| !r.ok).count();
    let snapshot = dispatcher.vault().store().snapshot();

    match format {
        OutputFormat::Json => output::print_item(&ReplayReport {
            results: &rows,
            snapshot: &snapshot,
        }),
        OutputFormat::Table => print_tables(&rows, &snapshot),
    }

    if failed > 0 {
        return Err(AppError::validation(format!(
            "{failed} of {} commands failed",
            rows.len()
        )));
    }
    Ok(())
}

/// Runs each script line through the dispatcher
async fn run_script(
    dispatcher: &mut CommandDispatcher,
    script: &str,
    stop_on_error: bool,
) -> Vec<ReplayRow> {
    let mut rows = Vec::new();

    for (idx, raw) in script.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let row = match parse_command(line) {
            Ok(command) => {
                let name = command.name();
                let outcome = dispatcher.dispatch(command).await;
                ReplayRow::new(idx + 1, name, &outcome)
            }
            Err(e) => ReplayRow::new(idx + 1, "-", &CommandOutcome::failure(&e)),
        };

        let stop = stop_on_error && !row.ok;
        rows.push(row);
        if stop {
            tracing::warn!(line = idx + 1, "Replay stopped at failed command");
            break;
        }
    }

    rows
}

/// Print the results table followed by the current folder listing
fn print_tables(rows: &[ReplayRow], snapshot: &StoreSnapshot) {
    output::print_list(rows, OutputFormat::Table);

    let current = snapshot
        .current_folder()
        .map(|f| f.name.as_str())
        .unwrap_or("(missing)");
    let listing = snapshot.list_children(snapshot.current_folder_id);
    println!();
    output::print_kv("Current folder", current);

    let folders: Vec<FolderRow> = listing.subfolders.iter().map(FolderRow::from).collect();
    let documents: Vec<DocumentRow> = listing.documents.iter().map(DocumentRow::from).collect();
    println!("\nFolders");
    output::print_list(&folders, OutputFormat::Table);
    println!("\nDocuments");
    output::print_list(&documents, OutputFormat::Table);
}
