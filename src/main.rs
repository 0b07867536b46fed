//! DocVault session host.
//!
//! Reads line-delimited JSON commands from stdin and answers each with one
//! JSON outcome line on stdout. Logs go to stderr so they never interleave
//! with outcomes.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing_subscriber::{EnvFilter, fmt};

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_core::events::DomainEvent;
use docvault_service::{CommandDispatcher, DocVault};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from the optional file named by `DOCVAULT_CONFIG`
/// plus environment overrides
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path = std::env::var("DOCVAULT_CONFIG").ok();
    AppConfig::load(config_path.as_deref())
}

/// Initialize tracing/logging on stderr
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Main session loop
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DocVault session v{}", env!("CARGO_PKG_VERSION"));

    let vault = DocVault::new(&config);
    let event_logger = spawn_event_logger(vault.store().subscribe_events());
    let mut dispatcher = CommandDispatcher::new(vault);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received");
                break;
            }
        };

        // EOF
        let Some(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        // A signal during a deferred upload abandons it; nothing is stored.
        let outcome = tokio::select! {
            outcome = dispatcher.dispatch_line(&line) => outcome,
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received, abandoning in-flight command");
                break;
            }
        };
        let mut out = serde_json::to_vec(&outcome)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    event_logger.abort();
    tracing::info!("Session ended");
    Ok(())
}

/// Log every domain event at debug level
fn spawn_event_logger(mut events: broadcast::Receiver<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => tracing::debug!(
                    event_id = %event.id,
                    payload = ?event.payload,
                    "Domain event"
                ),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event logger fell behind")
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
