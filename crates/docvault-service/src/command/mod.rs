//! Serializable commands over the vault and their dispatcher.
//!
//! Each [`Command`] mirrors one store or upload-form operation. The
//! session host and the CLI `replay` subcommand feed commands through a
//! [`CommandDispatcher`] and report one [`CommandOutcome`] per command.

pub mod dispatcher;
pub mod outcome;
pub mod parser;
pub mod types;

pub use dispatcher::CommandDispatcher;
pub use outcome::CommandOutcome;
pub use parser::parse_command;
pub use types::Command;
