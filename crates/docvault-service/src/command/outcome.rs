//! The per-command result reported to the caller.

use serde::{Deserialize, Serialize};

use docvault_core::error::{AppError, ErrorKind};

/// What happened when a command was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOutcome {
    /// Whether the command succeeded. No-ops on unknown ids count as
    /// success.
    pub ok: bool,
    /// Error category for failed commands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    /// Human-readable feedback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Resulting data, if the command produces any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl CommandOutcome {
    /// A success with no message or payload.
    pub fn ok() -> Self {
        Self {
            ok: true,
            kind: None,
            message: None,
            payload: None,
        }
    }

    /// A success carrying a message.
    pub fn success(message: impl Into<String>) -> Self {
        Self::ok().with_message(message)
    }

    /// A failure built from an error.
    pub fn failure(err: &AppError) -> Self {
        Self {
            ok: false,
            kind: Some(err.kind),
            message: Some(err.message.clone()),
            payload: None,
        }
    }

    /// Sets the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches a serialized payload.
    pub fn with_payload<T: Serialize>(mut self, payload: &T) -> Result<Self, AppError> {
        self.payload = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// The failure kind, if any.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_serialization() {
        let outcome = CommandOutcome::failure(&AppError::not_found("Folder not found"));
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(
            json,
            r#"{"ok":false,"kind":"NotFound","message":"Folder not found"}"#
        );
    }

    #[test]
    fn test_success_omits_empty_fields() {
        let json = serde_json::to_string(&CommandOutcome::ok()).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }
}
