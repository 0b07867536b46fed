//! Upload policy configuration.

use serde::{Deserialize, Serialize};

/// MIME type for PDF documents.
pub const MIME_PDF: &str = "application/pdf";
/// MIME type for legacy Word documents.
pub const MIME_DOC: &str = "application/msword";
/// MIME type for legacy Excel workbooks.
pub const MIME_XLS: &str = "application/vnd.ms-excel";
/// MIME type for Office Open XML Word documents.
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Upload validation and simulated transfer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// MIME types accepted for upload.
    #[serde(default = "default_allowed_mime_types")]
    pub allowed_mime_types: Vec<String>,
    /// Maximum upload size in bytes (default 10 MiB).
    #[serde(default = "default_max_size")]
    pub max_size_bytes: u64,
    /// Simulated upload round-trip in milliseconds.
    #[serde(default = "default_latency")]
    pub simulated_latency_ms: u64,
}

impl UploadConfig {
    /// Whether the given MIME type is on the allow-list (exact match).
    pub fn is_allowed(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.iter().any(|m| m == mime_type)
    }

    /// The size limit rendered for user-facing messages.
    pub fn max_size_label(&self) -> String {
        size_limit_label(self.max_size_bytes)
    }
}

/// Renders a byte limit as `"<n>MB"` when it is a whole number of
/// mebibytes, otherwise as the exact byte count.
pub fn size_limit_label(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_mime_types: default_allowed_mime_types(),
            max_size_bytes: default_max_size(),
            simulated_latency_ms: default_latency(),
        }
    }
}

fn default_allowed_mime_types() -> Vec<String> {
    vec![
        MIME_PDF.to_string(),
        MIME_DOC.to_string(),
        MIME_XLS.to_string(),
        MIME_DOCX.to_string(),
    ]
}

fn default_max_size() -> u64 {
    10 * 1024 * 1024 // 10 MiB
}

fn default_latency() -> u64 {
    1500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allow_list() {
        let config = UploadConfig::default();
        assert!(config.is_allowed(MIME_PDF));
        assert!(config.is_allowed(MIME_DOCX));
        assert!(!config.is_allowed("image/png"));
        assert!(!config.is_allowed("APPLICATION/PDF"));
    }

    #[test]
    fn test_max_size_label() {
        assert_eq!(UploadConfig::default().max_size_label(), "10MB");
        assert_eq!(size_limit_label(512 * 1024), "524288 bytes");
        assert_eq!(size_limit_label(3 * 1024 * 1024 / 2), "1572864 bytes");
        assert_eq!(size_limit_label(0), "0 bytes");
    }
}
