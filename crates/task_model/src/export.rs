//! Export format token and bookkeeping record

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Requested output format for a task export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain UTF-8 text
    Text,
    /// Minimal single-page PDF
    Pdf,
}

impl ExportFormat {
    /// File extension for the format, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Record of a completed export.
///
/// Created only after the export bytes have been written to storage and
/// handed to the application's persistence layer for bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRecord {
    /// User who requested the export
    pub user_id: Uuid,
    /// Task that was exported
    pub task_id: Uuid,
    /// Format that was produced
    pub format: ExportFormat,
    /// Clock capture the export ran with
    pub requested_at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extension() {
        assert_eq!(ExportFormat::Text.extension(), "txt");
        assert_eq!(ExportFormat::Pdf.extension(), "pdf");
    }

    #[test]
    fn test_format_serde_tag() {
        assert_eq!(serde_json::to_string(&ExportFormat::Pdf).unwrap(), "\"pdf\"");
    }
}
