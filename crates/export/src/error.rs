//! Error types for export operations

use thiserror::Error;

/// Error type for export operations
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload contains a character the page's text encoding cannot show
    #[error("unencodable character {0:?} in export payload")]
    Encoding(char),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
