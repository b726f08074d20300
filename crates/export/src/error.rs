//! Export error types.

use thiserror::Error;

/// Errors that can occur while exporting the view.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The PDF backend failed to build or serialize the document.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// The layout leaves nothing to print on.
    #[error("Empty layout: {0}")]
    EmptyLayout(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
