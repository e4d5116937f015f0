//! Error types for document export

use thiserror::Error;

/// Errors that can surface to the caller of an export
///
/// Almost every irregularity in the payload is recovered locally; these are
/// the few cases where the export cannot produce a document.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Every section was filtered out as content-free
    #[error("No section content available to export.")]
    NoExportableContent,

    /// The packaging backend failed to serialize the document
    #[error("Packaging error: {0}")]
    Packaging(String),

    /// Reading the payload or writing the output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid JSON
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),
}
