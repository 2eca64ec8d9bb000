//! Error types for snapshot feed operations.

use thiserror::Error;

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while reading or writing a snapshot feed.
///
/// Missing metric values are never errors; they resolve to `None`. Only
/// input the engine cannot interpret ends up here.
#[derive(Debug, Error)]
pub enum DataError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON feed could not be parsed
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV feed could not be parsed
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// File extension does not map to a known feed format
    #[error("Unsupported feed format: {0}")]
    UnsupportedFormat(String),
}
