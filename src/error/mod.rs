//! Error handling for the revenue report engine.

use thiserror::Error;

/// Specialized error type for report generation
#[derive(Debug, Error)]
pub enum RevenueError {
    /// Error reading from the backing patient/catalog store
    #[error("Store error: {0}")]
    Store(String),
    /// A report date that does not parse as DD-MM-YYYY
    #[error("Invalid report date '{input}': {source}")]
    InvalidDate {
        /// The rejected input string
        input: String,
        /// The underlying chrono parse failure
        source: chrono::ParseError,
    },
    /// Error opening or reading a dataset file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error decoding a JSON dataset
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RevenueError {
    /// Create a store error from any displayable cause
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

/// Result type for report generation operations
pub type Result<T> = std::result::Result<T, RevenueError>;
