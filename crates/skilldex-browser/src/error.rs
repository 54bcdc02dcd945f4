//! Error types for the catalog browser

use thiserror::Error;

/// Result type for browser operations
pub type Result<T> = std::result::Result<T, BrowserError>;

/// Errors that can occur while loading the index artifact
///
/// The load happens once at startup; everything downstream is infallible
/// reads over the in-memory index.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The index artifact could not be read
    #[error("Skills index unavailable: {0}")]
    IndexUnavailable(#[from] std::io::Error),

    /// The index artifact is not a valid index document
    #[error("Malformed skills index: {0}")]
    MalformedIndex(#[from] serde_json::Error),
}
