//! Error types for the index builder

use std::path::PathBuf;
use thiserror::Error;

/// Result type for index operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors that can occur while building or writing an index
#[derive(Debug, Error)]
pub enum IndexError {
    // Document errors
    /// A SKILL.md document could not be decoded
    ///
    /// Fatal to the whole build: partial catalogs are never published.
    #[error("Malformed document {path}: {reason}")]
    MalformedDocument {
        /// Path of the offending document
        path: PathBuf,
        /// What went wrong with the header block
        reason: String,
    },

    /// Frontmatter block opened with `---` but never closed
    #[error("Unterminated frontmatter block (missing closing ---)")]
    UnterminatedHeader,

    /// YAML frontmatter parse error
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // Catalog errors
    /// Catalog root is missing or not a directory
    #[error("Invalid catalog root: {0}")]
    InvalidRoot(String),

    // I/O errors
    /// Filesystem I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Walkdir error during catalog traversal
    #[error("Catalog traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Index serialization error
    #[error("Index serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IndexError {
    /// Create a new `MalformedDocument` error
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new `InvalidRoot` error
    pub fn invalid_root(msg: impl Into<String>) -> Self {
        Self::InvalidRoot(msg.into())
    }

    /// Attach a document path to a parse error, producing `MalformedDocument`
    #[must_use]
    pub fn for_document(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::MalformedDocument { .. } => self,
            other => Self::malformed(path, other.to_string()),
        }
    }
}
