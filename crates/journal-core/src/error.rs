//! Error types for journal-core

use thiserror::Error;

use crate::models::EntryId;

/// Result type alias using journal-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in journal-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// No entry with this id is in the store
    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    /// An id or id prefix matched no entry
    #[error("Entry not found for id/prefix: {0}")]
    UnknownId(String),

    /// An id prefix matched more than one entry
    #[error("{0}")]
    AmbiguousId(String),

    /// An id query that cannot identify any entry
    #[error("Invalid entry id: {0}")]
    InvalidId(String),

    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error only signals a missing entry (a no-op for callers).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
