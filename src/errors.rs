//! Error kinds callers branch on
//!
//! Everything else travels as `anyhow::Error` with context attached; these
//! variants are raised at the storage boundaries and recovered with
//! `anyhow::Error::downcast_ref::<GrootError>()`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrootError {
    /// No object was ever stored under this key
    #[error("object not found: {0}")]
    NotFound(String),

    /// The file to stage is missing or unreadable
    #[error("unable to read file {path}: {reason}")]
    ReadError { path: String, reason: String },

    /// HEAD or a parent link names an object that does not exist
    #[error("corrupt history: commit {missing} referenced by {referenced_by} is missing")]
    CorruptHistory {
        missing: String,
        referenced_by: String,
    },

    #[error("repository already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("not a groot repository: {0}")]
    NotInitialized(String),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("short object id {prefix} is ambiguous, candidates are: {}", candidates.join(", "))]
    AmbiguousObjectId {
        prefix: String,
        candidates: Vec<String>,
    },
}

impl GrootError {
    /// Whether `error` wraps a `GrootError::NotFound`
    pub fn is_not_found(error: &anyhow::Error) -> bool {
        matches!(
            error.downcast_ref::<GrootError>(),
            Some(GrootError::NotFound(_))
        )
    }
}
