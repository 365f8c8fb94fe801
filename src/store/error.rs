//! Error types for item storage.

use thiserror::Error;

/// Classified outcome of a failed storage call.
///
/// Callers branch on the variant (see [`StoreError::is_not_found`]); the
/// message text is for logs only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record exists for the requested id.
    #[error("record not found")]
    NotFound,

    /// The storage backend could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The storage backend rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
