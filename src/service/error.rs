//! Error types for item operations.

use thiserror::Error;

use crate::model::ValidationError;
use crate::store::StoreError;

/// Errors returned by [`ItemService`](crate::service::ItemService).
///
/// Storage details never leak through: a missing record becomes
/// [`ItemError::ItemNotFound`], anything else from storage becomes
/// [`ItemError::Internal`] tagged with the operation that failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The caller sent malformed, missing or out-of-range data.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// No item exists with the requested id.
    #[error("item not found")]
    ItemNotFound,

    /// Storage failed for a reason other than a missing record.
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ItemError {
    pub(crate) fn internal(context: &'static str) -> impl FnOnce(StoreError) -> ItemError {
        move |source| ItemError::Internal { context, source }
    }
}
