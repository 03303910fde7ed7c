use thiserror::Error;

use crate::index::DocId;

/// Errors returned by index storage operations.
///
/// A failed call leaves the store untouched; in particular a rejected
/// registration does not consume a document identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// An argument failed validation (empty document path, empty term).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No registered document carries this identifier.
    #[error("document with id {0} not found")]
    NotFound(DocId),
}

impl StorageError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        StorageError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
