//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PessoasError`] via `#[from]`.

use std::fmt;

use crate::id::PersonId;

/// Boxed source error carried by infrastructure failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum PessoasError {
    /// The client sent something we cannot accept.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// No record matches the requested id.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The store could not be read or written.
    #[error("storage {operation} failed")]
    Storage {
        operation: StorageOperation,
        #[source]
        source: BoxError,
    },

    /// Stored data could not be transformed (e.g. the store file is corrupt).
    #[error("failed to process stored data")]
    Processing(#[source] BoxError),
}

impl PessoasError {
    /// Wrap a failure that happened while reading the store.
    pub fn storage_read(source: impl Into<BoxError>) -> Self {
        Self::Storage {
            operation: StorageOperation::Read,
            source: source.into(),
        }
    }

    /// Wrap a failure that happened while writing the store.
    pub fn storage_write(source: impl Into<BoxError>) -> Self {
        Self::Storage {
            operation: StorageOperation::Write,
            source: source.into(),
        }
    }

    /// Wrap a failure that happened while transforming stored data.
    pub fn processing(source: impl Into<BoxError>) -> Self {
        Self::Processing(source.into())
    }
}

/// Client-side input errors.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("request body is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("invalid id {0}")]
    InvalidId(String),
}

/// A lookup by id found nothing.
#[derive(Debug, thiserror::Error)]
#[error("no record with id {id}")]
pub struct NotFoundError {
    pub id: PersonId,
}

/// Which half of a read-modify-write cycle failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOperation {
    Read,
    Write,
}

impl fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}
