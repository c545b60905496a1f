//! Storage-specific error type wrapping IO and JSON failures.

use pessoas_domain::error::PessoasError;

/// Errors originating from the flat-file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store file could not be read.
    #[error("failed to read store file")]
    Read(#[source] std::io::Error),

    /// The store file could not be written or replaced.
    #[error("failed to write store file")]
    Write(#[source] std::io::Error),

    /// The store file does not hold a JSON array of objects.
    #[error("store file is not a valid collection")]
    Decode(#[source] serde_json::Error),

    /// The collection could not be serialized.
    #[error("failed to serialize collection")]
    Encode(#[source] serde_json::Error),
}

impl From<StorageError> for PessoasError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Read(_) => Self::storage_read(err),
            StorageError::Write(_) => Self::storage_write(err),
            StorageError::Decode(_) | StorageError::Encode(_) => Self::processing(err),
        }
    }
}
