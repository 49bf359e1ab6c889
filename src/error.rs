//! Storage Errors

use thiserror::Error;

/// Failures talking to the key-value store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Local storage is unavailable: {message}")]
    Unavailable { message: String },

    #[error("Failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write key {key}: {message}")]
    Write { key: String, message: String },
}

pub type StorageResult<T> = Result<T, StorageError>;
