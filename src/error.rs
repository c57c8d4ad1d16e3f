//! Storage error types

use thiserror::Error;

/// Failures talking to the storage slot
#[derive(Error, Debug)]
pub enum StorageError {
    /// No storage backend (private browsing, storage disabled, no window)
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },

    /// Usually the origin quota being exceeded
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },

    /// Slot content is not a list of activity records
    #[error("malformed content in '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode activity list: {0}")]
    Encode(#[from] serde_json::Error),
}
