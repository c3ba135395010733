//! Error types for jeonlog-core

use thiserror::Error;

/// Result type alias using jeonlog-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jeonlog-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A persisted blob exists but does not match the expected shape
    #[error("Stored value for '{key}' is corrupt: {reason}")]
    StoreCorrupt { key: String, reason: String },

    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catalog data could not be read
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl Error {
    /// Build a [`Error::StoreCorrupt`] for the given storage key.
    pub fn store_corrupt(key: &str, reason: impl std::fmt::Display) -> Self {
        Self::StoreCorrupt {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error is a corrupt persisted blob (recoverable by degrading to empty).
    pub const fn is_store_corrupt(&self) -> bool {
        matches!(self, Self::StoreCorrupt { .. })
    }
}
