//! Storage error types for silver-store.

use std::path::PathBuf;

use thiserror::Error;

use silver_core::CoreError;

/// Errors from table persistence and row operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Validation or lookup failure from the domain layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or parsing a persisted table failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: csv::Error,
    },

    /// Serializing rows into the rewrite buffer failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: csv::Error,
    },

    /// Filesystem access failed.
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The atomic rename replacing the table failed.
    #[error("failed to replace {}: {source}", path.display())]
    Replace {
        path: PathBuf,
        source: tempfile::PersistError,
    },
}
