//! Cross-cutting error types for the Silver ledger.
//!
//! Domain-specific errors (e.g., `StoreError`, `ConfigError`, `AuthError`) are
//! defined in their respective crates. Errors converge in `silver-cli` where
//! they are reported through `anyhow`.

use thiserror::Error;

use crate::entities::RecordKey;

/// Errors that can be raised by any ledger crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (empty nick, non-positive amount).
    #[error("validation error: {0}")]
    Validation(String),

    /// A record selected for deletion no longer exists in the table.
    #[error("record not found: {0}")]
    NotFound(RecordKey),
}
