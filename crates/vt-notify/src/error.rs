//! Error types for vt-notify.

use thiserror::Error;

/// Errors a [`KvStore`][crate::KvStore] backend can produce.
///
/// These never escape the notification engine — it logs them and degrades
/// to in-memory operation — but backends and tests see them directly.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
