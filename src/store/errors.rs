//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connectivity, statement or constraint failure reported by the driver
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The row written by an insert was gone when read back
    #[error("Note {0} was not found after insert")]
    MissingAfterInsert(i64),
}
