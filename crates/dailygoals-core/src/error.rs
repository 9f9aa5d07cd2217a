//! Error types for Daily Goals

use thiserror::Error;

/// Main error type for Daily Goals operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Operation requires a signed-in user
    #[error("Not signed in")]
    NotAuthenticated,

    /// Goal was not found on the backend
    #[error("Goal not found: {0}")]
    GoalNotFound(i64),

    /// Backend rejected the request; message comes from the response body
    /// and is suitable for display (e.g. "Invalid login credentials")
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Request never produced a usable response (DNS, connect, decode)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Priority string was not one of low/medium/high
    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// True when the failure is worth retrying once connectivity returns.
    pub fn is_network(&self) -> bool {
        matches!(self, CoreError::Http(_))
    }
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;
