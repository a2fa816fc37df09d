//! Error types for sort sessions.

use thiserror::Error;

/// Errors raised by a [`Session`](crate::Session) or when exporting results.
#[derive(Debug, Error)]
pub enum SortWatchError {
    /// Duration or results were requested before the timed run.
    #[error("session has not been computed yet")]
    NotComputed,

    /// `compute` was called on a session that already ran.
    #[error("session was already computed")]
    AlreadyComputed,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SortWatchError>;
