//! Error types for the content-service boundary

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The remote endpoint has not been initialized yet. Precondition
    /// failure: callers do not start the operation, and nothing retries it
    /// automatically.
    #[error("content service not available")]
    Unavailable,

    /// Transient transport failure. Retryable on reads, surfaced inline on
    /// mutations.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend refused the caller.
    #[error("access denied: {0}")]
    Denied(String),
}

impl ServiceError {
    /// Whether an automatic bounded retry is worthwhile.
    pub fn is_transient(&self) -> bool {
        matches!(self, ServiceError::Transport(_))
    }
}
