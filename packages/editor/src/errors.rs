//! Error types for the editor

use pagecraft_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum EditorError {
    #[error("failed to load draft content: {0}")]
    Load(#[source] StoreError),

    #[error("save failed: {0}")]
    Save(#[source] StoreError),

    #[error("publish failed: {0}")]
    Publish(#[source] StoreError),

    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    #[error("publish requires an acknowledged confirmation")]
    ConfirmationRequired,

    #[error("another operation is in flight")]
    OperationInFlight,

    #[error("editor is not ready")]
    NotReady,

    #[error("editor session is closed")]
    Closed,
}
