//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuizStateError;
use storage::StorageError;

/// Errors emitted by quiz operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("image directory is unreadable")]
    DirectoryUnreadable(#[source] StorageError),
    #[error("no images available for a quiz")]
    EmptyCatalog,
    #[error("no active quiz session")]
    NoActiveSession,
    #[error(transparent)]
    InvalidState(QuizStateError),
    #[error("image is not part of the current quiz: {0}")]
    ImageNotFound(String),
    #[error(transparent)]
    Storage(StorageError),
}

impl From<QuizStateError> for QuizError {
    fn from(err: QuizStateError) -> Self {
        match err {
            QuizStateError::EmptyCatalog => Self::EmptyCatalog,
            other => Self::InvalidState(other),
        }
    }
}
