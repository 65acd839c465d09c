//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `BrowseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BrowseError {
    #[error("catalog has no entries to browse")]
    EmptyCatalog,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz already completed")]
    Completed,
    #[error("current question already answered")]
    AlreadyAnswered,
}
