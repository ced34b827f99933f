//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::DocumentError;

/// Errors emitted while fetching and building a quiz document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("failed to read quiz file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("quiz request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors emitted by `QuizPlayService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayError {
    #[error("no activity with order {0}")]
    UnknownActivity(u32),
    #[error("no question at the current position")]
    NoCurrentQuestion,
}
