//! Shared error types for the services crate.

use thiserror::Error;

use study_core::model::StudySetError;

/// Errors emitted while obtaining a study set from the generator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("study-set generation is not configured")]
    Disabled,
    #[error("no source text to generate from")]
    EmptySource,
    #[error("generator returned an empty response")]
    EmptyResponse,
    #[error("generator request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Parse(#[from] StudySetError),
}
