//! Error types for StageCut.

use thiserror::Error;

/// Main error type for StageCut operations.
///
/// Every variant is surfaced to the user as a notification at the point of
/// detection; a failed operation leaves the project model untouched.
#[derive(Error, Debug)]
pub enum StagecutError {
    #[error("could not determine a duration for \"{0}\"")]
    ProbeFailed(String),

    #[error("caption text is empty")]
    EmptyInput,

    #[error("no clip is selected")]
    NothingSelected,

    #[error("trim would leave no playable range on \"{0}\"")]
    InvalidTrim(String),

    #[error("clip not found: {0}")]
    ClipNotFound(String),

    #[error("media file not found: {0}")]
    MediaNotFound(String),

    #[error("unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("external service failure: {0}")]
    ExternalService(String),
}

/// Result type alias for StageCut operations.
pub type Result<T> = std::result::Result<T, StagecutError>;
