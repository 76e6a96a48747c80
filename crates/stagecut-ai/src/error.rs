//! Error types for the AI collaborator subsystem.

use thiserror::Error;

/// Errors a collaborator call can produce.
#[derive(Debug, Error)]
pub enum AiError {
    /// The collaborator rejected or failed the request.
    #[error("assistant request failed: {0}")]
    RequestFailed(String),

    /// The collaborator answered with nothing usable.
    #[error("assistant returned no usable result")]
    EmptyResult,

    /// Transport-level failure reaching the collaborator.
    #[error("assistant unreachable: {source}")]
    Unreachable {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type alias for AI operations.
pub type AiResult<T> = std::result::Result<T, AiError>;
