use pinrelay_core::AppError;
use thiserror::Error;

/// Staging operation errors
#[derive(Debug, Error)]
pub enum StagingError {
    #[error("Failed to prepare upload directory {path}: {source}")]
    Directory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write staged file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove staged file {path}: {source}")]
    Remove {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Staged file {0} is already closed")]
    Closed(String),
}

/// Result type for staging operations
pub type StagingResult<T> = Result<T, StagingError>;

impl From<StagingError> for AppError {
    fn from(err: StagingError) -> Self {
        AppError::Filesystem(err.to_string())
    }
}
