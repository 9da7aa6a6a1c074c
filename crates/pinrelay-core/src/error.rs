//! Error types module
//!
//! All failures a relay request can hit are unified under [`AppError`]. Each variant
//! describes itself through [`ErrorMetadata`] so the HTTP layer can render a status
//! and a flat client message without matching on variants itself.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like a missing file field
    Debug,
    /// Warning level - for client-caused limits
    Warn,
    /// Error level - for misconfiguration and upstream failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code. Only used in logs; clients see the message.
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

/// Fallback message when the pinning service gives no usable detail.
pub const GENERIC_UPLOAD_FAILURE: &str = "Upload failed";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Pinata JWT not configured")]
    MissingCredential,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Pinning service returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Upstream {
        status: u16,
        message: Option<String>,
    },

    #[error("Pinning service unreachable: {0}")]
    Network(String),

    #[error("Filesystem error: {0}")]
    Filesystem(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Filesystem(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(format!("{:#}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::MissingFile => (400, "MISSING_FILE", LogLevel::Debug),
        AppError::MissingCredential => (500, "MISSING_CREDENTIAL", LogLevel::Error),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", LogLevel::Warn),
        AppError::Upstream { .. } => (500, "UPSTREAM_ERROR", LogLevel::Error),
        AppError::Network(_) => (500, "UPSTREAM_UNREACHABLE", LogLevel::Error),
        AppError::Filesystem(_) => (500, "FILESYSTEM_ERROR", LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for log fields
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MissingFile => "MissingFile",
            AppError::MissingCredential => "MissingCredential",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Upstream { .. } => "Upstream",
            AppError::Network(_) => "Network",
            AppError::Filesystem(_) => "Filesystem",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingFile => "No file uploaded".to_string(),
            AppError::MissingCredential => "Pinata JWT not configured".to_string(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::Upstream {
                message: Some(ref msg),
                ..
            } if !msg.trim().is_empty() => msg.clone(),
            AppError::Upstream { .. }
            | AppError::Network(_)
            | AppError::Filesystem(_)
            | AppError::Internal(_) => GENERIC_UPLOAD_FAILURE.to_string(),
        }
    }
}
