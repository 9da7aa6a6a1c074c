//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Anything that converts
//! into `AppError` can be turned into an `HttpAppError` with `?` and renders the same
//! way: the status from [`ErrorMetadata`] and a body of exactly `{"error": "..."}`.

use axum::{
    extract::multipart::MultipartError,
    extract::multipart::MultipartRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pinrelay_core::{AppError, ErrorMetadata, ErrorResponse, LogLevel};
use pinrelay_pinning::PinningError;
use pinrelay_storage::StagingError;

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from pinrelay-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::from(err))
    }
}

impl From<PinningError> for HttpAppError {
    fn from(err: PinningError) -> Self {
        HttpAppError(err.into())
    }
}

impl From<StagingError> for HttpAppError {
    fn from(err: StagingError) -> Self {
        HttpAppError(err.into())
    }
}

/// A request that is not multipart at all carries no file.
impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Request is not multipart");
        HttpAppError(AppError::MissingFile)
    }
}

impl From<MultipartError> for HttpAppError {
    fn from(err: MultipartError) -> Self {
        let app = if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, error_code, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        (status, Json(ErrorResponse::new(app_error.client_message()))).into_response()
    }
}
