use axum::{response::IntoResponse, Json};
use pinrelay_core::HealthResponse;

/// Liveness check. Never calls out to the pinning service.
#[tracing::instrument]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse::ok())
}
