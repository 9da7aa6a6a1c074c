//! `POST /api/upload`: stage one file, forward it to the pinning service, clean up.

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::stage_multipart_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::IntoResponse,
    Json,
};
use pinrelay_core::{AppError, UploadResponse};
use pinrelay_pinning::PinSource;
use std::sync::Arc;

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let incoming = stage_multipart_file(
        multipart?,
        &state.staging,
        state.config.max_file_size_bytes(),
    )
    .await?
    .ok_or(AppError::MissingFile)?;

    tracing::info!(
        file_name = %incoming.original_filename,
        size = incoming.staged.len(),
        content_type = incoming.content_type.as_deref().unwrap_or("unknown"),
        "Upload received"
    );

    let source = PinSource::new(incoming.staged.path(), incoming.original_filename.clone())
        .with_content_type(incoming.content_type.clone());

    let pinned = state.pinning.pin_file(&source).await;

    // The staged copy goes away whatever the outcome of the forward.
    if let Err(e) = incoming.staged.remove().await {
        tracing::warn!(error = %e, "Failed to remove staged upload");
    }

    let result = pinned?.into_upload_result(state.config.gateway_base_url());

    tracing::info!(
        cid = %result.ipfs_hash,
        pin_size = result.pin_size,
        "Upload relayed"
    );

    Ok(Json(UploadResponse::from(result)))
}
