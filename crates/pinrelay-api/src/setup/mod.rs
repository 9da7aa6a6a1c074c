//! Application setup and initialization

pub mod routes;
pub mod server;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use pinrelay_core::Config;
use pinrelay_pinning::{PinataClient, PinningService};
use pinrelay_storage::UploadStaging;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Telemetry first so validation warnings are visible
    crate::telemetry::init_telemetry(config.is_production());

    validation::validate_config(&config).context("Configuration validation failed")?;
    tracing::info!(environment = %config.environment(), "Configuration loaded and validated");

    let staging = UploadStaging::new(config.upload_dir())
        .await
        .context("Failed to prepare upload directory")?;

    let client = PinataClient::from_config(&config).context("Failed to build pinning client")?;
    // The server still starts: health stays available and uploads report the problem.
    if !client.has_credential() {
        tracing::warn!("PINATA_JWT is not set - uploads will fail until it is configured");
    }
    let pinning: Arc<dyn PinningService> = Arc::new(client);

    let state = Arc::new(AppState::new(config.clone(), staging, pinning));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
