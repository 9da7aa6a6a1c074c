//! Configuration validation
//!
//! Validates configuration at startup. Hard errors stop the process; conditions the
//! relay can still run under (open CORS, missing UI bundle) are only logged.

use anyhow::Result;
use pinrelay_core::Config;

/// Validate configuration values
///
/// # Arguments
/// * `config` - Application configuration to validate
///
/// # Returns
/// Ok(()) if validation passes, Err with details if validation fails
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    let is_production = config.is_production();

    if is_production && config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!(
            "CORS allows all origins in production - set CORS_ORIGINS to restrict callers"
        );
    }

    if is_production && !config.static_dir().join("index.html").is_file() {
        tracing::warn!(
            static_dir = %config.static_dir().display(),
            "Static directory has no index.html - the web UI will not be served"
        );
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}
