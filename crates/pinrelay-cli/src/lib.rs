//! Pinrelay CLI support: path handling, output formatting and a client for a
//! running relay server.

pub mod relay;

use anyhow::Result;
use pinrelay_core::UploadResult;
use std::path::{Path, PathBuf};

pub use relay::RelayClient;

/// Resolve `path` against the working directory and check that it is a file.
///
/// The error message carries the absolute path so it is clear what was looked up.
pub fn resolve_file(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    if !absolute.is_file() {
        anyhow::bail!("File not found: {}", absolute.display());
    }
    Ok(absolute)
}

/// Size in kilobytes with two decimals, e.g. `1.50 KB`.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Human-readable summary of a pinned file.
pub fn format_upload_result(file_name: &str, result: &UploadResult) -> String {
    format!(
        "File uploaded: {}\nCID: {}\nSize: {}\nTimestamp: {}\nGateway URL: {}",
        file_name,
        result.ipfs_hash,
        format_size_kb(result.pin_size),
        result.timestamp,
        result.gateway_url
    )
}

/// Initialize tracing for the CLI. Logs go to stderr so stdout stays parseable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
