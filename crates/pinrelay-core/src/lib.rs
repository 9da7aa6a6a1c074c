//! Pinrelay Core Library
//!
//! This crate provides the configuration, error types, constants and wire models
//! shared by the relay server, the pinning client and the command-line tool.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{BaseConfig, Config, RelayConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{gateway_url, ErrorResponse, HealthResponse, UploadResponse, UploadResult};
