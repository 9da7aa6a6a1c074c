//! Configuration module
//!
//! Configuration is read from the process environment once at start-up and then
//! passed explicitly to whatever needs it.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_PORT, GATEWAY_BASE_URL, MAX_FILE_SIZE_MB, PINATA_API_URL};

/// Base configuration for the HTTP surface
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

/// Relay configuration
#[derive(Clone)]
pub struct RelayConfig {
    pub base: BaseConfig,
    /// Bearer credential for Pinata. Uploads fail while this is unset.
    pub pinata_jwt: Option<String>,
    pub pinata_api_url: String,
    /// Always ends with '/', the CID is appended as-is.
    pub gateway_base_url: String,
    /// Directory holding staged uploads until they are forwarded
    pub upload_dir: PathBuf,
    /// Prebuilt UI bundle served in production
    pub static_dir: PathBuf,
    pub max_file_size_bytes: usize,
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("base", &self.base)
            .field(
                "pinata_jwt",
                &self.pinata_jwt.as_ref().map(|_| "<redacted>"),
            )
            .field("pinata_api_url", &self.pinata_api_url)
            .field("gateway_base_url", &self.gateway_base_url)
            .field("upload_dir", &self.upload_dir)
            .field("static_dir", &self.static_dir)
            .field("max_file_size_bytes", &self.max_file_size_bytes)
            .finish()
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<RelayConfig>);

impl Config {
    fn as_relay(&self) -> &RelayConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.as_relay().base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = RelayConfig::from_lookup(|key| env::var(key).ok())?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_relay().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.as_relay().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_relay().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_relay().base.environment
    }

    pub fn pinata_jwt(&self) -> Option<&str> {
        self.as_relay().pinata_jwt.as_deref()
    }

    pub fn pinata_api_url(&self) -> &str {
        &self.as_relay().pinata_api_url
    }

    pub fn gateway_base_url(&self) -> &str {
        &self.as_relay().gateway_base_url
    }

    pub fn upload_dir(&self) -> &Path {
        &self.as_relay().upload_dir
    }

    pub fn static_dir(&self) -> &Path {
        &self.as_relay().static_dir
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.as_relay().max_file_size_bytes
    }
}

impl RelayConfig {
    /// Build the configuration from a key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        let environment = var("NODE_ENV")
            .or_else(|| var("ENVIRONMENT"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => DEFAULT_PORT,
        };

        let max_file_size_mb = match var("MAX_FILE_SIZE_MB") {
            Some(mb) => mb
                .trim()
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("MAX_FILE_SIZE_MB must be a valid number"))?,
            None => MAX_FILE_SIZE_MB,
        };
        let max_file_size_bytes = max_file_size_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow::anyhow!("MAX_FILE_SIZE_MB is too large"))?;

        let pinata_api_url = var("PINATA_API_URL")
            .unwrap_or_else(|| PINATA_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut gateway_base_url =
            var("PINATA_GATEWAY_URL").unwrap_or_else(|| GATEWAY_BASE_URL.to_string());
        if !gateway_base_url.ends_with('/') {
            gateway_base_url.push('/');
        }

        let config = RelayConfig {
            base: BaseConfig {
                server_port,
                cors_origins,
                environment,
            },
            pinata_jwt: var("PINATA_JWT").map(|s| s.trim().to_string()),
            pinata_api_url,
            gateway_base_url,
            upload_dir: var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("frontend")),
            max_file_size_bytes,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than zero"));
        }

        for (name, url) in [
            ("PINATA_API_URL", &self.pinata_api_url),
            ("PINATA_GATEWAY_URL", &self.gateway_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(anyhow::anyhow!("{} must be an http(s) URL", name));
            }
        }

        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR must not be empty"));
        }

        Ok(())
    }
}
