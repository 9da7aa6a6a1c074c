//! Pinata `pinFileToIPFS` client.

use async_trait::async_trait;
use pinrelay_core::constants::{FILE_FIELD_NAME, PIN_FILE_PATH};
use pinrelay_core::Config;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use tokio_util::io::ReaderStream;

use crate::error::{extract_error_detail, PinningError};
use crate::models::{PinResponse, PinSource};

/// Something that can pin a local file and report its content identifier.
#[async_trait]
pub trait PinningService: Send + Sync {
    /// Forward `source` once. Failures are returned as-is; nothing is retried.
    async fn pin_file(&self, source: &PinSource) -> Result<PinResponse, PinningError>;
}

/// Pinata implementation of [`PinningService`]
#[derive(Clone)]
pub struct PinataClient {
    http: Client,
    api_url: String,
    jwt: Option<String>,
}

impl Debug for PinataClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PinataClient")
            .field("api_url", &self.api_url)
            .field("jwt", &self.jwt.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl PinataClient {
    /// `api_url` is the API base, e.g. `https://api.pinata.cloud`.
    pub fn new(api_url: impl Into<String>, jwt: Option<String>) -> Result<Self, PinningError> {
        // No request timeout: a pin takes as long as Pinata needs.
        let http = Client::builder().build().map_err(PinningError::Network)?;

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            jwt: jwt.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, PinningError> {
        Self::new(
            config.pinata_api_url(),
            config.pinata_jwt().map(str::to_string),
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.api_url, PIN_FILE_PATH)
    }

    pub fn has_credential(&self) -> bool {
        self.jwt.is_some()
    }

    async fn file_part(source: &PinSource) -> Result<Part, PinningError> {
        let io_error = |e: std::io::Error| PinningError::Io {
            path: source.path.display().to_string(),
            source: e,
        };

        let file = tokio::fs::File::open(&source.path).await.map_err(io_error)?;
        let length = file.metadata().await.map_err(io_error)?.len();

        Part::stream_with_length(Body::wrap_stream(ReaderStream::new(file)), length)
            .file_name(source.file_name.clone())
            .mime_str(&source.mime_type())
            .map_err(PinningError::Network)
    }
}

#[async_trait]
impl PinningService for PinataClient {
    async fn pin_file(&self, source: &PinSource) -> Result<PinResponse, PinningError> {
        let jwt = self.jwt.as_deref().ok_or(PinningError::MissingCredential)?;

        let part = Self::file_part(source).await?;
        let form = Form::new().part(FILE_FIELD_NAME, part);

        let start = std::time::Instant::now();
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(jwt)
            .multipart(form)
            .send()
            .await
            .map_err(PinningError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let detail = extract_error_detail(&body);
            tracing::warn!(
                status = status.as_u16(),
                body = %body,
                file_name = %source.file_name,
                "Pinata rejected pin request"
            );
            return Err(PinningError::Upstream {
                status: status.as_u16(),
                detail,
                body,
            });
        }

        let pinned: PinResponse = response
            .json()
            .await
            .map_err(|e| PinningError::InvalidResponse(e.to_string()))?;

        if pinned.ipfs_hash.trim().is_empty() {
            return Err(PinningError::InvalidResponse(
                "IpfsHash is empty".to_string(),
            ));
        }

        tracing::info!(
            cid = %pinned.ipfs_hash,
            pin_size = pinned.pin_size,
            file_name = %source.file_name,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "File pinned"
        );

        Ok(pinned)
    }
}
