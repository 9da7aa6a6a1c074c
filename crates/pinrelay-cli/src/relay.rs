//! HTTP client for a running relay server.

use anyhow::{Context, Result};
use pinrelay_core::constants::{API_HEALTH_PATH, API_UPLOAD_PATH, FILE_FIELD_NAME};
use pinrelay_core::{ErrorResponse, HealthResponse, UploadResponse};
use pinrelay_pinning::PinSource;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::path::Path;

#[derive(Clone, Debug)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Send `path` to the relay as the `file` part of a multipart form.
    pub async fn upload(&self, path: &Path) -> Result<UploadResponse> {
        let source = PinSource::from_path(path);
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let part = Part::bytes(data)
            .file_name(source.file_name.clone())
            .mime_str(&source.mime_type())
            .context("Invalid content type")?;
        let form = Form::new().part(FILE_FIELD_NAME, part);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, API_UPLOAD_PATH))
            .multipart(form)
            .send()
            .await
            .context("Request to relay failed")?;

        Self::parse(response).await
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, API_HEALTH_PATH))
            .send()
            .await
            .context("Request to relay failed")?;

        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            anyhow::bail!("Relay returned {}: {}", status, message);
        }
        response.json().await.context("Failed to parse relay response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::io::Write;

    #[tokio::test]
    async fn upload_posts_multipart_file() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/upload")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="file""#.to_string()),
                Matcher::Regex("relay me".to_string()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"success":true,"IpfsHash":"QmCli","PinSize":8,"Timestamp":"t","gatewayUrl":"https://gateway.pinata.cloud/ipfs/QmCli"}"#,
            )
            .create_async()
            .await;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"relay me").unwrap();

        let client = RelayClient::new(server.url()).unwrap();
        let response = client.upload(file.path()).await.unwrap();
        assert!(response.success);
        assert_eq!(response.result.ipfs_hash, "QmCli");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upload_surfaces_relay_error_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/upload")
            .with_status(500)
            .with_body(r#"{"error":"Pinata JWT not configured"}"#)
            .create_async()
            .await;

        let file = tempfile::NamedTempFile::new().unwrap();
        let client = RelayClient::new(server.url()).unwrap();
        let err = client.upload(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Pinata JWT not configured"));
    }

    #[tokio::test]
    async fn health_reads_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/health")
            .with_status(200)
            .with_body(r#"{"status":"OK","message":"Server is running"}"#)
            .create_async()
            .await;

        let client = RelayClient::new(format!("{}/", server.url())).unwrap();
        let health = client.health().await.unwrap();
        assert_eq!(health, HealthResponse::ok());
    }
}
