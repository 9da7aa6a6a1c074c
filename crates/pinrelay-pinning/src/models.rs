use pinrelay_core::UploadResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Body of a successful `pinFileToIPFS` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinResponse {
    #[serde(rename = "IpfsHash")]
    pub ipfs_hash: String,
    #[serde(rename = "PinSize")]
    pub pin_size: u64,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "isDuplicate", default, skip_serializing_if = "Option::is_none")]
    pub is_duplicate: Option<bool>,
}

impl PinResponse {
    pub fn into_upload_result(self, gateway_base: &str) -> UploadResult {
        UploadResult::new(self.ipfs_hash, self.pin_size, self.timestamp, gateway_base)
    }
}

/// A local file to pin
#[derive(Debug, Clone)]
pub struct PinSource {
    pub path: PathBuf,
    /// Name reported to Pinata in the multipart part
    pub file_name: String,
    /// Declared MIME type. Guessed from `file_name` when absent.
    pub content_type: Option<String>,
}

impl PinSource {
    pub fn new(path: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_name: file_name.into(),
            content_type: None,
        }
    }

    /// Use the path's last component as the reported name.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        Self::new(path, file_name)
    }

    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type.filter(|ct| !ct.trim().is_empty());
        self
    }

    /// Declared type if it parses, otherwise a guess from the file name.
    pub fn mime_type(&self) -> String {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.parse::<mime_guess::mime::Mime>().ok())
            .unwrap_or_else(|| mime_guess::from_path(&self.file_name).first_or_octet_stream())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pinata_body() {
        let body = r#"{"IpfsHash":"QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG","PinSize":2048,"Timestamp":"2024-05-01T10:00:00.000Z","isDuplicate":true}"#;
        let parsed: PinResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.pin_size, 2048);
        assert_eq!(parsed.is_duplicate, Some(true));

        let result = parsed.into_upload_result("https://gateway.pinata.cloud/ipfs/");
        assert_eq!(
            result.gateway_url,
            "https://gateway.pinata.cloud/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"
        );
    }

    #[test]
    fn duplicate_flag_is_optional() {
        let body = r#"{"IpfsHash":"Qm1","PinSize":1,"Timestamp":"t"}"#;
        let parsed: PinResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.is_duplicate, None);
    }

    #[test]
    fn source_from_path_uses_last_component() {
        let source = PinSource::from_path("/tmp/docs/id.pdf");
        assert_eq!(source.file_name, "id.pdf");
        assert_eq!(source.mime_type(), "application/pdf");
    }

    #[test]
    fn declared_type_wins_when_valid() {
        let source = PinSource::new("/tmp/x", "notes.txt")
            .with_content_type(Some("application/json".to_string()));
        assert_eq!(source.mime_type(), "application/json");

        let source = PinSource::new("/tmp/x", "notes.txt")
            .with_content_type(Some("not a mime".to_string()));
        assert_eq!(source.mime_type(), "text/plain");

        let source = PinSource::new("/tmp/x", "blob").with_content_type(Some(String::new()));
        assert_eq!(source.content_type, None);
        assert_eq!(source.mime_type(), "application/octet-stream");
    }
}
