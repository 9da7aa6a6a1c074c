use serde::{Deserialize, Serialize};

/// Join the gateway base and a content identifier.
pub fn gateway_url(base: &str, cid: &str) -> String {
    format!("{}{}", base, cid)
}

/// Outcome of a successful pin. Field names follow Pinata's casing on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(rename = "IpfsHash")]
    pub ipfs_hash: String,
    #[serde(rename = "PinSize")]
    pub pin_size: u64,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "gatewayUrl")]
    pub gateway_url: String,
}

impl UploadResult {
    pub fn new(ipfs_hash: String, pin_size: u64, timestamp: String, gateway_base: &str) -> Self {
        let gateway_url = gateway_url(gateway_base, &ipfs_hash);
        Self {
            ipfs_hash,
            pin_size,
            timestamp,
            gateway_url,
        }
    }
}

/// Success envelope returned by `POST /api/upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: UploadResult,
}

impl From<UploadResult> for UploadResponse {
    fn from(result: UploadResult) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

/// Failure envelope. Clients only ever get a flat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
