//! Fixed values shared across the workspace.

/// Multipart field carrying the uploaded file, both inbound and towards Pinata.
pub const FILE_FIELD_NAME: &str = "file";

/// Default Pinata API base URL.
pub const PINATA_API_URL: &str = "https://api.pinata.cloud";

/// Pinata endpoint path for pinning a single file.
pub const PIN_FILE_PATH: &str = "/pinning/pinFileToIPFS";

/// Default public gateway; a CID is appended verbatim.
pub const GATEWAY_BASE_URL: &str = "https://gateway.pinata.cloud/ipfs/";

/// Default inbound upload limit in megabytes.
pub const MAX_FILE_SIZE_MB: usize = 10;

pub const DEFAULT_PORT: u16 = 3001;

pub const API_UPLOAD_PATH: &str = "/api/upload";
pub const API_HEALTH_PATH: &str = "/api/health";
