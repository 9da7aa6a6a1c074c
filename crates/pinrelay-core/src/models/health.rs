use serde::{Deserialize, Serialize};

/// Liveness payload. Reports only that the process answers; nothing upstream is probed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: "Server is running".to_string(),
        }
    }
}
