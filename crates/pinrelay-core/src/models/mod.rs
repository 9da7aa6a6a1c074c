pub mod health;
pub mod upload;

pub use health::HealthResponse;
pub use upload::{gateway_url, ErrorResponse, UploadResponse, UploadResult};
