//! Pinrelay Storage Library
//!
//! Inbound uploads are written to a staging directory before they are forwarded to
//! the pinning service, and removed again once the forward finishes.
//!
//! # Staged file names
//!
//! Every staged file is named `{uuid}-{sanitized original name}`. The UUID makes names
//! unique across concurrent requests; the original name is kept only to make the
//! directory readable while debugging.

pub mod error;
pub mod filename;
pub mod staging;

// Re-export commonly used types
pub use error::{StagingError, StagingResult};
pub use filename::sanitize_filename;
pub use staging::{StagedFile, UploadStaging};
