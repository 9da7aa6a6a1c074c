//! Pinning service client.
//!
//! Provides the [`PinningService`] seam used by the relay server and a Pinata
//! implementation that streams a local file to `pinFileToIPFS` with a bearer token.
//! The CLI uses the same client directly.

pub mod client;
pub mod error;
pub mod models;

pub use client::{PinataClient, PinningService};
pub use error::{extract_error_detail, PinningError};
pub use models::{PinResponse, PinSource};
