//! Pinrelay API Library
//!
//! This crate provides the HTTP handlers, router and application setup for the
//! upload relay.

mod handlers;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;
