//! Application state shared by all handlers.

use pinrelay_core::Config;
use pinrelay_pinning::PinningService;
use pinrelay_storage::UploadStaging;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub staging: UploadStaging,
    /// Trait object so tests can point the relay at a mock server or a stub.
    pub pinning: Arc<dyn PinningService>,
}

impl AppState {
    pub fn new(config: Config, staging: UploadStaging, pinning: Arc<dyn PinningService>) -> Self {
        Self {
            config,
            staging,
            pinning,
        }
    }
}
