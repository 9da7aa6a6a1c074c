//! Test helpers: build AppState and router for integration tests.
//!
//! Every app gets its own upload directory and its own mock Pinata server, so tests
//! can run in parallel. Run with `cargo test -p pinrelay-api`.

pub mod fixtures;

use axum_test::TestServer;
use mockito::{Matcher, Mock, ServerGuard};
use pinrelay_api::setup::routes;
use pinrelay_api::state::AppState;
use pinrelay_core::{Config, RelayConfig};
use pinrelay_pinning::{PinataClient, PinningService};
use pinrelay_storage::UploadStaging;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_JWT: &str = "test-pinata-jwt";
pub const PIN_PATH: &str = "/pinning/pinFileToIPFS";

/// Test application: server, mock Pinata and owned directories.
pub struct TestApp {
    pub server: TestServer,
    pub pinata: ServerGuard,
    pub upload_dir: TempDir,
    pub _static_dir: Option<TempDir>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Files currently left in the staging directory.
    pub fn staged_files(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(self.upload_dir.path()) {
            Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Pinata answering one successful pin.
    pub async fn mock_pin_success(&mut self, cid: &str, pin_size: u64) -> Mock {
        self.pinata
            .mock("POST", PIN_PATH)
            .match_header("authorization", format!("Bearer {}", TEST_JWT).as_str())
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data".to_string()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(fixtures::pin_response_body(cid, pin_size))
            .expect(1)
            .create_async()
            .await
    }

    /// A Pinata endpoint that must never be reached.
    pub async fn mock_pin_never_called(&mut self) -> Mock {
        self.pinata
            .mock("POST", PIN_PATH)
            .expect(0)
            .create_async()
            .await
    }
}

/// Setup a development-mode app with a configured credential.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(&[]).await
}

/// Setup an app with extra environment values layered over the test defaults.
/// An empty value unsets a key (e.g. `("PINATA_JWT", "")`).
pub async fn setup_test_app_with(vars: &[(&str, &str)]) -> TestApp {
    let pinata = mockito::Server::new_async().await;
    let upload_dir = tempfile::tempdir().expect("Failed to create upload directory");

    let mut env: HashMap<String, String> = HashMap::new();
    env.insert("PINATA_JWT".into(), TEST_JWT.into());
    env.insert("PINATA_API_URL".into(), pinata.url());
    env.insert(
        "UPLOAD_DIR".into(),
        upload_dir.path().display().to_string(),
    );
    env.insert("NODE_ENV".into(), "test".into());
    for (key, value) in vars {
        env.insert(key.to_string(), value.to_string());
    }

    let config = Config(Box::new(
        RelayConfig::from_lookup(|key| env.get(key).cloned()).expect("Invalid test config"),
    ));

    let staging = UploadStaging::new(config.upload_dir())
        .await
        .expect("Failed to create staging");
    let pinning: Arc<dyn PinningService> =
        Arc::new(PinataClient::from_config(&config).expect("Failed to build client"));

    let state = Arc::new(AppState::new(config.clone(), staging, pinning));
    let router = routes::setup_routes(&config, state).expect("Failed to build routes");

    TestApp {
        server: TestServer::new(router).expect("Failed to start test server"),
        pinata,
        upload_dir,
        _static_dir: None,
    }
}

/// Setup a production-mode app serving `index.html` from a temporary static directory.
pub async fn setup_production_app(index_html: &str) -> TestApp {
    let static_dir = tempfile::tempdir().expect("Failed to create static directory");
    std::fs::write(static_dir.path().join("index.html"), index_html)
        .expect("Failed to write index.html");
    std::fs::write(static_dir.path().join("app.js"), "console.log('ui');")
        .expect("Failed to write app.js");

    let static_path = static_dir.path().display().to_string();
    let mut app = setup_test_app_with(&[
        ("NODE_ENV", "production"),
        ("STATIC_DIR", static_path.as_str()),
    ])
    .await;
    app._static_dir = Some(static_dir);
    app
}
