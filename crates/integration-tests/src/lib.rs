//! Integration tests for the MISS Accessories admin.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p miss-accessories-integration-tests
//! ```
//!
//! Each test starts its own admin server on an ephemeral local port with the
//! embedded seed data and talks to it over HTTP, so no external services are
//! needed.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use miss_accessories_admin::{app, config::AdminConfig, seed::SeedData, state::AppState};
use reqwest::{Client, Response};
use tokio::net::TcpListener;

/// A running admin server and a client pointed at it.
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
}

impl TestServer {
    /// Start a server over the embedded seed data.
    pub async fn start() -> Self {
        Self::with_data(SeedData::embedded().expect("embedded seed data is valid")).await
    }

    /// Start a server over `data`.
    pub async fn with_data(data: SeedData) -> Self {
        let config = AdminConfig {
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../admin/static")),
            ..AdminConfig::default()
        };

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let router = app(AppState::new(config, data));
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server error");
        });

        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: format!("http://{addr}"),
            client,
        }
    }

    /// GET `path` (with query string) relative to the server root.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET `path` and return the body text, asserting a 200.
    pub async fn page(&self, path: &str) -> String {
        let response = self.get(path).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK, "GET {path}");
        response.text().await.expect("Failed to read response body")
    }
}
