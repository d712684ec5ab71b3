//! Application state shared across handlers.

use std::sync::Arc;

use crate::{config::AdminConfig, seed::SeedData};

/// Application state shared across all handlers.
///
/// Cloning is cheap; the record set is behind an `Arc` and read-only for the
/// life of the process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    data: SeedData,
}

impl AppState {
    #[must_use]
    pub fn new(config: AdminConfig, data: SeedData) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, data }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// The store's records.
    #[must_use]
    pub fn data(&self) -> &SeedData {
        &self.inner.data
    }
}
