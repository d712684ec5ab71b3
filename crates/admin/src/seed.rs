//! Load the store's records from a YAML seed document.
//!
//! The default document is compiled into the binary. `ADMIN_SEED_PATH` points
//! at a replacement file with the same shape:
//!
//! ```yaml
//! customers: [...]
//! products: [...]
//! orders: [...]
//! chats: [...]
//! templates: [...]
//! dashboard_metrics: [...]
//! whatsapp_metrics: [...]
//! widget: { script_url: ..., phone: ..., greeting: ... }
//! ```
//!
//! Records are validated while deserializing (phone numbers, dates, decimal
//! amounts). Status codes outside the known set are kept as written and shown
//! with a neutral badge. Nothing cross-checks one entity against another.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use crate::models::{Chat, ChatWidget, Customer, HeadlineMetric, MessageTemplate, Order, Product};

/// The seed document shipped with the binary.
pub const EMBEDDED_SEED: &str = include_str!("../data/seed.yaml");

/// Errors loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or a record failed validation.
    #[error("Invalid seed document: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Every record the dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub chats: Vec<Chat>,
    pub templates: Vec<MessageTemplate>,
    pub dashboard_metrics: Vec<HeadlineMetric>,
    pub whatsapp_metrics: Vec<HeadlineMetric>,
    pub widget: ChatWidget,
}

impl SeedData {
    /// Parse a seed document.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Parse` if the YAML is malformed or any record is
    /// invalid.
    pub fn from_yaml(document: &str) -> Result<Self, SeedError> {
        Ok(serde_yaml::from_str(document)?)
    }

    /// Parse the document compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Parse` if the embedded document is invalid.
    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_yaml(EMBEDDED_SEED)
    }

    /// Load from `path`, or the embedded document when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Read` if the file cannot be read and
    /// `SeedError::Parse` if its contents are invalid.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        let data = match path {
            Some(path) => {
                let document =
                    std::fs::read_to_string(path).map_err(|source| SeedError::Read {
                        path: path.display().to_string(),
                        source,
                    })?;
                Self::from_yaml(&document)?
            }
            None => Self::embedded()?,
        };

        info!(
            customers = data.customers.len(),
            products = data.products.len(),
            orders = data.orders.len(),
            chats = data.chats.len(),
            templates = data.templates.len(),
            "Seed data loaded"
        );

        Ok(data)
    }

    /// Find a customer by ID.
    #[must_use]
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id.as_str() == id)
    }
}
