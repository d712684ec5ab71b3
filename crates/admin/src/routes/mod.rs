//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! # Sections
//! GET  /                       - Dashboard overview
//! GET  /inventory?q=           - Product inventory
//! GET  /orders?q=&status=      - Order list
//! GET  /customers?q=           - Customer list
//! GET  /whatsapp?q=            - Chats, message templates and widget
//! GET  /whatsapp/templates/{index}/preview?customer=
//!                              - Message template preview
//! GET  /promotions             - Coming soon
//! GET  /analytics              - Coming soon
//! GET  /settings               - Coming soon
//! GET  /section/{id}           - Side menu selection (redirect)
//!
//! # API
//! GET  /api/search?q=          - Customers, products and orders as JSON
//! ```
//!
//! `/health` and `/static` are mounted in [`crate::app`].

use askama::Template;
use axum::{Router, extract::State, response::Html, routing::get};
use miss_accessories_core::Price;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{components::Section, error::AppError, state::AppState};

pub mod api;
pub mod customers;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod sections;
pub mod whatsapp;

/// Build the section and API routes.
pub fn routes() -> Router<AppState> {
    let router = Router::new()
        // Sections
        .route("/", get(dashboard::index))
        .route("/inventory", get(inventory::index))
        .route("/orders", get(orders::index))
        .route("/customers", get(customers::index))
        .route("/whatsapp", get(whatsapp::index))
        .route(
            "/whatsapp/templates/{index}/preview",
            get(whatsapp::preview),
        )
        .route("/section/{id}", get(sections::select))
        // API
        .route("/api/search", get(api::search));

    Section::ALL
        .into_iter()
        .filter(|section| section.is_placeholder())
        .fold(router, |router, section| {
            router.route(
                section.path(),
                get(move |state: State<AppState>| sections::coming_soon(state, section)),
            )
        })
}

/// Search box query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// A computed summary card above a list.
#[derive(Debug, Clone)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

impl StatCard {
    pub fn new(title: &'static str, value: impl ToString) -> Self {
        Self {
            title,
            value: value.to_string(),
        }
    }
}

/// Render a page template, turning failures into a 500.
pub(crate) fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

/// Display an optional average as money, or "N/A" when there was nothing to
/// average.
pub(crate) fn format_average(average: Option<Decimal>) -> String {
    average.map_or_else(|| "N/A".to_string(), |amount| Price::new(amount).to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{config::AdminConfig, seed::SeedData, state::AppState};

    pub fn app() -> Router {
        app_with(SeedData::embedded().unwrap())
    }

    pub fn app_with(data: SeedData) -> Router {
        let state = AppState::new(AdminConfig::default(), data);
        super::routes().with_state(state)
    }

    /// Issue a GET against the routes and return status and body text.
    pub async fn get(uri: &str) -> (StatusCode, String) {
        get_with(SeedData::embedded().unwrap(), uri).await
    }

    /// Same as [`get`], over a custom record set.
    pub async fn get_with(data: SeedData, uri: &str) -> (StatusCode, String) {
        let response = app_with(data)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}
