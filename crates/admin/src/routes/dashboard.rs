//! Dashboard route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::{
    components::{Section, ShellView},
    error::AppError,
    filters,
    models::{HeadlineMetric, Order, Product},
    state::AppState,
};

use super::{inventory::ProductView, orders::OrderView, render};

/// Orders shown in the "Recent Orders" panel.
pub const RECENT_ORDER_LIMIT: usize = 3;

/// The first orders of the list, as recorded.
pub fn recent_orders(orders: &[Order]) -> Vec<&Order> {
    orders.iter().take(RECENT_ORDER_LIMIT).collect()
}

/// Products that are low on stock or critical.
pub fn low_stock_alerts(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| {
            product
                .status
                .known()
                .is_some_and(|status| status.needs_attention())
        })
        .collect()
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub shell: ShellView,
    pub current_path: String,
    pub metrics: Vec<HeadlineMetric>,
    pub recent_orders: Vec<OrderView>,
    pub low_stock: Vec<ProductView>,
}

/// Dashboard page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let data = state.data();

    render(&DashboardTemplate {
        shell: ShellView::new(&state, Section::Dashboard),
        current_path: Section::Dashboard.path().to_string(),
        metrics: data.dashboard_metrics.clone(),
        recent_orders: recent_orders(&data.orders)
            .into_iter()
            .map(OrderView::from)
            .collect(),
        low_stock: low_stock_alerts(&data.products)
            .into_iter()
            .map(ProductView::from)
            .collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::{routes::test_support::get, seed::SeedData};

    #[test]
    fn test_recent_orders_are_first_three() {
        let data = SeedData::embedded().unwrap();
        let ids: Vec<&str> = recent_orders(&data.orders)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["#ORD-001", "#ORD-002", "#ORD-003"]);
        assert!(recent_orders(&[]).is_empty());
    }

    #[test]
    fn test_low_stock_alerts() {
        let data = SeedData::embedded().unwrap();
        let names: Vec<&str> = low_stock_alerts(&data.products)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Silver Hoop Earrings", "Gold Chain Bracelet", "Rose Gold Ring Set"]
        );
    }

    #[tokio::test]
    async fn test_index_renders() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Total Revenue"));
        assert!(body.contains("#ORD-003"));
        assert!(!body.contains("#ORD-004"));
        assert!(body.contains("Gold Chain Bracelet"));
    }
}
