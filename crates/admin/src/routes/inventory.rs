//! Inventory route handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use miss_accessories_core::{
    Price, SearchQuery, StockStatus, filter_records,
    stats::{count_where, sum_by},
};
use tracing::instrument;

use crate::{
    components::{
        Badge, DataTableConfig, Section, ShellView, badge::stock_badge,
        data_table::inventory_table_config,
    },
    error::AppError,
    filters,
    models::Product,
    state::AppState,
};

use super::{SearchParams, StatCard, render};

/// Product view for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: String,
    pub stock: u32,
    pub threshold: u32,
    pub status: Badge,
    pub last_updated: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            stock: product.stock,
            threshold: product.threshold,
            status: stock_badge(&product.status, product.stock),
            last_updated: product.last_updated.to_string(),
        }
    }
}

/// Price times stock summed over every product.
pub fn total_stock_value(products: &[Product]) -> Price {
    Price::new(sum_by(products, |p| p.stock_value().amount()))
}

/// Summary cards over the full product list.
pub fn inventory_stats(products: &[Product]) -> Vec<StatCard> {
    vec![
        StatCard::new("Total Products", products.len()),
        StatCard::new(
            "Low Stock Items",
            count_where(products, |p| p.status == StockStatus::LowStock),
        ),
        StatCard::new(
            "Critical Stock",
            count_where(products, |p| p.status == StockStatus::Critical),
        ),
        StatCard::new("Total Value", total_stock_value(products)),
    ]
}

/// Inventory page template.
#[derive(Template)]
#[template(path = "inventory/index.html")]
pub struct InventoryIndexTemplate {
    pub shell: ShellView,
    pub current_path: String,
    pub table: DataTableConfig,
    pub stats: Vec<StatCard>,
    pub products: Vec<ProductView>,
    pub search_query: String,
}

/// Inventory page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let all = &state.data().products;
    let query = SearchQuery::from_param(params.q.as_deref());

    let products: Vec<ProductView> = filter_records(all, &query, Product::search_fields)
        .into_iter()
        .map(ProductView::from)
        .collect();

    render(&InventoryIndexTemplate {
        shell: ShellView::new(&state, Section::Inventory),
        current_path: Section::Inventory.path().to_string(),
        table: inventory_table_config(),
        stats: inventory_stats(all),
        products,
        search_query: query.as_str().to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::{routes::test_support::get, seed::SeedData};

    #[test]
    fn test_inventory_stats() {
        let data = SeedData::embedded().unwrap();
        assert_eq!(total_stock_value(&data.products).to_string(), "$4519.71");

        let stats = inventory_stats(&data.products);
        let titles: Vec<&str> = stats.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["Total Products", "Low Stock Items", "Critical Stock", "Total Value"]
        );
        let values: Vec<String> = stats.into_iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["5", "2", "1", "$4519.71"]);
    }

    #[test]
    fn test_total_stock_value_empty() {
        assert_eq!(total_stock_value(&[]), Price::ZERO);
    }

    #[tokio::test]
    async fn test_index_search_by_sku() {
        let (status, body) = get("/inventory?q=dse-003").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Diamond Stud Earrings"));
        assert!(!body.contains("Pearl Necklace"));
    }

    #[tokio::test]
    async fn test_index_stock_badges() {
        let (_, body) = get("/inventory").await;
        assert!(body.contains(r#"<span class="badge bg-success">In Stock (15)</span>"#));
        assert!(body.contains(r#"<span class="badge bg-warning">Low Stock</span>"#));
        assert!(body.contains(r#"<span class="badge bg-destructive">Critical</span>"#));
    }
}
