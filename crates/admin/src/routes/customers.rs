//! Customers list route handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use miss_accessories_core::{
    CustomerTier, SearchQuery, filter_records,
    stats::{average_by, count_where},
};
use tracing::instrument;

use crate::{
    components::{
        Badge, BadgeStyle, DataTableConfig, Section, ShellView,
        data_table::customers_table_config,
    },
    error::AppError,
    filters,
    models::Customer,
    state::AppState,
};

use super::{SearchParams, StatCard, format_average, render};

/// Customer view for templates.
#[derive(Debug, Clone)]
pub struct CustomerView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub total_orders: u32,
    pub total_spent: String,
    pub avg_order_value: String,
    pub last_order: String,
    pub join_date: String,
    pub tier: Badge,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.to_string(),
            whatsapp: customer.whatsapp.to_string(),
            total_orders: customer.total_orders,
            total_spent: customer.total_spent.to_string(),
            avg_order_value: customer.avg_order_value.to_string(),
            last_order: customer.last_order.to_string(),
            join_date: customer.join_date.to_string(),
            tier: customer.tier.badge(),
        }
    }
}

/// Summary cards over the full customer list.
pub fn customer_stats(customers: &[Customer]) -> Vec<StatCard> {
    vec![
        StatCard::new("Total Customers", customers.len()),
        StatCard::new("VIP Customers", count_where(customers, Customer::is_vip)),
        StatCard::new(
            "New This Month",
            count_where(customers, |c| c.tier == CustomerTier::New),
        ),
        StatCard::new(
            "Avg Order Value",
            format_average(average_by(customers, |c| c.avg_order_value.amount())),
        ),
    ]
}

/// Customers list page template.
#[derive(Template)]
#[template(path = "customers/index.html")]
pub struct CustomersIndexTemplate {
    pub shell: ShellView,
    pub current_path: String,
    pub table: DataTableConfig,
    pub stats: Vec<StatCard>,
    pub customers: Vec<CustomerView>,
    pub search_query: String,
}

/// Customers list page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let all = &state.data().customers;
    let query = SearchQuery::from_param(params.q.as_deref());

    let customers: Vec<CustomerView> = filter_records(all, &query, Customer::search_fields)
        .into_iter()
        .map(CustomerView::from)
        .collect();

    tracing::debug!(query = %query.as_str(), matched = customers.len(), "Filtered customers");

    render(&CustomersIndexTemplate {
        shell: ShellView::new(&state, Section::Customers),
        current_path: Section::Customers.path().to_string(),
        table: customers_table_config(),
        stats: customer_stats(all),
        customers,
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
    fn test_customer_stats() {
        let data = SeedData::embedded().unwrap();
        let stats = customer_stats(&data.customers);
        let values: Vec<&str> = stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["5", "2", "2", "$122.74"]);
    }

    #[test]
    fn test_customer_stats_empty() {
        let stats = customer_stats(&[]);
        assert_eq!(stats[0].value, "0");
        assert_eq!(stats[3].value, "N/A");
    }

    #[tokio::test]
    async fn test_index_lists_all_customers() {
        let (status, body) = get("/customers").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Sarah Johnson"));
        assert!(body.contains("Amanda Brown"));
    }

    #[tokio::test]
    async fn test_index_filters_case_insensitively() {
        let (status, body) = get("/customers?q=SARAH").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Sarah Johnson"));
        assert!(!body.contains("Emily Davis"));
        // Stats still cover every customer
        assert!(body.contains("$122.74"));
    }

    #[tokio::test]
    async fn test_index_empty_state() {
        let (status, body) = get("/customers?q=nobody-matches-this").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No customers found"));
    }
}
