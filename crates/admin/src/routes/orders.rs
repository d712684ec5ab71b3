//! Orders list route handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use miss_accessories_core::{
    OrderStatus, Price, SearchQuery, filter_records,
    stats::{count_where, sum_by},
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    components::{
        Badge, BadgeStyle, DataTableConfig, Section, ShellView, data_table::orders_table_config,
    },
    error::AppError,
    filters,
    models::Order,
    state::AppState,
};

use super::{StatCard, render};

/// Orders list query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    pub q: Option<String>,
    /// `all`, or one of the order status codes.
    pub status: Option<String>,
}

impl OrdersQuery {
    /// The status to keep, `None` meaning every status.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for an unrecognized status code.
    pub fn status_filter(&self) -> Result<Option<OrderStatus>, AppError> {
        match self.status.as_deref() {
            None | Some("" | "all") => Ok(None),
            Some(raw) => raw
                .parse::<OrderStatus>()
                .map(Some)
                .map_err(|e| AppError::BadRequest(e.to_string())),
        }
    }
}

/// Order view for templates.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: String,
    pub customer: String,
    pub customer_phone: String,
    pub items: String,
    pub item_count: usize,
    pub total: String,
    pub status: Badge,
    pub payment: Badge,
    pub shipping: Badge,
    pub order_date: String,
    pub delivery_date: Option<String>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            customer: order.customer.clone(),
            customer_phone: order.customer_phone.to_string(),
            items: order.items_summary(),
            item_count: order.items.len(),
            total: order.total.to_string(),
            status: order.status.badge(),
            payment: order.payment_status.badge(),
            shipping: order.shipping_status.badge(),
            order_date: order.order_date.to_string(),
            delivery_date: order.delivery_date.map(|date| date.to_string()),
        }
    }
}

/// Sum of every order total.
pub fn total_revenue(orders: &[Order]) -> Price {
    Price::new(sum_by(orders, |o| o.total.amount()))
}

/// Summary cards over the full order list.
pub fn order_stats(orders: &[Order]) -> Vec<StatCard> {
    vec![
        StatCard::new("Total Orders", orders.len()),
        StatCard::new(
            "Pending Orders",
            count_where(orders, |o| o.status == OrderStatus::Pending),
        ),
        StatCard::new(
            "Completed Orders",
            count_where(orders, |o| o.status == OrderStatus::Completed),
        ),
        StatCard::new("Total Revenue", total_revenue(orders)),
    ]
}

/// Apply the search box and the status select, both of which must match.
pub fn filter_orders<'a>(
    orders: &'a [Order],
    query: &SearchQuery,
    status: Option<OrderStatus>,
) -> Vec<&'a Order> {
    let mut matched = filter_records(orders, query, Order::search_fields);
    if let Some(status) = status {
        matched.retain(|order| order.status == status);
    }
    matched
}

/// Orders list page template.
#[derive(Template)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub shell: ShellView,
    pub current_path: String,
    pub table: DataTableConfig,
    pub stats: Vec<StatCard>,
    pub orders: Vec<OrderView>,
    pub search_query: String,
}

/// Orders list page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<OrdersQuery>,
) -> Result<Html<String>, AppError> {
    let status = params.status_filter()?;
    let all = &state.data().orders;
    let query = SearchQuery::from_param(params.q.as_deref());

    let orders: Vec<OrderView> = filter_orders(all, &query, status)
        .into_iter()
        .map(OrderView::from)
        .collect();

    render(&OrdersIndexTemplate {
        shell: ShellView::new(&state, Section::Orders),
        current_path: Section::Orders.path().to_string(),
        table: orders_table_config(status),
        stats: order_stats(all),
        orders,
        search_query: query.as_str().to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::{
        routes::test_support::{get, get_with},
        seed::{EMBEDDED_SEED, SeedData},
    };

    fn ids(orders: &[&Order]) -> Vec<String> {
        orders.iter().map(|o| o.id.to_string()).collect()
    }

    #[test]
    fn test_order_stats() {
        let data = SeedData::embedded().unwrap();
        assert_eq!(total_revenue(&data.orders).to_string(), "$769.93");

        let stats = order_stats(&data.orders);
        let titles: Vec<&str> = stats.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["Total Orders", "Pending Orders", "Completed Orders", "Total Revenue"]
        );
        let values: Vec<String> = stats.into_iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["4", "1", "1", "$769.93"]);
    }

    #[test]
    fn test_filter_orders_combines_search_and_status() {
        let data = SeedData::embedded().unwrap();
        let everything = SearchQuery::new("");

        assert_eq!(filter_orders(&data.orders, &everything, None).len(), 4);
        assert_eq!(
            ids(&filter_orders(&data.orders, &everything, Some(OrderStatus::Shipped))),
            vec!["#ORD-004"]
        );
        assert_eq!(
            ids(&filter_orders(&data.orders, &SearchQuery::new("ord-00"), None)),
            vec!["#ORD-001", "#ORD-002", "#ORD-003", "#ORD-004"]
        );
        assert!(
            filter_orders(
                &data.orders,
                &SearchQuery::new("sarah"),
                Some(OrderStatus::Pending)
            )
            .is_empty()
        );
    }

    #[test]
    fn test_status_filter_parsing() {
        let query = |status: Option<&str>| OrdersQuery {
            q: None,
            status: status.map(String::from),
        };

        assert_eq!(query(None).status_filter().unwrap(), None);
        assert_eq!(query(Some("all")).status_filter().unwrap(), None);
        assert_eq!(
            query(Some("completed")).status_filter().unwrap(),
            Some(OrderStatus::Completed)
        );
        assert!(matches!(
            query(Some("archived")).status_filter(),
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_index_status_filter() {
        let (status, body) = get("/orders?status=pending").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("#ORD-003"));
        assert!(!body.contains("#ORD-001"));
    }

    #[tokio::test]
    async fn test_index_unknown_status_is_bad_request() {
        let (status, _) = get("/orders?status=archived").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_index_search_by_customer() {
        let (status, body) = get("/orders?q=emily").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("#ORD-002"));
        assert!(!body.contains("#ORD-004"));
    }

    #[tokio::test]
    async fn test_index_unknown_recorded_status_uses_fallback_badge() {
        let document = EMBEDDED_SEED.replacen("status: processing", "status: refunded", 1);
        let data = SeedData::from_yaml(&document).unwrap();

        let (status, body) = get_with(data, "/orders").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<span class="badge bg-secondary">refunded</span>"#));
    }

    #[tokio::test]
    async fn test_index_delivery_date_is_not_a_delivery_claim() {
        let (_, body) = get("/orders").await;
        let processing_row = body
            .split("<tr>")
            .find(|row| row.contains("#ORD-002"))
            .unwrap();
        assert!(processing_row.contains("Delivery Jan 19, 2024"));
        assert!(!processing_row.contains("Delivered"));
    }
}
