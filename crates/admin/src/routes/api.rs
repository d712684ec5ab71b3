//! JSON API.
//!
//! `GET /api/search?q=` runs the same filters as the list pages and returns
//! the matching records.

use axum::{
    Json,
    extract::{Query, State},
};
use miss_accessories_core::{SearchQuery, filter_records};
use serde::Serialize;
use tracing::instrument;

use crate::{
    models::{Customer, Order, Product},
    seed::SeedData,
    state::AppState,
};

use super::SearchParams;

/// Search results across the store.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

impl SearchResponse {
    /// Run `query` against customers, products and orders.
    pub fn search(data: &SeedData, query: &SearchQuery) -> Self {
        Self {
            query: query.as_str().to_string(),
            customers: filter_records(&data.customers, query, Customer::search_fields)
                .into_iter()
                .cloned()
                .collect(),
            products: filter_records(&data.products, query, Product::search_fields)
                .into_iter()
                .cloned()
                .collect(),
            orders: filter_records(&data.orders, query, Order::search_fields)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

/// Store-wide search handler.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let query = SearchQuery::from_param(params.q.as_deref());
    Json(SearchResponse::search(state.data(), &query))
}
