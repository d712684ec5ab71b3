//! WhatsApp panel route handlers: conversations, automation templates and
//! the website widget.
//!
//! Templates are only previewed; nothing is sent.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use miss_accessories_core::{ChatStatus, SearchQuery, filter_records};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    components::{Badge, BadgeStyle, Section, ShellView},
    error::AppError,
    filters,
    models::{Chat, Customer, HeadlineMetric, MessageTemplate},
    seed::SeedData,
    state::AppState,
};

use super::{SearchParams, render};

/// Order ID used in previews when the customer has no orders.
pub const SAMPLE_ORDER_ID: &str = "ORD-000";

/// Tracking links in previews are this prefix plus the order ID.
pub const SAMPLE_TRACKING_BASE: &str = "https://track.missaccessories.com/";

/// Conversation view for templates.
#[derive(Debug, Clone)]
pub struct ChatView {
    pub id: String,
    pub customer: String,
    pub phone: String,
    pub last_message: String,
    pub time_label: String,
    pub status: Badge,
    pub unread: bool,
}

impl From<&Chat> for ChatView {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id.to_string(),
            customer: chat.customer.clone(),
            phone: chat.phone.to_string(),
            last_message: chat.last_message.clone(),
            time_label: chat.time_label.clone(),
            status: chat.status.badge(),
            unread: chat.status == ChatStatus::Unread,
        }
    }
}

/// Automation template card.
#[derive(Debug, Clone)]
pub struct TemplateView {
    pub index: usize,
    pub name: String,
    pub trigger: String,
    pub message: String,
    /// Tokens in braces, as written in the message.
    pub placeholders: Vec<String>,
}

impl TemplateView {
    fn new(index: usize, template: &MessageTemplate) -> Self {
        Self {
            index,
            name: template.name.clone(),
            trigger: template.trigger.clone(),
            message: template.message.clone(),
            placeholders: template
                .placeholders()
                .into_iter()
                .map(|name| format!("{{{name}}}"))
                .collect(),
        }
    }
}

/// Entry of the "preview for customer" select.
#[derive(Debug, Clone)]
pub struct CustomerOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

fn customer_options(customers: &[Customer], selected: Option<&str>) -> Vec<CustomerOption> {
    customers
        .iter()
        .map(|customer| CustomerOption {
            id: customer.id.to_string(),
            name: customer.name.clone(),
            selected: selected == Some(customer.id.as_str()),
        })
        .collect()
}

/// WhatsApp panel template.
#[derive(Template)]
#[template(path = "whatsapp/index.html")]
pub struct WhatsAppIndexTemplate {
    pub shell: ShellView,
    pub current_path: String,
    pub metrics: Vec<HeadlineMetric>,
    pub chats: Vec<ChatView>,
    pub templates: Vec<TemplateView>,
    pub customers: Vec<CustomerOption>,
    pub widget_phone: String,
    pub widget_snippet: String,
    pub search_query: String,
}

/// WhatsApp panel handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let data = state.data();
    let query = SearchQuery::from_param(params.q.as_deref());

    let chats: Vec<ChatView> = filter_records(&data.chats, &query, Chat::search_fields)
        .into_iter()
        .map(ChatView::from)
        .collect();

    render(&WhatsAppIndexTemplate {
        shell: ShellView::new(&state, Section::WhatsApp),
        current_path: Section::WhatsApp.path().to_string(),
        metrics: data.whatsapp_metrics.clone(),
        chats,
        templates: data
            .templates
            .iter()
            .enumerate()
            .map(|(index, template)| TemplateView::new(index, template))
            .collect(),
        customers: customer_options(&data.customers, None),
        widget_phone: data.widget.phone.to_string(),
        widget_snippet: data.widget.snippet(),
        search_query: query.as_str().to_string(),
    })
}

/// Template preview query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    /// Customer ID whose details fill the placeholders.
    pub customer: Option<String>,
}

/// A placeholder and the value substituted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderValue {
    pub name: String,
    pub value: String,
}

/// Sample placeholder values for `customer`.
///
/// The order ID comes from the customer's first recorded order, matched by
/// name, without its leading `#`.
pub fn sample_values(data: &SeedData, customer: &Customer) -> Vec<PlaceholderValue> {
    let order_id = data
        .orders
        .iter()
        .find(|order| order.customer == customer.name)
        .map_or(SAMPLE_ORDER_ID, |order| {
            order.id.as_str().trim_start_matches('#')
        });

    vec![
        PlaceholderValue {
            name: "customer_name".to_string(),
            value: customer.name.clone(),
        },
        PlaceholderValue {
            name: "order_id".to_string(),
            value: order_id.to_string(),
        },
        PlaceholderValue {
            name: "tracking_url".to_string(),
            value: format!("{SAMPLE_TRACKING_BASE}{order_id}"),
        },
    ]
}

/// Template preview page.
#[derive(Template)]
#[template(path = "whatsapp/preview.html")]
pub struct TemplatePreviewTemplate {
    pub shell: ShellView,
    pub current_path: String,
    pub template: TemplateView,
    pub customers: Vec<CustomerOption>,
    pub customer_name: Option<String>,
    pub values: Vec<PlaceholderValue>,
    pub preview: String,
}

/// Template preview handler.
///
/// Without a `customer` the message is shown with its placeholders intact.
#[instrument(skip(state))]
pub async fn preview(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(params): Query<PreviewQuery>,
) -> Result<Html<String>, AppError> {
    let data = state.data();
    let template = data
        .templates
        .get(index)
        .ok_or_else(|| AppError::NotFound(format!("message template {index}")))?;

    let customer_id = params.customer.as_deref().filter(|id| !id.is_empty());
    let customer = customer_id
        .map(|id| {
            data.customer(id)
                .ok_or_else(|| AppError::NotFound(format!("customer {id}")))
        })
        .transpose()?;

    let values = customer.map_or_else(Vec::new, |customer| sample_values(data, customer));
    let pairs: Vec<(&str, &str)> = values
        .iter()
        .map(|v| (v.name.as_str(), v.value.as_str()))
        .collect();

    render(&TemplatePreviewTemplate {
        shell: ShellView::new(&state, Section::WhatsApp),
        current_path: Section::WhatsApp.path().to_string(),
        template: TemplateView::new(index, template),
        customers: customer_options(&data.customers, customer_id),
        customer_name: customer.map(|c| c.name.clone()),
        preview: template.render(&pairs),
        values,
    })
}
