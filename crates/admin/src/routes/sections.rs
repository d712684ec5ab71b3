//! Side menu selection and the sections that are not built out yet.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use tracing::instrument;

use crate::{
    components::{Section, ShellView},
    error::AppError,
    filters,
    state::AppState,
};

use super::render;

/// "Coming Soon" page for Promotions, Analytics and Settings.
#[derive(Template)]
#[template(path = "coming_soon.html")]
pub struct ComingSoonTemplate {
    pub shell: ShellView,
    pub current_path: String,
    pub title: &'static str,
}

/// Render the placeholder page of `section`.
#[instrument(skip(state))]
pub async fn coming_soon(
    State(state): State<AppState>,
    section: Section,
) -> Result<Html<String>, AppError> {
    render(&ComingSoonTemplate {
        shell: ShellView::new(&state, section),
        current_path: section.path().to_string(),
        title: section.label(),
    })
}

/// Menu selection: redirect to the section's page, or the dashboard for an
/// unknown id.
#[instrument]
pub async fn select(Path(id): Path<String>) -> Redirect {
    let section = Section::select(&id);
    if section.id() != id {
        tracing::debug!(id = %id, "Unknown section, showing dashboard");
    }
    Redirect::to(section.path())
}
