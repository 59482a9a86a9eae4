use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::render::Page;
use crate::state::AppState;

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render_page(Page::Home, ())?))
}

/// GET /abstract
pub async fn handle_abstract(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render_page(Page::Abstract, ())?))
}
