pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::get,
    Router,
};

use crate::errors::AppError;
use crate::screening::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_home))
        .route("/abstract", get(pages::handle_abstract))
        .route(
            "/find-matches",
            get(handlers::handle_find_matches).post(handlers::handle_submit),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
