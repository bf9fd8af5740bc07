pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::document::handlers as document;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/schema", get(document::handle_get_schema))
        // Document API
        .route(
            "/api/v1/documents/normalize",
            post(document::handle_normalize),
        )
        .route("/api/v1/documents/field", post(document::handle_update_field))
        .route(
            "/api/v1/documents/has-content",
            post(document::handle_has_content),
        )
        .route("/api/v1/render-safe", post(document::handle_render_safe))
        .route("/api/v1/sections/order", post(document::handle_section_order))
        // Contact API
        .route(
            "/api/v1/contacts/resolve",
            post(contact::handle_resolve_contact),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
