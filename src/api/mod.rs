//! REST API layer: route handlers and router composition.

pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all HTTP endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(handlers::system::routes())
}
