//! System endpoints: status reporting.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Status check response.
#[derive(Debug, Serialize, ToSchema)]
struct StatusResponse {
    status: String,
}

/// `GET /status` — Service liveness status.
#[utoipa::path(
    get,
    path = "/status",
    tag = "System",
    summary = "Status check",
    description = "Returns a fixed payload confirming the gateway is running. Independent of any WebSocket state.",
    responses(
        (status = 200, description = "Service is running", body = StatusResponse),
    )
)]
pub async fn status_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "running".to_string(),
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new().route("/status", get(status_handler))
}
