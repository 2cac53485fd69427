use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::ApiResponse;

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running")
    ),
)]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::message("Deck API is running")))
}
