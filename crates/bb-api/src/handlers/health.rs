//! Health check handler

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct CheckResponse {
    /// "ok" or "error"
    pub status: String,
    /// Human-readable state description
    pub message: String,
    /// Configured model identifier
    pub model: String,
}

/// Health check.
///
/// 200 when the AI client handle is usable, 503 otherwise. Reports the
/// configured model either way and never touches the executor, so it is
/// safe to poll.
#[utoipa::path(
    get,
    path = "/check",
    tag = "health",
    responses(
        (status = 200, description = "Backend and AI client are up", body = CheckResponse),
        (status = 503, description = "Backend is up but the AI client failed to initialize", body = CheckResponse)
    )
)]
pub async fn check_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let model = state.model_name().to_string();

    if state.is_available() {
        (
            StatusCode::OK,
            Json(CheckResponse {
                status: "ok".to_string(),
                message: "backend is running".to_string(),
                model,
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(CheckResponse {
                status: "error".to_string(),
                message: "backend is running, but AI model failed to initialize.".to_string(),
                model,
            }),
        )
    }
}
