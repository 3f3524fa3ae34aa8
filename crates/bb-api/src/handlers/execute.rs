//! Query execution handler

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use bb_core::BuddyError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

/// Execute request body.
///
/// Documentation schema only; the handler inspects the raw JSON itself so
/// that malformed payloads and bad `query` fields produce distinct errors.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExecuteRequest {
    /// The user's spending question
    #[schema(example = "Should I buy a $150 yoga mat?")]
    pub query: String,
}

/// Execute response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ExecuteResponse {
    #[schema(example = true)]
    pub success: bool,
    /// The assistant's plain-text answer
    pub result: String,
}

/// Forward a query to the assistant.
///
/// Validation is linear: usable handle, parseable JSON body, non-blank
/// string `query`. The handle check comes first, so an uninitialized
/// service answers 503 regardless of body validity.
#[utoipa::path(
    post,
    path = "/api/execute",
    tag = "execute",
    request_body = ExecuteRequest,
    responses(
        (status = 200, description = "Query executed", body = ExecuteResponse),
        (status = 400, description = "Invalid JSON payload or query field", body = crate::error::ApiError),
        (status = 500, description = "Unexpected internal error", body = crate::error::ApiError),
        (status = 503, description = "AI client uninitialized or upstream failure", body = crate::error::ApiError)
    )
)]
pub async fn execute_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ExecuteResponse>, AppError> {
    let Some(assistant) = state.assistant() else {
        return Err(AppError::NotInitialized);
    };

    let Json(body) = payload.map_err(|_| AppError::invalid_payload())?;

    // The query must be a non-blank string; it is forwarded untrimmed.
    let query = match body.get("query") {
        Some(Value::String(q)) if !q.trim().is_empty() => q.clone(),
        _ => return Err(AppError::missing_query()),
    };

    match assistant.execute(&query).await {
        Ok(result) => Ok(Json(ExecuteResponse {
            success: true,
            result,
        })),
        Err(BuddyError::Upstream(detail)) => {
            tracing::error!("Gemini API error: {detail}");
            Err(AppError::Upstream(detail))
        }
        Err(err) => {
            tracing::error!("Internal server error while executing query: {err}");
            Err(AppError::Internal)
        }
    }
}
