//! API error handling
//!
//! Maps the closed set of failure outcomes onto HTTP status codes and
//! JSON bodies. Internal failure detail never reaches the response body;
//! it is logged at the handler instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bb_core::BuddyError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON error body returned on every failure path
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Human-readable message
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The AI client handle was never constructed
    NotInitialized,
    /// Invalid request payload or query field
    BadRequest(String),
    /// The upstream AI service rejected or failed the call
    Upstream(String),
    /// Any other failure; detail stays server-side
    Internal,
}

impl AppError {
    pub fn invalid_payload() -> Self {
        Self::BadRequest("Invalid or missing JSON payload.".to_string())
    }

    pub fn missing_query() -> Self {
        Self::BadRequest("Missing or empty \"query\" field in the request.".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotInitialized => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("AI service not initialized. Check API key configuration."),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new(msg)),
            AppError::Upstream(detail) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new(format!("AI Service Unavailable or request error: {detail}")),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("An unexpected internal server error occurred."),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<BuddyError> for AppError {
    fn from(err: BuddyError) -> Self {
        match err {
            BuddyError::Upstream(detail) => AppError::Upstream(detail),
            // Configuration problems and everything unexpected stay generic
            BuddyError::Config(_) | BuddyError::Other(_) => AppError::Internal,
        }
    }
}
