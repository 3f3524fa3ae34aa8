//! Budget Buddy API - REST server
//!
//! Provides the HTTP surface over the assistant: a health check and a
//! single query-execution endpoint, plus OpenAPI documentation.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Budget Buddy API",
        description = "Financial reasoning assistant backed by Gemini with Google Search grounding"
    ),
    paths(handlers::health::check_handler, handlers::execute::execute_handler),
    components(schemas(
        handlers::health::CheckResponse,
        handlers::execute::ExecuteRequest,
        handlers::execute::ExecuteResponse,
        error::ApiError,
    ))
)]
pub struct ApiDoc;

/// Build the application router around a fully constructed state
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/check", get(handlers::health::check_handler))
        .nest("/api", routes::api_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
