//! API route definitions

use crate::handlers::execute;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::post,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Create the `/api` routes with their permissive CORS policy.
///
/// Credentials support rules out the wildcard origin header, so the
/// request origin is mirrored instead.
pub fn api_routes() -> Router<Arc<AppState>> {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        .route("/execute", post(execute::execute_handler))
        .layer(cors)
}
