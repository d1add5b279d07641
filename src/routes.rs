use axum::{
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        // Liveness probe
        .route("/health", get(health_check))
        .merge(crate::api::routes::deployment_routes::deployment_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> AppError {
    AppError::NotFound
}
