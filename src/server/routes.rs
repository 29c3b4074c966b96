//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Random walks; a missing language falls back to the default
        .route("/wiki", get(handlers::random_article_default))
        .route("/wiki/", get(handlers::random_article_default))
        .route("/wiki/:language", get(handlers::random_article))
        // Metadata
        .route("/api/languages", get(handlers::api_languages))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
