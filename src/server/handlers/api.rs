//! API endpoint handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::super::AppState;

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// API endpoint listing the supported language codes.
pub async fn api_languages(State(state): State<AppState>) -> impl IntoResponse {
    let languages: Vec<_> = state.languages.iter().collect();
    Json(languages)
}
