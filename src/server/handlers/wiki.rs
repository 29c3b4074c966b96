//! Random walk endpoint.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::warn;

use super::super::AppState;
use super::types::ApiError;
use crate::walk::{SiteContext, WalkOutcome};

/// Query parameters for a walk.
#[derive(Debug, Default, Deserialize)]
pub struct WalkParams {
    /// Seed for a reproducible walk.
    pub seed: Option<u64>,
}

/// Walk the default language edition.
pub async fn random_article_default(
    State(state): State<AppState>,
    Query(params): Query<WalkParams>,
) -> Result<impl IntoResponse, ApiError> {
    let language = state.default_language.clone();
    let outcome = run_walk(&state, &language, params.seed).await?;
    Ok(Json(outcome))
}

/// Walk the named language edition.
pub async fn random_article(
    State(state): State<AppState>,
    Path(language): Path<String>,
    Query(params): Query<WalkParams>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = run_walk(&state, &language, params.seed).await?;
    Ok(Json(outcome))
}

/// Run one walk on its own task.
///
/// The task gets a child of the server's shutdown token; the drop guard
/// cancels it if this handler is dropped (client went away), so the walk
/// stops at its next fetch.
async fn run_walk(
    state: &AppState,
    language: &str,
    seed: Option<u64>,
) -> Result<WalkOutcome, ApiError> {
    state.languages.validate(language)?;
    let site = SiteContext::from_template(&state.site_template, language)?;

    let cancel = state.shutdown.child_token();
    let _guard = cancel.clone().drop_guard();
    let walker = state.walker.clone();

    let task = tokio::spawn(async move {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        walker.walk(&site, &mut rng, &cancel).await
    });

    match task.await {
        Ok(Ok(outcome)) => Ok(outcome),
        Ok(Err(e)) => {
            warn!(language, error = %e, "walk failed");
            Err(e.into())
        }
        Err(e) => Err(ApiError::Internal(format!("walk task failed: {}", e))),
    }
}
