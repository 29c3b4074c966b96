//! Web server exposing random walks.
//!
//! - `GET /wiki/{lang}` walks a language edition and returns `{"url", "graph"}`
//! - `GET /wiki/` walks the default language
//! - `GET /api/languages` lists the supported codes

mod handlers;
mod routes;

pub use handlers::ApiError;
pub use routes::create_router;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Settings;
use crate::http_client::HttpClient;
use crate::languages::LanguageList;
use crate::walk::Walker;

/// Shared state for the web server.
///
/// Nothing here is mutated by a walk; each request builds its own walk state.
#[derive(Clone)]
pub struct AppState {
    pub walker: Arc<Walker<HttpClient>>,
    pub languages: Arc<LanguageList>,
    pub default_language: String,
    /// Base URL template with a `{lang}` placeholder.
    pub site_template: String,
    /// Cancelled on shutdown; every walk runs under a child token.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client =
            HttpClient::with_user_agent(settings.request_timeout(), settings.user_agent.as_deref())?;
        let languages = LanguageList::load_or_builtin(settings.languages_file.as_deref()).await?;

        if !languages.contains(&settings.default_language) {
            anyhow::bail!(
                "default language {} is not in the language list",
                settings.default_language
            );
        }

        Ok(Self {
            walker: Arc::new(Walker::new(client).with_max_depth(settings.max_depth)),
            languages: Arc::new(languages),
            default_language: settings.default_language.clone(),
            site_template: settings.site_template.clone(),
            shutdown: CancellationToken::new(),
        })
    }
}

/// Start the web server. Stops on Ctrl+C, cancelling walks in flight.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings).await?;
    let shutdown = state.shutdown.clone();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Starting server at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down");
            shutdown.cancel();
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use std::time::Duration;
    use tower::ServiceExt;

    fn page(links: &[&str]) -> String {
        links
            .iter()
            .map(|l| format!("<a href=\"{}\">x</a>", l))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serve a tiny wiki where Main_Page -> A -> B and B is a dead end.
    async fn spawn_fake_wiki() -> String {
        let html = |body: String| ([(header::CONTENT_TYPE, "text/html; charset=UTF-8")], body);
        let app = Router::new()
            .route(
                "/wiki/Main_Page",
                get(move || async move { html(page(&["/wiki/A", "/wiki/Special:Random"])) }),
            )
            .route("/wiki/A", get(move || async move { html(page(&["/wiki/B"])) }))
            .route("/wiki/B", get(move || async move { html(String::new()) }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn test_state(site_template: String) -> AppState {
        let client = HttpClient::new(Duration::from_secs(2)).unwrap();
        AppState {
            walker: Arc::new(Walker::new(client)),
            languages: Arc::new(LanguageList::builtin().unwrap()),
            default_language: "en".to_string(),
            site_template,
            shutdown: CancellationToken::new(),
        }
    }

    async fn get_response(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_walk_returns_url_and_graph() {
        let base = spawn_fake_wiki().await;
        let app = create_router(test_state(base.clone()));

        let (status, body) = get_response(app, "/wiki/en").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["url"], format!("{}/wiki/B", base));
        assert_eq!(
            json["graph"],
            serde_json::json!([format!("{}/wiki/A", base), format!("{}/wiki/B", base)])
        );
    }

    #[tokio::test]
    async fn test_default_language_route() {
        let base = spawn_fake_wiki().await;
        let app = create_router(test_state(base.clone()));

        let (status, body) = get_response(app, "/wiki/?seed=5").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["url"], format!("{}/wiki/B", base));
    }

    #[tokio::test]
    async fn test_invalid_language_is_bad_request() {
        let app = create_router(test_state("http://127.0.0.1:9".to_string()));

        let (status, body) = get_response(app, "/wiki/xx").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid language code: xx");
    }

    #[tokio::test]
    async fn test_unreachable_site_is_bad_gateway() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let app = create_router(test_state(format!("http://{}", addr)));

        let (status, body) = get_response(app.clone(), "/wiki/en").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("/wiki/Main_Page"));

        // The server keeps answering after a failed walk
        let (status, _) = get_response(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_shutdown_cancels_walks() {
        let base = spawn_fake_wiki().await;
        let state = test_state(base);
        state.shutdown.cancel();
        let app = create_router(state);

        let (status, _) = get_response(app, "/wiki/en").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_api_languages() {
        let app = create_router(test_state("http://127.0.0.1:9".to_string()));

        let (status, body) = get_response(app, "/api/languages").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let languages = json.as_array().unwrap();
        assert!(languages
            .iter()
            .any(|l| l["alpha2"] == "en" && l["English"] == "English"));
    }
}
