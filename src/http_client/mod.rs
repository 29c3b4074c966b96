//! HTTP client used to fetch wiki pages.

mod response;
mod user_agent;

pub use response::HttpResponse;
pub use user_agent::{resolve_user_agent, USER_AGENT};

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use crate::walk::{FetchError, PageFetcher};

/// Timeout applied to each fetch when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

fn extract_response_headers(response: &Response) -> HashMap<String, String> {
    response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

fn transport_error(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

impl HttpClient {
    /// Create a client with the default user agent.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(timeout, None)
    }

    /// Create a client with a custom user agent.
    /// - None: default wikiwalk user agent
    /// - Some(custom): custom user agent string
    pub fn with_user_agent(
        timeout: Duration,
        user_agent_config: Option<&str>,
    ) -> Result<Self, reqwest::Error> {
        let user_agent = resolve_user_agent(user_agent_config);
        let client = Client::builder()
            .user_agent(&user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request. Non-success statuses are returned as errors.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        debug!(
            url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetched page"
        );

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(HttpResponse {
            url: url.to_string(),
            status,
            headers: extract_response_headers(&response),
            response,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    type Response = HttpResponse;

    async fn fetch(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.get(url).await
    }
}
