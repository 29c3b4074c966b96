//! HTTP response wrapper.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use crate::walk::{FetchError, PageResponse};

/// HTTP response whose body has not been read yet.
#[derive(Debug)]
pub struct HttpResponse {
    pub url: String,
    pub status: StatusCode,
    pub headers: HashMap<String, String>,
    pub(crate) response: Response,
}

impl HttpResponse {
    /// Check if the response is successful.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(|s| s.as_str())
    }
}

#[async_trait]
impl PageResponse for HttpResponse {
    fn content_type(&self) -> Option<&str> {
        HttpResponse::content_type(self)
    }

    async fn text(self) -> Result<String, FetchError> {
        let url = self.url;
        self.response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout { url }
            } else {
                FetchError::Body {
                    url,
                    message: e.to_string(),
                }
            }
        })
    }
}
