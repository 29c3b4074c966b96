//! Fetching seam between the walker and the network.

use async_trait::async_trait;

use super::error::FetchError;

/// A response whose headers have arrived but whose body has not been read.
#[async_trait]
pub trait PageResponse: Send + Sized {
    /// Declared `Content-Type`, if any.
    fn content_type(&self) -> Option<&str>;

    /// Read the whole body as text.
    async fn text(self) -> Result<String, FetchError>;
}

/// Something that can issue a GET for a page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    type Response: PageResponse;

    /// Issue a single GET. Non-success statuses are errors.
    async fn fetch(&self, url: &str) -> Result<Self::Response, FetchError>;
}
