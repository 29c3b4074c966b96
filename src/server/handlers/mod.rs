//! HTTP request handlers for the web server.

mod api;
mod types;
mod wiki;

// Re-export handlers for use by the router
pub use api::{api_languages, health};
pub use types::ApiError;
pub use wiki::{random_article, random_article_default, WalkParams};
