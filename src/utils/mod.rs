//! Shared utility functions.
//!
//! - `mime`: content type checks for fetched pages

mod mime;

pub use mime::{is_html_content_type, HTML_MIME_PREFIX};
