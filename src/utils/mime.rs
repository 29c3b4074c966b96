//! Content type classification.

/// MIME type prefix a page must declare to be walked through.
pub const HTML_MIME_PREFIX: &str = "text/html";

/// Check whether a `Content-Type` header value declares HTML.
///
/// Parameters such as `charset` are ignored; the comparison is on the
/// leading media type only and is case-insensitive.
pub fn is_html_content_type(content_type: &str) -> bool {
    let content_type = content_type.trim_start();
    content_type
        .get(..HTML_MIME_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(HTML_MIME_PREFIX))
}
