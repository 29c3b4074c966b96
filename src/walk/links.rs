//! Article link discovery from raw page markup.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::error::FetchError;
use super::fetch::{PageFetcher, PageResponse};
use super::state::WalkState;
use crate::utils::is_html_content_type;

/// Namespaces that are never treated as articles. Their `_talk` pages and
/// the bare `Talk` namespace are excluded as well.
///
/// Walks into these pages tend to get stuck in meta-page loops.
pub const EXCLUDED_NAMESPACES: &[&str] = &[
    "Special",
    "Wikipedia",
    "Portal",
    "Template",
    "File",
    "User",
    "Help",
    "Category",
    "MediaWiki",
    "Draft",
    "Module",
];

const TALK_NAMESPACE: &str = "Talk";
const TALK_SUFFIX: &str = "_talk";

/// `/wiki/<Title>`, stopping at whitespace, quotes and angle brackets since
/// none of those are in the title class.
static ARTICLE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/wiki/[\w\-.,@?^=%&+#:]*[\w\-@?^=%&+#]").expect("article link pattern is valid")
});

/// How a fetched page was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Html,
    NonHtml,
}

/// Candidates found on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLinks {
    pub kind: PageKind,
    /// Raw fragments including the `/wiki/` prefix, in document order.
    pub links: Vec<String>,
}

impl ExtractedLinks {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Fetch `url` and pull article links out of it.
///
/// Non-HTML responses are recorded in the walk's non-HTML set and yield no
/// links; their body is never read.
pub async fn extract_links<F: PageFetcher>(
    fetcher: &F,
    url: &str,
    state: &mut WalkState,
) -> Result<ExtractedLinks, FetchError> {
    let response = fetcher.fetch(url).await?;

    let content_type = response.content_type().unwrap_or_default().to_string();
    if !is_html_content_type(&content_type) {
        debug!(url, content_type = %content_type, "non-HTML page");
        state.mark_non_html(url);
        return Ok(ExtractedLinks {
            kind: PageKind::NonHtml,
            links: Vec::new(),
        });
    }

    let body = response.text().await?;
    let links = find_article_links(&body);
    debug!(url, count = links.len(), "extracted article links");

    Ok(ExtractedLinks {
        kind: PageKind::Html,
        links,
    })
}

/// All in-site article links in `markup`, duplicates preserved.
pub fn find_article_links(markup: &str) -> Vec<String> {
    ARTICLE_LINK
        .find_iter(markup)
        .map(|m| m.as_str())
        .filter(|link| !is_excluded_namespace(link))
        .map(str::to_string)
        .collect()
}

fn is_excluded_namespace(link: &str) -> bool {
    let title = link.trim_start_matches("/wiki/");
    let Some((namespace, _)) = title.split_once(':') else {
        return false;
    };
    let subject = namespace.strip_suffix(TALK_SUFFIX).unwrap_or(namespace);
    namespace == TALK_NAMESPACE || EXCLUDED_NAMESPACES.contains(&subject)
}
