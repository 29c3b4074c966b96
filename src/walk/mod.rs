//! Depth-bounded random walk over a wiki.
//!
//! A walk starts at the site's main page and repeatedly follows one randomly
//! chosen article link. It ends when:
//! - the current page has no article links (dead end),
//! - the current page is not HTML,
//! - the hop limit is reached (the last accepted hop is returned),
//! - the only remaining candidate was already visited (it is recorded and returned).
//!
//! All mutable state lives in a [`WalkState`] built per call.

mod error;
mod fetch;
mod links;
mod select;
mod site;
mod state;

pub use error::{FetchError, WalkError};
pub use fetch::{PageFetcher, PageResponse};
pub use links::{extract_links, find_article_links, ExtractedLinks, PageKind, EXCLUDED_NAMESPACES};
pub use select::{select_next, Selection};
pub use site::{SiteContext, DEFAULT_SITE_TEMPLATE, MAIN_PAGE_PATH};
pub use state::WalkState;

use rand::Rng;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Hop limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// Why a walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The current page had no article links.
    DeadEnd,
    /// The current page was not HTML.
    NonHtml,
    /// The hop limit was reached.
    DepthLimit,
    /// Only an already-known candidate was left and it was taken.
    Exhausted,
}

/// Result of a finished walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkOutcome {
    /// Final article URL.
    pub url: String,
    /// URLs hopped to, in order. The seed is only present if re-chosen.
    pub graph: Vec<String>,
    #[serde(skip)]
    pub termination: Termination,
}

/// Drives walks through a [`PageFetcher`].
#[derive(Debug, Clone)]
pub struct Walker<F> {
    fetcher: F,
    max_depth: u32,
}

impl<F: PageFetcher> Walker<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum number of hops per walk.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Walk `site` from its main page.
    ///
    /// Fetch failures end the walk with an error; nothing is retried.
    /// Cancellation is observed before and during every fetch.
    pub async fn walk<R: Rng + Send>(
        &self,
        site: &SiteContext,
        rng: &mut R,
        cancel: &CancellationToken,
    ) -> Result<WalkOutcome, WalkError> {
        let seed = site.seed_url();
        let mut state = WalkState::seeded(&seed);
        let mut current = seed;

        loop {
            if state.hops() >= self.max_depth {
                return Ok(finish(current, state, Termination::DepthLimit));
            }
            if cancel.is_cancelled() {
                return Err(WalkError::Cancelled);
            }

            let page = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(WalkError::Cancelled),
                page = extract_links(&self.fetcher, &current, &mut state) => page?,
            };

            if page.is_empty() {
                let termination = match page.kind {
                    PageKind::Html => Termination::DeadEnd,
                    PageKind::NonHtml => Termination::NonHtml,
                };
                return Ok(finish(current, state, termination));
            }

            let selection = select_next(site, page.links, &state, rng)?;
            debug!(
                hop = state.hops() + 1,
                from = %current,
                to = %selection.url,
                forced = selection.forced,
                "hop"
            );

            state.accept(selection.url.clone());
            current = selection.url;

            if selection.forced {
                return Ok(finish(current, state, Termination::Exhausted));
            }
        }
    }
}

fn finish(url: String, state: WalkState, termination: Termination) -> WalkOutcome {
    info!(
        url = %url,
        hops = state.hops(),
        termination = ?termination,
        "walk finished"
    );
    WalkOutcome {
        url,
        graph: state.into_path(),
        termination,
    }
}
