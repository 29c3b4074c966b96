//! Random next-hop selection with backtracking.

use rand::Rng;

use super::error::WalkError;
use super::site::SiteContext;
use super::state::WalkState;

/// The hop chosen from a page's candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub url: String,
    /// Set when the URL was already visited or known non-HTML and was taken
    /// only because it was the last candidate left.
    pub forced: bool,
}

/// Pick one candidate uniformly at random, preferring unvisited HTML pages.
///
/// A rejected candidate is dropped and the pick repeated on what remains.
/// When a single candidate is left it is returned even if already known,
/// so selection always ends with a URL. An empty candidate list is a caller
/// error.
pub fn select_next<R: Rng>(
    site: &SiteContext,
    mut candidates: Vec<String>,
    state: &WalkState,
    rng: &mut R,
) -> Result<Selection, WalkError> {
    loop {
        if candidates.is_empty() {
            return Err(WalkError::NoCandidates);
        }

        let index = rng.random_range(0..candidates.len());
        let url = site.resolve(&candidates[index]);

        if !state.is_known(&url) {
            return Ok(Selection { url, forced: false });
        }
        if candidates.len() == 1 {
            return Ok(Selection { url, forced: true });
        }

        candidates.remove(index);
    }
}
