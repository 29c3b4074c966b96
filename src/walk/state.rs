//! Mutable state owned by a single walk.

use std::collections::HashSet;

/// Visited set, non-HTML set, hop counter and path of one walk.
///
/// A fresh value is built for every walk, so concurrent walks never share
/// state.
#[derive(Debug, Clone)]
pub struct WalkState {
    visited: HashSet<String>,
    non_html: HashSet<String>,
    hops: u32,
    path: Vec<String>,
}

impl WalkState {
    /// State for a walk starting at `seed`. The seed counts as visited.
    pub fn seeded(seed: &str) -> Self {
        let mut visited = HashSet::new();
        visited.insert(seed.to_string());
        Self {
            visited,
            non_html: HashSet::new(),
            hops: 0,
            path: Vec::new(),
        }
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn is_non_html(&self, url: &str) -> bool {
        self.non_html.contains(url)
    }

    /// True if choosing `url` would be a revisit or a known non-HTML leaf.
    pub fn is_known(&self, url: &str) -> bool {
        self.is_visited(url) || self.is_non_html(url)
    }

    pub fn mark_non_html(&mut self, url: &str) {
        self.non_html.insert(url.to_string());
    }

    /// Record a hop to `url`.
    pub fn accept(&mut self, url: String) {
        self.visited.insert(url.clone());
        self.path.push(url);
        self.hops += 1;
    }

    pub fn hops(&self) -> u32 {
        self.hops
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn into_path(self) -> Vec<String> {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "https://en.wikipedia.org/wiki/Main_Page";

    #[test]
    fn test_seed_is_visited_but_not_in_path() {
        let state = WalkState::seeded(SEED);
        assert!(state.is_visited(SEED));
        assert!(state.path().is_empty());
        assert_eq!(state.hops(), 0);
    }

    #[test]
    fn test_accept_records_hop() {
        let mut state = WalkState::seeded(SEED);
        state.accept("https://en.wikipedia.org/wiki/Rust".to_string());

        assert!(state.is_known("https://en.wikipedia.org/wiki/Rust"));
        assert_eq!(state.hops(), 1);
        assert_eq!(state.path(), ["https://en.wikipedia.org/wiki/Rust"]);
    }

    #[test]
    fn test_non_html_is_known_but_not_visited() {
        let mut state = WalkState::seeded(SEED);
        state.mark_non_html("https://en.wikipedia.org/wiki/Scan.pdf");

        assert!(state.is_non_html("https://en.wikipedia.org/wiki/Scan.pdf"));
        assert!(!state.is_visited("https://en.wikipedia.org/wiki/Scan.pdf"));
        assert!(state.is_known("https://en.wikipedia.org/wiki/Scan.pdf"));
    }

    #[test]
    fn test_path_keeps_repeats_in_order() {
        let mut state = WalkState::seeded(SEED);
        state.accept("a".to_string());
        state.accept("b".to_string());
        state.accept("a".to_string());
        assert_eq!(state.into_path(), vec!["a", "b", "a"]);
    }
}
