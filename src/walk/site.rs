//! Per-walk site context: the wiki a walk runs against.

use url::Url;

use super::error::WalkError;

/// Path of the page every walk starts from.
pub const MAIN_PAGE_PATH: &str = "/wiki/Main_Page";

/// Base URL template for a language edition; `{lang}` is replaced by the code.
pub const DEFAULT_SITE_TEMPLATE: &str = "https://{lang}.wikipedia.org";

/// Base domain (scheme and host) a walk is confined to.
///
/// Built once per walk and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    base: String,
}

impl SiteContext {
    /// Site for a Wikipedia language edition, e.g. `en` -> `https://en.wikipedia.org`.
    pub fn for_language(code: &str) -> Result<Self, WalkError> {
        Self::from_template(DEFAULT_SITE_TEMPLATE, code)
    }

    /// Site for `code` using a base URL template containing `{lang}`.
    pub fn from_template(template: &str, code: &str) -> Result<Self, WalkError> {
        Self::with_base(&template.replace("{lang}", code))
    }

    /// Site rooted at an arbitrary base such as a mirror or a test server.
    pub fn with_base(base: &str) -> Result<Self, WalkError> {
        let base = base.trim_end_matches('/');
        let parsed = Url::parse(base).map_err(|e| WalkError::InvalidSite {
            base: base.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.host_str().is_none() || parsed.path() != "/" || parsed.query().is_some() {
            return Err(WalkError::InvalidSite {
                base: base.to_string(),
                reason: "expected scheme and host only".to_string(),
            });
        }

        Ok(Self {
            base: base.to_string(),
        })
    }

    /// Scheme and host, without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Main page of the site.
    pub fn seed_url(&self) -> String {
        format!("{}{}", self.base, MAIN_PAGE_PATH)
    }

    /// Turn a raw link fragment into an absolute URL.
    ///
    /// Percent-encoding is decoded first; a fragment that does not decode to
    /// UTF-8 is used as-is.
    pub fn resolve(&self, fragment: &str) -> String {
        match urlencoding::decode(fragment) {
            Ok(decoded) => format!("{}{}", self.base, decoded),
            Err(_) => format!("{}{}", self.base, fragment),
        }
    }
}
