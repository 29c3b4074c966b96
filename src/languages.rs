//! Supported language editions.
//!
//! The list is a JSON array of `{ "English": name, "alpha2": code }` objects.
//! A copy ships inside the binary; a file on disk can replace it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language list compiled into the binary.
pub const BUILTIN_LANGUAGES: &str = include_str!("../languages.json");

/// Language used when a request does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Errors raised while loading or checking languages.
#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("Invalid language code: {0}")]
    Unknown(String),

    #[error("failed to read language list {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse language list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of the language list file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    #[serde(rename = "English")]
    pub english: String,
    #[serde(rename = "alpha2")]
    pub code: String,
}

/// Known language codes, keyed by code.
#[derive(Debug, Clone, Default)]
pub struct LanguageList {
    languages: BTreeMap<String, String>,
}

impl LanguageList {
    /// The list compiled into the binary.
    pub fn builtin() -> Result<Self, LanguageError> {
        Self::from_json(BUILTIN_LANGUAGES)
    }

    /// Parse a list from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LanguageError> {
        let entries: Vec<Language> = serde_json::from_str(json)?;
        Ok(entries.into_iter().collect())
    }

    /// Load a list from a JSON file.
    pub async fn load(path: &Path) -> Result<Self, LanguageError> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LanguageError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
        Self::from_json(&contents)
    }

    /// Load from `path` when given, otherwise use the built-in list.
    pub async fn load_or_builtin(path: Option<&Path>) -> Result<Self, LanguageError> {
        match path {
            Some(path) => Self::load(path).await,
            None => Self::builtin(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    /// English name of a language code.
    pub fn name(&self, code: &str) -> Option<&str> {
        self.languages.get(code).map(|s| s.as_str())
    }

    /// Return `code` if it is known, otherwise an [`LanguageError::Unknown`].
    pub fn validate<'a>(&self, code: &'a str) -> Result<&'a str, LanguageError> {
        if self.contains(code) {
            Ok(code)
        } else {
            Err(LanguageError::Unknown(code.to_string()))
        }
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Languages ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = Language> + '_ {
        self.languages.iter().map(|(code, english)| Language {
            english: english.clone(),
            code: code.clone(),
        })
    }
}

impl FromIterator<Language> for LanguageList {
    fn from_iter<I: IntoIterator<Item = Language>>(iter: I) -> Self {
        Self {
            languages: iter
                .into_iter()
                .map(|lang| (lang.code, lang.english))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_list() {
        let list = LanguageList::builtin().unwrap();
        assert!(list.contains("en"));
        assert!(list.contains("de"));
        assert!(list.contains("zh"));
        assert!(!list.contains("xx"));
        assert_eq!(list.name("fr"), Some("French"));
        assert!(list.contains(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_validate_echoes_code() {
        let list = LanguageList::builtin().unwrap();
        assert_eq!(list.validate("it").unwrap(), "it");

        let err = list.validate("klingon").unwrap_err();
        assert_eq!(err.to_string(), "Invalid language code: klingon");
    }

    #[test]
    fn test_iter_is_sorted_by_code() {
        let list = LanguageList::from_json(
            r#"[{"English":"Welsh","alpha2":"cy"},{"English":"Afar","alpha2":"aa"}]"#,
        )
        .unwrap();
        let codes: Vec<_> = list.iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["aa", "cy"]);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            LanguageList::from_json("{not json"),
            Err(LanguageError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"English":"Esperanto","alpha2":"eo"}}]"#).unwrap();

        let list = LanguageList::load_or_builtin(Some(file.path())).await.unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.contains("eo"));
        assert!(!list.contains("en"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = LanguageList::load(Path::new("/nonexistent/languages.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, LanguageError::Read { .. }));
    }
}
