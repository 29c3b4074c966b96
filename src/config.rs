//! Configuration management for wikiwalk using the prefer crate.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::languages::DEFAULT_LANGUAGE;
use crate::walk::{DEFAULT_MAX_DEPTH, DEFAULT_SITE_TEMPLATE};

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Default per-fetch timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} config {path}: {message}")]
    Parse {
        path: String,
        format: &'static str,
        message: String,
    },
}

/// Application settings with every default filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Address the HTTP server listens on.
    pub bind: String,
    /// Maximum hops per walk.
    pub max_depth: u32,
    /// Per-fetch timeout in seconds.
    pub request_timeout: u64,
    /// User agent for HTTP requests (None = built-in).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Language list file (None = built-in list).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages_file: Option<PathBuf>,
    /// Language used when a request does not name one.
    pub default_language: String,
    /// Base URL template; `{lang}` is replaced by the language code.
    pub site_template: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: None,
            languages_file: None,
            default_language: DEFAULT_LANGUAGE.to_string(),
            site_template: DEFAULT_SITE_TEMPLATE.to_string(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Apply `WIKIWALK_*` overrides read through `lookup`.
    ///
    /// Unparseable numbers are ignored with a warning.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        if let Some(bind) = lookup("WIKIWALK_BIND") {
            tracing::debug!("Using WIKIWALK_BIND from environment: {}", bind);
            self.bind = bind;
        }
        if let Some(depth) = lookup("WIKIWALK_MAX_DEPTH") {
            match depth.trim().parse() {
                Ok(depth) => self.max_depth = depth,
                Err(_) => tracing::warn!("Ignoring invalid WIKIWALK_MAX_DEPTH: {}", depth),
            }
        }
        if let Some(timeout) = lookup("WIKIWALK_REQUEST_TIMEOUT") {
            match timeout.trim().parse() {
                Ok(timeout) => self.request_timeout = timeout,
                Err(_) => tracing::warn!("Ignoring invalid WIKIWALK_REQUEST_TIMEOUT: {}", timeout),
            }
        }
        if let Some(user_agent) = lookup("WIKIWALK_USER_AGENT") {
            self.user_agent = Some(user_agent);
        }
        if let Some(path) = lookup("WIKIWALK_LANGUAGES") {
            self.languages_file = Some(PathBuf::from(path));
        }
    }

    /// Render as TOML for display.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Maximum hops per walk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Language list file, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_template: Option<String>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers wikiwalk config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("wikiwalk").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("{}; using defaults", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            // No config file found
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })?;

        let mut config = Self::parse(&contents, path)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_err = |format: &'static str, message: String| ConfigError::Parse {
            path: path.display().to_string(),
            format,
            message,
        };

        match ext {
            "toml" => toml::from_str(contents).map_err(|e| parse_err("TOML", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(contents).map_err(|e| parse_err("YAML", e.to_string()))
            }
            _ => serde_json::from_str(contents).map_err(|e| parse_err("JSON", e.to_string())),
        }
    }

    /// Get the base directory for resolving relative paths.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let path = Path::new(path_str);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    /// `base_dir` is used to resolve relative paths (typically config file dir or CWD).
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(depth) = self.max_depth {
            settings.max_depth = depth;
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = Some(user_agent.clone());
        }
        if let Some(ref languages) = self.languages_file {
            settings.languages_file = Some(self.resolve_path(languages, base_dir));
        }
        if let Some(ref language) = self.default_language {
            settings.default_language = language.clone();
        }
        if let Some(ref template) = self.site_template {
            settings.site_template = template.clone();
        }
    }
}

/// Options controlling where configuration comes from.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file (skips discovery).
    pub config_path: Option<PathBuf>,
}

/// Load settings with explicit options.
///
/// Precedence, lowest first: defaults, config file, `WIKIWALK_*` environment.
pub async fn load_settings_with_options(
    options: LoadOptions,
) -> Result<(Settings, Config), ConfigError> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };

    let base_dir = config
        .base_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings, &base_dir);
    settings.apply_env(|key| std::env::var(key).ok());

    Ok((settings, config))
}
