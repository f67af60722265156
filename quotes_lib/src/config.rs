//! Runtime configuration read from environment variables.

use std::path::PathBuf;

use url::Url;

use crate::error::QuotesError;
use crate::validation;

pub const API_URL_VAR: &str = "DAILY_QUOTES_API_URL";
/// Variable the original web front end used; honoured as a fallback.
pub const LEGACY_API_URL_VAR: &str = "NEXT_PUBLIC_API_URL";
pub const PAGE_SIZE_VAR: &str = "DAILY_QUOTES_PAGE_SIZE";
pub const THEME_FILE_VAR: &str = "DAILY_QUOTES_THEME_FILE";

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const DEFAULT_THEME_FILE: &str = ".daily-quotes-theme.toml";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the quotes API, without a trailing slash.
    pub api_url: String,
    /// Quotes per page for the list views.
    pub page_size: i64,
    /// Where the theme preference is persisted.
    pub theme_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: quotes_api::DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            theme_file: PathBuf::from(DEFAULT_THEME_FILE),
        }
    }
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, falling back to defaults
    /// (with a warning) for values that are missing or unusable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = match lookup(API_URL_VAR).or_else(|| lookup(LEGACY_API_URL_VAR)) {
            Some(raw) => parse_api_url(&raw).unwrap_or_else(|e| {
                tracing::warn!("{}, using default: {}", e, defaults.api_url);
                defaults.api_url.clone()
            }),
            None => {
                tracing::info!("{} not set, using default: {}", API_URL_VAR, defaults.api_url);
                defaults.api_url.clone()
            }
        };

        let page_size = lookup(PAGE_SIZE_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|e| QuotesError::Config(format!("invalid {}: {}", PAGE_SIZE_VAR, e)))
                    .and_then(|n| {
                        validation::validate_limit(n).map_err(|e| QuotesError::Config(e.to_string()))
                    })
                    .unwrap_or_else(|e| {
                        tracing::warn!("{}, using default: {}", e, DEFAULT_PAGE_SIZE);
                        DEFAULT_PAGE_SIZE
                    })
            })
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let theme_file = lookup(THEME_FILE_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.theme_file);

        Self {
            api_url,
            page_size,
            theme_file,
        }
    }

    /// Replaces the API base URL, validating it first.
    pub fn with_api_url(mut self, raw: &str) -> Result<Self, QuotesError> {
        self.api_url = parse_api_url(raw)?;
        Ok(self)
    }
}

/// Accepts absolute http(s) URLs and strips any trailing slash.
pub fn parse_api_url(raw: &str) -> Result<String, QuotesError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| QuotesError::Config(format!("invalid API URL '{}': {}", trimmed, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => Err(QuotesError::Config(format!(
            "unsupported API URL scheme '{}' in '{}'",
            other, trimmed
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            (API_URL_VAR, "https://quotes.example.com/"),
            (PAGE_SIZE_VAR, "25"),
            (THEME_FILE_VAR, "/tmp/theme.toml"),
        ]));
        assert_eq!(config.api_url, "https://quotes.example.com");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.theme_file, PathBuf::from("/tmp/theme.toml"));
    }

    #[test]
    fn legacy_variable_is_fallback() {
        let config = Config::from_lookup(lookup_from(&[(LEGACY_API_URL_VAR, "http://api:9000")]));
        assert_eq!(config.api_url, "http://api:9000");

        let config = Config::from_lookup(lookup_from(&[
            (LEGACY_API_URL_VAR, "http://api:9000"),
            (API_URL_VAR, "http://preferred:8000"),
        ]));
        assert_eq!(config.api_url, "http://preferred:8000");
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            (API_URL_VAR, "ftp://nope"),
            (PAGE_SIZE_VAR, "0"),
        ]));
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);

        let config = Config::from_lookup(lookup_from(&[(PAGE_SIZE_VAR, "ten")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn with_api_url_rejects_garbage() {
        assert!(Config::default().with_api_url("not a url").is_err());
        let config = Config::default().with_api_url("http://127.0.0.1:8000/").unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8000");
    }
}
