//! HTTP client for the daily quotes API.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{CategoryQuery, HistoryQuery, Query, SearchQuery},
    types::{ApiResponse, HealthStatus, QuotesListResponse, TodayQuote},
    Error,
};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client for the daily quotes API.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout.
/// Failures are logged once and returned; nothing is retried.
pub struct Client {
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn request<T, Q>(&self, method: Method, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("{} {}", method, url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .request(method, url)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("API request failed for {}: {}", path, e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body for {}: {}", path, e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request to {} failed with status {}: {}", path, status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse {}: {} | body: {}", path, e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        self.request(Method::GET, path, query).await
    }

    /// Fetches today's quote.
    pub async fn get_today(&self) -> Result<TodayQuote, Error> {
        self.get::<TodayQuote, HistoryQuery>("/api/today", None)
            .await
    }

    /// Fetches a page of past quotes, newest first.
    pub async fn get_history(&self, query: &HistoryQuery) -> Result<QuotesListResponse, Error> {
        self.get::<QuotesListResponse, HistoryQuery>("/api/history", Some(query))
            .await
    }

    /// Runs a full-text search over quotes.
    pub async fn search(&self, query: &SearchQuery) -> Result<QuotesListResponse, Error> {
        self.get::<QuotesListResponse, SearchQuery>("/api/search", Some(query))
            .await
    }

    /// Fetches a page of quotes within one category.
    pub async fn get_category(&self, query: &CategoryQuery) -> Result<QuotesListResponse, Error> {
        self.get::<QuotesListResponse, CategoryQuery>("/api/category", Some(query))
            .await
    }

    /// Fetches backend statistics.
    pub async fn get_stats(&self) -> Result<ApiResponse, Error> {
        self.get::<ApiResponse, HistoryQuery>("/api/stats", None)
            .await
    }

    /// Asks the backend to crawl one source now.
    pub async fn trigger_crawl(&self, source: &str) -> Result<ApiResponse, Error> {
        self.request::<ApiResponse, HistoryQuery>(
            Method::POST,
            format!("/api/crawl/{}", source).as_str(),
            None,
        )
        .await
    }

    /// Fetches the state of the backend crawlers.
    pub async fn get_crawl_status(&self) -> Result<ApiResponse, Error> {
        self.get::<ApiResponse, HistoryQuery>("/api/crawl/status", None)
            .await
    }

    pub async fn health_check(&self) -> Result<HealthStatus, Error> {
        self.get::<HealthStatus, HistoryQuery>("/api/health", None)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = Client::with_base_url("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "金".repeat(1000);
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert!(snippet.len() < body.len());
    }
}
