//! Caching wrapper around the API client, plus the list-fetch facade used by the views.

use quotes_api::types::{ApiResponse, HealthStatus, QuotesListResponse, TodayQuote};
use quotes_api::{CategoryQuery, Client, HistoryQuery, Query, SearchQuery};

use crate::cache::CategoryCache;
use crate::error::QuotesError;

/// Quotes fetched per category tab on the home view.
pub const CATEGORY_PREVIEW_LIMIT: i64 = 6;

/// Which paginated list a view shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListKind {
    History,
    Search(String),
    Category(String),
}

impl ListKind {
    pub fn label(&self) -> &'static str {
        match self {
            ListKind::History => "history",
            ListKind::Search(_) => "search results",
            ListKind::Category(_) => "category",
        }
    }
}

/// API client wrapper that adds the per-category cache.
///
/// Only the home view's category previews are cached. Every other call goes
/// straight to the network, and failures are returned without retrying.
pub struct CachedClient {
    inner: Client,
    categories: CategoryCache,
}

impl CachedClient {
    /// Creates a new cached client talking to `base_url`.
    pub fn new(base_url: &str, categories: CategoryCache) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
            categories,
        }
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub async fn get_today(&self) -> Result<TodayQuote, QuotesError> {
        Ok(self.inner.get_today().await?)
    }

    /// Fetches one page of the list described by `kind`.
    pub async fn fetch_quotes(
        &self,
        kind: &ListKind,
        page: i64,
        limit: i64,
    ) -> Result<QuotesListResponse, QuotesError> {
        let resp = match kind {
            ListKind::History => {
                let query = HistoryQuery::default().with_page(page).with_limit(limit);
                self.inner.get_history(&query).await?
            }
            ListKind::Search(q) => {
                let query = SearchQuery::new(q).with_page(page).with_limit(limit);
                self.inner.search(&query).await?
            }
            ListKind::Category(name) => {
                let query = CategoryQuery::new(name).with_page(page).with_limit(limit);
                self.inner.get_category(&query).await?
            }
        };
        tracing::debug!(
            "Fetched {} page {}/{} ({} quotes)",
            kind.label(),
            resp.pagination.page,
            resp.pagination.total_pages,
            resp.quotes.len()
        );
        Ok(resp)
    }

    /// Fetches the first page of a category preview, returning the cached
    /// page when this category was already loaded.
    pub async fn get_category_quotes(
        &self,
        category: &str,
    ) -> Result<QuotesListResponse, QuotesError> {
        if let Some(cached) = self.categories.get(category) {
            tracing::debug!("Category cache hit for {}", category);
            return Ok(cached);
        }

        let resp = self
            .fetch_quotes(
                &ListKind::Category(category.to_string()),
                1,
                CATEGORY_PREVIEW_LIMIT,
            )
            .await?;
        self.categories.set(category.to_string(), resp.clone());
        Ok(resp)
    }

    pub fn is_category_cached(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    pub async fn get_stats(&self) -> Result<ApiResponse, QuotesError> {
        Ok(self.inner.get_stats().await?)
    }

    pub async fn trigger_crawl(&self, source: &str) -> Result<ApiResponse, QuotesError> {
        Ok(self.inner.trigger_crawl(source).await?)
    }

    pub async fn get_crawl_status(&self) -> Result<ApiResponse, QuotesError> {
        Ok(self.inner.get_crawl_status().await?)
    }

    pub async fn health_check(&self) -> Result<HealthStatus, QuotesError> {
        Ok(self.inner.health_check().await?)
    }
}
