//! Per-category result cache backed by `DashMap` for concurrent access.

use dashmap::DashMap;
use quotes_api::types::QuotesListResponse;

/// Remembers the last page fetched for each category.
///
/// Entries are filled lazily and never evicted. Keys come from the fixed
/// category tab set, so the map stays small for the life of a session.
#[derive(Default)]
pub struct CategoryCache {
    store: DashMap<String, QuotesListResponse>,
}

impl CategoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached page for `category`, if one was stored.
    pub fn get(&self, category: &str) -> Option<QuotesListResponse> {
        self.store.get(category).map(|entry| entry.value().clone())
    }

    /// Inserts or overwrites the page for `category`.
    pub fn set(&self, category: String, value: QuotesListResponse) {
        self.store.insert(category, value);
    }

    pub fn contains(&self, category: &str) -> bool {
        self.store.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotes_api::types::PaginationInfo;

    fn page(total: i64) -> QuotesListResponse {
        QuotesListResponse {
            quotes: Vec::new(),
            pagination: PaginationInfo {
                page: 1,
                limit: 6,
                total,
                total_pages: (total + 5) / 6,
            },
            query: None,
        }
    }

    #[test]
    fn cache_set_and_get() {
        let cache = CategoryCache::new();
        cache.set("思想类".to_string(), page(12));
        let hit = cache.get("思想类").unwrap();
        assert_eq!(hit.pagination.total, 12);
        assert!(cache.contains("思想类"));
    }

    #[test]
    fn cache_miss() {
        let cache = CategoryCache::new();
        assert!(cache.get("生活类").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_overwrite() {
        let cache = CategoryCache::new();
        cache.set("生活类".to_string(), page(1));
        cache.set("生活类".to_string(), page(7));
        assert_eq!(cache.get("生活类").unwrap().pagination.total, 7);
        assert_eq!(cache.len(), 1);
    }
}
