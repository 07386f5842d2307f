//! Keyed response cache.
//!
//! Caches successful result pages by `(query, page)` so identical inputs
//! reuse the stored response instead of hitting the network again.

use std::sync::Arc;

use cinegrid_core::MoviePage;
use scc::HashMap;

/// Cache key: one search query at one page index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    query: String,
    page: u32,
}

impl PageKey {
    /// Create a key for a query/page pair.
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }

    /// The query component of the key.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The page component of the key.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// In-memory cache of result pages.
///
/// Cloning is cheap; clones share the same backing map.
#[derive(Debug, Clone, Default)]
pub struct PageCache {
    entries: Arc<HashMap<PageKey, MoviePage>>,
}

impl PageCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached page.
    pub async fn get(&self, key: &PageKey) -> Option<MoviePage> {
        self.entries
            .get_async(key)
            .await
            .map(|entry| entry.get().clone())
    }

    /// Store a page. An existing entry for the key is left in place; pages
    /// for a given key never change between fetches.
    pub async fn insert(&self, key: PageKey, page: MoviePage) {
        let _ = self.entries.insert_async(key, page).await;
    }

    /// Synchronous lookup for callers outside an async context.
    pub fn get_sync(&self, key: &PageKey) -> Option<MoviePage> {
        self.entries.get_sync(key).map(|entry| entry.get().clone())
    }

    /// Synchronous insert for callers outside an async context.
    pub fn insert_sync(&self, key: PageKey, page: MoviePage) {
        let _ = self.entries.insert_sync(key, page);
    }

    /// Number of cached pages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no pages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached page.
    pub fn clear(&self) {
        self.entries.clear_sync();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_total(total_pages: u32) -> MoviePage {
        MoviePage {
            page: 1,
            results: vec![],
            total_pages,
            total_results: 0,
        }
    }

    #[test]
    fn test_insert_then_get_by_key() {
        let cache = PageCache::new();
        let key = PageKey::new("matrix", 1);

        cache.insert_sync(key.clone(), page_with_total(3));

        let hit = cache.get_sync(&key).unwrap();
        assert_eq!(hit.total_pages, 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_pages_do_not_collide() {
        let cache = PageCache::new();
        cache.insert_sync(PageKey::new("matrix", 1), page_with_total(1));
        cache.insert_sync(PageKey::new("matrix", 2), page_with_total(2));

        assert_eq!(cache.len(), 2);
        assert_eq!(
            cache.get_sync(&PageKey::new("matrix", 2)).unwrap().total_pages,
            2
        );
    }

    #[test]
    fn test_distinct_queries_do_not_collide() {
        let cache = PageCache::new();
        cache.insert_sync(PageKey::new("matrix", 1), page_with_total(1));
        cache.insert_sync(PageKey::new("dune", 1), page_with_total(9));

        assert_eq!(
            cache.get_sync(&PageKey::new("dune", 1)).unwrap().total_pages,
            9
        );
    }

    #[test]
    fn test_miss_returns_none() {
        let cache = PageCache::new();
        assert!(cache.get_sync(&PageKey::new("nothing", 1)).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = PageCache::new();
        let clone = cache.clone();

        cache.insert_sync(PageKey::new("matrix", 1), page_with_total(3));

        assert_eq!(clone.len(), 1);
        assert!(clone.get_sync(&PageKey::new("matrix", 1)).is_some());
    }

    #[test]
    fn test_clear_empties_the_cache() {
        let cache = PageCache::new();
        cache.insert_sync(PageKey::new("matrix", 1), page_with_total(3));

        cache.clear();
        assert!(cache.is_empty());
    }
}
