//! In-memory memoization of search results.
//!
//! Entries are keyed by normalized query and result limit. They are never
//! expired and never invalidated when the searched items change; callers
//! must clear the cache themselves after mutating their collection.

use crate::SearchResult;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Build the cache signature for a normalized query and limit.
pub fn cache_key(normalized_query: &str, max_results: usize) -> String {
    format!("{}_{}", normalized_query, max_results)
}

/// Unbounded, thread-safe result cache.
pub struct QueryCache<T> {
    entries: RwLock<HashMap<String, Vec<SearchResult<T>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<T> QueryCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a stored result list, counting the hit or miss.
    pub fn get(&self, key: &str) -> Option<Vec<SearchResult<T>>>
    where
        T: Clone,
    {
        let cached = self
            .entries
            .read()
            .ok()
            .and_then(|guard| guard.get(key).cloned());

        match cached {
            Some(results) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(results)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a result list, replacing any previous entry for `key`.
    pub fn insert(&self, key: String, results: Vec<SearchResult<T>>) {
        if let Ok(mut guard) = self.entries.write() {
            guard.insert(key, results);
        }
    }

    /// Drop every entry. Hit and miss counters are kept.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.entries.write() {
            guard.clear();
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|g| g.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of cache counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of stored result lists
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that required a fresh computation
    pub misses: u64,
}
