//! Weighted multi-field search engine.

use crate::cache::{cache_key, CacheStats, QueryCache};
use crate::field::SearchField;
use crate::scorer::{normalize, score_normalized};
use crate::SearchResult;
use std::cmp::Ordering;
use std::fmt;

/// Fuzzy search over a caller-supplied collection.
///
/// `T` is the handle stored in results and in the cache: an `Arc`, an id,
/// or any other cheap clone. The engine never mutates items.
///
/// # Example
/// ```
/// use catalog_search::SearchEngine;
/// use std::sync::Arc;
///
/// struct Product { name: String, sku: String }
///
/// let engine = SearchEngine::new()
///     .add_field(|p: &Arc<Product>| Some(p.name.as_str()), 3.0)
///     .add_field(|p: &Arc<Product>| Some(p.sku.as_str()), 2.0);
///
/// let products = vec![
///     Arc::new(Product { name: "Wireless Mouse".into(), sku: "WM-100".into() }),
///     Arc::new(Product { name: "USB Keyboard".into(), sku: "KB-200".into() }),
/// ];
///
/// let results = engine.search(&products, "moose", 10);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].item.sku, "WM-100");
/// ```
pub struct SearchEngine<T> {
    fields: Vec<SearchField<T>>,
    cache: QueryCache<T>,
}

impl<T> SearchEngine<T> {
    /// Create an engine with no fields.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            cache: QueryCache::new(),
        }
    }

    /// Register a searchable field. Fields are scored in registration order.
    pub fn add_field<F>(mut self, extractor: F, weight: f64) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
    {
        self.fields.push(SearchField::new(extractor, weight));
        self
    }

    /// Number of registered fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Registered fields in scoring order.
    pub fn fields(&self) -> &[SearchField<T>] {
        &self.fields
    }

    /// Drop every memoized result.
    pub fn clear_cache(&self) {
        self.cache.clear();
        tracing::debug!("Search cache cleared");
    }

    /// Snapshot of cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Score a single item across every field.
    ///
    /// Returns `None` unless the weighted total is positive.
    fn score_item(&self, item: &T, normalized_query: &str) -> Option<(f64, usize)> {
        let mut total = 0.0;
        let mut matched = 0;

        for field in &self.fields {
            let Some(value) = field.extract(item) else {
                continue;
            };

            let score = score_normalized(normalized_query, &normalize(value));
            if score > 0.0 {
                total += score * field.weight();
                matched += 1;
            }
        }

        (total > 0.0).then_some((total, matched))
    }
}

impl<T: Clone + Send + Sync> SearchEngine<T> {
    /// Rank `items` against `query`, returning at most `max_results` hits.
    ///
    /// Results are ordered by score, then by matched field count, both
    /// descending; remaining ties keep input order. A blank query or an
    /// empty collection returns nothing and leaves the cache untouched.
    ///
    /// Results are memoized per normalized query and limit. A cached list
    /// is returned as-is even if `items` has changed since; call
    /// [`SearchEngine::clear_cache`] after mutating the collection.
    pub fn search(&self, items: &[T], query: &str, max_results: usize) -> Vec<SearchResult<T>> {
        let normalized = normalize(query);
        if normalized.is_empty() || items.is_empty() {
            return Vec::new();
        }

        let key = cache_key(&normalized, max_results);
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(query = %normalized, max_results, hits = cached.len(), "Search cache hit");
            return cached;
        }

        let results = rank(self.score_all(items, &normalized), max_results);

        tracing::debug!(
            query = %normalized,
            candidates = items.len(),
            hits = results.len(),
            "Search computed"
        );

        self.cache.insert(key, results.clone());
        results
    }

    fn score_all(&self, items: &[T], normalized_query: &str) -> Vec<SearchResult<T>> {
        let score = |item: &T| {
            self.score_item(item, normalized_query).map(|(score, matched_fields)| SearchResult {
                item: item.clone(),
                score,
                matched_fields,
            })
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            items.par_iter().filter_map(score).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            items.iter().filter_map(score).collect()
        }
    }
}

impl<T> Default for SearchEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SearchEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine")
            .field("fields", &self.fields)
            .field("cache", &self.cache.stats())
            .finish()
    }
}

/// Sort by score then matched field count, both descending, and truncate.
///
/// The sort is stable, so equal entries keep their input order.
pub fn rank<T>(mut results: Vec<SearchResult<T>>, max_results: usize) -> Vec<SearchResult<T>> {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.matched_fields.cmp(&a.matched_fields))
    });
    results.truncate(max_results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Product {
        id: u32,
        name: String,
        description: Option<String>,
    }

    fn product(id: u32, name: &str, description: Option<&str>) -> Arc<Product> {
        Arc::new(Product {
            id,
            name: name.to_string(),
            description: description.map(String::from),
        })
    }

    fn engine() -> SearchEngine<Arc<Product>> {
        SearchEngine::new()
            .add_field(|p: &Arc<Product>| Some(p.name.as_str()), 3.0)
            .add_field(|p: &Arc<Product>| p.description.as_deref(), 1.5)
    }

    fn ids(results: &[SearchResult<Arc<Product>>]) -> Vec<u32> {
        results.iter().map(|r| r.item.id).collect()
    }

    #[test]
    fn test_fuzzy_item_ranks_above_non_match() {
        let items = vec![product(1, "USB Cable", None), product(2, "Wireless Mouse", None)];
        let results = engine().search(&items, "moose", 10);

        assert_eq!(ids(&results), vec![2]);
        let expected = 4.8 * 3.0 * (1.0 - 14.0 / 1000.0);
        assert!((results[0].score - expected).abs() < 1e-9);
        assert_eq!(results[0].matched_fields, 1);
    }

    #[test]
    fn test_exact_beats_fuzzy() {
        let items = vec![product(1, "Moose Plush", None), product(2, "Mouse Pad", None)];
        let results = engine().search(&items, "mouse", 10);

        assert_eq!(results[0].item.id, 2);
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let items = vec![product(1, "Wireless Mouse", None)];
        let engine = engine();

        assert!(engine.search(&items, "", 10).is_empty());
        assert!(engine.search(&items, "   \t", 10).is_empty());
        assert_eq!(engine.cache_stats().entries, 0);
    }

    #[test]
    fn test_empty_items_returns_nothing() {
        let engine = engine();
        assert!(engine.search(&[], "mouse", 10).is_empty());
        assert_eq!(engine.cache_stats(), CacheStats { entries: 0, hits: 0, misses: 0 });
    }

    #[test]
    fn test_tie_broken_by_matched_fields() {
        type Row = &'static [&'static str; 3];
        let engine = SearchEngine::new()
            .add_field(|r: &Row| Some(r[0]), 2.0)
            .add_field(|r: &Row| Some(r[1]), 1.0)
            .add_field(|r: &Row| Some(r[2]), 1.0);

        // name-only hit: 2.0 * s; description + sku hit: 1.0 * s + 1.0 * s
        let rows: Vec<Row> = vec![&["mouse", "", ""], &["keyboard", "mouse", "mouse"]];
        let results = engine.search(&rows, "mouse", 10);

        assert_eq!(results.len(), 2);
        assert!((results[0].score - results[1].score).abs() < 1e-12);
        assert_eq!(results[0].item[0], "keyboard");
        assert_eq!(results[0].matched_fields, 2);
        assert_eq!(results[1].matched_fields, 1);
    }

    #[test]
    fn test_truncates_to_max_results() {
        let items: Vec<_> = (0..20).map(|i| product(i, "Mouse", None)).collect();
        let results = engine().search(&items, "mouse", 5);

        assert_eq!(results.len(), 5);
        // equal scores keep input order
        assert_eq!(ids(&results), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_max_results() {
        let items = vec![product(1, "Mouse", None)];
        assert!(engine().search(&items, "mouse", 0).is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let items = vec![
            product(1, "Keyboard", Some("Works with any mouse")),
            product(2, "Mouse", None),
            product(3, "Mouse", Some("Mouse with cable")),
        ];
        let results = engine().search(&items, "mouse", 10);

        assert_eq!(ids(&results), vec![3, 2, 1]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_blank_field_contributes_nothing() {
        let items = vec![product(1, "Mouse", Some("   "))];
        let results = engine().search(&items, "mouse", 10);

        assert_eq!(results[0].matched_fields, 1);
    }

    #[test]
    fn test_cache_hit_is_stale_until_cleared() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let engine = SearchEngine::new().add_field(
            move |p: &Arc<Product>| {
                counter.fetch_add(1, AtomicOrdering::SeqCst);
                Some(p.name.as_str())
            },
            1.0,
        );

        let first = vec![product(1, "Mouse", None)];
        let second = vec![product(2, "Mouse Pad", None), product(3, "Mouse", None)];

        assert_eq!(ids(&engine.search(&first, "mouse", 10)), vec![1]);
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 1);

        // Different items, same key: served from cache without scoring
        assert_eq!(ids(&engine.search(&second, "Mouse ", 10)), vec![1]);
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 1);
        assert_eq!(engine.cache_stats().hits, 1);

        engine.clear_cache();
        let fresh = engine.search(&second, "mouse", 10);
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 3);
        assert_eq!(fresh.len(), 2);
        assert_eq!(engine.cache_stats().misses, 2);
    }

    #[test]
    fn test_limit_is_part_of_cache_key() {
        let items: Vec<_> = (0..5).map(|i| product(i, "Mouse", None)).collect();
        let engine = engine();

        assert_eq!(engine.search(&items, "mouse", 2).len(), 2);
        assert_eq!(engine.search(&items, "mouse", 4).len(), 4);
        assert_eq!(engine.cache_stats().entries, 2);
    }

    #[test]
    fn test_non_positive_totals_excluded() {
        let items = vec![product(1, "Mouse", Some("mouse"))];

        let negative = SearchEngine::new().add_field(|p: &Arc<Product>| Some(p.name.as_str()), -1.0);
        assert!(negative.search(&items, "mouse", 10).is_empty());

        let zero = SearchEngine::new().add_field(|p: &Arc<Product>| Some(p.name.as_str()), 0.0);
        assert!(zero.search(&items, "mouse", 10).is_empty());

        // A negative field lowers but does not cancel a stronger positive one
        let mixed = SearchEngine::new()
            .add_field(|p: &Arc<Product>| Some(p.name.as_str()), 3.0)
            .add_field(|p: &Arc<Product>| p.description.as_deref(), -1.0);
        let results = mixed.search(&items, "mouse", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].matched_fields, 2);
        assert!((results[0].score - 2.0 * 10.0 * 0.995).abs() < 1e-9);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<SearchEngine<Arc<Product>>>();
    }
}
