//! Weighted multi-field fuzzy search for product catalogs.
//!
//! This crate provides:
//! - A field registry with per-field weights
//! - Token scoring with exact, prefix and substring tiers
//! - Levenshtein similarity bands and typo detection
//! - Deterministic ranking with top-K truncation
//! - Thread-safe query result caching
//!
//! # Example
//!
//! ```
//! use catalog_search::{parse_catalog, product_engine, FieldWeights};
//!
//! let items = parse_catalog(r#"[
//!     {"id": 1, "name": "Wireless Mouse", "sku": "WM-100"},
//!     {"id": 2, "name": "USB Keyboard", "sku": "KB-200"}
//! ]"#).unwrap();
//!
//! let engine = product_engine(&FieldWeights::default());
//! let results = engine.search(&items, "keybord", 10);
//! assert_eq!(results[0].item.id, 2);
//! ```

mod cache;
pub mod catalog;
mod engine;
mod error;
mod field;
mod fuzzy;
mod relevance;
mod scorer;
mod typo;

#[cfg(feature = "wasm")]
mod wasm;

pub use cache::{cache_key, CacheStats, QueryCache};
pub use catalog::{filter_by_category, parse_catalog, product_engine, CatalogItem, FieldWeights};
pub use engine::{rank, SearchEngine};
pub use error::{Result, SearchError, SearchErrorCode};
pub use field::{Extractor, SearchField};
pub use fuzzy::{levenshtein_distance, similarity};
pub use relevance::{classify_word, word_similarity, MatchTier};
pub use scorer::{length_penalty, normalize, score_field, CONTAINS_SCORE};
pub use typo::{is_adjacent_swap, is_missing_characters, typo_score, ADJACENT_SWAP_SCORE, MISSING_CHARACTERS_SCORE};

/// Search result with relevance score.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Weighted score summed over matching fields (higher is better)
    pub score: f64,
    /// Number of fields that scored above zero
    pub matched_fields: usize,
}
