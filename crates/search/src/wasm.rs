//! WASM bindings for catalog search.

use crate::catalog::{parse_catalog, product_engine, FieldWeights};
use wasm_bindgen::prelude::*;

/// Score a query against a single text value.
#[wasm_bindgen]
pub fn field_score(query: &str, text: &str) -> f64 {
    crate::score_field(query, text)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Search a catalog and return ranked results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of catalog items (`id`, `name`, `description`, `sku`)
/// * `max_results` - Maximum results to return
///
/// # Returns
/// JSON array of `{id, score, matched_fields}`, best first. Malformed
/// input yields `[]`.
#[wasm_bindgen]
pub fn search_catalog(query: &str, items_json: &str, max_results: usize) -> String {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Hit {
        id: u64,
        score: f64,
        matched_fields: usize,
    }

    let items = match parse_catalog(items_json) {
        Ok(items) => items,
        Err(_) => return "[]".to_string(),
    };

    let hits: Vec<Hit> = product_engine(&FieldWeights::default())
        .search(&items, query, max_results)
        .into_iter()
        .map(|r| Hit {
            id: r.item.id,
            score: r.score,
            matched_fields: r.matched_fields,
        })
        .collect();

    serde_json::to_string(&hits).unwrap_or_else(|_| "[]".to_string())
}
