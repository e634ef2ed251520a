//! Product catalog records and the standard product search setup.

use crate::error::{Result, SearchError};
use crate::SearchEngine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A product record as supplied by the catalog repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Product ID
    pub id: u64,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stock keeping unit
    #[serde(default)]
    pub sku: String,
    /// Owning category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

/// Per-field weights for product search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    /// Weight of the product name
    pub name: f64,
    /// Weight of the description
    pub description: f64,
    /// Weight of the SKU
    pub sku: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 3.0,
            description: 1.5,
            sku: 2.0,
        }
    }
}

impl FieldWeights {
    /// Reject weights that are not positive and finite.
    ///
    /// The engine accepts any weight; this is for callers that want to
    /// refuse bad configuration up front.
    pub fn validate(&self) -> Result<()> {
        for (field, weight) in [("name", self.name), ("description", self.description), ("sku", self.sku)] {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(SearchError::InvalidWeight {
                    field: field.to_string(),
                    weight,
                });
            }
        }
        Ok(())
    }
}

/// Build an engine over name, description and SKU.
pub fn product_engine(weights: &FieldWeights) -> SearchEngine<Arc<CatalogItem>> {
    SearchEngine::new()
        .add_field(|p: &Arc<CatalogItem>| Some(p.name.as_str()), weights.name)
        .add_field(|p: &Arc<CatalogItem>| p.description.as_deref(), weights.description)
        .add_field(|p: &Arc<CatalogItem>| Some(p.sku.as_str()), weights.sku)
}

/// Parse a JSON array of catalog items.
pub fn parse_catalog(json: &str) -> Result<Vec<Arc<CatalogItem>>> {
    let items: Vec<CatalogItem> = serde_json::from_str(json)?;
    Ok(items.into_iter().map(Arc::new).collect())
}

/// Keep items in `category_id`, or everything when no category is given.
pub fn filter_by_category(items: &[Arc<CatalogItem>], category_id: Option<u64>) -> Vec<Arc<CatalogItem>> {
    match category_id {
        Some(id) => items
            .iter()
            .filter(|item| item.category_id == Some(id))
            .cloned()
            .collect(),
        None => items.to_vec(),
    }
}
