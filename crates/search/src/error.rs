//! Error types for the search crate.
//!
//! Searching itself never fails; these cover loading catalogs and
//! checking field weights before an engine is built.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur around search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Catalog JSON could not be parsed
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Field weight is not a positive, finite number
    #[error("Invalid weight for field '{field}': {weight}")]
    InvalidWeight {
        /// Field name
        field: String,
        /// Offending weight
        weight: f64,
    },
}

/// Error code for integration with catalog-core error handling.
/// Range: 9xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Catalog JSON could not be parsed
    InvalidCatalog = 9001,
    /// Field weight rejected
    InvalidWeight = 9002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidCatalog(_) => SearchErrorCode::InvalidCatalog,
            SearchError::InvalidWeight { .. } => SearchErrorCode::InvalidWeight,
        }
    }
}
