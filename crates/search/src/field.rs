//! Weighted searchable fields.

use std::fmt;

/// Projects an item to an optional string value.
pub type Extractor<T> = Box<dyn for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync>;

/// A searchable field: an extractor plus the weight applied to its score.
pub struct SearchField<T> {
    extractor: Extractor<T>,
    weight: f64,
}

impl<T> SearchField<T> {
    /// Create a field from an extractor and weight.
    ///
    /// The weight is not validated. Zero suppresses the field, a negative
    /// weight inverts its contribution.
    pub fn new<F>(extractor: F, weight: f64) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
    {
        Self {
            extractor: Box::new(extractor),
            weight,
        }
    }

    /// Weight applied to this field's score.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Read the field value from an item.
    pub fn extract<'a>(&self, item: &'a T) -> Option<&'a str> {
        (self.extractor)(item)
    }
}

impl<T> fmt::Debug for SearchField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchField")
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}
