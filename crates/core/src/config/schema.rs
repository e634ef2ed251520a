//! Configuration schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    /// Search engine settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(Error::config_validation("search.max_results must be at least 1"));
        }

        let weights = &self.search.weights;
        for (name, weight) in [
            ("name", weights.name),
            ("description", weights.description),
            ("sku", weights.sku),
        ] {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(Error::config_validation(format!(
                    "search.weights.{} must be a positive number, got {}",
                    name, weight
                ))
                .with_suggestion("Remove the entry to use the default weight"));
            }
        }

        Ok(())
    }
}

/// Search engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Default number of results per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Per-field weights
    #[serde(default)]
    pub weights: WeightsConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            weights: WeightsConfig::default(),
        }
    }
}

fn default_max_results() -> usize {
    10
}

/// Field weights
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightsConfig {
    /// Product name weight
    #[serde(default = "default_name_weight")]
    pub name: f64,

    /// Description weight
    #[serde(default = "default_description_weight")]
    pub description: f64,

    /// SKU weight
    #[serde(default = "default_sku_weight")]
    pub sku: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            name: default_name_weight(),
            description: default_description_weight(),
            sku: default_sku_weight(),
        }
    }
}

fn default_name_weight() -> f64 {
    3.0
}

fn default_description_weight() -> f64 {
    1.5
}

fn default_sku_weight() -> f64 {
    2.0
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.search.max_results, 10);
        assert_eq!(schema.search.weights.name, 3.0);
        assert_eq!(schema.search.weights.description, 1.5);
        assert_eq!(schema.search.weights.sku, 2.0);
        assert_eq!(schema.logging.level, "warn");
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [search]
            max_results = 25

            [search.weights]
            sku = 4.0
            "#,
        )
        .unwrap();

        assert_eq!(schema.search.max_results, 25);
        assert_eq!(schema.search.weights.sku, 4.0);
        assert_eq!(schema.search.weights.name, 3.0);
        assert!(!schema.logging.json);
    }

    #[test]
    fn test_empty_toml() {
        let schema: ConfigSchema = toml::from_str("").unwrap();
        assert_eq!(schema, ConfigSchema::default());
    }

    #[test]
    fn test_validate_zero_results() {
        let mut schema = ConfigSchema::default();
        schema.search.max_results = 0;
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_validate_negative_weight() {
        let mut schema = ConfigSchema::default();
        schema.search.weights.description = -1.5;

        let err = schema.validate().unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ConfigValidationError);
        assert!(err.message.contains("description"));
    }
}
