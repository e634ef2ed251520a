//! Core utilities for catalog search tools
//!
//! This crate provides shared functionality used by every front end:
//!
//! - **Error handling**: Coded errors with context and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("max results: {}", config.schema.search.max_results);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, LoggingConfig, SearchConfig, WeightsConfig};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
