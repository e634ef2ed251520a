//! CLI utilities for catalog search tools
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Ranked result rows
//! - Progress indicators

#![warn(missing_docs)]

pub mod output;
pub mod progress;
