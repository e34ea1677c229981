// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # roiviz-config
//!
//! Type-safe configuration loader for the ROIVIZ calibration constants:
//! - TOML file parsing (`roiviz.toml`)
//! - Environment variable overrides
//! - Full-default fallback when no file exists
//!
//! Every constant the algorithms expose (palette, pixel scale, presynaptic
//! weight, logistic center/scale) can be overridden here without touching
//! caller code; defaults always mirror the named constants in the
//! algorithm crates.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_environment_overrides, find_config_file, load_config};
pub use types::{RoivizConfig, SimilarityConfig, VisualizationConfig};
pub use validation::validate_config;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}
