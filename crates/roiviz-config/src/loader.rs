// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Loading is a 3-tier system:
//! 1. Built-in defaults (always complete)
//! 2. TOML file (`roiviz.toml`), when one exists
//! 3. Environment variables (runtime overrides)

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{ConfigError, ConfigResult, RoivizConfig};

const CONFIG_FILE_NAME: &str = "roiviz.toml";

/// Find the ROIVIZ configuration file.
///
/// Search order:
/// 1. `ROIVIZ_CONFIG_PATH` environment variable
/// 2. Current working directory: `./roiviz.toml`
/// 3. Parent directories (up to 5 levels, for workspace roots)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any
/// location.
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("ROIVIZ_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by ROIVIZ_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd;
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent.to_path_buf();
                }
                None => break,
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "ROIVIZ configuration file '{}' not found in any of these locations:\n{}",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration, applying file and environment overrides on top of
/// the built-in defaults.
///
/// # Arguments
///
/// * `config_path` - Optional explicit path. If `None`, the file is
///   searched for; a missing file falls back to the full defaults (the
///   constants are calibration values, not required configuration).
///
/// # Errors
///
/// Returns an error for an unreadable or syntactically invalid file, or
/// when an explicit `config_path` does not exist.
pub fn load_config(config_path: Option<&Path>) -> ConfigResult<RoivizConfig> {
    let config_file = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => match find_config_file() {
            Ok(path) => Some(path),
            Err(ConfigError::FileNotFound(_)) => None,
            Err(e) => return Err(e),
        },
    };

    let mut config = match config_file {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?
        }
        None => RoivizConfig::default(),
    };

    apply_environment_overrides(&mut config);
    Ok(config)
}

/// Apply environment variable overrides to configuration.
///
/// Supported environment variables:
/// - `ROIVIZ_PIXELS_PER_PERCENTAGE_POINT` -> `visualization.pixels_per_percentage_point`
/// - `ROIVIZ_NEUTRAL_COLOR` -> `visualization.neutral_color`
/// - `ROIVIZ_PRE_SYNAPTIC_WEIGHT` -> `similarity.pre_synaptic_weight`
/// - `ROIVIZ_LOGISTIC_CENTER` -> `similarity.logistic_center`
/// - `ROIVIZ_LOGISTIC_SCALE` -> `similarity.logistic_scale`
pub fn apply_environment_overrides(config: &mut RoivizConfig) {
    if let Ok(value) = env::var("ROIVIZ_PIXELS_PER_PERCENTAGE_POINT") {
        if let Ok(pixels) = value.parse::<f64>() {
            config.visualization.pixels_per_percentage_point = pixels;
        }
    }
    if let Ok(value) = env::var("ROIVIZ_NEUTRAL_COLOR") {
        config.visualization.neutral_color = value;
    }
    if let Ok(value) = env::var("ROIVIZ_PRE_SYNAPTIC_WEIGHT") {
        if let Ok(weight) = value.parse::<f64>() {
            config.similarity.pre_synaptic_weight = weight;
        }
    }
    if let Ok(value) = env::var("ROIVIZ_LOGISTIC_CENTER") {
        if let Ok(center) = value.parse::<f64>() {
            config.similarity.logistic_center = center;
        }
    }
    if let Ok(value) = env::var("ROIVIZ_LOGISTIC_SCALE") {
        if let Ok(scale) = value.parse::<f64>() {
            config.similarity.logistic_scale = scale;
        }
    }
}
