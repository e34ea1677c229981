// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines the configuration structs that map to sections in
//! `roiviz.toml`. Every field has a default mirroring the named constants
//! in the algorithm crates, so a partial (or missing) file always yields a
//! complete configuration.

use serde::{Deserialize, Serialize};

use roiviz_allocation::{
    Palette, PercentageAllocator, DEFAULT_HEAT_BASE_COLOR, DEFAULT_NEUTRAL_COLOR, DEFAULT_PALETTE,
    DEFAULT_PIXELS_PER_PERCENTAGE_POINT,
};
use roiviz_similarity::{
    VectorParams, DEFAULT_LOGISTIC_CENTER, DEFAULT_LOGISTIC_SCALE, DEFAULT_PRE_SYNAPTIC_WEIGHT,
};

use crate::{ConfigError, ConfigResult};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RoivizConfig {
    pub visualization: VisualizationConfig,
    pub similarity: SimilarityConfig,
}

/// Percentage bar and heat-map display configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VisualizationConfig {
    /// Ordered display palette for region boxes
    pub palette: Vec<String>,
    /// Color of the zero-total sentinel box
    pub neutral_color: String,
    /// Pixel width granted per percentage point
    pub pixels_per_percentage_point: f64,
    /// Color a fully saturated heat cell reaches
    pub heat_base_color: String,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            neutral_color: DEFAULT_NEUTRAL_COLOR.to_string(),
            pixels_per_percentage_point: DEFAULT_PIXELS_PER_PERCENTAGE_POINT,
            heat_base_color: DEFAULT_HEAT_BASE_COLOR.to_string(),
        }
    }
}

impl VisualizationConfig {
    /// Build a ready-to-use allocator from this configuration.
    pub fn allocator(&self) -> ConfigResult<PercentageAllocator> {
        let palette = Palette::new(self.palette.clone())
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        Ok(PercentageAllocator::new(
            palette,
            self.pixels_per_percentage_point,
            self.neutral_color.clone(),
        ))
    }
}

/// Similar-neuron vector calibration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Multiplier applied to presynaptic counts
    pub pre_synaptic_weight: f64,
    /// Weighted count at which the logistic crosses 0.5
    pub logistic_center: f64,
    /// Width of the logistic transition band
    pub logistic_scale: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            pre_synaptic_weight: DEFAULT_PRE_SYNAPTIC_WEIGHT,
            logistic_center: DEFAULT_LOGISTIC_CENTER,
            logistic_scale: DEFAULT_LOGISTIC_SCALE,
        }
    }
}

impl SimilarityConfig {
    /// Vector construction parameters from this configuration.
    pub fn vector_params(&self) -> VectorParams {
        VectorParams {
            pre_weight: self.pre_synaptic_weight,
            logistic_center: self.logistic_center,
            logistic_scale: self.logistic_scale,
        }
    }
}
