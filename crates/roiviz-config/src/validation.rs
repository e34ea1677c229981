// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Parsing accepts any well-formed TOML; this pass enforces the value
//! constraints the algorithms rely on, so a bad file fails loudly at
//! startup instead of producing degenerate visuals.

use roiviz_allocation::parse_hex_color;

use crate::{ConfigError, ConfigResult, RoivizConfig};

/// Validate a loaded configuration.
///
/// Checks:
/// - the palette carries at least one color and every entry parses as hex
/// - neutral and heat base colors parse as hex
/// - the pixel scale is positive
/// - the logistic scale is non-zero (the squash divides by it)
/// - the presynaptic weight is positive
pub fn validate_config(config: &RoivizConfig) -> ConfigResult<()> {
    let viz = &config.visualization;

    if viz.palette.is_empty() {
        return Err(ConfigError::ValidationError(
            "visualization.palette must contain at least one color".to_string(),
        ));
    }
    for color in &viz.palette {
        check_hex(color, "visualization.palette")?;
    }
    check_hex(&viz.neutral_color, "visualization.neutral_color")?;
    check_hex(&viz.heat_base_color, "visualization.heat_base_color")?;

    if viz.pixels_per_percentage_point <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "visualization.pixels_per_percentage_point must be positive, got {}",
            viz.pixels_per_percentage_point
        )));
    }

    let sim = &config.similarity;
    if sim.logistic_scale == 0.0 || !sim.logistic_scale.is_finite() {
        return Err(ConfigError::ValidationError(format!(
            "similarity.logistic_scale must be finite and non-zero, got {}",
            sim.logistic_scale
        )));
    }
    if sim.pre_synaptic_weight <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "similarity.pre_synaptic_weight must be positive, got {}",
            sim.pre_synaptic_weight
        )));
    }

    Ok(())
}

fn check_hex(color: &str, field: &str) -> ConfigResult<()> {
    parse_hex_color(color).map_err(|_| {
        ConfigError::ValidationError(format!("{}: '{}' is not a hex color", field, color))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(validate_config(&RoivizConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_palette_rejected() {
        let mut config = RoivizConfig::default();
        config.visualization.palette.clear();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_non_hex_palette_entry_rejected() {
        let mut config = RoivizConfig::default();
        config.visualization.palette[0] = "cornflower".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_logistic_scale_rejected() {
        let mut config = RoivizConfig::default();
        config.similarity.logistic_scale = 0.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_negative_pixel_scale_rejected() {
        let mut config = RoivizConfig::default();
        config.visualization.pixels_per_percentage_point = -1.0;
        assert!(validate_config(&config).is_err());
    }
}
