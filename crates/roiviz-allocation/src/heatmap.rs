// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Heat-map cell coloring
//!
//! Maps a `(value, total)` pair onto a cell color by blending from white
//! toward a fixed base heat color in proportion to `value / total`, then
//! picks a readable label color with the contrast helper.

use serde::{Deserialize, Serialize};

use crate::contrast::{parse_hex_color, pick_text_color};
use crate::AllocationResult;

/// Base color a fully saturated heat cell reaches
pub const DEFAULT_HEAT_BASE_COLOR: &str = "#a51e22";

const LIGHT_TEXT: &str = "#ffffff";
const DARK_TEXT: &str = "#000000";

/// A display-ready heat-map cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatCell {
    /// Cell background color (hex string)
    pub color: String,
    /// Readable label color for that background
    pub text_color: String,
}

/// Color scheme for a heat-map view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatMapStyle {
    /// Color a ratio of 1.0 maps to
    pub base_color: String,
    /// Label color over dim cells
    pub light_text: String,
    /// Label color over bright cells
    pub dark_text: String,
}

impl Default for HeatMapStyle {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_HEAT_BASE_COLOR.to_string(),
            light_text: LIGHT_TEXT.to_string(),
            dark_text: DARK_TEXT.to_string(),
        }
    }
}

impl HeatMapStyle {
    pub fn new(base_color: impl Into<String>) -> Self {
        Self {
            base_color: base_color.into(),
            ..Self::default()
        }
    }

    /// Cell background for `value` out of `total`.
    ///
    /// The ratio is clamped to `[0, 1]`; a zero or missing total maps to
    /// white rather than dividing.
    pub fn color(&self, value: f64, total: f64) -> AllocationResult<String> {
        let ratio = if total > 0.0 {
            (value / total).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let (r, g, b) = parse_hex_color(&self.base_color)?;

        let blend = |channel: f64| ((1.0 - ratio * (1.0 - channel)) * 255.0).round() as u8;
        Ok(format!("#{:02x}{:02x}{:02x}", blend(r), blend(g), blend(b)))
    }

    /// Display-ready cell: background plus a readable label color.
    pub fn cell(&self, value: f64, total: f64) -> AllocationResult<HeatCell> {
        let color = self.color(value, total)?;
        let text_color = pick_text_color(&color, &self.light_text, &self.dark_text)?;
        Ok(HeatCell {
            text_color: text_color.to_string(),
            color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ratio_is_white() {
        let style = HeatMapStyle::default();
        assert_eq!(style.color(0.0, 100.0).unwrap(), "#ffffff");
    }

    #[test]
    fn test_zero_total_is_white_without_dividing() {
        let style = HeatMapStyle::default();
        assert_eq!(style.color(42.0, 0.0).unwrap(), "#ffffff");
    }

    #[test]
    fn test_full_ratio_reaches_base_color() {
        let style = HeatMapStyle::default();
        assert_eq!(style.color(100.0, 100.0).unwrap(), DEFAULT_HEAT_BASE_COLOR);
    }

    #[test]
    fn test_ratio_clamps_above_one() {
        let style = HeatMapStyle::default();
        assert_eq!(style.color(250.0, 100.0).unwrap(), DEFAULT_HEAT_BASE_COLOR);
    }

    #[test]
    fn test_label_contrast_flips_with_saturation() {
        let style = HeatMapStyle::default();
        // Near-white cell: dark label
        assert_eq!(style.cell(1.0, 100.0).unwrap().text_color, "#000000");
        // Saturated cell: light label
        assert_eq!(style.cell(100.0, 100.0).unwrap().text_color, "#ffffff");
    }
}
