// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # roiviz-allocation
//!
//! Converts weighted region breakdowns into integer percentages that sum to
//! exactly 100 (largest-remainder method), assigns stable display colors
//! from a finite palette, and produces the pixel widths and overlay labels
//! the rendering collaborator draws as bar-graph boxes. Also hosts the
//! sRGB text-contrast helper and heat-map cell coloring used by the region
//! heat-map view.
//!
//! All operations are synchronous and pure; the only state is the
//! append-only color assignment cache, guarded by a mutex inside
//! [`PercentageAllocator`] so a shared allocator is thread-safe.

mod allocator;
mod apportion;
mod colors;
mod contrast;
mod heatmap;

pub use allocator::{percentage_label, PercentageAllocator, EMPTY_CATEGORY_ID};
pub use apportion::apportion;
pub use colors::{ColorAssignment, Palette, DEFAULT_NEUTRAL_COLOR, DEFAULT_PALETTE};
pub use contrast::{parse_hex_color, pick_text_color, relative_luminance, LUMINANCE_THRESHOLD};
pub use heatmap::{HeatCell, HeatMapStyle, DEFAULT_HEAT_BASE_COLOR};

/// Pixel width granted per percentage point in bar-graph output
pub const DEFAULT_PIXELS_PER_PERCENTAGE_POINT: f64 = 4.0;

/// Result type for allocation operations
pub type AllocationResult<T> = Result<T, AllocationError>;

/// Errors that can occur during percentage allocation
#[derive(Debug, Clone, thiserror::Error)]
pub enum AllocationError {
    /// The remainder deficit exceeds the number of categories available to
    /// absorb it; the caller-supplied total is inconsistent with the data
    #[error("error allocating percentages: deficit {deficit} exceeds {categories} categories")]
    Computation { deficit: i64, categories: usize },

    /// A color string could not be parsed as `#rgb` or `#rrggbb` hex
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A palette must carry at least one color
    #[error("Palette must contain at least one color")]
    EmptyPalette,
}
