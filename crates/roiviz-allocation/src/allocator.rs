// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Percentage bar-graph allocation
//!
//! Ties the pieces together: integer apportionment, per-id color
//! assignment, pixel widths, and the overlay label policy. Output order is
//! alphabetical by category id, the display order the table views use.

use parking_lot::Mutex;
use tracing::debug;

use roiviz_structures::{AllocatedCategory, CategorySet};

use crate::apportion::apportion;
use crate::colors::{ColorAssignment, Palette, DEFAULT_NEUTRAL_COLOR};
use crate::{AllocationResult, DEFAULT_PIXELS_PER_PERCENTAGE_POINT};

/// Id of the sentinel category returned for a zero total
pub const EMPTY_CATEGORY_ID: &str = "none";

/// Overlay text for a box occupying `percentage` points.
///
/// Wide boxes carry the id and the percentage, medium boxes just the
/// percentage, narrow boxes nothing. Reproduced exactly for display
/// compatibility with the table views.
pub fn percentage_label(id: &str, percentage: u32) -> String {
    if percentage > 30 {
        format!("{} {}%", id, percentage)
    } else if percentage > 10 {
        format!("{}%", percentage)
    } else {
        String::new()
    }
}

/// Converts weighted category sets into display-ready percentage boxes.
///
/// Holds the process-wide color assignment cache so a region keeps its
/// color across every breakdown rendered by one explorer session. The
/// cache is append-only and mutex-guarded; share one allocator per
/// session and allocate from any thread.
///
/// # Examples
/// ```
/// use roiviz_allocation::PercentageAllocator;
/// use roiviz_structures::CategorySet;
///
/// let allocator = PercentageAllocator::with_defaults();
/// let set = CategorySet::from_pairs(&[("EB", 1.0), ("FB", 1.0), ("NO", 1.0)], 3.0);
/// let boxes = allocator.allocate(&set).unwrap();
///
/// assert_eq!(boxes.iter().map(|b| b.percentage).sum::<u32>(), 100);
/// ```
pub struct PercentageAllocator {
    pixels_per_point: f64,
    neutral_color: String,
    colors: Mutex<ColorAssignment>,
}

impl PercentageAllocator {
    pub fn new(palette: Palette, pixels_per_point: f64, neutral_color: impl Into<String>) -> Self {
        Self {
            pixels_per_point,
            neutral_color: neutral_color.into(),
            colors: Mutex::new(ColorAssignment::new(palette)),
        }
    }

    /// Allocator with the fixed 9-entry palette and default pixel scale.
    pub fn with_defaults() -> Self {
        Self::new(
            Palette::default(),
            DEFAULT_PIXELS_PER_PERCENTAGE_POINT,
            DEFAULT_NEUTRAL_COLOR,
        )
    }

    /// Allocate integer percentages for `set` and dress the surviving
    /// categories for display.
    ///
    /// The apportionment covers every input category and sums to exactly
    /// 100 whenever `set.total > 0`; categories that round to 0% are
    /// dropped from the returned boxes. A zero total short-circuits to a
    /// single neutral sentinel box instead of dividing.
    pub fn allocate(&self, set: &CategorySet) -> AllocationResult<Vec<AllocatedCategory>> {
        if set.total <= 0.0 {
            debug!(categories = set.len(), "zero total, emitting sentinel box");
            return Ok(vec![AllocatedCategory {
                id: EMPTY_CATEGORY_ID.to_string(),
                percentage: 0,
                color_index: None,
                color: self.neutral_color.clone(),
                pixel_width: 0.0,
                label: "0%".to_string(),
            }]);
        }

        let values: Vec<f64> = set.categories.iter().map(|c| c.raw_value).collect();
        let percentages = apportion(&values, set.total)?;

        let mut allocated: Vec<(&str, u32)> = set
            .categories
            .iter()
            .map(|c| c.id.as_str())
            .zip(percentages)
            .collect();
        allocated.sort_by(|a, b| a.0.cmp(b.0));

        let mut colors = self.colors.lock();
        Ok(allocated
            .into_iter()
            .filter(|&(_, percentage)| percentage > 0)
            .map(|(id, percentage)| {
                let color_index = colors.slot_for(id);
                AllocatedCategory {
                    id: id.to_string(),
                    percentage,
                    color_index: Some(color_index),
                    color: colors.palette().color(color_index).to_string(),
                    pixel_width: f64::from(percentage) * self.pixels_per_point,
                    label: percentage_label(id, percentage),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roiviz_structures::CategorySet;

    #[test]
    fn test_zero_total_sentinel() {
        let allocator = PercentageAllocator::with_defaults();
        let set = CategorySet::from_pairs(&[("EB", 5.0), ("FB", 7.0)], 0.0);
        let boxes = allocator.allocate(&set).unwrap();

        assert_eq!(boxes.len(), 1);
        let sentinel = &boxes[0];
        assert_eq!(sentinel.id, EMPTY_CATEGORY_ID);
        assert_eq!(sentinel.percentage, 0);
        assert_eq!(sentinel.color_index, None);
        assert_eq!(sentinel.color, DEFAULT_NEUTRAL_COLOR);
        assert_eq!(sentinel.label, "0%");
    }

    #[test]
    fn test_output_is_alphabetical_and_sums_to_hundred() {
        let allocator = PercentageAllocator::with_defaults();
        let set = CategorySet::from_pairs(&[("PB", 50.0), ("AB", 30.0), ("EB", 20.0)], 100.0);
        let boxes = allocator.allocate(&set).unwrap();

        let ids: Vec<&str> = boxes.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["AB", "EB", "PB"]);
        assert_eq!(boxes.iter().map(|b| b.percentage).sum::<u32>(), 100);
    }

    #[test]
    fn test_zero_percent_categories_dropped_from_output() {
        let allocator = PercentageAllocator::with_defaults();
        // 0.1 of 1000 rounds to 0%
        let set = CategorySet::from_pairs(&[("EB", 999.9), ("FB", 0.1)], 1000.0);
        let boxes = allocator.allocate(&set).unwrap();

        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].id, "EB");
        assert_eq!(boxes[0].percentage, 100);
    }

    #[test]
    fn test_pixel_width_scales_with_percentage() {
        let allocator = PercentageAllocator::with_defaults();
        let set = CategorySet::from_pairs(&[("EB", 1.0), ("FB", 3.0)], 4.0);
        let boxes = allocator.allocate(&set).unwrap();

        assert_eq!(boxes[0].pixel_width, 25.0 * DEFAULT_PIXELS_PER_PERCENTAGE_POINT);
        assert_eq!(boxes[1].pixel_width, 75.0 * DEFAULT_PIXELS_PER_PERCENTAGE_POINT);
    }

    #[test]
    fn test_color_stability_across_allocations() {
        let allocator = PercentageAllocator::with_defaults();
        let first = allocator
            .allocate(&CategorySet::from_pairs(&[("EB", 1.0), ("FB", 1.0)], 2.0))
            .unwrap();
        let second = allocator
            .allocate(&CategorySet::from_pairs(&[("FB", 9.0), ("EB", 1.0)], 10.0))
            .unwrap();

        let color_of = |boxes: &[roiviz_structures::AllocatedCategory], id: &str| {
            boxes.iter().find(|b| b.id == id).unwrap().color.clone()
        };
        assert_eq!(color_of(&first, "EB"), color_of(&second, "EB"));
        assert_eq!(color_of(&first, "FB"), color_of(&second, "FB"));
    }

    #[test]
    fn test_label_policy_thresholds() {
        assert_eq!(percentage_label("EB", 31), "EB 31%");
        assert_eq!(percentage_label("EB", 30), "30%");
        assert_eq!(percentage_label("EB", 11), "11%");
        assert_eq!(percentage_label("EB", 10), "");
        assert_eq!(percentage_label("EB", 0), "");
    }

    #[test]
    fn test_inconsistent_total_propagates_error() {
        let allocator = PercentageAllocator::with_defaults();
        let set = CategorySet::from_pairs(&[("EB", 1.0)], 1_000.0);
        assert!(allocator.allocate(&set).is_err());
    }
}
