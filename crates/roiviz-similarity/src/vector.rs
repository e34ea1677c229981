// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Feature vector construction
//!
//! Accumulates weighted synapse counts into region slots, then squashes
//! every entry through a calibrated logistic so densities from neurons of
//! very different sizes land in a comparable `(0, 1)` range.

use serde::{Deserialize, Serialize};
use tracing::debug;

use roiviz_structures::RoiCountMap;

use crate::slots::{fold_symmetric, RoiSlotOrder};

/// Presynaptic counts are weighted up to compensate for the lower
/// detection rate of presynaptic sites
pub const DEFAULT_PRE_SYNAPTIC_WEIGHT: f64 = 5.0;

/// Weighted count at which the logistic crosses 0.5
pub const DEFAULT_LOGISTIC_CENTER: f64 = 150.0;

/// Width of the logistic transition band
pub const DEFAULT_LOGISTIC_SCALE: f64 = 40.0;

/// A `2 * R` vector: output (presynaptic) densities in the first `R`
/// entries, input (postsynaptic) densities in the rest, all in `(0, 1)`.
pub type FeatureVector = Vec<f64>;

/// Calibration constants for vector construction.
///
/// The defaults are fixed domain calibration values; override them only to
/// match a dataset with different detection characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorParams {
    /// Multiplier applied to presynaptic counts
    pub pre_weight: f64,
    /// Logistic midpoint
    pub logistic_center: f64,
    /// Logistic scale
    pub logistic_scale: f64,
}

impl Default for VectorParams {
    fn default() -> Self {
        Self {
            pre_weight: DEFAULT_PRE_SYNAPTIC_WEIGHT,
            logistic_center: DEFAULT_LOGISTIC_CENTER,
            logistic_scale: DEFAULT_LOGISTIC_SCALE,
        }
    }
}

/// Logistic squashing of a raw weighted count into `(0, 1)`.
#[inline]
pub fn logistic_squash(value: f64, center: f64, scale: f64) -> f64 {
    1.0 / (1.0 + (-((value - center) / scale)).exp())
}

/// Build the feature vector for one entity from its region breakdown.
///
/// Every raw key is folded with the same left/right rule the slot order
/// uses; keys whose canonical name has no slot are skipped. Presynaptic
/// counts land in the output half weighted by `params.pre_weight`,
/// postsynaptic counts in the input half unweighted, and every entry then
/// passes through the logistic.
///
/// # Examples
/// ```
/// use roiviz_similarity::{build_vector, RoiSlotOrder, VectorParams};
/// use roiviz_structures::RoiCountMap;
///
/// let counts = RoiCountMap::from_json_str(r#"{"EB(L)": {"pre": 30, "post": 150}}"#).unwrap();
/// let slots = RoiSlotOrder::from_super_rois(&["EB(L)", "EB(R)"]);
/// let vector = build_vector(&counts, &slots, &VectorParams::default());
///
/// assert_eq!(vector.len(), 4); // EB-sym + None, both halves
/// assert!((vector[0] - 0.5).abs() < 1e-9); // 30 * 5 sits on the midpoint
/// assert!((vector[2] - 0.5).abs() < 1e-9); // 150 post sits on the midpoint
/// ```
pub fn build_vector(
    counts: &RoiCountMap,
    slots: &RoiSlotOrder,
    params: &VectorParams,
) -> FeatureVector {
    let slot_count = slots.slot_count();
    let mut vector = vec![0.0; 2 * slot_count];

    for (roi, synapses) in counts.iter() {
        let canonical = fold_symmetric(roi);
        match slots.slot(&canonical) {
            Some(slot) => {
                vector[slot] += synapses.pre as f64 * params.pre_weight;
                vector[slot + slot_count] += synapses.post as f64;
            }
            None => {
                debug!(roi = %roi, "region has no slot, skipped");
            }
        }
    }

    for entry in &mut vector {
        *entry = logistic_squash(*entry, params.logistic_center, params.logistic_scale);
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use roiviz_structures::SynapseCounts;

    fn counts(entries: &[(&str, u64, u64)]) -> RoiCountMap {
        entries
            .iter()
            .map(|&(roi, pre, post)| (roi.to_string(), SynapseCounts::new(pre, post)))
            .collect()
    }

    #[test]
    fn test_logistic_midpoint_and_bounds() {
        assert!((logistic_squash(150.0, 150.0, 40.0) - 0.5).abs() < 1e-12);
        assert!(logistic_squash(0.0, 150.0, 40.0) > 0.0);
        assert!(logistic_squash(1e9, 150.0, 40.0) < 1.0);
    }

    #[test]
    fn test_sides_accumulate_into_one_slot() {
        let slots = RoiSlotOrder::from_super_rois(&["EB(L)", "EB(R)"]);
        let map = counts(&[("EB(L)", 10, 40), ("EB(R)", 20, 110)]);
        let vector = build_vector(&map, &slots, &VectorParams::default());

        // (10 + 20) * 5 == 150 -> midpoint; 40 + 110 == 150 -> midpoint
        assert_eq!(vector.len(), 4);
        assert!((vector[0] - 0.5).abs() < 1e-12);
        assert!((vector[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_regions_skipped() {
        let slots = RoiSlotOrder::from_super_rois(&["EB"]);
        let map = counts(&[("EB", 30, 150), ("NOT-A-ROI", 9999, 9999)]);
        let vector = build_vector(&map, &slots, &VectorParams::default());

        let baseline = logistic_squash(0.0, 150.0, 40.0);
        assert!((vector[0] - 0.5).abs() < 1e-12);
        // The None slot saw nothing from the unknown key
        assert!((vector[1] - baseline).abs() < 1e-12);
        assert!((vector[3] - baseline).abs() < 1e-12);
    }

    #[test]
    fn test_unassigned_bucket_lands_in_none_slot() {
        let slots = RoiSlotOrder::from_super_rois(&["EB"]);
        let map = counts(&[("None", 30, 150)]);
        let vector = build_vector(&map, &slots, &VectorParams::default());

        let none_slot = slots.slot("None").unwrap();
        assert!((vector[none_slot] - 0.5).abs() < 1e-12);
        assert!((vector[none_slot + slots.slot_count()] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_map_is_all_baseline() {
        let slots = RoiSlotOrder::from_super_rois(&["EB", "FB"]);
        let vector = build_vector(&RoiCountMap::new(), &slots, &VectorParams::default());

        let baseline = logistic_squash(0.0, 150.0, 40.0);
        assert_eq!(vector.len(), 6);
        assert!(vector.iter().all(|v| (v - baseline).abs() < 1e-12));
    }

    #[test]
    fn test_custom_params_are_honored() {
        let slots = RoiSlotOrder::from_super_rois(&["EB"]);
        let map = counts(&[("EB", 1, 10)]);
        let params = VectorParams {
            pre_weight: 10.0,
            logistic_center: 10.0,
            logistic_scale: 5.0,
        };
        let vector = build_vector(&map, &slots, &params);

        assert!((vector[0] - 0.5).abs() < 1e-12); // 1 * 10 on the midpoint
        assert!((vector[2] - 0.5).abs() < 1e-12); // 10 post on the midpoint
    }
}
