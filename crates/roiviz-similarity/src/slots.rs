// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Region slot ordering with left/right symmetry folding
//!
//! Similar-neuron comparison treats a left-hemisphere region and its right
//! twin as one slot, so `"EB(L)"` and `"EB(R)"` both accumulate into the
//! canonical `"EB-sym"`. Slot order is fixed per query from the
//! super-level region list; the reserved `"None"` slot (synapses outside
//! every region) always comes last.

use ahash::AHashMap;

/// Reserved slot name for synapses assigned to no region
pub const UNASSIGNED_ROI: &str = "None";

/// Fold a side-annotated region name into its canonical symmetric form.
///
/// `"X(L)"` and `"X(R)"` both become `"X-sym"`; names without a side
/// annotation pass through unchanged.
///
/// # Examples
/// ```
/// use roiviz_similarity::fold_symmetric;
///
/// assert_eq!(fold_symmetric("EB(L)"), "EB-sym");
/// assert_eq!(fold_symmetric("EB(R)"), "EB-sym");
/// assert_eq!(fold_symmetric("FB"), "FB");
/// ```
pub fn fold_symmetric(name: &str) -> String {
    match name
        .strip_suffix("(L)")
        .or_else(|| name.strip_suffix("(R)"))
    {
        Some(base) => format!("{}-sym", base),
        None => name.to_string(),
    }
}

/// Fixed mapping from canonical region name to feature-vector slot.
///
/// Construction is pure: the caller's region list is never mutated; the
/// sentinel `"None"` slot is appended to a fresh internal ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiSlotOrder {
    names: Vec<String>,
    index: AHashMap<String, usize>,
}

impl RoiSlotOrder {
    /// Build the slot order for one query from the ordered super-level
    /// region names. Left/right pairs fold into one slot in first-seen
    /// order; the reserved `"None"` slot is appended last.
    pub fn from_super_rois<S: AsRef<str>>(super_rois: &[S]) -> Self {
        let mut names: Vec<String> = Vec::with_capacity(super_rois.len() + 1);
        let mut index = AHashMap::with_capacity(super_rois.len() + 1);

        for name in super_rois {
            let canonical = fold_symmetric(name.as_ref());
            if !index.contains_key(&canonical) {
                index.insert(canonical.clone(), names.len());
                names.push(canonical);
            }
        }
        if !index.contains_key(UNASSIGNED_ROI) {
            index.insert(UNASSIGNED_ROI.to_string(), names.len());
            names.push(UNASSIGNED_ROI.to_string());
        }

        Self { names, index }
    }

    /// Slot index for an already-folded canonical name.
    pub fn slot(&self, canonical: &str) -> Option<usize> {
        self.index.get(canonical).copied()
    }

    /// Number of slots `R`, including the reserved `"None"` slot.
    pub fn slot_count(&self) -> usize {
        self.names.len()
    }

    /// Canonical names in slot order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
