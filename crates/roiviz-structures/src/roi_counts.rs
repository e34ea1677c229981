// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-region synapse count records
//!
//! Graph-query responses carry one JSON-encoded object per entity, with
//! region names as keys and `{pre, post}` counts as values. The key set is
//! open: side-annotated names (`"EB(L)"`), hierarchical names, and the
//! `"None"` bucket for synapses outside every region all pass through
//! as ordinary entries.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::RoiDataError;

/// Pre/post synapse counts for one entity within one region.
///
/// Query responses routinely omit zero fields, so both counts default to 0
/// when missing from the payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynapseCounts {
    /// Presynaptic (output) synapse count
    pub pre: u64,
    /// Postsynaptic (input) synapse count
    pub post: u64,
}

impl SynapseCounts {
    pub fn new(pre: u64, post: u64) -> Self {
        Self { pre, post }
    }
}

/// Region name -> synapse counts, as reported for a single queried entity.
///
/// # Examples
/// ```
/// use roiviz_structures::RoiCountMap;
///
/// let counts = RoiCountMap::from_json_str(r#"{"EB": {"pre": 17, "post": 120}}"#).unwrap();
/// assert_eq!(counts.get("EB").unwrap().post, 120);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoiCountMap(AHashMap<String, SynapseCounts>);

impl RoiCountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON-encoded `roiInfo` field of a query-response row.
    pub fn from_json_str(payload: &str) -> Result<Self, RoiDataError> {
        serde_json::from_str(payload).map_err(|e| RoiDataError::Deserialization(e.to_string()))
    }

    pub fn insert(&mut self, roi: impl Into<String>, counts: SynapseCounts) {
        self.0.insert(roi.into(), counts);
    }

    pub fn get(&self, roi: &str) -> Option<&SynapseCounts> {
        self.0.get(roi)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SynapseCounts)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, SynapseCounts)> for RoiCountMap {
    fn from_iter<I: IntoIterator<Item = (String, SynapseCounts)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roi_info_payload() {
        let payload = r#"{"EB": {"pre": 17, "post": 120}, "FB(L)": {"pre": 3, "post": 9}}"#;
        let counts = RoiCountMap::from_json_str(payload).unwrap();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("EB"), Some(&SynapseCounts::new(17, 120)));
        assert_eq!(counts.get("FB(L)"), Some(&SynapseCounts::new(3, 9)));
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        // Responses omit zero fields
        let payload = r#"{"EB": {"post": 4}, "None": {}}"#;
        let counts = RoiCountMap::from_json_str(payload).unwrap();

        assert_eq!(counts.get("EB"), Some(&SynapseCounts::new(0, 4)));
        assert_eq!(counts.get("None"), Some(&SynapseCounts::new(0, 0)));
    }

    #[test]
    fn test_invalid_json_is_typed_error() {
        let result = RoiCountMap::from_json_str("{not json");
        assert!(matches!(result, Err(RoiDataError::Deserialization(_))));
    }

    #[test]
    fn test_empty_payload() {
        let counts = RoiCountMap::from_json_str("{}").unwrap();
        assert!(counts.is_empty());
    }
}
