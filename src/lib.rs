//! # ROIVIZ - Connectome Explorer Analytics
//!
//! ROIVIZ is a pure-computation library for connectome database explorers.
//! It converts raw tabular graph-query results (per-region synapse counts)
//! into display-ready, percentage-normalized visual data, and into
//! normalized feature vectors for "find similar neurons" ranking. It never
//! renders, never talks to the network, and never touches query-language
//! semantics - those remain the host application's responsibility.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! roiviz = "0.1"
//! ```
//!
//! ```rust
//! use roiviz::prelude::*;
//!
//! // Percentage bar for a region breakdown
//! let allocator = PercentageAllocator::with_defaults();
//! let set = CategorySet::new(
//!     vec![Category::new("EB", 120.0), Category::new("FB", 60.0)],
//!     180.0,
//! );
//! let boxes = allocator.allocate(&set)?;
//! assert_eq!(boxes.iter().map(|b| b.percentage).sum::<u32>(), 100);
//!
//! // Similarity vector from a JSON roiInfo payload
//! let counts = RoiCountMap::from_json_str(r#"{"EB": {"pre": 30, "post": 40}}"#)?;
//! let slots = RoiSlotOrder::from_super_rois(&["EB", "FB"]);
//! let vector = build_vector(&counts, &slots, &VectorParams::default());
//! assert_eq!(vector.len(), 2 * slots.slot_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Components
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Foundation: roiviz-structures                          │
//! │  (SynapseCounts, RoiCountMap, CategorySet)              │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Algorithms: roiviz-allocation, roiviz-similarity       │
//! │  (Pure computation, no I/O)                             │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Wiring: roiviz-config                                  │
//! │  (TOML-backed constants, env overrides)                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Feature Flags
//!
//! - **`parallel`** (default): rayon fan-out for candidate scoring in
//!   `rank_by_similarity`. Disable for WASM targets.
//!
//! ## License
//!
//! Apache-2.0

// Re-export foundation
pub use roiviz_structures as structures;

// Re-export algorithms
pub use roiviz_allocation as allocation;
pub use roiviz_similarity as similarity;

// Re-export wiring
pub use roiviz_config as config;

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::structures::{
        AllocatedCategory, Category, CategorySet, RoiCountMap, RoiDataError, SynapseCounts,
    };

    pub use crate::allocation::{
        apportion, pick_text_color, AllocationError, ColorAssignment, HeatMapStyle, Palette,
        PercentageAllocator,
    };

    pub use crate::similarity::{
        build_vector, compute_similarity, distance, fold_symmetric, rank_by_similarity,
        RoiSlotOrder, SimilarityError, SimilarityScores, VectorParams,
    };

    pub use crate::config::{load_config, RoivizConfig};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_facade_imports() {
        // Just test that re-exports work
        use crate::prelude::*;
        let _allocator = PercentageAllocator::with_defaults();
        let _slots = RoiSlotOrder::from_super_rois(&["EB"]);
    }
}
