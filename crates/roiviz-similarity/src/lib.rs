// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # roiviz-similarity
//!
//! Builds normalized feature vectors from per-region synapse breakdowns and
//! scores vector pairs for "find similar neurons" queries. A vector holds
//! `2 * R` entries for `R` region slots: the first half carries weighted
//! presynaptic (output) density, the second half postsynaptic (input)
//! density, each squashed into `(0, 1)` by a calibrated logistic.
//!
//! All operations are synchronous, pure, and deterministic; candidate
//! scoring can fan out over rayon behind the default-on `parallel`
//! feature.

mod score;
mod slots;
mod vector;

pub use score::{
    compute_similarity, distance, rank_by_similarity, Ranked, SimilarityScores,
};
pub use slots::{fold_symmetric, RoiSlotOrder, UNASSIGNED_ROI};
pub use vector::{
    build_vector, logistic_squash, FeatureVector, VectorParams, DEFAULT_LOGISTIC_CENTER,
    DEFAULT_LOGISTIC_SCALE, DEFAULT_PRE_SYNAPTIC_WEIGHT,
};

/// Result type for similarity operations
pub type SimilarityResult<T> = Result<T, SimilarityError>;

/// Errors that can occur during similarity scoring
#[derive(Debug, Clone, thiserror::Error)]
pub enum SimilarityError {
    /// Compared vectors carry different slot counts
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Missing or non-numeric input where a score is required
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
