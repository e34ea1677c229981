// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Vector distance and candidate ranking
//!
//! Two scoring surfaces: the squared-Euclidean distance used to order
//! similar-neuron candidates, and the per-half similarity sub-scores shown
//! alongside each result row. Distances reject NaN outright; the sub-score
//! path carries a documented fallback for partially missing halves.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{SimilarityError, SimilarityResult};

/// Squared Euclidean distance between two equal-length vectors.
///
/// Not rooted: callers only compare distances within one fixed slot
/// order, so the monotone square root buys nothing. Symmetric and zero on
/// identical vectors. A NaN difference is a data-contract violation and is
/// rejected rather than propagated into a silently wrong score.
///
/// # Examples
/// ```
/// use roiviz_similarity::distance;
///
/// let d = distance(&[0.0, 1.0], &[1.0, 1.0]).unwrap();
/// assert_eq!(d, 1.0);
/// ```
pub fn distance(a: &[f64], b: &[f64]) -> SimilarityResult<f64> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b) {
        let diff = x - y;
        if diff.is_nan() {
            return Err(SimilarityError::InvalidArgument(
                "non-numeric entry in similarity vector".to_string(),
            ));
        }
        sum += diff * diff;
    }
    Ok(sum)
}

/// Per-half similarity scores for one candidate against the queried body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScores {
    /// Score over the input (postsynaptic) half
    pub input_score: f64,
    /// Score over the output (presynaptic) half
    pub output_score: f64,
    /// Combined score
    pub total_score: f64,
}

fn half_score(a: &[f64], b: &[f64]) -> f64 {
    // NaN flows through deliberately; compute_similarity resolves it
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum::<f64>() / 2.0
}

/// Per-half similarity between a candidate vector and the queried body's
/// vector.
///
/// Both vectors hold `2 * R` entries; the first half is compared for the
/// output score, the second for the input score, each as half the L1
/// difference. The total is their mean. When exactly one sub-score is NaN
/// (a half with missing data), the total falls back to the valid
/// sub-score; when both are NaN there is no defensible score and the call
/// fails so the caller can surface the row for clarification.
///
/// # Examples
/// ```
/// use roiviz_similarity::compute_similarity;
///
/// let scores = compute_similarity(
///     &[0.0, 0.4, 0.6, 0.0, 1.0, 0.0],
///     &[0.0, 0.4, 0.0, 1.0, 0.0, 0.0],
/// ).unwrap();
/// assert!((scores.input_score - 1.0).abs() < 1e-12);
/// assert!((scores.output_score - 0.3).abs() < 1e-12);
/// assert!((scores.total_score - 0.65).abs() < 1e-12);
/// ```
pub fn compute_similarity(input: &[f64], queried: &[f64]) -> SimilarityResult<SimilarityScores> {
    if input.len() != queried.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: queried.len(),
            actual: input.len(),
        });
    }
    if input.is_empty() || input.len() % 2 != 0 {
        return Err(SimilarityError::InvalidArgument(format!(
            "similarity vectors need a non-empty even length, got {}",
            input.len()
        )));
    }

    let half = input.len() / 2;
    let output_score = half_score(&input[..half], &queried[..half]);
    let input_score = half_score(&input[half..], &queried[half..]);

    let total_score = match (input_score.is_nan(), output_score.is_nan()) {
        (false, false) => (input_score + output_score) / 2.0,
        (true, false) => output_score,
        (false, true) => input_score,
        (true, true) => {
            return Err(SimilarityError::InvalidArgument(
                "both similarity sub-scores are NaN; row needs product clarification".to_string(),
            ))
        }
    };

    Ok(SimilarityScores {
        input_score,
        output_score,
        total_score,
    })
}

/// A candidate with its distance to the reference vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    pub item: T,
    pub distance: f64,
}

/// Order candidates by ascending distance to `reference`.
///
/// The sort is stable: equal distances keep their input order, and the
/// reference entity itself (distance 0) lands first when present. Any
/// dimension or NaN violation aborts the whole ranking before reordering.
pub fn rank_by_similarity<T: Send>(
    candidates: Vec<(T, Vec<f64>)>,
    reference: &[f64],
) -> SimilarityResult<Vec<Ranked<T>>> {
    #[cfg(feature = "parallel")]
    let scored: SimilarityResult<Vec<Ranked<T>>> = candidates
        .into_par_iter()
        .map(|(item, vector)| {
            distance(&vector, reference).map(|d| Ranked { item, distance: d })
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let scored: SimilarityResult<Vec<Ranked<T>>> = candidates
        .into_iter()
        .map(|(item, vector)| {
            distance(&vector, reference).map(|d| Ranked { item, distance: d })
        })
        .collect();

    let mut ranked = scored?;
    ranked.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    Ok(ranked)
}
