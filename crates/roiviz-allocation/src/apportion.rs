// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Largest-remainder integer apportionment
//!
//! Pure function at the heart of the percentage bar graph: rounds raw
//! percentages to integers while preserving an exact total of 100.

use std::cmp::Ordering;

use tracing::debug;

use crate::{AllocationError, AllocationResult};

/// Apportion `values` against `total` into integer percentages summing to
/// exactly 100, using the largest-remainder method.
///
/// The result is aligned with the input order and covers every value,
/// including those that round to 0. `total` must be positive; the
/// zero-total sentinel path lives in
/// [`PercentageAllocator::allocate`](crate::PercentageAllocator::allocate).
///
/// Remainder units go to the entries with the largest fractional parts;
/// equal fractional parts are broken by input order (stable sort). A
/// deficit larger than the number of values means the caller-supplied
/// total is inconsistent with the data and is reported as
/// [`AllocationError::Computation`], never clamped.
///
/// # Examples
/// ```
/// use roiviz_allocation::apportion;
///
/// let thirds = apportion(&[33.3, 33.3, 33.4], 100.0).unwrap();
/// assert_eq!(thirds, vec![33, 33, 34]);
/// assert_eq!(thirds.iter().sum::<u32>(), 100);
/// ```
pub fn apportion(values: &[f64], total: f64) -> AllocationResult<Vec<u32>> {
    // (input position, integer part, fractional part)
    let mut entries: Vec<(usize, u32, f64)> = values
        .iter()
        .enumerate()
        .map(|(position, &value)| {
            let raw = if value.is_nan() || value <= 0.0 {
                0.0
            } else {
                (value / total) * 100.0
            };
            let integer_part = raw.floor();
            (position, integer_part as u32, raw - integer_part)
        })
        .collect();

    let sum_of_integer_parts: i64 = entries.iter().map(|e| i64::from(e.1)).sum();
    let deficit = 100 - sum_of_integer_parts;

    if deficit > entries.len() as i64 {
        return Err(AllocationError::Computation {
            deficit,
            categories: entries.len(),
        });
    }

    // Largest fractional parts absorb the remainder; stable sort keeps
    // input order as the tie-break.
    entries.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));
    for entry in entries.iter_mut().take(deficit.max(0) as usize) {
        entry.1 += 1;
    }

    debug!(
        categories = entries.len(),
        deficit, "distributed percentage remainder"
    );

    entries.sort_by_key(|e| e.0);
    Ok(entries.into_iter().map(|e| e.1).collect())
}
