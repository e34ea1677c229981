// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The core crate for ROIVIZ. Defines the most common data structures used throughout:
//! per-region synapse counts parsed from graph-query responses, and the
//! category/allocation types consumed by the visualization algorithms.

mod category;
mod error;
mod roi_counts;

pub use category::{AllocatedCategory, Category, CategorySet};
pub use error::RoiDataError;
pub use roi_counts::{RoiCountMap, SynapseCounts};

/// Result type for ROIVIZ data operations
pub type RoiDataResult<T> = Result<T, RoiDataError>;
