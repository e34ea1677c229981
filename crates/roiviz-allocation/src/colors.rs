// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Display palette and the per-id color assignment cache

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::{AllocationError, AllocationResult};

/// Fixed display palette for region boxes (ColorBrewer Set3, 9 entries).
pub const DEFAULT_PALETTE: [&str; 9] = [
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9",
];

/// Neutral color for the zero-total sentinel box
pub const DEFAULT_NEUTRAL_COLOR: &str = "#cccccc";

/// An ordered, finite list of display colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette from hex color strings. At least one color is
    /// required.
    pub fn new(colors: Vec<String>) -> AllocationResult<Self> {
        if colors.is_empty() {
            return Err(AllocationError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, slot: usize) -> &str {
        &self.colors[slot % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Append-only cache mapping a category id to its palette slot.
///
/// The first time an id is seen it receives the next palette slot,
/// cycling round-robin once the palette is exhausted; the assignment is
/// reused for the life of the cache (no eviction). This is an explicit,
/// injectable struct so tests can create isolated instances; shared use
/// goes through the mutex inside
/// [`PercentageAllocator`](crate::PercentageAllocator).
#[derive(Debug, Clone)]
pub struct ColorAssignment {
    palette: Palette,
    slots: AHashMap<String, usize>,
    next_slot: usize,
}

impl ColorAssignment {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            slots: AHashMap::new(),
            next_slot: 0,
        }
    }

    /// Palette slot for `id`, assigning the next free slot on first sight.
    pub fn slot_for(&mut self, id: &str) -> usize {
        if let Some(&slot) = self.slots.get(id) {
            return slot;
        }
        let slot = self.next_slot % self.palette.len();
        self.slots.insert(id.to_string(), slot);
        self.next_slot += 1;
        slot
    }

    /// Resolved display color for `id`.
    pub fn color_for(&mut self, id: &str) -> &str {
        let slot = self.slot_for(id);
        self.palette.color(slot)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of distinct ids assigned so far
    pub fn assigned(&self) -> usize {
        self.slots.len()
    }
}

impl Default for ColorAssignment {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_gets_next_slot() {
        let mut colors = ColorAssignment::default();
        assert_eq!(colors.slot_for("EB"), 0);
        assert_eq!(colors.slot_for("FB"), 1);
        assert_eq!(colors.slot_for("EB"), 0); // reused
    }

    #[test]
    fn test_palette_wraps_round_robin() {
        let mut colors = ColorAssignment::default();
        for (i, id) in ["a", "b", "c", "d", "e", "f", "g", "h", "i"].iter().enumerate() {
            assert_eq!(colors.slot_for(id), i);
        }
        // The 10th distinct id reuses palette index 0
        assert_eq!(colors.slot_for("j"), 0);
        // ...without disturbing earlier assignments
        assert_eq!(colors.slot_for("a"), 0);
        assert_eq!(colors.slot_for("i"), 8);
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(
            Palette::new(Vec::new()),
            Err(AllocationError::EmptyPalette)
        ));
    }

    #[test]
    fn test_color_for_resolves_hex() {
        let mut colors = ColorAssignment::default();
        assert_eq!(colors.color_for("EB"), DEFAULT_PALETTE[0]);
    }
}
