//! Weighted category inputs and allocated visual outputs

use serde::{Deserialize, Serialize};

/// One weighted category, e.g. a region's synapse count for one neuron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display identifier (region name)
    pub id: String,
    /// Non-negative count backing this category
    pub raw_value: f64,
}

impl Category {
    pub fn new(id: impl Into<String>, raw_value: f64) -> Self {
        Self {
            id: id.into(),
            raw_value,
        }
    }
}

/// An ordered sequence of categories tied to a denominator.
///
/// `total` is a separate grand total and may differ from the sum of the
/// raw values (e.g. it can include categories not present in this set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySet {
    pub categories: Vec<Category>,
    pub total: f64,
}

impl CategorySet {
    pub fn new(categories: Vec<Category>, total: f64) -> Self {
        Self { categories, total }
    }

    /// Convenience constructor from `(id, raw_value)` pairs.
    pub fn from_pairs(pairs: &[(&str, f64)], total: f64) -> Self {
        Self::new(
            pairs.iter().map(|(id, v)| Category::new(*id, *v)).collect(),
            total,
        )
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A category after integer percentage apportionment and color assignment,
/// ready for the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocatedCategory {
    /// Display identifier (region name)
    pub id: String,
    /// Integer percentage; the full allocation sums to exactly 100
    pub percentage: u32,
    /// Palette slot this id was assigned; `None` for the fixed neutral
    /// color of the zero-total sentinel
    pub color_index: Option<usize>,
    /// Resolved display color (hex string)
    pub color: String,
    /// Visual weight in pixels
    pub pixel_width: f64,
    /// Overlay text per the display policy (may be empty)
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_set_from_pairs() {
        let set = CategorySet::from_pairs(&[("EB", 10.0), ("FB", 20.0)], 30.0);
        assert_eq!(set.len(), 2);
        assert_eq!(set.categories[1].id, "FB");
        assert_eq!(set.total, 30.0);
    }
}
