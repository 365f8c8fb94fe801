//! Per-category item counts.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::Category;

/// Item count for every valid category, plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub categories: BTreeMap<Category, u64>,
    pub total: u64,
}

impl CategorySummary {
    /// Builds a summary from counts keyed by category label.
    ///
    /// Categories missing from `counts` are filled with zero. `total` is the
    /// sum of everything in `counts`, including labels outside
    /// [`Category::ALL`].
    pub fn from_counts(counts: &HashMap<String, u64>) -> Self {
        let total = counts.values().sum();
        let categories = Category::ALL
            .into_iter()
            .map(|category| {
                let count = counts.get(category.as_str()).copied().unwrap_or(0);
                (category, count)
            })
            .collect();

        Self { categories, total }
    }
}
