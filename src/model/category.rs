//! The closed set of item categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Category an item is filed under.
///
/// The set is closed: anything outside these variants is rejected at
/// construction time. [`Category::ALL`] is the ordered list used both for
/// validation and for zero-filling the category summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "時計")]
    Watch,
    #[serde(rename = "バッグ")]
    Bag,
    #[serde(rename = "ジュエリー")]
    Jewelry,
    #[serde(rename = "靴")]
    Shoes,
    #[serde(rename = "その他")]
    Other,
}

impl Category {
    /// Every valid category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Watch,
        Category::Bag,
        Category::Jewelry,
        Category::Shoes,
        Category::Other,
    ];

    /// The label stored and shown for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Watch => "時計",
            Category::Bag => "バッグ",
            Category::Jewelry => "ジュエリー",
            Category::Shoes => "靴",
            Category::Other => "その他",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidCategory(s.to_string()))
    }
}
