//! The item entity and its input shapes.
//!
//! # Lifecycle
//! Raw input arrives as an [`ItemCreate`], is validated into a [`NewItem`]
//! (no id yet), and becomes an [`Item`] once the store assigns an [`ItemId`].
//! After that only `name`, `brand` and `purchase_price` may change, through
//! an [`ItemUpdate`].

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::{parse_purchase_date, validate_brand, validate_name, validate_price};
use super::{Category, ValidationError};

/// Store-assigned identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Builds an id from the store's sequence, which starts at 1.
    pub(crate) fn from_sequence(value: i64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ItemId {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(ValidationError::InvalidId(value));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Represents one owned possession in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub brand: String,
    pub purchase_price: i64,
    pub purchase_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Attaches a store-assigned id to a validated item.
    pub fn from_new(id: ItemId, item: NewItem) -> Self {
        Self {
            id,
            name: item.name,
            category: item.category,
            brand: item.brand,
            purchase_price: item.purchase_price,
            purchase_date: item.purchase_date,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }

    /// Marks the item as modified at `now`.
    ///
    /// `updated_at` always moves forward, even if the clock reports a time
    /// at or before the previous modification.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let floor = self.updated_at + TimeDelta::nanoseconds(1);
        self.updated_at = now.max(floor);
    }
}

/// A validated item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub category: Category,
    pub brand: String,
    pub purchase_price: i64,
    pub purchase_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewItem {
    /// Validates raw field values into a storable item.
    ///
    /// `name` and `brand` are trimmed. `created_at` and `updated_at` are both
    /// set to the current time.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found, checking fields in
    /// argument order.
    pub fn new(
        name: &str,
        category: &str,
        brand: &str,
        purchase_price: i64,
        purchase_date: &str,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        let category = category.parse::<Category>()?;
        let brand = validate_brand(brand)?;
        let purchase_price = validate_price(purchase_price)?;
        let purchase_date = parse_purchase_date(purchase_date)?;
        let now = Utc::now();

        Ok(Self {
            name,
            category,
            brand,
            purchase_price,
            purchase_date,
            created_at: now,
            updated_at: now,
        })
    }
}

impl TryFrom<ItemCreate> for NewItem {
    type Error = ValidationError;

    fn try_from(input: ItemCreate) -> Result<Self, Self::Error> {
        NewItem::new(
            &input.name,
            &input.category,
            &input.brand,
            input.purchase_price,
            &input.purchase_date,
        )
    }
}

/// Input for creating an item. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub purchase_price: i64,
    pub purchase_date: String,
}

/// Input for a partial update.
///
/// `None` means "leave unchanged"; it is never read as empty or zero.
/// `id`, `category`, `purchase_date` and `created_at` have no counterpart
/// here and cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub purchase_price: Option<i64>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.brand.is_none() && self.purchase_price.is_none()
    }
}
