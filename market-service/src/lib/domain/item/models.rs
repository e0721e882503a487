use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::item::errors::ItemIdError;
use crate::domain::item::errors::StockError;

/// Catalog item aggregate entity.
///
/// Owned independently of any single user; referenced by many users through
/// the catalog association and copied by value into order snapshots.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub stock: Stock,
    pub image: String,
    pub rating: Option<i32>,
    pub reviews: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Item unique identifier type
///
/// Serde support exists because the id is embedded in order snapshots, which
/// are serialized at the storage boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an item ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ItemIdError> {
        Uuid::parse_str(s)
            .map(ItemId)
            .map_err(|e| ItemIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-negative stock count value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stock(i32);

impl Stock {
    /// Create a validated stock count.
    ///
    /// # Errors
    /// * `Negative` - Count is below zero
    pub fn new(count: i32) -> Result<Self, StockError> {
        if count < 0 {
            Err(StockError::Negative(count))
        } else {
            Ok(Self(count))
        }
    }

    /// Get the count as a plain integer.
    pub fn count(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Uploaded image content handed to the image store.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Command to create a new catalog item
#[derive(Debug)]
pub struct CreateItemCommand {
    pub name: String,
    pub category: String,
    pub description: String,
    pub stock: Stock,
    pub image: ImageUpload,
}

/// Command to update an existing item with optional fields.
#[derive(Debug)]
pub struct UpdateItemCommand {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub stock: Option<Stock>,
    pub rating: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_rejects_negative() {
        assert!(matches!(Stock::new(-1), Err(StockError::Negative(-1))));
    }

    #[test]
    fn test_stock_accepts_zero() {
        let stock = Stock::new(0).unwrap();
        assert_eq!(stock.count(), 0);
    }

    #[test]
    fn test_item_id_round_trip() {
        let id = ItemId::new();
        let parsed = ItemId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }
}
