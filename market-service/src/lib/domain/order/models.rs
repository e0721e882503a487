use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Duration;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::order::errors::OrderIdError;
use crate::domain::order::errors::OrderStatusError;
use crate::domain::order::errors::SnapshotError;
use crate::domain::user::models::UserId;

/// Days between order creation and the default delivery date.
const DELIVERY_WINDOW_DAYS: i64 = 7;

/// Order aggregate entity.
///
/// The `items` field is a snapshot list, deliberately a copy of catalog
/// state at add-time: later catalog edits never change historical orders.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub delivery_date: NaiveDate,
    pub items: ItemSnapshots,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new confirmed order with the default delivery window.
    pub fn new(user_id: UserId, items: ItemSnapshots) -> Self {
        let created_at = Utc::now();

        Self {
            id: OrderId::new(),
            user_id,
            status: OrderStatus::Confirmed,
            delivery_date: (created_at + Duration::days(DELIVERY_WINDOW_DAYS)).date_naive(),
            items,
            created_at,
        }
    }
}

/// Order unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// Generate a new random order ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an order ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, OrderIdError> {
        Uuid::parse_str(s)
            .map(OrderId)
            .map_err(|e| OrderIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed order status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Confirmed
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(OrderStatus::Confirmed),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(OrderStatusError::Unknown(other.to_string())),
        }
    }
}

/// Denormalized copy of an item's catalog fields, captured when the item is
/// added to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    pub item_id: ItemId,
    pub item_name: String,
    pub category: String,
    pub item_desc: String,
    pub stock: i32,
    pub item_pic: String,
    pub rating: Option<i32>,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

impl ItemSnapshot {
    /// Capture the item's current catalog state.
    pub fn capture(item: &Item, quantity: i32) -> Self {
        Self {
            item_id: item.id,
            item_name: item.name.clone(),
            category: item.category.clone(),
            item_desc: item.description.clone(),
            stock: item.stock.count(),
            item_pic: item.image.clone(),
            rating: item.rating,
            quantity,
        }
    }
}

/// The snapshot list embedded in an order.
///
/// Append-only value type: an item id can appear at most once, and the list
/// is encoded to/decoded from its serialized form only at the storage
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSnapshots(Vec<ItemSnapshot>);

impl ItemSnapshots {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Decode from the serialized storage form.
    ///
    /// # Errors
    /// * `Decoding` - Stored text is not a valid snapshot array
    pub fn decode(encoded: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(encoded)
            .map(Self)
            .map_err(|e| SnapshotError::Decoding(e.to_string()))
    }

    /// Encode to the serialized storage form.
    ///
    /// # Errors
    /// * `Encoding` - Serialization failed
    pub fn encode(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(&self.0).map_err(|e| SnapshotError::Encoding(e.to_string()))
    }

    /// Whether an item id is already present.
    pub fn contains(&self, item_id: &ItemId) -> bool {
        self.0.iter().any(|snapshot| snapshot.item_id == *item_id)
    }

    /// Append a snapshot, rejecting a duplicate item id without mutation.
    ///
    /// # Errors
    /// * `DuplicateItem` - The item id is already in the list
    pub fn append(&mut self, snapshot: ItemSnapshot) -> Result<(), SnapshotError> {
        if self.contains(&snapshot.item_id) {
            return Err(SnapshotError::DuplicateItem(snapshot.item_id.to_string()));
        }

        self.0.push(snapshot);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemSnapshot> {
        self.0.iter()
    }

    /// Borrow the underlying snapshot records.
    pub fn as_slice(&self) -> &[ItemSnapshot] {
        &self.0
    }
}

/// A single requested line in an order-creation command.
#[derive(Debug, Clone)]
pub struct OrderItemRequest {
    pub item_id: ItemId,
    pub quantity: Option<i32>,
}

/// Command to create a new order with domain types
#[derive(Debug)]
pub struct CreateOrderCommand {
    pub user_id: UserId,
    pub items: Vec<OrderItemRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::models::Stock;

    fn test_item(name: &str) -> Item {
        Item {
            id: ItemId::new(),
            name: name.to_string(),
            category: "furniture".to_string(),
            description: format!("a {}", name),
            stock: Stock::new(5).unwrap(),
            image: format!("images/{}.png", name),
            rating: Some(4),
            reviews: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new(UserId::new(), ItemSnapshots::new());

        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(
            order.delivery_date,
            (order.created_at + Duration::days(7)).date_naive()
        );
    }

    #[test]
    fn test_order_status_round_trip() {
        for status in [
            OrderStatus::Confirmed,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_snapshots_append_rejects_duplicate() {
        let item = test_item("lamp");
        let mut snapshots = ItemSnapshots::new();

        snapshots.append(ItemSnapshot::capture(&item, 1)).unwrap();
        let result = snapshots.append(ItemSnapshot::capture(&item, 2));

        assert!(matches!(result, Err(SnapshotError::DuplicateItem(_))));
        assert_eq!(snapshots.len(), 1);
    }

    #[test]
    fn test_snapshots_encode_decode_round_trip() {
        let lamp = test_item("lamp");
        let chair = test_item("chair");

        let mut snapshots = ItemSnapshots::new();
        snapshots.append(ItemSnapshot::capture(&lamp, 1)).unwrap();
        snapshots.append(ItemSnapshot::capture(&chair, 3)).unwrap();

        let encoded = snapshots.encode().unwrap();
        let decoded = ItemSnapshots::decode(&encoded).unwrap();

        assert_eq!(decoded, snapshots);
        assert!(decoded.contains(&lamp.id));
        assert!(decoded.contains(&chair.id));
    }

    #[test]
    fn test_snapshot_is_a_copy_of_catalog_state() {
        let mut item = test_item("lamp");
        let snapshot = ItemSnapshot::capture(&item, 1);

        // Mutating the catalog entry afterwards leaves the snapshot intact
        item.stock = Stock::new(0).unwrap();
        item.name = "renamed".to_string();

        assert_eq!(snapshot.stock, 5);
        assert_eq!(snapshot.item_name, "lamp");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(ItemSnapshots::decode("not json").is_err());
    }

    #[test]
    fn test_decode_defaults_missing_quantity() {
        let item = test_item("lamp");
        let snapshot = ItemSnapshot::capture(&item, 1);

        let mut value = serde_json::to_value(vec![snapshot]).unwrap();
        value[0].as_object_mut().unwrap().remove("quantity");

        let decoded = ItemSnapshots::decode(&value.to_string()).unwrap();
        assert_eq!(decoded.as_slice()[0].quantity, 1);
    }
}
