use async_trait::async_trait;

use crate::domain::item::models::ItemId;
use crate::domain::order::errors::OrderError;
use crate::domain::order::models::CreateOrderCommand;
use crate::domain::order::models::ItemSnapshot;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderId;
use crate::domain::user::models::UserId;

/// Port for order domain service operations.
#[async_trait]
pub trait OrderServicePort: Send + Sync + 'static {
    /// Create a new order from catalog snapshots.
    ///
    /// All-or-nothing: every referenced item must exist in the catalog at
    /// creation time, or nothing is persisted.
    ///
    /// # Errors
    /// * `EmptyItems` - The request contains no items
    /// * `UserNotFound` - The owning user does not exist
    /// * `ItemNotFound` - A referenced item is missing from the catalog
    /// * `ItemAlreadyInOrder` - The same item id appears twice in the request
    /// * `DatabaseError` - Database operation failed
    async fn create_order(&self, command: CreateOrderCommand) -> Result<Order, OrderError>;

    /// Retrieve order by unique identifier, snapshots decoded.
    ///
    /// # Errors
    /// * `NotFound` - Order does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_order(&self, id: &OrderId) -> Result<Order, OrderError>;

    /// Retrieve all orders. Empty result is valid.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_orders(&self) -> Result<Vec<Order>, OrderError>;

    /// Retrieve orders owned by a user. Empty result is valid.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_orders_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError>;

    /// Append a freshly captured snapshot of an item to an existing order.
    ///
    /// Idempotent-reject: an item id already present in the order's snapshot
    /// list fails without mutation.
    ///
    /// # Errors
    /// * `NotFound` - Order does not exist
    /// * `ItemNotFound` - Item does not exist
    /// * `ItemAlreadyInOrder` - The item id is already in the order
    /// * `DatabaseError` - Database operation failed
    async fn add_item(&self, order_id: &OrderId, item_id: &ItemId) -> Result<(), OrderError>;

    /// Delete existing order.
    ///
    /// # Errors
    /// * `NotFound` - Order does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_order(&self, id: &OrderId) -> Result<(), OrderError>;
}

/// Persistence operations for the order aggregate.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// Persist new order to storage in a single transactional insert.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, order: Order) -> Result<Order, OrderError>;

    /// Retrieve order by identifier, snapshots decoded.
    ///
    /// # Errors
    /// * `Snapshot` - Stored snapshot list could not be decoded
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// Retrieve all orders from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Order>, OrderError>;

    /// Retrieve orders owned by a user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError>;

    /// Append a snapshot to the order's stored list.
    ///
    /// The read-decode-append-encode-write sequence MUST run as one
    /// transaction holding a row lock on the order, so concurrent appends
    /// to the same order serialize instead of losing updates.
    ///
    /// # Errors
    /// * `NotFound` - Order does not exist
    /// * `ItemAlreadyInOrder` - The item id is already in the stored list
    /// * `Snapshot` - Stored snapshot list could not be decoded
    /// * `DatabaseError` - Database operation failed
    async fn append_snapshot(
        &self,
        order_id: &OrderId,
        snapshot: ItemSnapshot,
    ) -> Result<(), OrderError>;

    /// Remove order from storage.
    ///
    /// # Errors
    /// * `NotFound` - Order does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &OrderId) -> Result<(), OrderError>;
}
