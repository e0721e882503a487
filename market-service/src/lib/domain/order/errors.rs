use thiserror::Error;

/// Error for OrderId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for OrderStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderStatusError {
    #[error("Unknown order status: {0}")]
    Unknown(String),
}

/// Error for snapshot list operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Item already in order: {0}")]
    DuplicateItem(String),

    #[error("Failed to encode item snapshots: {0}")]
    Encoding(String),

    #[error("Failed to decode item snapshots: {0}")]
    Decoding(String),
}

/// Top-level error for all order-related operations
#[derive(Debug, Clone, Error)]
pub enum OrderError {
    #[error("Invalid order ID: {0}")]
    InvalidOrderId(#[from] OrderIdError),

    #[error("Invalid order status: {0}")]
    InvalidStatus(#[from] OrderStatusError),

    #[error("Order not found")]
    NotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Order must contain at least one item")]
    EmptyItems,

    #[error("Item already in order: {0}")]
    ItemAlreadyInOrder(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<SnapshotError> for OrderError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::DuplicateItem(item_id) => OrderError::ItemAlreadyInOrder(item_id),
            other => OrderError::Snapshot(other.to_string()),
        }
    }
}
