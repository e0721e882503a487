use thiserror::Error;

/// Error for ItemId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Stock validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StockError {
    #[error("Stock cannot be negative, got {0}")]
    Negative(i32),
}

/// Error for image store operations
#[derive(Debug, Clone, Error)]
pub enum ImageStoreError {
    #[error("Failed to store image: {0}")]
    WriteFailed(String),
}

/// Top-level error for all item-related operations
#[derive(Debug, Clone, Error)]
pub enum ItemError {
    #[error("Invalid item ID: {0}")]
    InvalidItemId(#[from] ItemIdError),

    #[error("Invalid stock: {0}")]
    InvalidStock(#[from] StockError),

    #[error("Item not found")]
    NotFound(String),

    #[error("User not found")]
    UserNotFound(String),

    #[error("Item already added to user")]
    AlreadyAdded { user_id: String, item_id: String },

    #[error("Image store error: {0}")]
    ImageStore(#[from] ImageStoreError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
