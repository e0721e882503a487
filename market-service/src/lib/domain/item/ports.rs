use async_trait::async_trait;

use crate::domain::item::errors::ImageStoreError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::user::models::UserId;

/// Port for item domain service operations.
#[async_trait]
pub trait ItemServicePort: Send + Sync + 'static {
    /// Create a new catalog item.
    ///
    /// The uploaded image is written through the image store first; the
    /// resulting path is persisted with the item.
    ///
    /// # Errors
    /// * `ImageStore` - Image could not be written
    /// * `DatabaseError` - Database operation failed
    async fn create_item(&self, command: CreateItemCommand) -> Result<Item, ItemError>;

    /// Retrieve item by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemError>;

    /// Retrieve all catalog items. Empty result is valid.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_items(&self) -> Result<Vec<Item>, ItemError>;

    /// Retrieve items linked to a user through the catalog association.
    /// Empty result is valid.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_items_by_user(&self, user_id: &UserId) -> Result<Vec<Item>, ItemError>;

    /// Retrieve items in a category. Empty result is valid.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_items_by_category(&self, category: &str) -> Result<Vec<Item>, ItemError>;

    /// Update existing item with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_item(&self, id: &ItemId, command: UpdateItemCommand)
        -> Result<Item, ItemError>;

    /// Delete existing item, returning the deleted record.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_item(&self, id: &ItemId) -> Result<Item, ItemError>;

    /// Link an item to a user (catalog association).
    ///
    /// Adding an already-present pair is rejected without mutation.
    ///
    /// # Errors
    /// * `UserNotFound` - User does not exist
    /// * `NotFound` - Item does not exist
    /// * `AlreadyAdded` - The pair already exists
    /// * `DatabaseError` - Database operation failed
    async fn add_item_to_user(&self, user_id: &UserId, item_id: &ItemId)
        -> Result<(), ItemError>;
}

/// Persistence operations for the item aggregate and the user↔item
/// association.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Persist new item to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, item: Item) -> Result<Item, ItemError>;

    /// Retrieve item by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError>;

    /// Retrieve all items from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Item>, ItemError>;

    /// Retrieve items linked to a user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Item>, ItemError>;

    /// Retrieve items in a category.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_category(&self, category: &str) -> Result<Vec<Item>, ItemError>;

    /// Update existing item in storage.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, item: Item) -> Result<Item, ItemError>;

    /// Remove item from storage. Association rows cascade.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &ItemId) -> Result<(), ItemError>;

    /// Insert a user↔item association row.
    ///
    /// The pair is unique; inserting an existing pair fails.
    ///
    /// # Errors
    /// * `AlreadyAdded` - The pair already exists
    /// * `DatabaseError` - Database operation failed
    async fn link_to_user(&self, user_id: &UserId, item_id: &ItemId) -> Result<(), ItemError>;
}

/// Write-once blob storage for uploaded item images.
///
/// External collaborator boundary: given bytes, yields a stable path.
#[async_trait]
pub trait ImageStore: Send + Sync + 'static {
    /// Store image bytes and return the path they are reachable under.
    ///
    /// # Errors
    /// * `WriteFailed` - The image could not be written
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, ImageStoreError>;
}
