use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::item::ports::ImageStore;
use crate::domain::item::ports::ItemRepository;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for catalog items.
///
/// Spans the item aggregate, the user↔item association, and the image
/// store collaborator.
pub struct ItemService<IR, UR, IS>
where
    IR: ItemRepository,
    UR: UserRepository,
    IS: ImageStore,
{
    repository: Arc<IR>,
    user_repository: Arc<UR>,
    image_store: Arc<IS>,
}

impl<IR, UR, IS> ItemService<IR, UR, IS>
where
    IR: ItemRepository,
    UR: UserRepository,
    IS: ImageStore,
{
    pub fn new(repository: Arc<IR>, user_repository: Arc<UR>, image_store: Arc<IS>) -> Self {
        Self {
            repository,
            user_repository,
            image_store,
        }
    }
}

#[async_trait]
impl<IR, UR, IS> ItemServicePort for ItemService<IR, UR, IS>
where
    IR: ItemRepository,
    UR: UserRepository,
    IS: ImageStore,
{
    async fn create_item(&self, command: CreateItemCommand) -> Result<Item, ItemError> {
        let image_path = self
            .image_store
            .store(&command.image.filename, &command.image.bytes)
            .await?;

        let item = Item {
            id: ItemId::new(),
            name: command.name,
            category: command.category,
            description: command.description,
            stock: command.stock,
            image: image_path,
            rating: None,
            reviews: Vec::new(),
            created_at: Utc::now(),
        };

        self.repository.create(item).await
    }

    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id.to_string()))
    }

    async fn list_items(&self) -> Result<Vec<Item>, ItemError> {
        self.repository.list_all().await
    }

    async fn list_items_by_user(&self, user_id: &UserId) -> Result<Vec<Item>, ItemError> {
        self.repository.list_by_user(user_id).await
    }

    async fn list_items_by_category(&self, category: &str) -> Result<Vec<Item>, ItemError> {
        self.repository.list_by_category(category).await
    }

    async fn update_item(
        &self,
        id: &ItemId,
        command: UpdateItemCommand,
    ) -> Result<Item, ItemError> {
        let mut item = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id.to_string()))?;

        if let Some(new_name) = command.name {
            item.name = new_name;
        }

        if let Some(new_category) = command.category {
            item.category = new_category;
        }

        if let Some(new_description) = command.description {
            item.description = new_description;
        }

        if let Some(new_stock) = command.stock {
            item.stock = new_stock;
        }

        if let Some(new_rating) = command.rating {
            item.rating = Some(new_rating);
        }

        self.repository.update(item).await
    }

    async fn delete_item(&self, id: &ItemId) -> Result<Item, ItemError> {
        let item = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id.to_string()))?;

        self.repository.delete(id).await?;

        Ok(item)
    }

    async fn add_item_to_user(
        &self,
        user_id: &UserId,
        item_id: &ItemId,
    ) -> Result<(), ItemError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        if user.is_none() {
            return Err(ItemError::UserNotFound(user_id.to_string()));
        }

        self.repository
            .find_by_id(item_id)
            .await?
            .ok_or(ItemError::NotFound(item_id.to_string()))?;

        self.repository.link_to_user(user_id, item_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::item::errors::ImageStoreError;
    use crate::domain::item::models::ImageUpload;
    use crate::domain::item::models::Stock;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::User;

    mock! {
        pub TestItemRepository {}

        #[async_trait]
        impl ItemRepository for TestItemRepository {
            async fn create(&self, item: Item) -> Result<Item, ItemError>;
            async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError>;
            async fn list_all(&self) -> Result<Vec<Item>, ItemError>;
            async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Item>, ItemError>;
            async fn list_by_category(&self, category: &str) -> Result<Vec<Item>, ItemError>;
            async fn update(&self, item: Item) -> Result<Item, ItemError>;
            async fn delete(&self, id: &ItemId) -> Result<(), ItemError>;
            async fn link_to_user(&self, user_id: &UserId, item_id: &ItemId) -> Result<(), ItemError>;
        }
    }

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    mock! {
        pub TestImageStore {}

        #[async_trait]
        impl ImageStore for TestImageStore {
            async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, ImageStoreError>;
        }
    }

    fn test_item(id: ItemId) -> Item {
        Item {
            id,
            name: "lamp".to_string(),
            category: "furniture".to_string(),
            description: "a lamp".to_string(),
            stock: Stock::new(5).unwrap(),
            image: "images/lamp.png".to_string(),
            rating: None,
            reviews: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn test_user(id: UserId) -> User {
        User {
            id,
            name: "Ann".to_string(),
            email: EmailAddress::new("ann@x.com".to_string()).unwrap(),
            phone_number: "555".to_string(),
            address: "1 St".to_string(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_item_stores_image_first() {
        let mut repository = MockTestItemRepository::new();
        let user_repository = MockTestUserRepository::new();
        let mut image_store = MockTestImageStore::new();

        image_store
            .expect_store()
            .withf(|filename, bytes| filename == "lamp.png" && bytes == b"png-bytes")
            .times(1)
            .returning(|_, _| Ok("images/abc_lamp.png".to_string()));

        repository
            .expect_create()
            .withf(|item| item.image == "images/abc_lamp.png" && item.reviews.is_empty())
            .times(1)
            .returning(Ok);

        let service = ItemService::new(
            Arc::new(repository),
            Arc::new(user_repository),
            Arc::new(image_store),
        );

        let command = CreateItemCommand {
            name: "lamp".to_string(),
            category: "furniture".to_string(),
            description: "a lamp".to_string(),
            stock: Stock::new(5).unwrap(),
            image: ImageUpload {
                filename: "lamp.png".to_string(),
                bytes: b"png-bytes".to_vec(),
            },
        };

        let item = service.create_item(command).await.unwrap();
        assert_eq!(item.image, "images/abc_lamp.png");
    }

    #[tokio::test]
    async fn test_create_item_image_store_failure() {
        let repository = MockTestItemRepository::new();
        let user_repository = MockTestUserRepository::new();
        let mut image_store = MockTestImageStore::new();

        image_store
            .expect_store()
            .times(1)
            .returning(|_, _| Err(ImageStoreError::WriteFailed("disk full".to_string())));

        let service = ItemService::new(
            Arc::new(repository),
            Arc::new(user_repository),
            Arc::new(image_store),
        );

        let command = CreateItemCommand {
            name: "lamp".to_string(),
            category: "furniture".to_string(),
            description: "a lamp".to_string(),
            stock: Stock::new(5).unwrap(),
            image: ImageUpload {
                filename: "lamp.png".to_string(),
                bytes: b"png-bytes".to_vec(),
            },
        };

        let result = service.create_item(command).await;
        assert!(matches!(result.unwrap_err(), ItemError::ImageStore(_)));
    }

    #[tokio::test]
    async fn test_get_item_not_found() {
        let mut repository = MockTestItemRepository::new();
        let user_repository = MockTestUserRepository::new();
        let image_store = MockTestImageStore::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ItemService::new(
            Arc::new(repository),
            Arc::new(user_repository),
            Arc::new(image_store),
        );

        let result = service.get_item(&ItemId::new()).await;
        assert!(matches!(result.unwrap_err(), ItemError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_items_by_category_empty_is_ok() {
        let mut repository = MockTestItemRepository::new();
        let user_repository = MockTestUserRepository::new();
        let image_store = MockTestImageStore::new();

        repository
            .expect_list_by_category()
            .withf(|category| category == "toys")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = ItemService::new(
            Arc::new(repository),
            Arc::new(user_repository),
            Arc::new(image_store),
        );

        let items = service.list_items_by_category("toys").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_add_item_to_user_success() {
        let mut repository = MockTestItemRepository::new();
        let mut user_repository = MockTestUserRepository::new();
        let image_store = MockTestImageStore::new();

        let user_id = UserId::new();
        let item_id = ItemId::new();

        let user = test_user(user_id);
        user_repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let item = test_item(item_id);
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(item.clone())));

        repository
            .expect_link_to_user()
            .withf(move |u, i| *u == user_id && *i == item_id)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ItemService::new(
            Arc::new(repository),
            Arc::new(user_repository),
            Arc::new(image_store),
        );

        assert!(service.add_item_to_user(&user_id, &item_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_add_item_to_user_missing_user() {
        let repository = MockTestItemRepository::new();
        let mut user_repository = MockTestUserRepository::new();
        let image_store = MockTestImageStore::new();

        user_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ItemService::new(
            Arc::new(repository),
            Arc::new(user_repository),
            Arc::new(image_store),
        );

        let result = service.add_item_to_user(&UserId::new(), &ItemId::new()).await;
        assert!(matches!(result.unwrap_err(), ItemError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_add_item_to_user_duplicate_pair() {
        let mut repository = MockTestItemRepository::new();
        let mut user_repository = MockTestUserRepository::new();
        let image_store = MockTestImageStore::new();

        let user_id = UserId::new();
        let item_id = ItemId::new();

        let user = test_user(user_id);
        user_repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let item = test_item(item_id);
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(item.clone())));

        repository
            .expect_link_to_user()
            .times(1)
            .returning(move |u, i| {
                Err(ItemError::AlreadyAdded {
                    user_id: u.to_string(),
                    item_id: i.to_string(),
                })
            });

        let service = ItemService::new(
            Arc::new(repository),
            Arc::new(user_repository),
            Arc::new(image_store),
        );

        let result = service.add_item_to_user(&user_id, &item_id).await;
        assert!(matches!(result.unwrap_err(), ItemError::AlreadyAdded { .. }));
    }
}
