use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::models::ItemId;
use crate::domain::item::ports::ItemRepository;
use crate::domain::order::errors::OrderError;
use crate::domain::order::models::CreateOrderCommand;
use crate::domain::order::models::ItemSnapshot;
use crate::domain::order::models::ItemSnapshots;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderId;
use crate::domain::order::ports::OrderRepository;
use crate::domain::order::ports::OrderServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

const DEFAULT_QUANTITY: i32 = 1;

/// Domain service implementation for orders.
///
/// Enforces the catalog/order consistency protocol: items are resolved in
/// the catalog before anything is persisted, and snapshots are captured by
/// value at add-time.
pub struct OrderService<OR, IR, UR>
where
    OR: OrderRepository,
    IR: ItemRepository,
    UR: UserRepository,
{
    repository: Arc<OR>,
    item_repository: Arc<IR>,
    user_repository: Arc<UR>,
}

impl<OR, IR, UR> OrderService<OR, IR, UR>
where
    OR: OrderRepository,
    IR: ItemRepository,
    UR: UserRepository,
{
    pub fn new(repository: Arc<OR>, item_repository: Arc<IR>, user_repository: Arc<UR>) -> Self {
        Self {
            repository,
            item_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl<OR, IR, UR> OrderServicePort for OrderService<OR, IR, UR>
where
    OR: OrderRepository,
    IR: ItemRepository,
    UR: UserRepository,
{
    async fn create_order(&self, command: CreateOrderCommand) -> Result<Order, OrderError> {
        if command.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        let user = self
            .user_repository
            .find_by_id(&command.user_id)
            .await
            .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        if user.is_none() {
            return Err(OrderError::UserNotFound(command.user_id.to_string()));
        }

        // Precondition pass: every referenced item must resolve before any
        // snapshot is captured. A single missing item fails the whole create.
        let mut snapshots = ItemSnapshots::new();
        for request in &command.items {
            let item = self
                .item_repository
                .find_by_id(&request.item_id)
                .await
                .map_err(|e| OrderError::DatabaseError(e.to_string()))?
                .ok_or(OrderError::ItemNotFound(request.item_id.to_string()))?;

            let quantity = request.quantity.unwrap_or(DEFAULT_QUANTITY);
            snapshots.append(ItemSnapshot::capture(&item, quantity))?;
        }

        self.repository
            .create(Order::new(command.user_id, snapshots))
            .await
    }

    async fn get_order(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(OrderError::NotFound(id.to_string()))
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.repository.list_all().await
    }

    async fn list_orders_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        self.repository.list_by_user(user_id).await
    }

    async fn add_item(&self, order_id: &OrderId, item_id: &ItemId) -> Result<(), OrderError> {
        self.repository
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::NotFound(order_id.to_string()))?;

        let item = self
            .item_repository
            .find_by_id(item_id)
            .await
            .map_err(|e| OrderError::DatabaseError(e.to_string()))?
            .ok_or(OrderError::ItemNotFound(item_id.to_string()))?;

        // Duplicate detection happens inside the repository transaction,
        // against the row-locked snapshot list.
        self.repository
            .append_snapshot(order_id, ItemSnapshot::capture(&item, DEFAULT_QUANTITY))
            .await
    }

    async fn delete_order(&self, id: &OrderId) -> Result<(), OrderError> {
        self.repository.delete(id).await
    }
}
