use std::str::FromStr;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::order::errors::OrderError;
use crate::domain::order::models::ItemSnapshot;
use crate::domain::order::models::ItemSnapshots;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderId;
use crate::domain::order::models::OrderStatus;
use crate::domain::order::ports::OrderRepository;
use crate::domain::user::models::UserId;

pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_order(row: &PgRow) -> Result<Order, OrderError> {
        let status: String = row.get("status");
        let encoded_items: String = row.get("items");

        Ok(Order {
            id: OrderId(row.get("id")),
            user_id: UserId(row.get("user_id")),
            status: OrderStatus::from_str(&status)?,
            delivery_date: row.get("delivery_date"),
            items: ItemSnapshots::decode(&encoded_items)?,
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: Order) -> Result<Order, OrderError> {
        let encoded_items = order.items.encode()?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, user_id, status, delivery_date, items, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(order.id.0)
        .bind(order.user_id.0)
        .bind(order.status.as_str())
        .bind(order.delivery_date)
        .bind(&encoded_items)
        .bind(order.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        Ok(order)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, status, delivery_date, items, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_order).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, status, delivery_date, items, created_at
            FROM orders
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_order).collect()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, status, delivery_date, items, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_order).collect()
    }

    async fn append_snapshot(
        &self,
        order_id: &OrderId,
        snapshot: ItemSnapshot,
    ) -> Result<(), OrderError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        // Row lock serializes concurrent appends to the same order; without
        // it, two decode-append-write sequences would race and the last
        // writer would silently drop the other's item.
        let row = sqlx::query(
            r#"
            SELECT items
            FROM orders
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(order_id.0)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        let row = row.ok_or(OrderError::NotFound(order_id.to_string()))?;
        let encoded: String = row.get("items");

        let mut snapshots = ItemSnapshots::decode(&encoded)?;
        snapshots.append(snapshot)?;

        sqlx::query(
            r#"
            UPDATE orders
            SET items = $2
            WHERE id = $1
            "#,
        )
        .bind(order_id.0)
        .bind(snapshots.encode()?)
        .execute(&mut *tx)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &OrderId) -> Result<(), OrderError> {
        let result = sqlx::query(
            r#"
            DELETE FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(OrderError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
