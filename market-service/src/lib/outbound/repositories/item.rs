use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::Stock;
use crate::domain::item::ports::ItemRepository;
use crate::domain::user::models::UserId;

pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_item(row: &PgRow) -> Result<Item, ItemError> {
        Ok(Item {
            id: ItemId(row.get("id")),
            name: row.get("name"),
            category: row.get("category"),
            description: row.get("description"),
            stock: Stock::new(row.get("stock"))?,
            image: row.get("image"),
            rating: row.get("rating"),
            reviews: row.get("reviews"),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, item: Item) -> Result<Item, ItemError> {
        sqlx::query(
            r#"
            INSERT INTO items (id, name, category, description, stock, image, rating, reviews, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(item.id.0)
        .bind(&item.name)
        .bind(&item.category)
        .bind(&item.description)
        .bind(item.stock.count())
        .bind(&item.image)
        .bind(item.rating)
        .bind(&item.reviews)
        .bind(item.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        Ok(item)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, category, description, stock, image, rating, reviews, created_at
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_item).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Item>, ItemError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, category, description, stock, image, rating, reviews, created_at
            FROM items
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Item>, ItemError> {
        let rows = sqlx::query(
            r#"
            SELECT i.id, i.name, i.category, i.description, i.stock, i.image, i.rating, i.reviews, i.created_at
            FROM items i
            JOIN user_items ui ON ui.item_id = i.id
            WHERE ui.user_id = $1
            ORDER BY i.created_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Item>, ItemError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, category, description, stock, image, rating, reviews, created_at
            FROM items
            WHERE category = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn update(&self, item: Item) -> Result<Item, ItemError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, category = $3, description = $4, stock = $5, rating = $6, reviews = $7
            WHERE id = $1
            "#,
        )
        .bind(item.id.0)
        .bind(&item.name)
        .bind(&item.category)
        .bind(&item.description)
        .bind(item.stock.count())
        .bind(item.rating)
        .bind(&item.reviews)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(item.id.to_string()));
        }

        Ok(item)
    }

    async fn delete(&self, id: &ItemId) -> Result<(), ItemError> {
        let result = sqlx::query(
            r#"
            DELETE FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn link_to_user(&self, user_id: &UserId, item_id: &ItemId) -> Result<(), ItemError> {
        sqlx::query(
            r#"
            INSERT INTO user_items (user_id, item_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id.0)
        .bind(item_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return ItemError::AlreadyAdded {
                        user_id: user_id.to_string(),
                        item_id: item_id.to_string(),
                    };
                }
            }
            ItemError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
