//! Repository for the `items` table.

use newswire_core::types::Timestamp;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::item::{CreateItem, Item, UpdateItem};
use crate::repositories::UserRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author, title, url, text, points, parent_id, created_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item and bump the author's karma, all-or-nothing.
    ///
    /// `created_at` is server-assigned. The author is not validated to
    /// exist; if there is no matching user row the karma bump is a no-op.
    pub async fn create(pool: &PgPool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let query = format!(
            "INSERT INTO items (id, author, title, url, text, points, parent_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(&id)
            .bind(&input.author)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.text)
            .bind(input.points.unwrap_or(0))
            .bind(&input.parent_id)
            .fetch_one(&mut *tx)
            .await?;
        UserRepo::increment_karma(&mut *tx, &input.author).await?;
        tx.commit().await?;

        Ok(item)
    }

    /// Find an item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the direct children of an item (items whose `parent_id` is
    /// this id), oldest first.
    pub async fn list_children(pool: &PgPool, parent_id: &str) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items WHERE parent_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// List all items ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY created_at DESC");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// List items created within the inclusive `[start, end]` window.
    pub async fn list_by_created_range(
        pool: &PgPool,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items
             WHERE created_at >= $1 AND created_at <= $2
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                author = COALESCE($2, author),
                title = COALESCE($3, title),
                url = COALESCE($4, url),
                text = COALESCE($5, text),
                points = COALESCE($6, points),
                parent_id = COALESCE($7, parent_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.author)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.text)
            .bind(input.points)
            .bind(&input.parent_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item, leaving any children and comments in place.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an item together with its direct children and its comments,
    /// in one transaction. Returns `true` if the item itself existed.
    pub async fn delete_cascade(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM comments WHERE item_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM items WHERE parent_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the item has any children or comments attached.
    pub async fn has_dependents(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM items WHERE parent_id = $1)
                 OR EXISTS(SELECT 1 FROM comments WHERE item_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
