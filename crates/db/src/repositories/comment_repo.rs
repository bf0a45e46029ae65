//! Repository for the `comments` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::comment::{Comment, CreateComment, UpdateComment};
use crate::repositories::UserRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, author, item_id, created_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment and bump the author's karma, all-or-nothing.
    ///
    /// Both writes run in one transaction: a comment never persists
    /// without its karma bump, and vice versa.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let query = format!(
            "INSERT INTO comments (id, text, author, item_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(&id)
            .bind(&input.text)
            .bind(&input.author)
            .bind(&input.item_id)
            .fetch_one(&mut *tx)
            .await?;
        UserRepo::increment_karma(&mut *tx, &input.author).await?;
        tx.commit().await?;

        Ok(comment)
    }

    /// Find a comment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all comments ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments ORDER BY created_at DESC");
        sqlx::query_as::<_, Comment>(&query).fetch_all(pool).await
    }

    /// Update a comment's text (the only mutable field).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET text = COALESCE($2, text)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(&input.text)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
