//! Repository for the `searches` table.

use newswire_core::types::Timestamp;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::search::{CreateSearch, Search, UpdateSearch};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, url, author, points, num_comments, created_at, query, hits_per_page, page";

/// Provides CRUD operations for search log records.
pub struct SearchRepo;

impl SearchRepo {
    /// Insert a new search record, returning the created row.
    ///
    /// `created_at` is the caller-supplied event time, already parsed and
    /// validated at the handler boundary.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSearch,
        created_at: Timestamp,
    ) -> Result<Search, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let query = format!(
            "INSERT INTO searches
                (id, title, url, author, points, num_comments, created_at,
                 query, hits_per_page, page)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Search>(&query)
            .bind(&id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.author)
            .bind(input.points)
            .bind(input.num_comments)
            .bind(created_at)
            .bind(&input.query)
            .bind(input.hits_per_page)
            .bind(input.page)
            .fetch_one(pool)
            .await
    }

    /// Find a search record by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Search>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM searches WHERE id = $1");
        sqlx::query_as::<_, Search>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all search records ordered by most recent event first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Search>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM searches ORDER BY created_at DESC");
        sqlx::query_as::<_, Search>(&query).fetch_all(pool).await
    }

    /// Update a search record. Only non-`None` fields are applied;
    /// `created_at` is passed separately, pre-parsed by the handler.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateSearch,
        created_at: Option<Timestamp>,
    ) -> Result<Option<Search>, sqlx::Error> {
        let query = format!(
            "UPDATE searches SET
                title = COALESCE($2, title),
                url = COALESCE($3, url),
                author = COALESCE($4, author),
                points = COALESCE($5, points),
                num_comments = COALESCE($6, num_comments),
                created_at = COALESCE($7, created_at),
                query = COALESCE($8, query),
                hits_per_page = COALESCE($9, hits_per_page),
                page = COALESCE($10, page)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Search>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.author)
            .bind(input.points)
            .bind(input.num_comments)
            .bind(created_at)
            .bind(&input.query)
            .bind(input.hits_per_page)
            .bind(input.page)
            .fetch_optional(pool)
            .await
    }

    /// Delete a search record by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM searches WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
