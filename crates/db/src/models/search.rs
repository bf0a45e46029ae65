//! Search log entity model and DTOs.
//!
//! A search row is an audit record of a query and its reported result
//! metadata, not a live search index. Unlike items and users, `created_at`
//! is caller-supplied: the row records a historical event. Handlers parse
//! and validate the incoming date string before it reaches the repository.

use newswire_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `searches` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Search {
    pub id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub points: i64,
    pub num_comments: i64,
    pub created_at: Timestamp,
    pub query: String,
    pub hits_per_page: i64,
    pub page: i64,
}

/// DTO for creating a search record. `created_at` arrives as a string and
/// is parsed at the handler boundary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSearch {
    pub title: String,
    pub url: String,
    pub author: String,
    pub points: i64,
    pub num_comments: i64,
    pub created_at: String,
    pub query: String,
    pub hits_per_page: i64,
    pub page: i64,
}

/// DTO for updating a search record. All fields optional; `created_at`
/// is parsed at the handler boundary when present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSearch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub author: Option<String>,
    pub points: Option<i64>,
    pub num_comments: Option<i64>,
    pub created_at: Option<String>,
    pub query: Option<String>,
    pub hits_per_page: Option<i64>,
    pub page: Option<i64>,
}
