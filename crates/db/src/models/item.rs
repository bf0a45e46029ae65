//! Item entity model and DTOs.
//!
//! An item is a top-level post or a nested reply (via `parent_id`). The
//! parent/child nesting is separate from the comment mechanism.

use newswire_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub author: String,
    pub title: String,
    pub url: Option<String>,
    pub text: Option<String>,
    pub points: i64,
    pub parent_id: Option<String>,
    pub created_at: Timestamp,
}

/// An item together with its direct children, returned by get-one.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemWithChildren {
    #[serde(flatten)]
    pub item: Item,
    pub children: Vec<Item>,
}

/// DTO for creating a new item. `created_at` is server-assigned.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub author: String,
    pub title: String,
    pub url: Option<String>,
    pub text: Option<String>,
    pub points: Option<i64>,
    pub parent_id: Option<String>,
}

/// DTO for updating an item. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub author: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub text: Option<String>,
    pub points: Option<i64>,
    pub parent_id: Option<String>,
}
