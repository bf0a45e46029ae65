//! Comment entity model and DTOs.

use newswire_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table: a reply attached to one item.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: String,
    pub item_id: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new comment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub text: String,
    pub author: String,
    pub item_id: String,
}

/// DTO for updating a comment. Only the text is mutable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComment {
    pub text: Option<String>,
}
