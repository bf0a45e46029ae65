//! User entity model and DTOs.

use newswire_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table. Keyed by `username`, not a generated id.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub about: Option<String>,
    /// Reputation counter, incremented by content creation. Never
    /// decremented by board operations.
    pub karma: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub username: String,
    pub about: Option<String>,
    pub karma: Option<i64>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub about: Option<String>,
    pub karma: Option<i64>,
}
