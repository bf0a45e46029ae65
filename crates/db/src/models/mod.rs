//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Wire names are camelCase (`createdAt`, `parentId`, `itemId`), matching
//! the board's original JSON contract.

pub mod comment;
pub mod item;
pub mod search;
pub mod user;
