//! Domain layer for the newswire board API.
//!
//! Framework-free types shared by the `db` and `api` crates: the error
//! taxonomy, common type aliases, input validation, and the item delete
//! policy.

pub mod error;
pub mod policy;
pub mod types;
pub mod validate;
