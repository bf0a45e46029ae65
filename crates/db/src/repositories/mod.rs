//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-statement writes
//! (comment + karma, cascade delete) run inside a single transaction.

pub mod comment_repo;
pub mod item_repo;
pub mod search_repo;
pub mod user_repo;

pub use comment_repo::CommentRepo;
pub use item_repo::ItemRepo;
pub use search_repo::SearchRepo;
pub use user_repo::UserRepo;
