//! Route definitions for comments.
//!
//! Mounted at `/comments` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Comment routes.
///
/// ```text
/// GET    /        -> list_comments
/// POST   /        -> create_comment
/// GET    /{id}    -> get_comment
/// PUT    /{id}    -> update_comment (text only)
/// DELETE /{id}    -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/{id}",
            get(comments::get_comment)
                .put(comments::update_comment)
                .delete(comments::delete_comment),
        )
}
