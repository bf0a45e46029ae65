//! Route definitions for the search log.
//!
//! Mounted at `/searches` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::searches;
use crate::state::AppState;

/// Search log routes.
///
/// ```text
/// GET    /        -> list_searches
/// POST   /        -> create_search
/// GET    /{id}    -> get_search
/// PUT    /{id}    -> update_search
/// DELETE /{id}    -> delete_search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(searches::list_searches).post(searches::create_search),
        )
        .route(
            "/{id}",
            get(searches::get_search)
                .put(searches::update_search)
                .delete(searches::delete_search),
        )
}
