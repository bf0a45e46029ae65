//! Route definitions for items.
//!
//! Mounted at `/items` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes.
///
/// ```text
/// GET    /           -> list_items
/// POST   /           -> create_item
/// GET    /date       -> list_items_by_date (?startDate, endDate)
/// GET    /{id}       -> get_item (with children)
/// PUT    /{id}       -> update_item
/// DELETE /{id}       -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route("/date", get(items::list_items_by_date))
        .route(
            "/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
}
