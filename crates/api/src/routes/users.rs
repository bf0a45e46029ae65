//! Route definitions for users.
//!
//! Mounted at `/users` by `api_routes()`. Users are keyed by username,
//! not a generated id.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes.
///
/// ```text
/// GET    /             -> list_users
/// POST   /             -> create_user
/// GET    /date         -> list_users_by_date (?startDate, endDate)
/// GET    /{username}   -> get_user
/// PUT    /{username}   -> update_user
/// DELETE /{username}   -> delete_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/date", get(users::list_users_by_date))
        .route(
            "/{username}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}
