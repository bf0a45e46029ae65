pub mod comments;
pub mod health;
pub mod items;
pub mod searches;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                    list, create
/// /items/date               date-window list (?startDate, endDate)
/// /items/{id}               get (with children), update, delete
///
/// /users                    list, create
/// /users/date               date-window list (?startDate, endDate)
/// /users/{username}         get, update, delete
///
/// /comments                 list, create (bumps author karma)
/// /comments/{id}            get, update (text only), delete
///
/// /searches                 list, create (caller-supplied createdAt)
/// /searches/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", items::router())
        .nest("/users", users::router())
        .nest("/comments", comments::router())
        .nest("/searches", searches::router())
}
