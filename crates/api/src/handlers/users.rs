//! Handlers for users.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use newswire_core::error::CoreError;
use newswire_core::validate::{parse_date_range, validate_username};
use newswire_db::models::user::{CreateUser, UpdateUser};
use newswire_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::query::DateRangeParams;
use crate::state::AppState;

/// GET /users/{username}
///
/// Get a single user by username.
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User" }))?;

    Ok(Json(user))
}

/// GET /users
///
/// List all users.
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /users/date?startDate=&endDate=
///
/// List users created within the inclusive date window.
pub async fn list_users_by_date(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    let (start, end) =
        parse_date_range(params.start_date.as_deref(), params.end_date.as_deref())
            .map_err(AppError::BadRequest)?;

    let users = UserRepo::list_by_created_range(&state.pool, start, end).await?;
    Ok(Json(users))
}

/// POST /users
///
/// Create a new user. A duplicate username is a 409.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    validate_username(&input.username).map_err(AppError::BadRequest)?;

    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(username = %user.username, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/{username}
///
/// Update a user's `about` text or karma.
pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::update(&state.pool, &username, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User" }))?;

    tracing::info!(username = %username, "User updated");

    Ok(Json(user))
}

/// DELETE /users/{username}
///
/// Delete a user. Content authored by the user is left in place.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = UserRepo::delete(&state.pool, &username).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User" }));
    }

    tracing::info!(username = %username, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
