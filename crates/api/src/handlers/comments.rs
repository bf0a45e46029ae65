//! Handlers for comments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use newswire_core::error::CoreError;
use newswire_core::validate::{validate_text, validate_username};
use newswire_db::models::comment::{CreateComment, UpdateComment};
use newswire_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /comments/{id}
///
/// Get a single comment by ID.
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Comment" }))?;

    Ok(Json(comment))
}

/// GET /comments
///
/// List all comments.
pub async fn list_comments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let comments = CommentRepo::list(&state.pool).await?;
    Ok(Json(comments))
}

/// POST /comments
///
/// Create a new comment. The insert and the author's karma increment run
/// in one transaction, so the two writes are all-or-nothing.
pub async fn create_comment(
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    validate_text(&input.text).map_err(AppError::BadRequest)?;
    validate_username(&input.author).map_err(AppError::BadRequest)?;
    if input.item_id.is_empty() {
        return Err(AppError::BadRequest("Item id cannot be empty".to_string()));
    }

    let comment = CommentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        comment_id = %comment.id,
        author = %comment.author,
        item_id = %comment.item_id,
        "Comment created"
    );

    Ok((StatusCode::CREATED, Json(comment)))
}

/// PUT /comments/{id}
///
/// Update a comment. Only the text is mutable.
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateComment>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref text) = input.text {
        validate_text(text).map_err(AppError::BadRequest)?;
    }

    let comment = CommentRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Comment" }))?;

    tracing::info!(comment_id = %id, "Comment updated");

    Ok(Json(comment))
}

/// DELETE /comments/{id}
///
/// Delete a comment. The author's karma is not decremented.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = CommentRepo::delete(&state.pool, &id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Comment" }));
    }

    tracing::info!(comment_id = %id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}
