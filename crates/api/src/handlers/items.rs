//! Handlers for items (posts and nested replies).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use newswire_core::error::CoreError;
use newswire_core::policy::ItemDeletePolicy;
use newswire_core::validate::{parse_date_range, validate_title, validate_username};
use newswire_db::models::item::{CreateItem, ItemWithChildren, UpdateItem};
use newswire_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::query::DateRangeParams;
use crate::state::AppState;

/// GET /items/{id}
///
/// Get a single item by ID, with its direct children embedded.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let item = ItemRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item" }))?;

    let children = ItemRepo::list_children(&state.pool, &item.id).await?;

    Ok(Json(ItemWithChildren { item, children }))
}

/// GET /items
///
/// List all items.
pub async fn list_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ItemRepo::list(&state.pool).await?;
    Ok(Json(items))
}

/// GET /items/date?startDate=&endDate=
///
/// List items created within the inclusive date window. Both bounds are
/// required; a missing bound is a 400.
pub async fn list_items_by_date(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    let (start, end) =
        parse_date_range(params.start_date.as_deref(), params.end_date.as_deref())
            .map_err(AppError::BadRequest)?;

    let items = ItemRepo::list_by_created_range(&state.pool, start, end).await?;
    Ok(Json(items))
}

/// POST /items
///
/// Create a new item. `createdAt` is server-assigned; the author's karma
/// is incremented in the same transaction as the insert.
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<impl IntoResponse> {
    validate_username(&input.author).map_err(AppError::BadRequest)?;
    validate_title(&input.title).map_err(AppError::BadRequest)?;

    let item = ItemRepo::create(&state.pool, &input).await?;

    tracing::info!(item_id = %item.id, author = %item.author, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /items/{id}
///
/// Update an item. Only fields present in the body are applied.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateItem>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref author) = input.author {
        validate_username(author).map_err(AppError::BadRequest)?;
    }
    if let Some(ref title) = input.title {
        validate_title(title).map_err(AppError::BadRequest)?;
    }

    let item = ItemRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item" }))?;

    tracing::info!(item_id = %id, "Item updated");

    Ok(Json(item))
}

/// DELETE /items/{id}
///
/// Delete an item. What happens to its children and comments is governed
/// by the configured delete policy.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = match state.config.item_delete_policy {
        ItemDeletePolicy::Orphan => ItemRepo::delete(&state.pool, &id).await?,
        ItemDeletePolicy::Cascade => ItemRepo::delete_cascade(&state.pool, &id).await?,
        ItemDeletePolicy::Reject => {
            if ItemRepo::has_dependents(&state.pool, &id).await? {
                return Err(AppError::Core(CoreError::Conflict(
                    "Item has children or comments".to_string(),
                )));
            }
            ItemRepo::delete(&state.pool, &id).await?
        }
    };

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Item" }));
    }

    tracing::info!(
        item_id = %id,
        policy = state.config.item_delete_policy.as_str(),
        "Item deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
