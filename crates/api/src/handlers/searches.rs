//! Handlers for the search log.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use newswire_core::error::CoreError;
use newswire_core::validate::parse_date;
use newswire_db::models::search::{CreateSearch, UpdateSearch};
use newswire_db::repositories::SearchRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /searches/{id}
///
/// Get a single search record by ID.
pub async fn get_search(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let search = SearchRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Search" }))?;

    Ok(Json(search))
}

/// GET /searches
///
/// List all search records.
pub async fn list_searches(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let searches = SearchRepo::list(&state.pool).await?;
    Ok(Json(searches))
}

/// POST /searches
///
/// Create a search record. `createdAt` is caller-supplied (the record
/// describes a historical event) and must parse as a date.
pub async fn create_search(
    State(state): State<AppState>,
    Json(input): Json<CreateSearch>,
) -> AppResult<impl IntoResponse> {
    let created_at = parse_date(&input.created_at).map_err(AppError::BadRequest)?;

    let search = SearchRepo::create(&state.pool, &input, created_at).await?;

    tracing::info!(search_id = %search.id, query = %search.query, "Search recorded");

    Ok((StatusCode::CREATED, Json(search)))
}

/// PUT /searches/{id}
///
/// Update a search record. Only fields present in the body are applied.
pub async fn update_search(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateSearch>,
) -> AppResult<impl IntoResponse> {
    let created_at = match input.created_at.as_deref() {
        Some(raw) => Some(parse_date(raw).map_err(AppError::BadRequest)?),
        None => None,
    };

    let search = SearchRepo::update(&state.pool, &id, &input, created_at)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Search" }))?;

    tracing::info!(search_id = %id, "Search updated");

    Ok(Json(search))
}

/// DELETE /searches/{id}
///
/// Delete a search record.
pub async fn delete_search(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = SearchRepo::delete(&state.pool, &id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Search" }));
    }

    tracing::info!(search_id = %id, "Search deleted");

    Ok(StatusCode::NO_CONTENT)
}
