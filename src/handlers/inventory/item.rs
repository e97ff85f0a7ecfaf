// handlers/inventory/item.rs - Create, list and fetch items

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::parse_id;
use crate::app::AppState;
use crate::database::models::{Item, NewItem};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

const NOT_FOUND: &str = "Item not found";

/// POST /inventory/item - Create an item
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> ApiResult<Item> {
    let Json(item) = payload?;
    let row = state.store.insert_item(item).await?;
    Ok(ApiResponse::created(row))
}

/// GET /inventory/item - List all items
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Item>> {
    Ok(ApiResponse::success(state.store.list_items().await?))
}

/// GET /inventory/item/:id - Get a single item
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Item> {
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    let row = state
        .store
        .get_item(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(ApiResponse::success(row))
}
