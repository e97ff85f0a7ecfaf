// handlers/inventory/purchase_item.rs - CRUD over item purchase records

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::{json, Value};

use super::parse_id;
use crate::app::AppState;
use crate::database::models::{NewPurchaseItem, PurchaseItem};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

const NOT_FOUND: &str = "Purchase item not found";

fn not_found() -> ApiError {
    ApiError::not_found(NOT_FOUND)
}

/// POST /inventory/purchaseItems - Record an item purchase
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewPurchaseItem>, JsonRejection>,
) -> ApiResult<PurchaseItem> {
    let Json(record) = payload?;
    let row = state.store.insert_purchase_item(record).await?;
    Ok(ApiResponse::created(row))
}

/// GET /inventory/purchaseItems - List item purchases; none recorded is a 404
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<PurchaseItem>> {
    let rows = state.store.list_purchase_items().await?;
    if rows.is_empty() {
        return Err(not_found());
    }
    Ok(ApiResponse::success(rows))
}

/// GET /inventory/purchaseItems/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<PurchaseItem> {
    let id = parse_id(&id).ok_or_else(not_found)?;
    let row = state.store.get_purchase_item(id).await?.ok_or_else(not_found)?;
    Ok(ApiResponse::success(row))
}

/// PUT /inventory/purchaseItems/:id - Replace every field except the id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewPurchaseItem>, JsonRejection>,
) -> ApiResult<PurchaseItem> {
    let Json(record) = payload?;
    let id = parse_id(&id).ok_or_else(not_found)?;
    let row = state
        .store
        .update_purchase_item(id, record)
        .await?
        .ok_or_else(not_found)?;
    Ok(ApiResponse::success(row))
}

/// DELETE /inventory/purchaseItems/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let id = parse_id(&id).ok_or_else(not_found)?;
    state.store.delete_purchase_item(id).await?.ok_or_else(not_found)?;
    Ok(ApiResponse::success(
        json!({ "message": "Purchase item deleted successfully" }),
    ))
}
