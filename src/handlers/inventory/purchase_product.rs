// handlers/inventory/purchase_product.rs - CRUD over product purchase records

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::{json, Value};

use super::parse_id;
use crate::app::AppState;
use crate::database::models::{NewPurchaseProduct, PurchaseProduct};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

const NOT_FOUND: &str = "Purchase product not found";

fn not_found() -> ApiError {
    ApiError::not_found(NOT_FOUND)
}

/// POST /inventory/purchaseProducts - Record a product purchase
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewPurchaseProduct>, JsonRejection>,
) -> ApiResult<PurchaseProduct> {
    let Json(record) = payload?;
    let row = state.store.insert_purchase_product(record).await?;
    Ok(ApiResponse::created(row))
}

/// GET /inventory/purchaseProducts - List product purchases; none recorded is a 404
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<PurchaseProduct>> {
    let rows = state.store.list_purchase_products().await?;
    if rows.is_empty() {
        return Err(not_found());
    }
    Ok(ApiResponse::success(rows))
}

/// GET /inventory/purchaseProducts/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<PurchaseProduct> {
    let id = parse_id(&id).ok_or_else(not_found)?;
    let row = state.store.get_purchase_product(id).await?.ok_or_else(not_found)?;
    Ok(ApiResponse::success(row))
}

/// PUT /inventory/purchaseProducts/:id - Replace every field except the id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewPurchaseProduct>, JsonRejection>,
) -> ApiResult<PurchaseProduct> {
    let Json(record) = payload?;
    let id = parse_id(&id).ok_or_else(not_found)?;
    let row = state
        .store
        .update_purchase_product(id, record)
        .await?
        .ok_or_else(not_found)?;
    Ok(ApiResponse::success(row))
}

/// DELETE /inventory/purchaseProducts/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let id = parse_id(&id).ok_or_else(not_found)?;
    state.store.delete_purchase_product(id).await?.ok_or_else(not_found)?;
    Ok(ApiResponse::success(
        json!({ "message": "Purchase product deleted successfully" }),
    ))
}
