// handlers/inventory/vendor.rs - Create, list and fetch vendors

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::parse_id;
use crate::app::AppState;
use crate::database::models::{NewVendor, Vendor};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

const NOT_FOUND: &str = "Vendor not found";

/// POST /inventory/vendor - Create a vendor
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewVendor>, JsonRejection>,
) -> ApiResult<Vendor> {
    let Json(vendor) = payload?;
    let row = state.store.insert_vendor(vendor).await?;
    Ok(ApiResponse::created(row))
}

/// GET /inventory/vendor - List all vendors
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Vendor>> {
    Ok(ApiResponse::success(state.store.list_vendors().await?))
}

/// GET /inventory/vendor/:id - Get a single vendor
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Vendor> {
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    let row = state
        .store
        .get_vendor(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(ApiResponse::success(row))
}
