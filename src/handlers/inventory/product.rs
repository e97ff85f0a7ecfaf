// handlers/inventory/product.rs - Create, list and fetch products

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::parse_id;
use crate::app::AppState;
use crate::database::models::{NewProduct, Product};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

const NOT_FOUND: &str = "Product not found";

/// POST /inventory/product - Create a product
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<Product> {
    let Json(product) = payload?;
    let row = state.store.insert_product(product).await?;
    Ok(ApiResponse::created(row))
}

/// GET /inventory/product - List all products
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    Ok(ApiResponse::success(state.store.list_products().await?))
}

/// GET /inventory/product/:id - Get a single product
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Product> {
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    let row = state
        .store
        .get_product(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(ApiResponse::success(row))
}
