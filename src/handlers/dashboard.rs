// handlers/dashboard.rs - GET /dashboard/ handler

use axum::{extract::State, Extension};
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user_name: String,
}

/// GET /dashboard/ - Greeting data for the signed-in user
pub async fn dashboard_get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<DashboardResponse> {
    let user = state
        .store
        .find_user_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::success(DashboardResponse {
        user_name: user.user_name,
    }))
}
