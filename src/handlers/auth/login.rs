// handlers/auth/login.rs - POST /auth/login handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use super::{blocking, TokenResponse};
use crate::app::AppState;
use crate::auth::password::verify_password;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// Same message for unknown email and wrong password
const BAD_CREDENTIALS: &str = "Password or Email is incorrect";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login - Exchange email and password for a session token
pub async fn login_post(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<TokenResponse> {
    let Json(request) = payload?;

    let Some(user) = state.store.find_user_by_email(&request.email).await? else {
        tracing::warn!("Login failed: unknown email");
        return Err(ApiError::unauthorized(BAD_CREDENTIALS));
    };

    let password = request.password;
    let stored_hash = user.user_password.clone();
    let matches = blocking(move || verify_password(&password, &stored_hash)).await?;

    if !matches {
        tracing::warn!("Login failed: wrong password for user {}", user.user_id);
        return Err(ApiError::unauthorized(BAD_CREDENTIALS));
    }

    let token = state.tokens.issue(user.user_id)?;
    Ok(ApiResponse::success(TokenResponse { token }))
}
