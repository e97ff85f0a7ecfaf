// handlers/auth/register.rs - POST /auth/register handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use super::{blocking, TokenResponse};
use crate::app::AppState;
use crate::auth::password::hash_password;
use crate::database::{models::NewUser, StoreError};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

const USER_EXISTS: &str = "User already exists";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// POST /auth/register - Create an account and hand back a session token
///
/// 409 when the email is already registered. The duplicate check runs before
/// hashing; a concurrent insert of the same email still ends in 409 through the
/// unique constraint.
pub async fn register_post(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<TokenResponse> {
    let Json(request) = payload?;

    if state.store.find_user_by_email(&request.email).await?.is_some() {
        return Err(ApiError::conflict(USER_EXISTS));
    }

    let password = request.password;
    let password_hash = blocking(move || hash_password(&password)).await?;

    let user = state
        .store
        .insert_user(NewUser {
            name: request.name,
            email: request.email,
            password_hash,
        })
        .await
        .map_err(insert_error)?;

    tracing::info!("Registered user {}", user.user_id);

    let token = state.tokens.issue(user.user_id)?;
    Ok(ApiResponse::success(TokenResponse { token }))
}

/// The only unique constraint on `users` is the email
fn insert_error(err: StoreError) -> ApiError {
    match err {
        StoreError::UniqueViolation(msg) => {
            tracing::warn!("Registration raced on email: {}", msg);
            ApiError::conflict(USER_EXISTS)
        }
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn duplicate_email_on_insert_is_user_exists() {
        let err = insert_error(StoreError::UniqueViolation("users_user_email_key".into()));
        assert_eq!(err, ApiError::conflict("User already exists"));
    }

    #[test]
    fn other_insert_failures_stay_internal() {
        let err = insert_error(StoreError::Unavailable("pool closed".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
