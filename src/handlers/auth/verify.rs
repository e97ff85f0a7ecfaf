// handlers/auth/verify.rs - GET /auth/verify handler

use axum::{extract::State, http::HeaderMap, Json};

use crate::app::AppState;
use crate::middleware::auth::extract_token;

/// GET /auth/verify - `true` when the request carries a valid session token
///
/// The frontend calls this on load to decide whether to show the login page,
/// so it always answers 200 and never rejects.
pub async fn verify_get(State(state): State<AppState>, headers: HeaderMap) -> Json<bool> {
    let valid = extract_token(&headers)
        .map(|token| state.tokens.verify(&token).is_ok())
        .unwrap_or(false);

    Json(valid)
}
