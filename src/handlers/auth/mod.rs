// handlers/auth/mod.rs - Token acquisition and verification
//
// POST /auth/register and POST /auth/login sit behind the credential validator,
// so their handlers can rely on the required fields being present.

use serde::Serialize;

use crate::auth::password::PasswordError;
use crate::error::ApiError;

pub mod login;
pub mod register;
pub mod verify;

pub use login::login_post;
pub use register::register_post;
pub use verify::verify_get;

/// Body returned by a successful register or login; the frontend reads `jwtToken`
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    #[serde(rename = "jwtToken")]
    pub token: String,
}

/// Runs a CPU-heavy password operation off the async workers
async fn blocking<T, F>(op: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, PasswordError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| {
            tracing::error!("Password task panicked: {}", e);
            ApiError::internal()
        })?
        .map_err(ApiError::from)
}
