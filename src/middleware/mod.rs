pub mod auth;
pub mod response;
pub mod validate_credentials;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use response::{ApiResponse, ApiResult};
pub use validate_credentials::validate_credentials_middleware;
