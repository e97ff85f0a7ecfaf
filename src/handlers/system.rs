// handlers/system.rs - Service metadata and health

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::app::AppState;

/// GET / - Service name, version and endpoint overview
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Inventory API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/auth/register, /auth/login, /auth/verify",
            "dashboard": "/dashboard/ (token)",
            "catalog": "/inventory/product[/:id], /inventory/item[/:id], /inventory/vendor[/:id]",
            "purchases": "/inventory/purchaseItems[/:id], /inventory/purchaseProducts[/:id]",
        }
    }))
}

/// GET /health - 200 when the store answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
