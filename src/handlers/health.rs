use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Plain liveness text served at the root path.
pub async fn root() -> &'static str {
    "Backend is running."
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Rental API is healthy"
    }))
}
