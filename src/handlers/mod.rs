pub mod inventory;
pub mod metrics;

use axum::{http::StatusCode, Json};
use serde_json::json;

pub async fn welcome() -> Json<serde_json::Value> {
    Json(json!({ "Welcome": "To Our Store" }))
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "store-inventory" })))
}
