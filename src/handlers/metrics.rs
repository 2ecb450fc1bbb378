use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// `GET /metrics`
pub async fn summary(State(state): State<AppState>) -> Json<Value> {
    let log = state.metrics.read().await;

    Json(json!({
        "retained": log.len(),
        "capacity": log.capacity(),
        "operations": log.counts(),
    }))
}

/// `GET /metrics/export/csv`
pub async fn export_csv(State(state): State<AppState>) -> AppResult<Response> {
    let csv = state.metrics.read().await.to_csv()?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"inventory_operations.csv\"",
        )
        .body(Body::from(csv))
        .map_err(|err| AppError::Internal(err.into()))
}

/// `DELETE /metrics`
pub async fn clear(State(state): State<AppState>) -> Json<Value> {
    let cleared = state.metrics.write().await.clear();
    tracing::info!(cleared, "Cleared operation log");
    Json(json!({ "cleared": cleared }))
}
