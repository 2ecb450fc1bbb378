//! In-memory store inventory served over HTTP.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod store;

use crate::config::Config;
use crate::error::AppError;
use crate::metrics::OperationLog;
use crate::store::{Inventory, InventoryError};

/// Handles to the inventory, the operation log and the loaded config.
/// Clones share the same inventory.
///
/// Every mutation holds the inventory write guard for its whole
/// check-then-act sequence, so requests never observe a half-applied change.
#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<RwLock<Inventory>>,
    pub metrics: Arc<RwLock<OperationLog>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            inventory: Arc::new(RwLock::new(Inventory::new())),
            metrics: Arc::new(RwLock::new(OperationLog::with_capacity(
                config.metrics_capacity,
            ))),
            config: Arc::new(config),
        }
    }

    async fn record(&self, operation: &'static str, elapsed: Duration, items_after: usize, ok: bool) {
        self.metrics
            .write()
            .await
            .record(operation, elapsed, items_after, ok);
    }

    /// Turns a store failure into the response error, reporting duplicates as
    /// 404 while legacy conflict status is enabled.
    fn reject(&self, err: InventoryError) -> AppError {
        match AppError::from(err) {
            AppError::Conflict(msg) if self.config.legacy_conflict_status => AppError::NotFound(msg),
            other => other,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))

        // ── Items ───────────────────────────────────────────────────────────
        .route("/get-item/:item_id", get(handlers::inventory::get_item))
        .route("/item-path/:item_id", get(handlers::inventory::item_path))
        .route("/get-by-name", get(handlers::inventory::get_by_name))
        .route("/create-item/:item_id", post(handlers::inventory::create_item))
        .route("/update-item/:item_id", put(handlers::inventory::update_item))
        .route("/delete-item", delete(handlers::inventory::delete_item))

        // ── Metrics ─────────────────────────────────────────────────────────
        .route(
            "/metrics",
            get(handlers::metrics::summary).delete(handlers::metrics::clear),
        )
        .route("/metrics/export/csv", get(handlers::metrics::export_csv))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
