use std::time::Instant;

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::{
    error::AppResult,
    extract::{positive_id, ItemJson, ItemPath, ItemQuery},
    models::{DeleteQuery, Item, NameQuery, UpdateItem},
    AppState,
};

// ── Get by ID ─────────────────────────────────────────────────────────────────

/// `GET /get-item/:item_id`
pub async fn get_item(
    State(state): State<AppState>,
    ItemPath(id): ItemPath<i64>,
) -> AppResult<Json<Item>> {
    lookup(&state, id).await
}

/// `GET /item-path/:item_id`, same lookup with `item_id > 0` checked first.
pub async fn item_path(
    State(state): State<AppState>,
    ItemPath(id): ItemPath<i64>,
) -> AppResult<Json<Item>> {
    lookup(&state, positive_id(id)?).await
}

async fn lookup(state: &AppState, id: i64) -> AppResult<Json<Item>> {
    let start = Instant::now();
    let inventory = state.inventory.read().await;
    let result = inventory.get(id).cloned();
    let count = inventory.len();
    drop(inventory);

    state.record("get", start.elapsed(), count, result.is_ok()).await;

    let item = result?;
    debug!(id, "Fetched item");
    Ok(Json(item))
}

// ── Get by name ───────────────────────────────────────────────────────────────

pub async fn get_by_name(
    State(state): State<AppState>,
    ItemQuery(query): ItemQuery<NameQuery>,
) -> AppResult<Json<Item>> {
    let start = Instant::now();
    let inventory = state.inventory.read().await;
    let result = inventory.find_by_name(query.name.as_deref()).cloned();
    let count = inventory.len();
    drop(inventory);

    state
        .record("get_by_name", start.elapsed(), count, result.is_ok())
        .await;

    let item = result?;
    debug!(name = %item.name, "Fetched item by name");
    Ok(Json(item))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    ItemPath(id): ItemPath<i64>,
    ItemJson(payload): ItemJson<Item>,
) -> AppResult<Json<Item>> {
    let id = positive_id(id)?;

    let start = Instant::now();
    let mut inventory = state.inventory.write().await;
    let result = inventory.insert(id, payload).cloned();
    let count = inventory.len();
    drop(inventory);

    state
        .record("create", start.elapsed(), count, result.is_ok())
        .await;

    let item = result.map_err(|err| state.reject(err))?;
    info!(id, name = %item.name, "Created item");
    Ok(Json(item))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_item(
    State(state): State<AppState>,
    ItemPath(id): ItemPath<i64>,
    ItemJson(patch): ItemJson<UpdateItem>,
) -> AppResult<Json<Item>> {
    let start = Instant::now();
    let mut inventory = state.inventory.write().await;
    let result = inventory.update(id, &patch).cloned();
    let count = inventory.len();
    drop(inventory);

    state
        .record("update", start.elapsed(), count, result.is_ok())
        .await;

    let item = result?;
    info!(id, name = %item.name, "Updated item");
    Ok(Json(item))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    ItemQuery(query): ItemQuery<DeleteQuery>,
) -> AppResult<Json<Value>> {
    let id = positive_id(query.item_id)?;

    let start = Instant::now();
    let mut inventory = state.inventory.write().await;
    let result = inventory.remove(id);
    let count = inventory.len();
    drop(inventory);

    state
        .record("delete", start.elapsed(), count, result.is_ok())
        .await;

    let removed = result?;
    info!(id, name = %removed.name, "Deleted item");
    Ok(Json(json!({ "Done": "Item Deleted" })))
}
