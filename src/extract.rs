//! Extractors whose rejections surface as 422 `{"detail": ...}` bodies
//! instead of axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::{AppError, AppResult};

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ItemPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ItemQuery<T>(pub T);

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ItemJson<T>(pub T);

/// Enforces the `id > 0` constraint some endpoints declare.
pub fn positive_id(id: i64) -> AppResult<i64> {
    if id > 0 {
        Ok(id)
    } else {
        Err(AppError::Validation(format!(
            "item_id: Input should be greater than 0, got {id}"
        )))
    }
}
