//! Handlers for `/units` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/units` | Active units; `?include_inactive=true` for all |
//! | `GET`  | `/units/{id}` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use wardwatch_core::store::OpsStore;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub include_inactive: bool,
}

/// `GET /units[?include_inactive=true]`
pub async fn list<S: OpsStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
  let units = store
    .list_units(!params.include_inactive)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "units": units })))
}

/// `GET /units/{id}`
pub async fn get_one<S: OpsStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
  let unit = store
    .get_unit(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or(wardwatch_core::Error::UnitNotFound(id))?;
  Ok(Json(json!({ "success": true, "unit": unit })))
}
