//! Handlers for `/beds` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/enhanced-beds`, `/beds` | `?status`, `?room_code`, `?limit`, `?offset` |
//! | `GET`  | `/beds/board` | Beds joined with patient and attending doctor |
//! | `GET`  | `/beds/{id}` | 404 if not found |
//! | `POST` | `/beds/{id}/status` | Body: [`BedStatusChange`]; appends to the audit trail |
//! | `GET`  | `/beds/{id}/audit` | Newest first; `?limit`, `?offset` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use wardwatch_core::{
  bed::BedStatusChange,
  enums::BedStatus,
  store::{BedQuery, OpsStore, Page},
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub status:    Option<BedStatus>,
  pub room_code: Option<String>,
  pub limit:     Option<u32>,
  pub offset:    Option<u32>,
}

/// `GET /enhanced-beds` and `GET /beds`
pub async fn list<S: OpsStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
  let query = BedQuery {
    status:    params.status,
    room_code: params.room_code,
    page:      Page { limit: params.limit, offset: params.offset },
  };
  let beds = store.list_beds(query).await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "beds": beds })))
}

/// `GET /beds/board`
pub async fn board<S: OpsStore>(State(store): State<Arc<S>>) -> Result<Json<Value>, ApiError> {
  let beds = store.bed_board().await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "beds": beds })))
}

// ─── Single bed ───────────────────────────────────────────────────────────────

/// `GET /beds/{id}`
pub async fn get_one<S: OpsStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
  let bed = store
    .get_bed(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or(wardwatch_core::Error::BedNotFound(id))?;
  Ok(Json(json!({ "success": true, "bed": bed })))
}

/// `POST /beds/{id}/status`
pub async fn update_status<S: OpsStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(change): Json<BedStatusChange>,
) -> Result<Json<Value>, ApiError> {
  let bed = store
    .update_bed_status(id, change)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "bed": bed })))
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
  pub limit:  Option<u32>,
  pub offset: Option<u32>,
}

/// `GET /beds/{id}/audit`
///
/// An unknown bed is a 404 rather than an empty trail.
pub async fn audit<S: OpsStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Query(params): Query<PageParams>,
) -> Result<Json<Value>, ApiError> {
  store
    .get_bed(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or(wardwatch_core::Error::BedNotFound(id))?;

  let page = Page { limit: params.limit, offset: params.offset };
  let audit = store
    .bed_audit_trail(id, page)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "audit": audit })))
}
