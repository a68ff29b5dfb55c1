//! Equipment, alert, announcement, and clinical load endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/equipment` | `?status` |
//! | `GET`  | `/alerts/intelligent` | Unresolved alerts, most severe first |
//! | `POST` | `/alerts/{id}/acknowledge` | Body: `{"by":"..."}`; 409 if already acknowledged |
//! | `POST` | `/alerts/{id}/resolve` | Body: `{"by":"...","notes":"..."}`; 409 if already resolved |
//! | `GET`  | `/announcements` | Currently effective, highest priority first |
//! | `GET`  | `/clinical/load` | `?limit`, default 7 days |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use wardwatch_core::{
  enums::EquipmentStatus,
  store::{OpsStore, Page},
};

use crate::error::ApiError;

// ─── Equipment ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EquipmentParams {
  pub status: Option<EquipmentStatus>,
}

/// `GET /equipment[?status=...]`
pub async fn equipment<S: OpsStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<EquipmentParams>,
) -> Result<Json<Value>, ApiError> {
  let equipment = store
    .list_equipment(params.status)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "equipment": equipment })))
}

// ─── Alerts ───────────────────────────────────────────────────────────────────

/// `GET /alerts/intelligent`
pub async fn alerts<S: OpsStore>(State(store): State<Arc<S>>) -> Result<Json<Value>, ApiError> {
  let alerts = store.active_alerts().await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "alerts": alerts })))
}

#[derive(Debug, Deserialize)]
pub struct AcknowledgeBody {
  pub by: String,
}

#[derive(Debug, Deserialize)]
pub struct ResolveBody {
  pub by:    String,
  pub notes: Option<String>,
}

fn author(by: String) -> Result<String, ApiError> {
  let by = by.trim();
  if by.is_empty() {
    return Err(wardwatch_core::Error::Blank("by").into());
  }
  Ok(by.to_owned())
}

/// `POST /alerts/{id}/acknowledge`
pub async fn acknowledge<S: OpsStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<AcknowledgeBody>,
) -> Result<Json<Value>, ApiError> {
  let alert = store
    .acknowledge_alert(id, author(body.by)?)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "alert": alert })))
}

/// `POST /alerts/{id}/resolve`
pub async fn resolve<S: OpsStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<ResolveBody>,
) -> Result<Json<Value>, ApiError> {
  let alert = store
    .resolve_alert(id, author(body.by)?, body.notes)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "alert": alert })))
}

// ─── Announcements & load ─────────────────────────────────────────────────────

/// `GET /announcements`
pub async fn announcements<S: OpsStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Value>, ApiError> {
  let announcements = store
    .active_announcements(Utc::now().naive_utc())
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "announcements": announcements })))
}

#[derive(Debug, Deserialize)]
pub struct LoadParams {
  pub limit: Option<u32>,
}

/// `GET /clinical/load[?limit=N]`
pub async fn clinical_load<S: OpsStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<LoadParams>,
) -> Result<Json<Value>, ApiError> {
  let limit = params.limit.unwrap_or(7).min(Page::MAX_LIMIT);
  let load = store.clinical_load(limit).await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "clinical_load": load })))
}
