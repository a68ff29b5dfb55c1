//! Handlers for staff and absence endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/medical-staff`, `/staff` | `?unit_id`, `?on_call`, `?limit`, `?offset` |
//! | `GET`  | `/staff/availability` | Status and on-call flag per active staff member |
//! | `GET`  | `/absence/requests` | `?status=pending\|approved\|rejected\|cancelled` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use wardwatch_core::{
  enums::RequestStatus,
  store::{OpsStore, Page, StaffQuery},
};

use crate::error::ApiError;

// ─── Staff ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub unit_id: Option<i64>,
  pub on_call: Option<bool>,
  pub limit:   Option<u32>,
  pub offset:  Option<u32>,
}

/// `GET /medical-staff` and `GET /staff`
pub async fn list<S: OpsStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
  let query = StaffQuery {
    unit_id: params.unit_id,
    on_call: params.on_call,
    page:    Page { limit: params.limit, offset: params.offset },
  };
  let staff = store.list_staff(query).await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "staff": staff })))
}

/// `GET /staff/availability`
pub async fn availability<S: OpsStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Value>, ApiError> {
  let availability = store.staff_availability().await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "availability": availability })))
}

// ─── Absences ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusParams {
  pub status: Option<RequestStatus>,
}

/// `GET /absence/requests[?status=<status>]`
pub async fn absences<S: OpsStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<StatusParams>,
) -> Result<Json<Value>, ApiError> {
  let absences = store
    .list_absences(params.status)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "absences": absences })))
}
