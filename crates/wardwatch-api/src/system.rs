//! Health, bootstrap, and dashboard endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/health` | Liveness; no store access |
//! | `GET`, `POST` | `/admin/init` | Re-run bootstrap with the sample data |
//! | `GET`  | `/debug/database` | Table and row counts |
//! | `GET`  | `/system` | Hospital configuration row |
//! | `GET`  | `/system/status` | Bed and staff headline numbers |
//! | `GET`  | `/system-overview`, `/dashboard/summary` | Census with occupancy |
//! | `GET`  | `/analytics/dashboard` | Census with occupancy |

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Utc;
use serde_json::{Value, json};
use wardwatch_core::{bootstrap::BootstrapOptions, store::OpsStore};

use crate::error::ApiError;

/// `GET /health`
pub async fn health() -> Json<Value> {
  Json(json!({
    "status":    "healthy",
    "timestamp": Utc::now(),
    "version":   env!("CARGO_PKG_VERSION"),
  }))
}

/// `GET|POST /admin/init`
///
/// Creates any missing tables and seeds an empty store regardless of the
/// server's start-up seeding setting.
pub async fn init<S: OpsStore>(State(store): State<Arc<S>>) -> Result<Json<Value>, ApiError> {
  tracing::info!("manual database initialisation requested");
  let options = BootstrapOptions {
    seed_sample_data: true,
    today:            Utc::now().date_naive(),
  };
  let outcome = store.bootstrap(options).await.map_err(ApiError::from_store)?;

  Ok(Json(json!({
    "success":     true,
    "message":     "Database initialization completed",
    "initialized": outcome.is_populated(),
    "outcome":     outcome,
    "timestamp":   Utc::now(),
  })))
}

/// `GET /debug/database`
pub async fn debug_database<S: OpsStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Value>, ApiError> {
  let status = store.database_status().await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "database_status": status })))
}

/// `GET /system`
pub async fn hospital<S: OpsStore>(State(store): State<Arc<S>>) -> Result<Json<Value>, ApiError> {
  let hospital = store
    .hospital_system()
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound("hospital system is not configured".into()))?;
  Ok(Json(json!({ "success": true, "hospital": hospital })))
}

/// `GET /system/status`
pub async fn status<S: OpsStore>(State(store): State<Arc<S>>) -> Result<Json<Value>, ApiError> {
  let census = store.census().await.map_err(ApiError::from_store)?;
  Ok(Json(json!({
    "success":         true,
    "status":          "operational",
    "system_health":   "healthy",
    "beds_available":  census.available_beds(),
    "beds_total":      census.total_beds,
    "staff_available": census.active_staff,
    "patients_active": census.occupied_beds,
    "last_updated":    Utc::now(),
  })))
}

/// `GET /system-overview` and `GET /dashboard/summary`
pub async fn overview<S: OpsStore>(State(store): State<Arc<S>>) -> Result<Json<Value>, ApiError> {
  let census = store.census().await.map_err(ApiError::from_store)?;
  Ok(Json(json!({
    "success": true,
    "overview": {
      "total_staff":    census.active_staff,
      "on_call_staff":  census.on_call_staff,
      "total_beds":     census.total_beds,
      "occupied_beds":  census.occupied_beds,
      "occupancy_rate": census.occupancy_rate(),
    },
    "timestamp":     Utc::now(),
    "system_health": "healthy",
  })))
}

/// `GET /analytics/dashboard`
pub async fn analytics<S: OpsStore>(State(store): State<Arc<S>>) -> Result<Json<Value>, ApiError> {
  let census = store.census().await.map_err(ApiError::from_store)?;
  Ok(Json(json!({
    "success": true,
    "analytics": {
      "occupancy_rate": census.occupancy_rate(),
      "on_call_staff":  census.on_call_staff,
      "total_beds":     census.total_beds,
      "occupied_beds":  census.occupied_beds,
    },
  })))
}
