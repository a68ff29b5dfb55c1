//! Handlers for guardia schedules and coverage.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/guardia/schedule` | `?date=YYYY-MM-DD`, `?unit_id` |
//! | `GET`  | `/guardia/swaps` | `?status` |
//! | `GET`  | `/coverage/rules` | `?unit_id` |
//! | `GET`  | `/coverage` | `?date`, defaults to today; each rule with `met` and `gaps` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use wardwatch_core::{
  schedule::{CoverageGap, CoverageStatus},
  store::{OpsStore, ScheduleQuery},
};

use crate::{error::ApiError, staff::StatusParams};

// ─── Schedules ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScheduleParams {
  pub date:    Option<NaiveDate>,
  pub unit_id: Option<i64>,
}

/// `GET /guardia/schedule[?date=...][&unit_id=...]`
pub async fn list<S: OpsStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<ScheduleParams>,
) -> Result<Json<Value>, ApiError> {
  let query = ScheduleQuery { date: params.date, unit_id: params.unit_id };
  let schedules = store.list_schedules(query).await.map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "schedules": schedules })))
}

/// `GET /guardia/swaps[?status=...]`
pub async fn swaps<S: OpsStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<StatusParams>,
) -> Result<Json<Value>, ApiError> {
  let swaps = store
    .list_swap_requests(params.status)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "swaps": swaps })))
}

// ─── Coverage ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RuleParams {
  pub unit_id: Option<i64>,
}

/// `GET /coverage/rules[?unit_id=...]`
pub async fn rules<S: OpsStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<RuleParams>,
) -> Result<Json<Value>, ApiError> {
  let rules = store
    .list_coverage_rules(params.unit_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "rules": rules })))
}

#[derive(Debug, Deserialize)]
pub struct CoverageParams {
  pub date: Option<NaiveDate>,
}

/// A coverage status with its evaluation attached.
#[derive(Debug, Serialize)]
struct CoverageView {
  #[serde(flatten)]
  status: CoverageStatus,
  met:    bool,
  gaps:   Vec<CoverageGap>,
}

impl From<CoverageStatus> for CoverageView {
  fn from(status: CoverageStatus) -> Self {
    let gaps = status.gaps();
    Self { met: gaps.is_empty(), gaps, status }
  }
}

/// `GET /coverage[?date=...]`
pub async fn coverage<S: OpsStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<CoverageParams>,
) -> Result<Json<Value>, ApiError> {
  let date = params.date.unwrap_or_else(|| Utc::now().date_naive());
  let report = store.coverage_report(date).await.map_err(ApiError::from_store)?;

  let unmet = report.iter().filter(|c| !c.is_met()).count();
  if unmet > 0 {
    tracing::debug!(%date, unmet, "coverage gaps found");
  }

  let coverage: Vec<CoverageView> = report.into_iter().map(CoverageView::from).collect();
  Ok(Json(json!({ "success": true, "date": date, "coverage": coverage })))
}
