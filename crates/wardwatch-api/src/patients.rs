//! `GET /patients[?status=admitted|discharged|transferred|deceased]`

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use wardwatch_core::{enums::PatientStatus, store::OpsStore};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub status: Option<PatientStatus>,
}

pub async fn list<S: OpsStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
  let patients = store
    .list_patients(params.status)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(json!({ "success": true, "patients": patients })))
}
