use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt as _;
use wardwatch_core::{bootstrap::BootstrapOptions, store::OpsStore};
use wardwatch_store_sqlite::SqliteStore;

use super::*;

async fn make_store(seed_sample_data: bool) -> Arc<SqliteStore> {
  let store = SqliteStore::open_in_memory().await.unwrap();
  store
    .bootstrap(BootstrapOptions { seed_sample_data, today: Utc::now().date_naive() })
    .await
    .unwrap();
  Arc::new(store)
}

async fn oneshot_raw(
  store:  Arc<SqliteStore>,
  method: &str,
  uri:    &str,
  body:   Option<&str>,
) -> Response {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(json) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(json.to_string())
    }
    None => Body::empty(),
  };
  app(store).oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn json_body(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

async fn get_json(store: Arc<SqliteStore>, uri: &str) -> (StatusCode, Value) {
  let resp = oneshot_raw(store, "GET", uri, None).await;
  let status = resp.status();
  (status, json_body(resp).await)
}

async fn post_json(store: Arc<SqliteStore>, uri: &str, body: &str) -> (StatusCode, Value) {
  let resp = oneshot_raw(store, "POST", uri, Some(body)).await;
  let status = resp.status();
  (status, json_body(resp).await)
}

// ── System ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_version() {
  let (status, body) = get_json(make_store(false).await, "/api/health").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "healthy");
  assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
  assert!(body.get("success").is_none());
}

#[tokio::test]
async fn admin_init_seeds_an_empty_store() {
  let store = make_store(false).await;

  let (_, body) = get_json(store.clone(), "/api/debug/database").await;
  assert_eq!(body["database_status"]["needs_initialization"], true);

  let (status, body) = post_json(store.clone(), "/api/admin/init", "").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["initialized"], true);
  assert_eq!(body["outcome"], "seeded");

  let (_, body) = get_json(store.clone(), "/api/admin/init").await;
  assert_eq!(body["outcome"], "already_populated");

  let (_, body) = get_json(store, "/api/debug/database").await;
  assert_eq!(body["database_status"]["staff_count"], 9);
}

#[tokio::test]
async fn system_status_and_overview_share_the_census() {
  let store = make_store(true).await;

  let (_, status) = get_json(store.clone(), "/api/system/status").await;
  assert_eq!(status["success"], true);
  assert_eq!(status["beds_total"], 60);
  assert_eq!(status["beds_available"], 36);
  assert_eq!(status["patients_active"], 24);

  for uri in ["/api/system-overview", "/api/dashboard/summary"] {
    let (_, body) = get_json(store.clone(), uri).await;
    assert_eq!(body["overview"]["occupancy_rate"], 40.0);
    assert_eq!(body["overview"]["on_call_staff"], 5);
  }

  let (_, body) = get_json(store.clone(), "/api/analytics/dashboard").await;
  assert_eq!(body["analytics"]["occupied_beds"], 24);

  let (_, body) = get_json(store, "/api/system").await;
  assert_eq!(body["hospital"]["chief_of_department"], "Dr. Maria Rodriguez");
}

// ── Units & staff ───────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_unit_is_a_json_404() {
  let store = make_store(true).await;

  let (status, body) = get_json(store.clone(), "/api/units").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["units"].as_array().unwrap().len(), 5);

  let (status, body) = get_json(store, "/api/units/99").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["success"], false);
  assert!(body["error"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn staff_aliases_return_the_same_list() {
  let store = make_store(true).await;

  let (_, a) = get_json(store.clone(), "/api/staff?on_call=true").await;
  let (_, b) = get_json(store.clone(), "/api/medical-staff?on_call=true").await;
  assert_eq!(a["staff"].as_array().unwrap().len(), 5);
  assert_eq!(a, b);

  let (status, body) = get_json(store.clone(), "/api/staff/availability").await;
  assert_eq!(status, StatusCode::OK);
  let availability = body["availability"].as_array().unwrap();
  assert_eq!(availability.len(), 9);
  assert_eq!(availability[0]["role"], "chief");
  assert_eq!(availability[0]["is_on_call"], true);

  let (_, body) = get_json(store, "/api/absence/requests?status=pending").await;
  assert_eq!(body["absences"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_filter_label_is_rejected() {
  let resp = oneshot_raw(make_store(true).await, "GET", "/api/absence/requests?status=maybe", None).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── Schedules & coverage ────────────────────────────────────────────────────

#[tokio::test]
async fn coverage_defaults_to_today() {
  let store = make_store(true).await;

  let (_, body) = get_json(store.clone(), "/api/coverage").await;
  let coverage = body["coverage"].as_array().unwrap();
  assert_eq!(coverage.len(), 14);
  assert_eq!(coverage[0]["unit_name"], "Pulmonary ICU");
  assert_eq!(coverage[0]["met"], false);
  assert_eq!(coverage[0]["gaps"].as_array().unwrap().len(), 3);

  let (_, body) = get_json(store, "/api/guardia/schedule").await;
  assert_eq!(body["schedules"].as_array().unwrap().len(), 42);
}

// ── Beds ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn bed_status_change_is_audited() {
  let store = make_store(true).await;

  let (status, body) = post_json(
    store.clone(),
    "/api/beds/4/status",
    r#"{"status":"cleaning","updated_by":"nurse.kim","reason":"discharge"}"#,
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["bed"]["status"], "cleaning");
  assert!(body["bed"]["patient_id"].is_null());

  let (_, body) = get_json(store.clone(), "/api/beds/4/audit").await;
  let audit = body["audit"].as_array().unwrap();
  assert_eq!(audit.len(), 2);
  assert_eq!(audit[0]["old_status"], "occupied");
  assert_eq!(audit[0]["update_reason"], "discharge");

  let (_, body) = get_json(store, "/api/beds?status=occupied").await;
  assert_eq!(body["beds"].as_array().unwrap().len(), 23);
}

#[tokio::test]
async fn invalid_bed_changes_are_client_errors() {
  let store = make_store(true).await;

  let (status, body) = post_json(
    store.clone(),
    "/api/beds/1/status",
    r#"{"status":"reserved","patient_id":3,"updated_by":"nurse.kim"}"#,
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["success"], false);

  let (status, _) = post_json(
    store.clone(),
    "/api/beds/999/status",
    r#"{"status":"empty","updated_by":"nurse.kim"}"#,
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let resp = oneshot_raw(
    store.clone(),
    "POST",
    "/api/beds/1/status",
    Some(r#"{"status":"teleported","updated_by":"nurse.kim"}"#),
  )
  .await;
  assert!(resp.status().is_client_error());

  let (status, _) = get_json(store, "/api/beds/999/audit").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bed_listing_pages_and_board() {
  let store = make_store(true).await;

  let (_, body) = get_json(store.clone(), "/api/enhanced-beds?room_code=H3&limit=2").await;
  let beds = body["beds"].as_array().unwrap();
  assert_eq!(beds.len(), 2);
  assert_eq!(beds[0]["bed_number"], "BH31");

  let (_, body) = get_json(store.clone(), "/api/beds/board").await;
  assert_eq!(body["beds"].as_array().unwrap().len(), 60);

  let (status, body) = get_json(store, "/api/beds/4").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["bed"]["room_code"], "H1");
}

// ── Alerts & operations ─────────────────────────────────────────────────────

#[tokio::test]
async fn alert_acknowledgement_conflicts_on_repeat() {
  let store = make_store(true).await;

  let (status, body) =
    post_json(store.clone(), "/api/alerts/1/acknowledge", r#"{"by":"Dr. Chen"}"#).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["alert"]["acknowledged_by"], "Dr. Chen");

  let (status, body) =
    post_json(store.clone(), "/api/alerts/1/acknowledge", r#"{"by":"Dr. Chen"}"#).await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert_eq!(body["success"], false);

  let (status, _) = post_json(store, "/api/alerts/42/acknowledge", r#"{"by":"Dr. Chen"}"#).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resolving_requires_an_author() {
  let store = make_store(true).await;

  let (status, _) = post_json(store.clone(), "/api/alerts/3/resolve", r#"{"by":"  "}"#).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, _) = post_json(
    store.clone(),
    "/api/alerts/3/resolve",
    r#"{"by":"Dr. Rodriguez","notes":"Cohorted"}"#,
  )
  .await;
  assert_eq!(status, StatusCode::OK);

  let (_, body) = get_json(store, "/api/alerts/intelligent").await;
  assert_eq!(body["alerts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn operational_lists() {
  let store = make_store(true).await;

  let (_, body) = get_json(store.clone(), "/api/equipment?status=in_use").await;
  assert_eq!(body["equipment"].as_array().unwrap().len(), 3);

  let (_, body) = get_json(store.clone(), "/api/announcements").await;
  assert_eq!(body["announcements"].as_array().unwrap().len(), 3);

  let (_, body) = get_json(store.clone(), "/api/clinical/load").await;
  assert_eq!(body["clinical_load"].as_array().unwrap().len(), 5);

  let (_, body) = get_json(store.clone(), "/api/clinical/load?limit=2").await;
  assert_eq!(body["clinical_load"].as_array().unwrap().len(), 2);

  let (_, body) = get_json(store, "/api/patients?status=admitted").await;
  assert_eq!(body["patients"].as_array().unwrap().len(), 15);
}
