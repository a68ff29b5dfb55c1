//! JSON REST API for Wardwatch.
//!
//! Exposes an axum [`Router`] backed by any [`wardwatch_core::store::OpsStore`].
//! Every success body is an object with `"success": true` and the payload
//! under a resource key; errors are `{"success": false, "error": "..."}`.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", wardwatch_api::api_router(store.clone()))
//! ```

pub mod beds;
pub mod error;
pub mod ops;
pub mod patients;
pub mod schedule;
pub mod staff;
pub mod system;
pub mod units;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use wardwatch_core::store::OpsStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: OpsStore + 'static,
{
  Router::new()
    // System
    .route("/health", get(system::health))
    .route("/admin/init", get(system::init::<S>).post(system::init::<S>))
    .route("/debug/database", get(system::debug_database::<S>))
    .route("/system", get(system::hospital::<S>))
    .route("/system/status", get(system::status::<S>))
    .route("/system-overview", get(system::overview::<S>))
    .route("/dashboard/summary", get(system::overview::<S>))
    .route("/analytics/dashboard", get(system::analytics::<S>))
    // Units
    .route("/units", get(units::list::<S>))
    .route("/units/{id}", get(units::get_one::<S>))
    // Staff
    .route("/medical-staff", get(staff::list::<S>))
    .route("/staff", get(staff::list::<S>))
    .route("/staff/availability", get(staff::availability::<S>))
    .route("/absence/requests", get(staff::absences::<S>))
    // Schedules & coverage
    .route("/guardia/schedule", get(schedule::list::<S>))
    .route("/guardia/swaps", get(schedule::swaps::<S>))
    .route("/coverage/rules", get(schedule::rules::<S>))
    .route("/coverage", get(schedule::coverage::<S>))
    // Beds
    .route("/enhanced-beds", get(beds::list::<S>))
    .route("/beds", get(beds::list::<S>))
    .route("/beds/board", get(beds::board::<S>))
    .route("/beds/{id}", get(beds::get_one::<S>))
    .route("/beds/{id}/status", post(beds::update_status::<S>))
    .route("/beds/{id}/audit", get(beds::audit::<S>))
    // Patients
    .route("/patients", get(patients::list::<S>))
    // Equipment, alerts, announcements, load
    .route("/equipment", get(ops::equipment::<S>))
    .route("/alerts/intelligent", get(ops::alerts::<S>))
    .route("/alerts/{id}/acknowledge", post(ops::acknowledge::<S>))
    .route("/alerts/{id}/resolve", post(ops::resolve::<S>))
    .route("/announcements", get(ops::announcements::<S>))
    .route("/clinical/load", get(ops::clinical_load::<S>))
    .with_state(store)
}
