//! The `OpsStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `wardwatch-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::{
  bed::{Bed, BedAuditEntry, BedBoardEntry, BedStatusChange},
  bootstrap::{BootstrapOptions, BootstrapOutcome, DatabaseStatus},
  census::Census,
  enums::{BedStatus, EquipmentStatus, PatientStatus, RequestStatus},
  ops::{Announcement, ClinicalLoadReport, Equipment, PredictiveAlert},
  patient::PatientEpisode,
  schedule::{CoverageRule, CoverageStatus, ScheduleEntry, ShiftSwapRequest},
  staff::{AbsenceRequest, MedicalStaff, StaffAvailability},
  unit::{DepartmentUnit, HospitalSystem},
};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Limit/offset paging. Missing values mean the first
/// [`Page::DEFAULT_LIMIT`] rows; limits are capped at [`Page::MAX_LIMIT`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Page {
  pub limit:  Option<u32>,
  pub offset: Option<u32>,
}

impl Page {
  pub const DEFAULT_LIMIT: u32 = 100;
  pub const MAX_LIMIT: u32 = 1000;

  pub fn limit(&self) -> i64 {
    i64::from(self.limit.unwrap_or(Self::DEFAULT_LIMIT).min(Self::MAX_LIMIT))
  }

  pub fn offset(&self) -> i64 { i64::from(self.offset.unwrap_or(0)) }
}

/// Parameters for [`OpsStore::list_staff`].
#[derive(Debug, Clone, Default)]
pub struct StaffQuery {
  pub unit_id: Option<i64>,
  pub on_call: Option<bool>,
  pub page:    Page,
}

/// Parameters for [`OpsStore::list_schedules`].
#[derive(Debug, Clone, Default)]
pub struct ScheduleQuery {
  pub date:    Option<NaiveDate>,
  pub unit_id: Option<i64>,
}

/// Parameters for [`OpsStore::list_beds`].
#[derive(Debug, Clone, Default)]
pub struct BedQuery {
  pub status:    Option<BedStatus>,
  pub room_code: Option<String>,
  pub page:      Page,
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Backend errors must expose any domain error they wrap so the HTTP layer
/// can tell "not found" and "conflict" apart from storage failures.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn domain(&self) -> Option<&crate::Error>;
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Wardwatch storage backend.
///
/// Every read is a single query; the only writes outside bootstrap are bed
/// status transitions (which append to the audit trail) and alert
/// acknowledgement/resolution.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait OpsStore: Send + Sync {
  type Error: StoreError;

  // ── Bootstrap ─────────────────────────────────────────────────────────

  /// Create the schema if any table is missing, then seed if the store holds
  /// no staff. Check and action run as one transaction.
  fn bootstrap(
    &self,
    options: BootstrapOptions,
  ) -> impl Future<Output = Result<BootstrapOutcome, Self::Error>> + Send + '_;

  fn database_status(
    &self,
  ) -> impl Future<Output = Result<DatabaseStatus, Self::Error>> + Send + '_;

  // ── Hospital & units ──────────────────────────────────────────────────

  fn hospital_system(
    &self,
  ) -> impl Future<Output = Result<Option<HospitalSystem>, Self::Error>> + Send + '_;

  /// Units ordered by name.
  fn list_units(
    &self,
    active_only: bool,
  ) -> impl Future<Output = Result<Vec<DepartmentUnit>, Self::Error>> + Send + '_;

  fn get_unit(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<DepartmentUnit>, Self::Error>> + Send + '_;

  // ── Staff ─────────────────────────────────────────────────────────────

  /// Active staff, most senior role first, then by last name.
  fn list_staff(
    &self,
    query: StaffQuery,
  ) -> impl Future<Output = Result<Vec<MedicalStaff>, Self::Error>> + Send + '_;

  fn staff_availability(
    &self,
  ) -> impl Future<Output = Result<Vec<StaffAvailability>, Self::Error>> + Send + '_;

  fn list_absences(
    &self,
    status: Option<RequestStatus>,
  ) -> impl Future<Output = Result<Vec<AbsenceRequest>, Self::Error>> + Send + '_;

  // ── Schedules & coverage ──────────────────────────────────────────────

  fn list_schedules(
    &self,
    query: ScheduleQuery,
  ) -> impl Future<Output = Result<Vec<ScheduleEntry>, Self::Error>> + Send + '_;

  fn list_swap_requests(
    &self,
    status: Option<RequestStatus>,
  ) -> impl Future<Output = Result<Vec<ShiftSwapRequest>, Self::Error>> + Send + '_;

  fn list_coverage_rules(
    &self,
    unit_id: Option<i64>,
  ) -> impl Future<Output = Result<Vec<CoverageRule>, Self::Error>> + Send + '_;

  /// Every coverage rule paired with the staff scheduled against it on
  /// `date`.
  fn coverage_report(
    &self,
    date: NaiveDate,
  ) -> impl Future<Output = Result<Vec<CoverageStatus>, Self::Error>> + Send + '_;

  // ── Beds ──────────────────────────────────────────────────────────────

  fn list_beds(
    &self,
    query: BedQuery,
  ) -> impl Future<Output = Result<Vec<Bed>, Self::Error>> + Send + '_;

  fn get_bed(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Bed>, Self::Error>> + Send + '_;

  fn bed_board(
    &self,
  ) -> impl Future<Output = Result<Vec<BedBoardEntry>, Self::Error>> + Send + '_;

  /// Apply `change` to bed `id` and append the transition to the audit
  /// trail, atomically.
  fn update_bed_status(
    &self,
    id: i64,
    change: BedStatusChange,
  ) -> impl Future<Output = Result<Bed, Self::Error>> + Send + '_;

  /// Audit rows for one bed, newest first.
  fn bed_audit_trail(
    &self,
    bed_id: i64,
    page: Page,
  ) -> impl Future<Output = Result<Vec<BedAuditEntry>, Self::Error>> + Send + '_;

  // ── Patients ──────────────────────────────────────────────────────────

  fn list_patients(
    &self,
    status: Option<PatientStatus>,
  ) -> impl Future<Output = Result<Vec<PatientEpisode>, Self::Error>> + Send + '_;

  // ── Equipment, alerts, announcements, load ────────────────────────────

  fn list_equipment(
    &self,
    status: Option<EquipmentStatus>,
  ) -> impl Future<Output = Result<Vec<Equipment>, Self::Error>> + Send + '_;

  /// Unresolved alerts, most severe first.
  fn active_alerts(
    &self,
  ) -> impl Future<Output = Result<Vec<PredictiveAlert>, Self::Error>> + Send + '_;

  fn acknowledge_alert(
    &self,
    id: i64,
    by: String,
  ) -> impl Future<Output = Result<PredictiveAlert, Self::Error>> + Send + '_;

  fn resolve_alert(
    &self,
    id: i64,
    by: String,
    notes: Option<String>,
  ) -> impl Future<Output = Result<PredictiveAlert, Self::Error>> + Send + '_;

  /// Announcements whose effective window contains `now`.
  fn active_announcements(
    &self,
    now: NaiveDateTime,
  ) -> impl Future<Output = Result<Vec<Announcement>, Self::Error>> + Send + '_;

  /// The most recent `limit` daily reports, newest first.
  fn clinical_load(
    &self,
    limit: u32,
  ) -> impl Future<Output = Result<Vec<ClinicalLoadReport>, Self::Error>> + Send + '_;

  fn census(&self) -> impl Future<Output = Result<Census, Self::Error>> + Send + '_;
}
