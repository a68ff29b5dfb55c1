//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use wardwatch_core::{
  ErrorKind,
  bed::BedStatusChange,
  bootstrap::{BootstrapOptions, BootstrapOutcome},
  enums::{AcuityLevel, AlertSeverity, BedStatus, EquipmentStatus, RequestStatus, ShiftType, StaffRole},
  store::{BedQuery, OpsStore, Page, ScheduleQuery, StaffQuery, StoreError},
};

use crate::SqliteStore;

fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2025, 3, 10).unwrap() }

fn options(seed_sample_data: bool) -> BootstrapOptions {
  BootstrapOptions { seed_sample_data, today: today() }
}

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn seeded() -> SqliteStore {
  let s = store().await;
  s.bootstrap(options(true)).await.expect("bootstrap");
  s
}

fn change(status: BedStatus, patient_id: Option<i64>) -> BedStatusChange {
  BedStatusChange {
    status,
    patient_id,
    updated_by: "nurse.kim".into(),
    reason: Some("turnover".into()),
    notes: None,
  }
}

fn domain_kind(err: &crate::Error) -> Option<ErrorKind> { err.domain().map(|e| e.kind()) }

// ─── Bootstrap ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn fresh_store_is_created_and_seeded_once() {
  let s = store().await;

  let status = s.database_status().await.unwrap();
  assert!(!status.tables_exist);
  assert!(status.needs_initialization);

  assert_eq!(s.bootstrap(options(true)).await.unwrap(), BootstrapOutcome::CreatedAndSeeded);
  assert_eq!(s.bootstrap(options(true)).await.unwrap(), BootstrapOutcome::AlreadyPopulated);

  let status = s.database_status().await.unwrap();
  assert!(status.tables_exist);
  assert_eq!(status.tables_found.len(), 14);
  assert_eq!(status.staff_count, 9);
  assert_eq!(status.beds_count, 60);
  assert!(!status.needs_initialization);
}

#[tokio::test]
async fn seeding_can_be_deferred() {
  let s = store().await;

  assert_eq!(s.bootstrap(options(false)).await.unwrap(), BootstrapOutcome::Created);
  assert_eq!(s.bootstrap(options(false)).await.unwrap(), BootstrapOutcome::Empty);
  assert!(s.hospital_system().await.unwrap().is_none());

  assert_eq!(s.bootstrap(options(true)).await.unwrap(), BootstrapOutcome::Seeded);
  assert!(s.hospital_system().await.unwrap().is_some());
}

#[tokio::test]
async fn dropped_table_is_recreated_without_reseeding() {
  let s = seeded().await;
  s.execute_batch("DROP TABLE daily_clinical_load").await.unwrap();

  assert_eq!(s.bootstrap(options(true)).await.unwrap(), BootstrapOutcome::Created);
  assert!(s.clinical_load(7).await.unwrap().is_empty());
  assert_eq!(s.census().await.unwrap().active_staff, 9);
}

#[tokio::test]
async fn seeding_fills_in_around_existing_units() {
  let s = store().await;
  assert_eq!(s.bootstrap(options(false)).await.unwrap(), BootstrapOutcome::Created);
  s.execute_batch(
    "INSERT INTO department_units (name, code, specialty) VALUES ('Cardiology', 'CARD', 'Cardiac');
     INSERT INTO department_units (name, code, specialty) VALUES ('PICU East', 'PICU', 'Critical Care');",
  )
  .await
  .unwrap();

  assert_eq!(s.bootstrap(options(true)).await.unwrap(), BootstrapOutcome::Seeded);

  let units = s.list_units(false).await.unwrap();
  assert_eq!(units.len(), 6);
  let picu = units.iter().find(|u| u.code == "PICU").unwrap();
  assert_eq!(picu.name, "PICU East");

  let staff = s.list_staff(StaffQuery::default()).await.unwrap();
  assert_eq!(staff[0].last_name, "Rodriguez");
  assert_eq!(staff[0].primary_unit_id, Some(picu.id));

  let report = s.coverage_report(today()).await.unwrap();
  assert_eq!(report.len(), 14);
  assert_eq!(report[0].unit_name, "PICU East");
  assert_eq!(report[0].scheduled.total, 1);

  let census = s.census().await.unwrap();
  assert_eq!(census.total_beds, 60);
  assert_eq!(census.occupied_beds, 24);
  assert_eq!(s.list_swap_requests(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn seeding_skips_tables_that_already_hold_rows() {
  let s = store().await;
  s.bootstrap(options(false)).await.unwrap();
  s.execute_batch(
    "INSERT INTO daily_clinical_load (report_date, reported_by) VALUES ('2025-03-10', 'Dr. House');
     INSERT INTO enhanced_beds (room_code, bed_number, status) VALUES ('H1', 'BH11', 'maintenance');",
  )
  .await
  .unwrap();

  assert_eq!(s.bootstrap(options(true)).await.unwrap(), BootstrapOutcome::Seeded);

  let load = s.clinical_load(7).await.unwrap();
  assert_eq!(load.len(), 5);
  assert_eq!(load[0].reported_by, "Dr. House");

  let beds = s
    .list_beds(BedQuery { room_code: Some("H1".into()), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(beds.len(), 4);
  assert_eq!(beds[0].status, BedStatus::Maintenance);
}

#[tokio::test]
async fn census_reflects_seed_pattern() {
  let s = seeded().await;
  let census = s.census().await.unwrap();

  assert_eq!(census.total_beds, 60);
  assert_eq!(census.occupied_beds, 24);
  assert_eq!(census.active_staff, 9);
  assert_eq!(census.on_call_staff, 5);
  assert_eq!(census.occupancy_rate(), 40.0);
}

// ─── Units & staff ───────────────────────────────────────────────────────────

#[tokio::test]
async fn units_are_ordered_by_name() {
  let s = seeded().await;
  let names: Vec<_> = s
    .list_units(true)
    .await
    .unwrap()
    .into_iter()
    .map(|u| u.name)
    .collect();
  assert_eq!(
    names,
    [
      "Bronchoscopy Suite",
      "General Pulmonology",
      "Pulmonary ICU",
      "Respiratory Isolation",
      "Step-Down Unit",
    ]
  );
}

#[tokio::test]
async fn inactive_units_are_hidden_unless_requested() {
  let s = seeded().await;
  s.execute_batch("UPDATE department_units SET is_active = 0 WHERE code = 'SDU'")
    .await
    .unwrap();

  assert_eq!(s.list_units(true).await.unwrap().len(), 4);
  assert_eq!(s.list_units(false).await.unwrap().len(), 5);
}

#[tokio::test]
async fn get_unit_missing_returns_none() {
  let s = seeded().await;
  assert_eq!(s.get_unit(1).await.unwrap().unwrap().code, "PICU");
  assert!(s.get_unit(99).await.unwrap().is_none());
}

#[tokio::test]
async fn staff_are_ordered_by_seniority_then_name() {
  let s = seeded().await;
  let staff = s.list_staff(StaffQuery::default()).await.unwrap();

  assert_eq!(staff.len(), 9);
  assert_eq!(staff[0].role, StaffRole::Chief);
  assert_eq!(staff[1].last_name, "Chen");
  assert_eq!(staff[2].last_name, "Wilson");
  assert_eq!(staff[8].role, StaffRole::Resident);
}

#[tokio::test]
async fn staff_filters_and_paging() {
  let s = seeded().await;

  let on_call = s
    .list_staff(StaffQuery { on_call: Some(true), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(on_call.len(), 5);
  assert!(on_call.iter().all(|m| m.is_on_call));

  let picu = s
    .list_staff(StaffQuery { unit_id: Some(1), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(picu.len(), 4);

  let page = s
    .list_staff(StaffQuery {
      page: Page { limit: Some(2), offset: Some(1) },
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(page.len(), 2);
  assert_eq!(page[0].last_name, "Chen");
}

#[tokio::test]
async fn absences_filter_by_status() {
  let s = seeded().await;

  let all = s.list_absences(None).await.unwrap();
  assert_eq!(all.len(), 6);
  assert!(all.windows(2).all(|w| w[0].start_date >= w[1].start_date));

  let pending = s.list_absences(Some(RequestStatus::Pending)).await.unwrap();
  assert_eq!(pending.len(), 2);
  assert!(pending.iter().any(|a| a.staff_name == "Emily Davis"));
}

// ─── Schedules & coverage ────────────────────────────────────────────────────

#[tokio::test]
async fn schedules_for_a_day_run_morning_to_night() {
  let s = seeded().await;
  let day = s
    .list_schedules(ScheduleQuery { date: Some(today()), unit_id: None })
    .await
    .unwrap();

  assert_eq!(day.len(), 6);
  assert_eq!(day[0].shift_type, ShiftType::Morning);
  assert_eq!(day[0].staff_code, "DR001");
  assert_eq!(day[5].shift_type, ShiftType::Night);

  let week = s.list_schedules(ScheduleQuery::default()).await.unwrap();
  assert_eq!(week.len(), 42);
}

#[tokio::test]
async fn swap_requests_filter_by_status() {
  let s = seeded().await;
  assert_eq!(s.list_swap_requests(None).await.unwrap().len(), 1);
  assert!(s.list_swap_requests(Some(RequestStatus::Approved)).await.unwrap().is_empty());
}

#[tokio::test]
async fn coverage_rules_for_a_unit_follow_shift_order() {
  let s = seeded().await;
  let shifts: Vec<_> = s
    .list_coverage_rules(Some(1))
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.shift_type)
    .collect();
  assert_eq!(shifts, [ShiftType::Morning, ShiftType::Evening, ShiftType::Night]);
  assert_eq!(s.list_coverage_rules(None).await.unwrap().len(), 14);
}

#[tokio::test]
async fn coverage_counts_scheduled_staff_against_rules() {
  let s = seeded().await;
  let report = s.coverage_report(today()).await.unwrap();
  assert_eq!(report.len(), 14);

  let picu_morning = &report[0];
  assert_eq!(picu_morning.unit_name, "Pulmonary ICU");
  assert_eq!(picu_morning.rule.shift_type, ShiftType::Morning);
  // Only the chief is on: neither a senior consultant nor a consultant.
  assert_eq!(picu_morning.scheduled.senior_consultants, 0);
  assert_eq!(picu_morning.scheduled.total, 1);
  assert_eq!(picu_morning.gaps().len(), 3);

  let picu_evening = &report[1];
  assert_eq!(picu_evening.scheduled.senior_consultants, 1);
  assert_eq!(picu_evening.scheduled.consultants, 1);
  assert!(!picu_evening.is_met());
}

#[tokio::test]
async fn full_day_guardia_counts_for_every_shift() {
  let s = seeded().await;
  s.execute_batch(
    "INSERT INTO guardia_schedules (staff_id, schedule_date, shift_type, unit_id)
     VALUES (3, '2025-03-10', '24h', 1)",
  )
  .await
  .unwrap();

  let report = s.coverage_report(today()).await.unwrap();
  for status in report.iter().filter(|c| c.rule.unit_id == 1) {
    assert!(status.scheduled.senior_consultants >= 1, "{:?}", status.rule.shift_type);
  }
  assert_eq!(report[0].scheduled.total, 2);
}

#[tokio::test]
async fn cancelled_guardias_do_not_count() {
  let s = seeded().await;
  s.execute_batch("UPDATE guardia_schedules SET status = 'cancelled' WHERE id = 2")
    .await
    .unwrap();

  let report = s.coverage_report(today()).await.unwrap();
  assert_eq!(report[1].scheduled.total, 0);
  // Other days are untouched.
  let tomorrow = s.coverage_report(today() + TimeDelta::days(1)).await.unwrap();
  assert_eq!(tomorrow[1].scheduled.total, 1);
}

#[tokio::test]
async fn overlapping_guardias_count_a_person_once() {
  let s = seeded().await;
  // The chief already holds today's PICU morning shift.
  s.execute_batch(
    "INSERT INTO guardia_schedules (staff_id, schedule_date, shift_type, unit_id)
     VALUES (1, '2025-03-10', '24h', 1)",
  )
  .await
  .unwrap();

  let report = s.coverage_report(today()).await.unwrap();
  assert_eq!(report[0].rule.shift_type, ShiftType::Morning);
  assert_eq!(report[0].scheduled.total, 1);
  // The 24h guardia still adds the chief to the evening and night shifts.
  assert_eq!(report[1].scheduled.total, 2);
  assert_eq!(report[2].scheduled.total, 2);
}

#[tokio::test]
async fn no_show_guardias_do_not_count_but_swapped_do() {
  let s = seeded().await;
  s.execute_batch(
    "UPDATE guardia_schedules SET status = 'no_show' WHERE id = 1;
     UPDATE guardia_schedules SET status = 'swapped' WHERE id = 2;",
  )
  .await
  .unwrap();

  let report = s.coverage_report(today()).await.unwrap();
  assert_eq!(report[0].scheduled.total, 0);
  assert_eq!(report[1].scheduled.total, 1);
}

// ─── Schema constraints ──────────────────────────────────────────────────────

async fn rejected(s: &SqliteStore, sql: &'static str) -> String {
  let err = s.execute_batch(sql).await.expect_err(sql);
  format!("{err:?}")
}

#[tokio::test]
async fn natural_keys_are_unique() {
  let s = seeded().await;

  rejected(&s, "INSERT INTO coverage_rules (unit_id, shift_type) VALUES (1, 'morning')").await;
  rejected(
    &s,
    "INSERT INTO department_units (name, code, specialty) VALUES ('Dup', 'PICU', 'Critical Care')",
  )
  .await;
  rejected(
    &s,
    "INSERT INTO medical_staff (first_name, last_name, staff_code, specialization)
     VALUES ('Ana', 'Ruiz', 'DR001', 'Pulmonology')",
  )
  .await;
  rejected(&s, "INSERT INTO enhanced_beds (room_code, bed_number) VALUES ('H1', 'BH11')").await;

  // A second rule for a shift the unit lacks is fine.
  s.execute_batch("INSERT INTO coverage_rules (unit_id, shift_type) VALUES (3, 'night')")
    .await
    .unwrap();
}

#[tokio::test]
async fn label_columns_reject_unknown_values() {
  let s = seeded().await;
  rejected(&s, "UPDATE guardia_schedules SET status = 'lost' WHERE id = 1").await;
  rejected(&s, "UPDATE enhanced_beds SET status = 'vacant' WHERE id = 2").await;
  rejected(&s, "INSERT INTO coverage_rules (unit_id, shift_type) VALUES (3, '24h')").await;
}

#[tokio::test]
async fn bed_holding_a_patient_must_be_occupied() {
  let s = seeded().await;

  let err = rejected(
    &s,
    "INSERT INTO enhanced_beds (room_code, bed_number, status, patient_id)
     VALUES ('H16', 'BH161', 'reserved', 1)",
  )
  .await;
  assert!(err.contains("Bed with patient must be occupied status"), "{err}");

  // Bed 4 is occupied by a seeded patient.
  let err = rejected(&s, "UPDATE enhanced_beds SET status = 'cleaning' WHERE id = 4").await;
  assert!(err.contains("Bed with patient must be occupied status"), "{err}");

  s.execute_batch("UPDATE enhanced_beds SET status = 'cleaning', patient_id = NULL WHERE id = 4")
    .await
    .unwrap();
}

#[tokio::test]
async fn staff_absence_needs_both_dates() {
  let s = seeded().await;

  let err = rejected(
    &s,
    "UPDATE medical_staff SET absence_type = 'holiday', absence_start = '2025-03-20' WHERE id = 4",
  )
  .await;
  assert!(err.contains("Absence requires both start and end dates"), "{err}");

  s.execute_batch(
    "UPDATE medical_staff
     SET absence_type = 'holiday', absence_start = '2025-03-20', absence_end = '2025-03-27'
     WHERE id = 4",
  )
  .await
  .unwrap();
}

// ─── Beds ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn beds_list_in_natural_room_order() {
  let s = seeded().await;
  let beds = s
    .list_beds(BedQuery { page: Page { limit: Some(5), offset: None }, ..Default::default() })
    .await
    .unwrap();

  assert_eq!(beds[0].bed_number, "BH11");
  assert_eq!(beds[4].bed_number, "BH21");
}

#[tokio::test]
async fn beds_filter_by_status_and_room() {
  let s = seeded().await;

  let occupied = s
    .list_beds(BedQuery { status: Some(BedStatus::Occupied), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(occupied.len(), 24);
  assert_eq!(occupied.iter().filter(|b| b.patient_id.is_some()).count(), 15);

  let room = s
    .list_beds(BedQuery { room_code: Some("H2".into()), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(room.len(), 4);
}

#[tokio::test]
async fn board_joins_patient_and_doctor() {
  let s = seeded().await;
  let board = s.bed_board().await.unwrap();
  assert_eq!(board.len(), 60);

  let first = board.iter().find(|b| b.patient_code.is_some()).unwrap();
  assert_eq!(first.patient_code.as_deref(), Some("PT2024001"));
  assert_eq!(first.acuity_level, Some(AcuityLevel::Critical));
  assert_eq!(first.attending_doctor.as_deref(), Some("James Wilson"));
}

#[tokio::test]
async fn releasing_a_bed_clears_patient_and_appends_audit() {
  let s = seeded().await;
  // Bed 4 (BH14) is the first occupied bed and holds patient 1.
  let before = s.get_bed(4).await.unwrap().unwrap();
  assert_eq!(before.patient_id, Some(1));

  let bed = s.update_bed_status(4, change(BedStatus::Cleaning, None)).await.unwrap();
  assert_eq!(bed.status, BedStatus::Cleaning);
  assert_eq!(bed.patient_id, None);
  assert_eq!(bed.updated_by.as_deref(), Some("nurse.kim"));

  let trail = s.bed_audit_trail(4, Page::default()).await.unwrap();
  assert_eq!(trail.len(), 2);
  assert_eq!(trail[0].old_status, Some(BedStatus::Occupied));
  assert_eq!(trail[0].new_status, BedStatus::Cleaning);
  assert_eq!(trail[0].patient_id, Some(1));
  assert_eq!(trail[0].update_reason.as_deref(), Some("turnover"));
  assert_eq!(trail[1].updated_by, "seeder");
}

#[tokio::test]
async fn occupying_a_bed_records_the_patient() {
  let s = seeded().await;
  s.update_bed_status(4, change(BedStatus::Cleaning, None)).await.unwrap();

  let bed = s.update_bed_status(1, change(BedStatus::Occupied, Some(1))).await.unwrap();
  assert_eq!(bed.patient_id, Some(1));
  assert_eq!(s.census().await.unwrap().occupied_beds, 24);
}

#[tokio::test]
async fn patient_on_unoccupied_bed_is_rejected() {
  let s = seeded().await;
  let err = s
    .update_bed_status(1, change(BedStatus::Reserved, Some(2)))
    .await
    .unwrap_err();
  assert_eq!(domain_kind(&err), Some(ErrorKind::Invalid));
  assert!(s.bed_audit_trail(1, Page::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn updating_missing_bed_is_not_found() {
  let s = seeded().await;
  let err = s.update_bed_status(999, change(BedStatus::Empty, None)).await.unwrap_err();
  assert_eq!(domain_kind(&err), Some(ErrorKind::NotFound));
}

#[tokio::test]
async fn audit_trail_pages_newest_first() {
  let s = seeded().await;
  for status in [BedStatus::Cleaning, BedStatus::Maintenance, BedStatus::Empty] {
    s.update_bed_status(4, change(status, None)).await.unwrap();
  }

  let page = s
    .bed_audit_trail(4, Page { limit: Some(2), offset: None })
    .await
    .unwrap();
  assert_eq!(page.len(), 2);
  assert_eq!(page[0].new_status, BedStatus::Empty);
  assert_eq!(page[1].new_status, BedStatus::Maintenance);
}

// ─── Patients & equipment ────────────────────────────────────────────────────

#[tokio::test]
async fn critical_patients_come_first() {
  let s = seeded().await;
  let patients = s.list_patients(None).await.unwrap();
  assert_eq!(patients.len(), 15);
  assert!(patients[..5].iter().all(|p| p.acuity_level == AcuityLevel::Critical));
  assert!(patients[5..].iter().all(|p| p.acuity_level == AcuityLevel::Guarded));
}

#[tokio::test]
async fn equipment_filters_by_status() {
  let s = seeded().await;
  assert_eq!(s.list_equipment(None).await.unwrap().len(), 5);
  let available = s.list_equipment(Some(EquipmentStatus::Available)).await.unwrap();
  assert_eq!(available.len(), 2);
}

// ─── Alerts ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn active_alerts_most_severe_first() {
  let s = seeded().await;
  let severities: Vec<_> = s
    .active_alerts()
    .await
    .unwrap()
    .into_iter()
    .map(|a| a.severity)
    .collect();
  assert_eq!(severities, [AlertSeverity::High, AlertSeverity::Medium, AlertSeverity::Low]);
}

#[tokio::test]
async fn acknowledge_alert_once() {
  let s = seeded().await;

  let alert = s.acknowledge_alert(1, "Dr. Chen".into()).await.unwrap();
  assert!(alert.acknowledged);
  assert_eq!(alert.acknowledged_by.as_deref(), Some("Dr. Chen"));
  assert!(alert.acknowledged_at.is_some());

  let err = s.acknowledge_alert(1, "Dr. Chen".into()).await.unwrap_err();
  assert_eq!(domain_kind(&err), Some(ErrorKind::Conflict));

  let err = s.acknowledge_alert(99, "Dr. Chen".into()).await.unwrap_err();
  assert_eq!(domain_kind(&err), Some(ErrorKind::NotFound));
}

#[tokio::test]
async fn resolving_removes_alert_from_active_list() {
  let s = seeded().await;

  let alert = s
    .resolve_alert(3, "Dr. Rodriguez".into(), Some("Cohorted".into()))
    .await
    .unwrap();
  assert!(alert.resolved);
  assert!(alert.acknowledged);
  assert_eq!(alert.acknowledged_by.as_deref(), Some("Dr. Rodriguez"));
  assert_eq!(alert.resolution_notes.as_deref(), Some("Cohorted"));

  assert_eq!(s.active_alerts().await.unwrap().len(), 2);

  let err = s.resolve_alert(3, "Dr. Rodriguez".into(), None).await.unwrap_err();
  assert_eq!(domain_kind(&err), Some(ErrorKind::Conflict));
  let err = s.acknowledge_alert(3, "Dr. Chen".into()).await.unwrap_err();
  assert_eq!(domain_kind(&err), Some(ErrorKind::Conflict));
}

#[tokio::test]
async fn resolving_keeps_earlier_acknowledgement() {
  let s = seeded().await;
  // ALERT002 is seeded as acknowledged by Dr. Wilson.
  let alert = s.resolve_alert(2, "Dr. Chen".into(), None).await.unwrap();
  assert_eq!(alert.acknowledged_by.as_deref(), Some("Dr. Wilson"));
  assert_eq!(alert.resolved_by.as_deref(), Some("Dr. Chen"));
}

// ─── Announcements & load ────────────────────────────────────────────────────

#[tokio::test]
async fn announcements_respect_effective_window() {
  let s = seeded().await;
  let now = today().and_time(NaiveTime::MIN) + TimeDelta::hours(9);

  let active = s.active_announcements(now).await.unwrap();
  assert_eq!(active.len(), 3);
  assert_eq!(active[2].title, "Quarterly Staff Meeting");

  let later = s.active_announcements(now + TimeDelta::days(20)).await.unwrap();
  assert_eq!(later.len(), 1);
  assert_eq!(later[0].title, "New Bronchoscopy Protocol");

  let before = s.active_announcements(now - TimeDelta::days(1)).await.unwrap();
  assert!(before.is_empty());
}

#[tokio::test]
async fn clinical_load_newest_first() {
  let s = seeded().await;
  let load = s.clinical_load(3).await.unwrap();
  assert_eq!(load.len(), 3);
  assert_eq!(load[0].report_date, today());
  assert!(load[0].report_date > load[1].report_date);
  assert_eq!(s.clinical_load(30).await.unwrap().len(), 5);
}
