//! [`SqliteStore`], the SQLite implementation of [`OpsStore`].

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::{Connection, OptionalExtension as _, Params, Row, params};

use wardwatch_core::{
  bed::{Bed, BedAuditEntry, BedBoardEntry, BedStatusChange},
  bootstrap::{BootstrapOptions, BootstrapOutcome, DatabaseStatus},
  census::Census,
  enums::{EquipmentStatus, PatientStatus, RequestStatus, ShiftType},
  ops::{Announcement, ClinicalLoadReport, Equipment, PredictiveAlert},
  patient::PatientEpisode,
  schedule::{CoverageRule, CoverageStatus, ScheduleEntry, ScheduledCounts, ShiftSwapRequest},
  staff::{AbsenceRequest, MedicalStaff, StaffAvailability},
  store::{BedQuery, OpsStore, Page, ScheduleQuery, StaffQuery},
  unit::{DepartmentUnit, HospitalSystem},
};

use crate::{
  Result,
  encode::{
    ABSENCE_COLUMNS, ALERT_COLUMNS, ANNOUNCEMENT_COLUMNS, AUDIT_COLUMNS, AVAILABILITY_COLUMNS,
    BED_COLUMNS, BOARD_COLUMNS, CLINICAL_LOAD_COLUMNS, COVERAGE_RULE_COLUMNS, EQUIPMENT_COLUMNS,
    HOSPITAL_COLUMNS, PATIENT_COLUMNS, SCHEDULE_COLUMNS, STAFF_COLUMNS, SWAP_COLUMNS,
    UNIT_COLUMNS, absence_from_row, alert_from_row, announcement_from_row, audit_from_row,
    availability_from_row, bed_from_row, board_from_row, clinical_load_from_row,
    coverage_rule_at, encode_date, encode_ts, equipment_from_row, hospital_from_row,
    patient_from_row, schedule_from_row, staff_from_row, swap_from_row, unit_from_row,
  },
  schema::{CONNECTION_PRAGMAS, REQUIRED_TABLES, SCHEMA},
  seed,
};

// ─── Ordering fragments ──────────────────────────────────────────────────────

const ROLE_RANK: &str = "CASE role WHEN 'chief' THEN 0 WHEN 'senior_consultant' THEN 1 \
  WHEN 'consultant' THEN 2 ELSE 3 END";

const SEVERITY_RANK: &str = "CASE severity WHEN 'critical' THEN 3 WHEN 'high' THEN 2 \
  WHEN 'medium' THEN 1 ELSE 0 END";

const PRIORITY_RANK: &str = "CASE priority_level WHEN 'urgent' THEN 3 WHEN 'high' THEN 2 \
  WHEN 'normal' THEN 1 ELSE 0 END";

const ACUITY_RANK: &str = "CASE acuity_level WHEN 'critical' THEN 0 WHEN 'guarded' THEN 1 \
  ELSE 2 END";

/// Room and bed codes share a letter prefix, so ordering by length first
/// puts `H2` before `H10`.
const BED_ORDER: &str = "length(room_code), room_code, length(bed_number), bed_number";

fn shift_rank(column: &str) -> String {
  format!(
    "CASE {column} WHEN 'morning' THEN 0 WHEN 'evening' THEN 1 WHEN 'night' THEN 2 ELSE 3 END"
  )
}

/// SQL predicate: a guardia of type `guardia` staffs the regular shift
/// `rule`, following [`ShiftType::covers`].
fn shift_covered(rule: &str, guardia: &str) -> String {
  let arms: String = ShiftType::ALL
    .iter()
    .map(|&shift| {
      let covering = ShiftType::ALL
        .iter()
        .filter(|g| g.covers(shift))
        .map(|g| format!("'{g}'"))
        .collect::<Vec<_>>()
        .join(", ");
      format!(" WHEN '{shift}' THEN {guardia} IN ({covering})")
    })
    .collect();
  format!("CASE {rule}{arms} ELSE 0 END")
}

/// Staff counted by the coverage check: schedules that still stand.
const COUNTED_SCHEDULE_STATUSES: &str = "('scheduled', 'completed', 'swapped')";

fn query_all<T, P, F>(conn: &Connection, sql: &str, params: P, f: F) -> rusqlite::Result<Vec<T>>
where
  P: Params,
  F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
  let mut stmt = conn.prepare(sql)?;
  let rows = stmt.query_map(params, f)?.collect();
  rows
}

fn count(conn: &Connection, sql: &str) -> rusqlite::Result<i64> {
  conn.query_row(sql, [], |r| r.get(0))
}

/// Required tables present in the database, in [`REQUIRED_TABLES`] order.
fn existing_tables(conn: &Connection) -> rusqlite::Result<Vec<String>> {
  let present =
    query_all(conn, "SELECT name FROM sqlite_master WHERE type = 'table'", [], |r| {
      r.get::<_, String>(0)
    })?;
  Ok(
    REQUIRED_TABLES
      .iter()
      .filter(|t| present.iter().any(|p| p == *t))
      .map(|t| (*t).to_owned())
      .collect(),
  )
}

fn now_ts() -> String { encode_ts(Utc::now().naive_utc()) }

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Wardwatch operations store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Opening does
/// not create the schema, [`OpsStore::bootstrap`] does.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) the database file at `path`.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::configure(conn).await
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::configure(conn).await
  }

  async fn configure(conn: tokio_rusqlite::Connection) -> Result<Self> {
    conn
      .call(|conn| {
        conn.execute_batch(CONNECTION_PRAGMAS)?;
        Ok(())
      })
      .await?;
    Ok(Self { conn })
  }

  /// Run raw SQL against the store, for arranging test fixtures.
  #[cfg(test)]
  pub(crate) async fn execute_batch(&self, sql: &'static str) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(sql)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── OpsStore impl ───────────────────────────────────────────────────────────

impl OpsStore for SqliteStore {
  type Error = crate::Error;

  // ── Bootstrap ─────────────────────────────────────────────────────────────

  async fn bootstrap(&self, options: BootstrapOptions) -> Result<BootstrapOutcome> {
    let BootstrapOptions { seed_sample_data, today } = options;

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let created = existing_tables(&tx)?.len() < REQUIRED_TABLES.len();
        if created {
          tracing::info!("required tables missing, creating schema");
          tx.execute_batch(SCHEMA)?;
        }

        let empty = count(&tx, "SELECT COUNT(*) FROM medical_staff")? == 0;
        let seeded = empty && seed_sample_data;
        if seeded {
          seed::seed(&tx, today)?;
          seed::validate(&tx, today)?;
        }

        tx.commit()?;

        Ok(match (created, seeded, empty) {
          (true, true, _) => BootstrapOutcome::CreatedAndSeeded,
          (true, false, _) => BootstrapOutcome::Created,
          (false, true, _) => BootstrapOutcome::Seeded,
          (false, false, true) => BootstrapOutcome::Empty,
          (false, false, false) => BootstrapOutcome::AlreadyPopulated,
        })
      })
      .await?;

    tracing::info!(?outcome, "bootstrap finished");
    Ok(outcome)
  }

  async fn database_status(&self) -> Result<DatabaseStatus> {
    let status = self
      .conn
      .call(|conn| {
        let tables_found = existing_tables(conn)?;
        let has = |t: &str| tables_found.iter().any(|f| f == t);

        let staff_count = if has("medical_staff") {
          count(conn, "SELECT COUNT(*) FROM medical_staff")?
        } else {
          0
        };
        let beds_count = if has("enhanced_beds") {
          count(conn, "SELECT COUNT(*) FROM enhanced_beds")?
        } else {
          0
        };

        Ok(DatabaseStatus {
          tables_exist: tables_found.len() == REQUIRED_TABLES.len(),
          tables_found,
          staff_count,
          beds_count,
          needs_initialization: staff_count == 0,
        })
      })
      .await?;
    Ok(status)
  }

  // ── Hospital & units ──────────────────────────────────────────────────────

  async fn hospital_system(&self) -> Result<Option<HospitalSystem>> {
    let hospital = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {HOSPITAL_COLUMNS} FROM hospital_system ORDER BY id LIMIT 1"),
              [],
              hospital_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(hospital)
  }

  async fn list_units(&self, active_only: bool) -> Result<Vec<DepartmentUnit>> {
    let units = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {UNIT_COLUMNS} FROM department_units
           WHERE (?1 = 0 OR is_active = 1)
           ORDER BY name"
        );
        Ok(query_all(conn, &sql, params![active_only], unit_from_row)?)
      })
      .await?;
    Ok(units)
  }

  async fn get_unit(&self, id: i64) -> Result<Option<DepartmentUnit>> {
    let unit = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {UNIT_COLUMNS} FROM department_units WHERE id = ?1"),
              params![id],
              unit_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(unit)
  }

  // ── Staff ─────────────────────────────────────────────────────────────────

  async fn list_staff(&self, query: StaffQuery) -> Result<Vec<MedicalStaff>> {
    let StaffQuery { unit_id, on_call, page } = query;

    let staff = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {STAFF_COLUMNS} FROM medical_staff
           WHERE is_active = 1
             AND (?1 IS NULL OR primary_unit_id = ?1)
             AND (?2 IS NULL OR is_on_call = ?2)
           ORDER BY {ROLE_RANK}, last_name
           LIMIT ?3 OFFSET ?4"
        );
        Ok(query_all(
          conn,
          &sql,
          params![unit_id, on_call, page.limit(), page.offset()],
          staff_from_row,
        )?)
      })
      .await?;
    Ok(staff)
  }

  async fn staff_availability(&self) -> Result<Vec<StaffAvailability>> {
    let availability = self
      .conn
      .call(|conn| {
        let sql = format!(
          "SELECT {AVAILABILITY_COLUMNS} FROM medical_staff
           WHERE is_active = 1
           ORDER BY {ROLE_RANK}, last_name"
        );
        Ok(query_all(conn, &sql, [], availability_from_row)?)
      })
      .await?;
    Ok(availability)
  }

  async fn list_absences(&self, status: Option<RequestStatus>) -> Result<Vec<AbsenceRequest>> {
    let status = status.map(RequestStatus::as_str);

    let absences = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {ABSENCE_COLUMNS}
           FROM absence_requests ar
           JOIN medical_staff ms ON ms.id = ar.staff_id
           WHERE (?1 IS NULL OR ar.status = ?1)
           ORDER BY ar.start_date DESC, ar.id DESC"
        );
        Ok(query_all(conn, &sql, params![status], absence_from_row)?)
      })
      .await?;
    Ok(absences)
  }

  // ── Schedules & coverage ──────────────────────────────────────────────────

  async fn list_schedules(&self, query: ScheduleQuery) -> Result<Vec<ScheduleEntry>> {
    let date = query.date.map(encode_date);
    let unit_id = query.unit_id;

    let schedules = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {SCHEDULE_COLUMNS} FROM staff_schedule_view
           WHERE (?1 IS NULL OR schedule_date = ?1)
             AND (?2 IS NULL OR unit_id = ?2)
           ORDER BY schedule_date, {}, unit_id",
          shift_rank("shift_type"),
        );
        Ok(query_all(conn, &sql, params![date, unit_id], schedule_from_row)?)
      })
      .await?;
    Ok(schedules)
  }

  async fn list_swap_requests(
    &self,
    status: Option<RequestStatus>,
  ) -> Result<Vec<ShiftSwapRequest>> {
    let status = status.map(RequestStatus::as_str);

    let swaps = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {SWAP_COLUMNS} FROM shift_swap_requests
           WHERE (?1 IS NULL OR status = ?1)
           ORDER BY created_at DESC, id DESC"
        );
        Ok(query_all(conn, &sql, params![status], swap_from_row)?)
      })
      .await?;
    Ok(swaps)
  }

  async fn list_coverage_rules(&self, unit_id: Option<i64>) -> Result<Vec<CoverageRule>> {
    let rules = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {COVERAGE_RULE_COLUMNS} FROM coverage_rules
           WHERE (?1 IS NULL OR unit_id = ?1)
           ORDER BY unit_id, {}",
          shift_rank("shift_type"),
        );
        Ok(query_all(conn, &sql, params![unit_id], |row| coverage_rule_at(row, 0))?)
      })
      .await?;
    Ok(rules)
  }

  async fn coverage_report(&self, date: NaiveDate) -> Result<Vec<CoverageStatus>> {
    let date_str = encode_date(date);

    let report = self
      .conn
      .call(move |conn| {
        // Each staff member counts once per rule, however many of their
        // guardias cover that shift.
        let covered = shift_covered("r.shift_type", "gs.shift_type");
        let order = shift_rank("cr.shift_type");
        let sql = format!(
          "SELECT cr.id, cr.unit_id, cr.shift_type, cr.min_senior_consultants,
                  cr.min_consultants, cr.min_vent_trained, cr.min_procedure_trained,
                  cr.is_critical_coverage,
                  du.name,
                  COALESCE(SUM(ms.role = 'senior_consultant'), 0),
                  COALESCE(SUM(ms.role IN ('consultant', 'senior_consultant')), 0),
                  COALESCE(SUM(ms.vent_trained), 0),
                  COALESCE(SUM(ms.procedure_trained), 0),
                  COUNT(ms.id)
           FROM coverage_rules cr
           JOIN department_units du ON du.id = cr.unit_id
           LEFT JOIN (
             SELECT DISTINCT r.id AS rule_id, gs.staff_id
             FROM coverage_rules r
             JOIN guardia_schedules gs
               ON gs.unit_id = r.unit_id
              AND gs.schedule_date = ?1
              AND gs.status IN {COUNTED_SCHEDULE_STATUSES}
              AND {covered}
           ) on_shift ON on_shift.rule_id = cr.id
           LEFT JOIN medical_staff ms ON ms.id = on_shift.staff_id AND ms.is_active = 1
           GROUP BY cr.id
           ORDER BY cr.unit_id, {order}"
        );
        Ok(query_all(conn, &sql, params![date_str], move |row| {
          Ok(CoverageStatus {
            date,
            rule: coverage_rule_at(row, 0)?,
            unit_name: row.get(8)?,
            scheduled: ScheduledCounts {
              senior_consultants: row.get(9)?,
              consultants:        row.get(10)?,
              vent_trained:       row.get(11)?,
              procedure_trained:  row.get(12)?,
              total:              row.get(13)?,
            },
          })
        })?)
      })
      .await?;
    Ok(report)
  }

  // ── Beds ──────────────────────────────────────────────────────────────────

  async fn list_beds(&self, query: BedQuery) -> Result<Vec<Bed>> {
    let BedQuery { status, room_code, page } = query;
    let status = status.map(|s| s.as_str());

    let beds = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {BED_COLUMNS} FROM enhanced_beds
           WHERE (?1 IS NULL OR status = ?1)
             AND (?2 IS NULL OR room_code = ?2)
           ORDER BY {BED_ORDER}
           LIMIT ?3 OFFSET ?4"
        );
        Ok(query_all(
          conn,
          &sql,
          params![status, room_code, page.limit(), page.offset()],
          bed_from_row,
        )?)
      })
      .await?;
    Ok(beds)
  }

  async fn get_bed(&self, id: i64) -> Result<Option<Bed>> {
    let bed = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {BED_COLUMNS} FROM enhanced_beds WHERE id = ?1"),
              params![id],
              bed_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(bed)
  }

  async fn bed_board(&self) -> Result<Vec<BedBoardEntry>> {
    let board = self
      .conn
      .call(|conn| {
        let sql = format!("SELECT {BOARD_COLUMNS} FROM bed_management_view ORDER BY {BED_ORDER}");
        Ok(query_all(conn, &sql, [], board_from_row)?)
      })
      .await?;
    Ok(board)
  }

  async fn update_bed_status(&self, id: i64, change: BedStatusChange) -> Result<Bed> {
    change.validate()?;
    let now = now_ts();
    let new_status = change.status;

    let updated: wardwatch_core::Result<Bed> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let current: Option<(String, Option<i64>)> = tx
          .query_row(
            "SELECT status, patient_id FROM enhanced_beds WHERE id = ?1",
            params![id],
            |r| Ok((r.get(0)?, r.get(1)?)),
          )
          .optional()?;
        let Some((old_status, current_patient)) = current else {
          return Ok(Err(wardwatch_core::Error::BedNotFound(id)));
        };

        let patient_id = change.resulting_patient(current_patient);

        tx.execute(
          "UPDATE enhanced_beds
           SET status = ?1, patient_id = ?2, updated_by = ?3,
               notes = COALESCE(?4, notes), last_updated = ?5
           WHERE id = ?6",
          params![change.status.as_str(), patient_id, change.updated_by, change.notes, now, id],
        )?;

        // Releasing a bed still records who was in it.
        tx.execute(
          "INSERT INTO bed_audit_trail
             (bed_id, old_status, new_status, updated_by, update_reason, patient_id, timestamp)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          params![
            id,
            old_status,
            change.status.as_str(),
            change.updated_by,
            change.reason,
            patient_id.or(current_patient),
            now,
          ],
        )?;

        let bed = tx.query_row(
          &format!("SELECT {BED_COLUMNS} FROM enhanced_beds WHERE id = ?1"),
          params![id],
          bed_from_row,
        )?;

        tx.commit()?;
        Ok(Ok(bed))
      })
      .await?;

    let bed = updated?;
    tracing::info!(bed_id = id, status = %new_status, "bed status updated");
    Ok(bed)
  }

  async fn bed_audit_trail(&self, bed_id: i64, page: Page) -> Result<Vec<BedAuditEntry>> {
    let trail = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {AUDIT_COLUMNS} FROM bed_audit_trail
           WHERE bed_id = ?1
           ORDER BY timestamp DESC, id DESC
           LIMIT ?2 OFFSET ?3"
        );
        Ok(query_all(
          conn,
          &sql,
          params![bed_id, page.limit(), page.offset()],
          audit_from_row,
        )?)
      })
      .await?;
    Ok(trail)
  }

  // ── Patients ──────────────────────────────────────────────────────────────

  async fn list_patients(&self, status: Option<PatientStatus>) -> Result<Vec<PatientEpisode>> {
    let status = status.map(PatientStatus::as_str);

    let patients = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {PATIENT_COLUMNS} FROM patient_flow
           WHERE (?1 IS NULL OR current_status = ?1)
           ORDER BY {ACUITY_RANK}, admission_datetime"
        );
        Ok(query_all(conn, &sql, params![status], patient_from_row)?)
      })
      .await?;
    Ok(patients)
  }

  // ── Equipment, alerts, announcements, load ────────────────────────────────

  async fn list_equipment(&self, status: Option<EquipmentStatus>) -> Result<Vec<Equipment>> {
    let status = status.map(EquipmentStatus::as_str);

    let equipment = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {EQUIPMENT_COLUMNS} FROM medical_equipment
           WHERE (?1 IS NULL OR status = ?1)
           ORDER BY equipment_type, status, serial_number"
        );
        Ok(query_all(conn, &sql, params![status], equipment_from_row)?)
      })
      .await?;
    Ok(equipment)
  }

  async fn active_alerts(&self) -> Result<Vec<PredictiveAlert>> {
    let alerts = self
      .conn
      .call(|conn| {
        let sql = format!(
          "SELECT {ALERT_COLUMNS} FROM predictive_alerts
           WHERE resolved = 0
           ORDER BY {SEVERITY_RANK} DESC, triggered_at DESC, id DESC"
        );
        Ok(query_all(conn, &sql, [], alert_from_row)?)
      })
      .await?;
    Ok(alerts)
  }

  async fn acknowledge_alert(&self, id: i64, by: String) -> Result<PredictiveAlert> {
    let now = now_ts();

    let acknowledged: wardwatch_core::Result<PredictiveAlert> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let state: Option<(bool, bool)> = tx
          .query_row(
            "SELECT acknowledged, resolved FROM predictive_alerts WHERE id = ?1",
            params![id],
            |r| Ok((r.get(0)?, r.get(1)?)),
          )
          .optional()?;
        match state {
          None => return Ok(Err(wardwatch_core::Error::AlertNotFound(id))),
          Some((_, true)) => return Ok(Err(wardwatch_core::Error::AlreadyResolved(id))),
          Some((true, _)) => return Ok(Err(wardwatch_core::Error::AlreadyAcknowledged(id))),
          Some((false, false)) => {}
        }

        tx.execute(
          "UPDATE predictive_alerts
           SET acknowledged = 1, acknowledged_by = ?1, acknowledged_at = ?2
           WHERE id = ?3",
          params![by, now, id],
        )?;
        let alert = tx.query_row(
          &format!("SELECT {ALERT_COLUMNS} FROM predictive_alerts WHERE id = ?1"),
          params![id],
          alert_from_row,
        )?;

        tx.commit()?;
        Ok(Ok(alert))
      })
      .await?;

    let alert = acknowledged?;
    tracing::info!(alert_id = id, "alert acknowledged");
    Ok(alert)
  }

  async fn resolve_alert(
    &self,
    id: i64,
    by: String,
    notes: Option<String>,
  ) -> Result<PredictiveAlert> {
    let now = now_ts();

    let resolved: wardwatch_core::Result<PredictiveAlert> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let resolved: Option<bool> = tx
          .query_row(
            "SELECT resolved FROM predictive_alerts WHERE id = ?1",
            params![id],
            |r| r.get(0),
          )
          .optional()?;
        match resolved {
          None => return Ok(Err(wardwatch_core::Error::AlertNotFound(id))),
          Some(true) => return Ok(Err(wardwatch_core::Error::AlreadyResolved(id))),
          Some(false) => {}
        }

        // Resolving implies acknowledging; an earlier acknowledgement is kept.
        tx.execute(
          "UPDATE predictive_alerts
           SET resolved = 1, resolved_by = ?1, resolved_at = ?2, resolution_notes = ?3,
               acknowledged_by = CASE acknowledged WHEN 1 THEN acknowledged_by ELSE ?1 END,
               acknowledged_at = CASE acknowledged WHEN 1 THEN acknowledged_at ELSE ?2 END,
               acknowledged = 1
           WHERE id = ?4",
          params![by, now, notes, id],
        )?;
        let alert = tx.query_row(
          &format!("SELECT {ALERT_COLUMNS} FROM predictive_alerts WHERE id = ?1"),
          params![id],
          alert_from_row,
        )?;

        tx.commit()?;
        Ok(Ok(alert))
      })
      .await?;

    let alert = resolved?;
    tracing::info!(alert_id = id, "alert resolved");
    Ok(alert)
  }

  async fn active_announcements(&self, now: NaiveDateTime) -> Result<Vec<Announcement>> {
    let now = encode_ts(now);

    let announcements = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {ANNOUNCEMENT_COLUMNS} FROM department_announcements
           WHERE effective_from <= ?1
             AND (effective_until IS NULL OR effective_until >= ?1)
           ORDER BY {PRIORITY_RANK} DESC, created_at DESC, id DESC"
        );
        Ok(query_all(conn, &sql, params![now], announcement_from_row)?)
      })
      .await?;
    Ok(announcements)
  }

  async fn clinical_load(&self, limit: u32) -> Result<Vec<ClinicalLoadReport>> {
    let load = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {CLINICAL_LOAD_COLUMNS} FROM daily_clinical_load
           ORDER BY report_date DESC
           LIMIT ?1"
        );
        Ok(query_all(conn, &sql, params![limit], clinical_load_from_row)?)
      })
      .await?;
    Ok(load)
  }

  async fn census(&self) -> Result<Census> {
    let census = self
      .conn
      .call(|conn| {
        Ok(conn.query_row(
          "SELECT
             (SELECT COUNT(*) FROM enhanced_beds),
             (SELECT COUNT(*) FROM enhanced_beds WHERE status = 'occupied'),
             (SELECT COUNT(*) FROM medical_staff WHERE is_active = 1),
             (SELECT COUNT(*) FROM medical_staff WHERE is_active = 1 AND is_on_call = 1)",
          [],
          |r| {
            Ok(Census {
              total_beds:    r.get(0)?,
              occupied_beds: r.get(1)?,
              active_staff:  r.get(2)?,
              on_call_staff: r.get(3)?,
            })
          },
        )?)
      })
      .await?;
    Ok(census)
  }
}
