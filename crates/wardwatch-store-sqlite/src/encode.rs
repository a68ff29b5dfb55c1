//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns, plus the row mappers used by
//! every query.
//!
//! Dates are stored as `YYYY-MM-DD`, timestamps as `YYYY-MM-DD HH:MM:SS`
//! (the format `CURRENT_TIMESTAMP` produces). Labels are the lowercase
//! strings of the core enums. Booleans are 0/1 integers.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::{Row, types::Type};
use wardwatch_core::{
  bed::{Bed, BedAuditEntry, BedBoardEntry},
  ops::{Announcement, ClinicalLoadReport, Equipment, PredictiveAlert},
  patient::PatientEpisode,
  schedule::{CoverageRule, ScheduleEntry, ShiftSwapRequest},
  staff::{AbsenceRequest, MedicalStaff, StaffAvailability},
  unit::{DepartmentUnit, HospitalSystem},
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ─── Dates and timestamps ────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn encode_ts(ts: NaiveDateTime) -> String { ts.format(TIMESTAMP_FORMAT).to_string() }

/// Accepts the stored format, ISO 8601 with a `T` separator and optional
/// fraction, and bare dates (read as midnight).
pub fn decode_ts(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
  NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
    .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
    .or_else(|_| NaiveDate::parse_from_str(s, DATE_FORMAT).map(|d| d.and_time(NaiveTime::MIN)))
}

pub fn decode_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .or_else(|_| decode_ts(s).map(|ts| ts.date()))
}

fn conversion_error<E>(idx: usize, e: E) -> rusqlite::Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
}

// ─── Column readers ──────────────────────────────────────────────────────────

pub fn label<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
  T: FromStr<Err = wardwatch_core::Error>,
{
  let raw: String = row.get(idx)?;
  raw.parse().map_err(|e| conversion_error(idx, e))
}

pub fn opt_label<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>>
where
  T: FromStr<Err = wardwatch_core::Error>,
{
  let raw: Option<String> = row.get(idx)?;
  raw
    .map(|s| s.parse())
    .transpose()
    .map_err(|e| conversion_error(idx, e))
}

pub fn date(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDate> {
  let raw: String = row.get(idx)?;
  decode_date(&raw).map_err(|e| conversion_error(idx, e))
}

pub fn opt_date(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<NaiveDate>> {
  let raw: Option<String> = row.get(idx)?;
  raw
    .as_deref()
    .map(decode_date)
    .transpose()
    .map_err(|e| conversion_error(idx, e))
}

pub fn ts(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDateTime> {
  let raw: String = row.get(idx)?;
  decode_ts(&raw).map_err(|e| conversion_error(idx, e))
}

pub fn opt_ts(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<NaiveDateTime>> {
  let raw: Option<String> = row.get(idx)?;
  raw
    .as_deref()
    .map(decode_ts)
    .transpose()
    .map_err(|e| conversion_error(idx, e))
}

// ─── Row mappers ─────────────────────────────────────────────────────────────
//
// Each `*_COLUMNS` constant is the SELECT list its mapper reads by position.

pub const HOSPITAL_COLUMNS: &str =
  "id, hospital_name, chief_of_department, system_version, emergency_contact, created_at";

pub fn hospital_from_row(row: &Row<'_>) -> rusqlite::Result<HospitalSystem> {
  Ok(HospitalSystem {
    id:                  row.get(0)?,
    hospital_name:       row.get(1)?,
    chief_of_department: row.get(2)?,
    system_version:      row.get(3)?,
    emergency_contact:   row.get(4)?,
    created_at:          ts(row, 5)?,
  })
}

pub const UNIT_COLUMNS: &str = "id, name, code, specialty, color_code, icon, description, \
  total_beds, available_beds, standby_beds, vent_capable_beds, negative_pressure_rooms, \
  is_procedure_capable, status, is_active, unit_phone, unit_location, created_at";

pub fn unit_from_row(row: &Row<'_>) -> rusqlite::Result<DepartmentUnit> {
  Ok(DepartmentUnit {
    id:                      row.get(0)?,
    name:                    row.get(1)?,
    code:                    row.get(2)?,
    specialty:               row.get(3)?,
    color_code:              row.get(4)?,
    icon:                    row.get(5)?,
    description:             row.get(6)?,
    total_beds:              row.get(7)?,
    available_beds:          row.get(8)?,
    standby_beds:            row.get(9)?,
    vent_capable_beds:       row.get(10)?,
    negative_pressure_rooms: row.get(11)?,
    is_procedure_capable:    row.get(12)?,
    status:                  label(row, 13)?,
    is_active:               row.get(14)?,
    unit_phone:              row.get(15)?,
    unit_location:           row.get(16)?,
    created_at:              ts(row, 17)?,
  })
}

pub const STAFF_COLUMNS: &str = "id, first_name, last_name, title, staff_code, specialization, \
  sub_specialization, qualifications, license_number, years_experience, primary_unit_id, \
  secondary_units, role, email, phone, emergency_contact, emergency_contact_priority, \
  rapid_response_capable, backup_units, current_status, is_on_call, vent_trained, \
  procedure_trained, competencies, is_active, preferred_shift, absence_type, absence_start, \
  absence_end, absence_reason, guardia_count, last_guardia_date, created_at";

pub fn staff_from_row(row: &Row<'_>) -> rusqlite::Result<MedicalStaff> {
  Ok(MedicalStaff {
    id:                         row.get(0)?,
    first_name:                 row.get(1)?,
    last_name:                  row.get(2)?,
    title:                      row.get(3)?,
    staff_code:                 row.get(4)?,
    specialization:             row.get(5)?,
    sub_specialization:         row.get(6)?,
    qualifications:             row.get(7)?,
    license_number:             row.get(8)?,
    years_experience:           row.get(9)?,
    primary_unit_id:            row.get(10)?,
    secondary_units:            row.get(11)?,
    role:                       label(row, 12)?,
    email:                      row.get(13)?,
    phone:                      row.get(14)?,
    emergency_contact:          row.get(15)?,
    emergency_contact_priority: row.get(16)?,
    rapid_response_capable:     row.get(17)?,
    backup_units:               row.get(18)?,
    current_status:             label(row, 19)?,
    is_on_call:                 row.get(20)?,
    vent_trained:               row.get(21)?,
    procedure_trained:          row.get(22)?,
    competencies:               row.get(23)?,
    is_active:                  row.get(24)?,
    preferred_shift:            opt_label(row, 25)?,
    absence_type:               opt_label(row, 26)?,
    absence_start:              opt_date(row, 27)?,
    absence_end:                opt_date(row, 28)?,
    absence_reason:             row.get(29)?,
    guardia_count:              row.get(30)?,
    last_guardia_date:          opt_date(row, 31)?,
    created_at:                 ts(row, 32)?,
  })
}

pub const AVAILABILITY_COLUMNS: &str =
  "id, first_name, last_name, role, current_status, is_on_call";

pub fn availability_from_row(row: &Row<'_>) -> rusqlite::Result<StaffAvailability> {
  Ok(StaffAvailability {
    id:             row.get(0)?,
    first_name:     row.get(1)?,
    last_name:      row.get(2)?,
    role:           label(row, 3)?,
    current_status: label(row, 4)?,
    is_on_call:     row.get(5)?,
  })
}

/// Reads `absence_requests ar JOIN medical_staff ms`.
pub const ABSENCE_COLUMNS: &str = "ar.id, ar.staff_id, ms.first_name || ' ' || ms.last_name, \
  ar.request_type, ar.start_date, ar.end_date, ar.reason, ar.status, ar.approved_by, \
  ar.approved_at, ar.coverage_notes, ar.created_at";

pub fn absence_from_row(row: &Row<'_>) -> rusqlite::Result<AbsenceRequest> {
  Ok(AbsenceRequest {
    id:             row.get(0)?,
    staff_id:       row.get(1)?,
    staff_name:     row.get(2)?,
    request_type:   label(row, 3)?,
    start_date:     date(row, 4)?,
    end_date:       date(row, 5)?,
    reason:         row.get(6)?,
    status:         label(row, 7)?,
    approved_by:    row.get(8)?,
    approved_at:    opt_ts(row, 9)?,
    coverage_notes: row.get(10)?,
    created_at:     ts(row, 11)?,
  })
}

/// Reads `staff_schedule_view`.
pub const SCHEDULE_COLUMNS: &str = "id, schedule_date, shift_type, status, staff_id, staff_name, \
  staff_code, role, unit_id, unit_name, unit_code, notes, coverage_met, requires_attention, \
  attention_reason";

pub fn schedule_from_row(row: &Row<'_>) -> rusqlite::Result<ScheduleEntry> {
  Ok(ScheduleEntry {
    id:                 row.get(0)?,
    schedule_date:      date(row, 1)?,
    shift_type:         label(row, 2)?,
    status:             label(row, 3)?,
    staff_id:           row.get(4)?,
    staff_name:         row.get(5)?,
    staff_code:         row.get(6)?,
    role:               label(row, 7)?,
    unit_id:            row.get(8)?,
    unit_name:          row.get(9)?,
    unit_code:          row.get(10)?,
    notes:              row.get(11)?,
    coverage_met:       row.get(12)?,
    requires_attention: row.get(13)?,
    attention_reason:   row.get(14)?,
  })
}

pub const SWAP_COLUMNS: &str = "id, original_shift_id, requesting_staff_id, \
  potential_swap_staff_id, status, reason, requires_chief_approval, chief_approved, created_at";

pub fn swap_from_row(row: &Row<'_>) -> rusqlite::Result<ShiftSwapRequest> {
  Ok(ShiftSwapRequest {
    id:                      row.get(0)?,
    original_shift_id:       row.get(1)?,
    requesting_staff_id:     row.get(2)?,
    potential_swap_staff_id: row.get(3)?,
    status:                  label(row, 4)?,
    reason:                  row.get(5)?,
    requires_chief_approval: row.get(6)?,
    chief_approved:          row.get(7)?,
    created_at:              ts(row, 8)?,
  })
}

pub const COVERAGE_RULE_COLUMNS: &str = "id, unit_id, shift_type, min_senior_consultants, \
  min_consultants, min_vent_trained, min_procedure_trained, is_critical_coverage";

/// Reads the eight rule columns starting at `offset`.
pub fn coverage_rule_at(row: &Row<'_>, offset: usize) -> rusqlite::Result<CoverageRule> {
  Ok(CoverageRule {
    id:                     row.get(offset)?,
    unit_id:                row.get(offset + 1)?,
    shift_type:             label(row, offset + 2)?,
    min_senior_consultants: row.get(offset + 3)?,
    min_consultants:        row.get(offset + 4)?,
    min_vent_trained:       row.get(offset + 5)?,
    min_procedure_trained:  row.get(offset + 6)?,
    is_critical_coverage:   row.get(offset + 7)?,
  })
}

pub const BED_COLUMNS: &str = "id, room_code, bed_number, display_name, status, patient_id, \
  clinical_needs, equipment, last_updated, updated_by, notes";

pub fn bed_from_row(row: &Row<'_>) -> rusqlite::Result<Bed> {
  Ok(Bed {
    id:             row.get(0)?,
    room_code:      row.get(1)?,
    bed_number:     row.get(2)?,
    display_name:   row.get(3)?,
    status:         label(row, 4)?,
    patient_id:     row.get(5)?,
    clinical_needs: row.get(6)?,
    equipment:      row.get(7)?,
    last_updated:   ts(row, 8)?,
    updated_by:     row.get(9)?,
    notes:          row.get(10)?,
  })
}

/// Reads `bed_management_view`.
pub const BOARD_COLUMNS: &str = "id, room_code, bed_number, display_name, status, \
  clinical_needs, equipment, last_updated, patient_code, acuity_level, attending_doctor";

pub fn board_from_row(row: &Row<'_>) -> rusqlite::Result<BedBoardEntry> {
  Ok(BedBoardEntry {
    id:               row.get(0)?,
    room_code:        row.get(1)?,
    bed_number:       row.get(2)?,
    display_name:     row.get(3)?,
    status:           label(row, 4)?,
    clinical_needs:   row.get(5)?,
    equipment:        row.get(6)?,
    last_updated:     ts(row, 7)?,
    patient_code:     row.get(8)?,
    acuity_level:     opt_label(row, 9)?,
    attending_doctor: row.get(10)?,
  })
}

pub const AUDIT_COLUMNS: &str =
  "id, bed_id, old_status, new_status, updated_by, update_reason, patient_id, timestamp";

pub fn audit_from_row(row: &Row<'_>) -> rusqlite::Result<BedAuditEntry> {
  Ok(BedAuditEntry {
    id:            row.get(0)?,
    bed_id:        row.get(1)?,
    old_status:    opt_label(row, 2)?,
    new_status:    label(row, 3)?,
    updated_by:    row.get(4)?,
    update_reason: row.get(5)?,
    patient_id:    row.get(6)?,
    timestamp:     ts(row, 7)?,
  })
}

pub const PATIENT_COLUMNS: &str = "id, patient_code, anonymous_id, age_group, \
  primary_diagnosis, secondary_diagnoses, acuity_level, current_bed_id, current_unit_id, \
  attending_doctor_id, admission_type, admission_source, admission_datetime, \
  expected_length_of_stay, treatment_phase, special_requirements, predicted_discharge, \
  discharge_ready, discharge_notes, current_status, status_history";

pub fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<PatientEpisode> {
  Ok(PatientEpisode {
    id:                      row.get(0)?,
    patient_code:            row.get(1)?,
    anonymous_id:            row.get(2)?,
    age_group:               opt_label(row, 3)?,
    primary_diagnosis:       row.get(4)?,
    secondary_diagnoses:     row.get(5)?,
    acuity_level:            label(row, 6)?,
    current_bed_id:          row.get(7)?,
    current_unit_id:         row.get(8)?,
    attending_doctor_id:     row.get(9)?,
    admission_type:          opt_label(row, 10)?,
    admission_source:        row.get(11)?,
    admission_datetime:      ts(row, 12)?,
    expected_length_of_stay: row.get(13)?,
    treatment_phase:         row.get(14)?,
    special_requirements:    row.get(15)?,
    predicted_discharge:     opt_ts(row, 16)?,
    discharge_ready:         row.get(17)?,
    discharge_notes:         row.get(18)?,
    current_status:          label(row, 19)?,
    status_history:          row.get(20)?,
  })
}

pub const EQUIPMENT_COLUMNS: &str = "id, equipment_type, model, serial_number, status, \
  current_location, maintenance_due, last_service_date, capabilities, notes";

pub fn equipment_from_row(row: &Row<'_>) -> rusqlite::Result<Equipment> {
  Ok(Equipment {
    id:                row.get(0)?,
    equipment_type:    row.get(1)?,
    model:             row.get(2)?,
    serial_number:     row.get(3)?,
    status:            label(row, 4)?,
    current_location:  row.get(5)?,
    maintenance_due:   opt_date(row, 6)?,
    last_service_date: opt_date(row, 7)?,
    capabilities:      row.get(8)?,
    notes:             row.get(9)?,
  })
}

pub const ALERT_COLUMNS: &str = "id, alert_code, alert_type, alert_category, severity, title, \
  detailed_message, suggested_actions, target_units, target_roles, related_bed_id, \
  related_staff_id, triggered_at, predicted_event_time, confidence_score, acknowledged, \
  acknowledged_by, acknowledged_at, resolved, resolved_by, resolved_at, resolution_notes";

pub fn alert_from_row(row: &Row<'_>) -> rusqlite::Result<PredictiveAlert> {
  Ok(PredictiveAlert {
    id:                   row.get(0)?,
    alert_code:           row.get(1)?,
    alert_type:           row.get(2)?,
    alert_category:       row.get(3)?,
    severity:             label(row, 4)?,
    title:                row.get(5)?,
    detailed_message:     row.get(6)?,
    suggested_actions:    row.get(7)?,
    target_units:         row.get(8)?,
    target_roles:         row.get(9)?,
    related_bed_id:       row.get(10)?,
    related_staff_id:     row.get(11)?,
    triggered_at:         ts(row, 12)?,
    predicted_event_time: opt_ts(row, 13)?,
    confidence_score:     row.get(14)?,
    acknowledged:         row.get(15)?,
    acknowledged_by:      row.get(16)?,
    acknowledged_at:      opt_ts(row, 17)?,
    resolved:             row.get(18)?,
    resolved_by:          row.get(19)?,
    resolved_at:          opt_ts(row, 20)?,
    resolution_notes:     row.get(21)?,
  })
}

pub const ANNOUNCEMENT_COLUMNS: &str = "id, title, message, message_type, target_audience, \
  target_units, target_roles, priority_level, effective_from, effective_until, posted_by, \
  requires_acknowledgment, acknowledgment_count";

pub fn announcement_from_row(row: &Row<'_>) -> rusqlite::Result<Announcement> {
  Ok(Announcement {
    id:                      row.get(0)?,
    title:                   row.get(1)?,
    message:                 row.get(2)?,
    message_type:            label(row, 3)?,
    target_audience:         label(row, 4)?,
    target_units:            row.get(5)?,
    target_roles:            row.get(6)?,
    priority_level:          label(row, 7)?,
    effective_from:          ts(row, 8)?,
    effective_until:         opt_ts(row, 9)?,
    posted_by:               row.get(10)?,
    requires_acknowledgment: row.get(11)?,
    acknowledgment_count:    row.get(12)?,
  })
}

pub const CLINICAL_LOAD_COLUMNS: &str = "id, report_date, total_patients, new_admissions, \
  expected_discharges, vent_patients, high_flow_o2_patients, procedure_scheduled, \
  reported_by, clinical_notes";

pub fn clinical_load_from_row(row: &Row<'_>) -> rusqlite::Result<ClinicalLoadReport> {
  Ok(ClinicalLoadReport {
    id:                    row.get(0)?,
    report_date:           date(row, 1)?,
    total_patients:        row.get(2)?,
    new_admissions:        row.get(3)?,
    expected_discharges:   row.get(4)?,
    vent_patients:         row.get(5)?,
    high_flow_o2_patients: row.get(6)?,
    procedure_scheduled:   row.get(7)?,
    reported_by:           row.get(8)?,
    clinical_notes:        row.get(9)?,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn timestamps_accept_stored_iso_and_date_forms() {
    let expected = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap().and_hms_opt(13, 4, 5).unwrap();
    assert_eq!(decode_ts("2024-05-02 13:04:05").unwrap(), expected);
    assert_eq!(decode_ts("2024-05-02T13:04:05.250").unwrap().date(), expected.date());
    assert_eq!(decode_ts("2024-05-02").unwrap().time(), NaiveTime::MIN);
    assert!(decode_ts("yesterday").is_err());
  }

  #[test]
  fn encoded_timestamp_decodes_to_itself() {
    let ts = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap().and_hms_opt(23, 59, 0).unwrap();
    assert_eq!(decode_ts(&encode_ts(ts)).unwrap(), ts);
    assert_eq!(decode_date(&encode_date(ts.date())).unwrap(), ts.date());
  }
}
