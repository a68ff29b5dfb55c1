//! Medical staff and their absence requests.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::{
  AbsenceRequestType, AbsenceType, PreferredShift, RequestStatus, StaffRole, StaffStatus,
};

/// A personnel record.
///
/// `secondary_units`, `backup_units` and `competencies` are comma-separated
/// lists kept verbatim as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalStaff {
  pub id:                         i64,
  pub first_name:                 String,
  pub last_name:                  String,
  pub title:                      Option<String>,
  /// Human-facing staff code, e.g. `DR001`.
  pub staff_code:                 String,
  pub specialization:             String,
  pub sub_specialization:         Option<String>,
  pub qualifications:             Option<String>,
  pub license_number:             Option<String>,
  pub years_experience:           i64,
  pub primary_unit_id:            Option<i64>,
  pub secondary_units:            Option<String>,
  pub role:                       StaffRole,
  pub email:                      Option<String>,
  pub phone:                      Option<String>,
  pub emergency_contact:          Option<String>,
  pub emergency_contact_priority: i64,
  pub rapid_response_capable:     bool,
  pub backup_units:               Option<String>,
  pub current_status:             StaffStatus,
  pub is_on_call:                 bool,
  pub vent_trained:               bool,
  pub procedure_trained:          bool,
  pub competencies:               Option<String>,
  pub is_active:                  bool,
  pub preferred_shift:            Option<PreferredShift>,
  pub absence_type:               Option<AbsenceType>,
  pub absence_start:              Option<NaiveDate>,
  pub absence_end:                Option<NaiveDate>,
  pub absence_reason:             Option<String>,
  pub guardia_count:              i64,
  pub last_guardia_date:          Option<NaiveDate>,
  pub created_at:                 NaiveDateTime,
}

/// The narrow projection served by the availability board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffAvailability {
  pub id:             i64,
  pub first_name:     String,
  pub last_name:      String,
  pub role:           StaffRole,
  pub current_status: StaffStatus,
  pub is_on_call:     bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceRequest {
  pub id:             i64,
  pub staff_id:       i64,
  /// Joined from `medical_staff`.
  pub staff_name:     String,
  pub request_type:   AbsenceRequestType,
  pub start_date:     NaiveDate,
  pub end_date:       NaiveDate,
  pub reason:         String,
  pub status:         RequestStatus,
  pub approved_by:    Option<String>,
  pub approved_at:    Option<NaiveDateTime>,
  pub coverage_notes: Option<String>,
  pub created_at:     NaiveDateTime,
}
