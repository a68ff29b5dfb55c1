//! Patient episodes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::{AcuityLevel, AdmissionType, AgeGroup, PatientStatus};

/// One admission of an (anonymised) patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientEpisode {
  pub id:                      i64,
  pub patient_code:            String,
  pub anonymous_id:            Option<String>,
  pub age_group:               Option<AgeGroup>,
  pub primary_diagnosis:       Option<String>,
  pub secondary_diagnoses:     Option<String>,
  pub acuity_level:            AcuityLevel,
  pub current_bed_id:          Option<i64>,
  pub current_unit_id:         Option<i64>,
  pub attending_doctor_id:     Option<i64>,
  pub admission_type:          Option<AdmissionType>,
  pub admission_source:        Option<String>,
  pub admission_datetime:      NaiveDateTime,
  pub expected_length_of_stay: Option<i64>,
  pub treatment_phase:         Option<String>,
  pub special_requirements:    Option<String>,
  pub predicted_discharge:     Option<NaiveDateTime>,
  pub discharge_ready:         bool,
  pub discharge_notes:         Option<String>,
  pub current_status:          PatientStatus,
  pub status_history:          Option<String>,
}
