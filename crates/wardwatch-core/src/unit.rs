//! Hospital configuration and department units.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::UnitStatus;

/// The singleton configuration row describing the hospital.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalSystem {
  pub id:                  i64,
  pub hospital_name:       String,
  pub chief_of_department: String,
  pub system_version:      String,
  pub emergency_contact:   Option<String>,
  pub created_at:          NaiveDateTime,
}

/// A named organisational unit with its bed-capacity counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentUnit {
  pub id:                      i64,
  pub name:                    String,
  pub code:                    String,
  pub specialty:               String,
  pub color_code:              Option<String>,
  pub icon:                    Option<String>,
  pub description:             Option<String>,
  pub total_beds:              i64,
  pub available_beds:          i64,
  pub standby_beds:            i64,
  pub vent_capable_beds:       i64,
  pub negative_pressure_rooms: i64,
  pub is_procedure_capable:    bool,
  pub status:                  UnitStatus,
  pub is_active:               bool,
  pub unit_phone:              Option<String>,
  pub unit_location:           Option<String>,
  pub created_at:              NaiveDateTime,
}
