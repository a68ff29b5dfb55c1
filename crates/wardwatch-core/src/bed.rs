//! Bed inventory, status transitions, and the audit trail.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  enums::{AcuityLevel, BedStatus},
};

/// A bed in the occupancy inventory, keyed by `(room_code, bed_number)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bed {
  pub id:             i64,
  pub room_code:      String,
  pub bed_number:     String,
  pub display_name:   Option<String>,
  pub status:         BedStatus,
  pub patient_id:     Option<i64>,
  /// Comma-separated, e.g. `oxygen,monitoring`.
  pub clinical_needs: Option<String>,
  /// Comma-separated, e.g. `ventilator,high_flow`.
  pub equipment:      Option<String>,
  pub last_updated:   NaiveDateTime,
  pub updated_by:     Option<String>,
  pub notes:          Option<String>,
}

/// A bed joined with its current patient and attending doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedBoardEntry {
  pub id:               i64,
  pub room_code:        String,
  pub bed_number:       String,
  pub display_name:     Option<String>,
  pub status:           BedStatus,
  pub clinical_needs:   Option<String>,
  pub equipment:        Option<String>,
  pub last_updated:     NaiveDateTime,
  pub patient_code:     Option<String>,
  pub acuity_level:     Option<AcuityLevel>,
  pub attending_doctor: Option<String>,
}

/// One row of the append-only `bed_audit_trail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedAuditEntry {
  pub id:            i64,
  pub bed_id:        i64,
  pub old_status:    Option<BedStatus>,
  pub new_status:    BedStatus,
  pub updated_by:    String,
  pub update_reason: Option<String>,
  pub patient_id:    Option<i64>,
  pub timestamp:     NaiveDateTime,
}

/// A requested transition of a bed to a new status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedStatusChange {
  pub status:     BedStatus,
  #[serde(default)]
  pub patient_id: Option<i64>,
  pub updated_by: String,
  #[serde(default)]
  pub reason:     Option<String>,
  #[serde(default)]
  pub notes:      Option<String>,
}

impl BedStatusChange {
  /// Reject changes the schema triggers would abort anyway, plus an
  /// anonymous author (the audit trail requires one).
  pub fn validate(&self) -> Result<()> {
    if self.updated_by.trim().is_empty() {
      return Err(Error::Blank("updated_by"));
    }
    if self.patient_id.is_some() && self.status != BedStatus::Occupied {
      return Err(Error::PatientOnUnoccupiedBed(self.status));
    }
    Ok(())
  }

  /// The patient to store on the bed. Leaving `occupied` releases the bed.
  pub fn resulting_patient(&self, current: Option<i64>) -> Option<i64> {
    match self.status {
      BedStatus::Occupied => self.patient_id.or(current),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn change(status: BedStatus, patient_id: Option<i64>) -> BedStatusChange {
    BedStatusChange {
      status,
      patient_id,
      updated_by: "nurse.kim".into(),
      reason: None,
      notes: None,
    }
  }

  #[test]
  fn patient_on_cleaning_bed_is_rejected() {
    let err = change(BedStatus::Cleaning, Some(4)).validate().unwrap_err();
    assert!(matches!(err, Error::PatientOnUnoccupiedBed(BedStatus::Cleaning)));
  }

  #[test]
  fn blank_author_is_rejected() {
    let mut c = change(BedStatus::Empty, None);
    c.updated_by = "   ".into();
    assert!(matches!(c.validate(), Err(Error::Blank("updated_by"))));
  }

  #[test]
  fn occupying_keeps_existing_patient_unless_replaced() {
    assert_eq!(change(BedStatus::Occupied, None).resulting_patient(Some(7)), Some(7));
    assert_eq!(change(BedStatus::Occupied, Some(9)).resulting_patient(Some(7)), Some(9));
  }

  #[test]
  fn releasing_a_bed_clears_the_patient() {
    let c = change(BedStatus::Cleaning, None);
    assert!(c.validate().is_ok());
    assert_eq!(c.resulting_patient(Some(7)), None);
  }
}
