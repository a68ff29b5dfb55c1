//! Guardia schedules, coverage rules, and the coverage check.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::{RequestStatus, ScheduleStatus, ShiftType, StaffRole};

// ─── Schedules ───────────────────────────────────────────────────────────────

/// One staff-to-shift assignment, joined with staff and unit names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
  pub id:                 i64,
  pub schedule_date:      NaiveDate,
  pub shift_type:         ShiftType,
  pub status:             ScheduleStatus,
  pub staff_id:           i64,
  pub staff_name:         String,
  pub staff_code:         String,
  pub role:               StaffRole,
  pub unit_id:            i64,
  pub unit_name:          String,
  pub unit_code:          String,
  pub notes:              Option<String>,
  pub coverage_met:       bool,
  pub requires_attention: bool,
  pub attention_reason:   Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftSwapRequest {
  pub id:                      i64,
  pub original_shift_id:       i64,
  pub requesting_staff_id:     i64,
  pub potential_swap_staff_id: Option<i64>,
  pub status:                  RequestStatus,
  pub reason:                  Option<String>,
  pub requires_chief_approval: bool,
  pub chief_approved:          bool,
  pub created_at:              NaiveDateTime,
}

// ─── Coverage ────────────────────────────────────────────────────────────────

/// Minimum staffing for one unit and shift. Unique on `(unit_id, shift_type)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageRule {
  pub id:                     i64,
  pub unit_id:                i64,
  pub shift_type:             ShiftType,
  pub min_senior_consultants: i64,
  pub min_consultants:        i64,
  pub min_vent_trained:       i64,
  pub min_procedure_trained:  i64,
  pub is_critical_coverage:   bool,
}

/// Staff actually scheduled against a rule on a given date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledCounts {
  pub senior_consultants: i64,
  /// Consultants and senior consultants together.
  pub consultants:        i64,
  pub vent_trained:       i64,
  pub procedure_trained:  i64,
  pub total:              i64,
}

/// A single unmet minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageGap {
  pub requirement: &'static str,
  pub required:    i64,
  pub scheduled:   i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageStatus {
  pub date:      NaiveDate,
  pub unit_name: String,
  pub rule:      CoverageRule,
  pub scheduled: ScheduledCounts,
}

impl CoverageStatus {
  /// Every minimum of the rule that the scheduled staff do not reach.
  pub fn gaps(&self) -> Vec<CoverageGap> {
    let r = &self.rule;
    let s = &self.scheduled;
    [
      ("senior_consultants", r.min_senior_consultants, s.senior_consultants),
      ("consultants", r.min_consultants, s.consultants),
      ("vent_trained", r.min_vent_trained, s.vent_trained),
      ("procedure_trained", r.min_procedure_trained, s.procedure_trained),
    ]
    .into_iter()
    .filter(|(_, required, scheduled)| scheduled < required)
    .map(|(requirement, required, scheduled)| CoverageGap { requirement, required, scheduled })
    .collect()
  }

  pub fn is_met(&self) -> bool { self.gaps().is_empty() }
}
