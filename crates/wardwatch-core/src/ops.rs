//! Supporting operational records: equipment, alerts, announcements, and
//! the daily clinical load report.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::{AlertSeverity, Audience, EquipmentStatus, MessageType, Priority};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
  pub id:                i64,
  pub equipment_type:    String,
  pub model:             Option<String>,
  pub serial_number:     Option<String>,
  pub status:            EquipmentStatus,
  /// Unit the item is currently in.
  pub current_location:  Option<i64>,
  pub maintenance_due:   Option<NaiveDate>,
  pub last_service_date: Option<NaiveDate>,
  pub capabilities:      Option<String>,
  pub notes:             Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictiveAlert {
  pub id:                   i64,
  pub alert_code:           String,
  pub alert_type:           String,
  pub alert_category:       Option<String>,
  pub severity:             AlertSeverity,
  pub title:                String,
  pub detailed_message:     String,
  pub suggested_actions:    Option<String>,
  pub target_units:         Option<String>,
  pub target_roles:         Option<String>,
  pub related_bed_id:       Option<i64>,
  pub related_staff_id:     Option<i64>,
  pub triggered_at:         NaiveDateTime,
  pub predicted_event_time: Option<NaiveDateTime>,
  pub confidence_score:     f64,
  pub acknowledged:         bool,
  pub acknowledged_by:      Option<String>,
  pub acknowledged_at:      Option<NaiveDateTime>,
  pub resolved:             bool,
  pub resolved_by:          Option<String>,
  pub resolved_at:          Option<NaiveDateTime>,
  pub resolution_notes:     Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
  pub id:                      i64,
  pub title:                   String,
  pub message:                 String,
  pub message_type:            MessageType,
  pub target_audience:         Audience,
  pub target_units:            Option<String>,
  pub target_roles:            Option<String>,
  pub priority_level:          Priority,
  pub effective_from:          NaiveDateTime,
  pub effective_until:         Option<NaiveDateTime>,
  pub posted_by:               String,
  pub requires_acknowledgment: bool,
  pub acknowledgment_count:    i64,
}

/// The clinical load reported for one day. Unique on `report_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalLoadReport {
  pub id:                    i64,
  pub report_date:           NaiveDate,
  pub total_patients:        i64,
  pub new_admissions:        i64,
  pub expected_discharges:   i64,
  pub vent_patients:         i64,
  pub high_flow_o2_patients: i64,
  pub procedure_scheduled:   i64,
  pub reported_by:           String,
  pub clinical_notes:        Option<String>,
}
