//! Closed label sets shared by the schema, the store, and the API.
//!
//! The labels double as the SQL `CHECK` constraint values in the schema, so
//! renaming one is a schema migration.

labelled_enum! {
  /// Operational state of a department unit.
  UnitStatus {
    Operational => "operational",
    Maintenance => "maintenance",
    Closed      => "closed",
  }
}

labelled_enum! {
  /// Seniority of a member of the medical staff, most senior first.
  StaffRole {
    Chief            => "chief",
    SeniorConsultant => "senior_consultant",
    Consultant       => "consultant",
    Resident         => "resident",
  }
}

labelled_enum! {
  StaffStatus {
    Available => "available",
    Busy      => "busy",
    OnBreak   => "on_break",
    OffDuty   => "off_duty",
  }
}

labelled_enum! {
  PreferredShift {
    Morning  => "morning",
    Evening  => "evening",
    Night    => "night",
    Flexible => "flexible",
  }
}

labelled_enum! {
  /// Absence currently recorded on a staff row.
  AbsenceType {
    Holiday        => "holiday",
    SickLeave      => "sick_leave",
    MaternityLeave => "maternity_leave",
    PaternityLeave => "paternity_leave",
    EmergencyLeave => "emergency_leave",
  }
}

labelled_enum! {
  /// Kind of leave asked for in an absence request.
  AbsenceRequestType {
    Holiday        => "holiday",
    SickLeave      => "sick_leave",
    EmergencyLeave => "emergency_leave",
    MaternityLeave => "maternity_leave",
    PaternityLeave => "paternity_leave",
    Other          => "other",
  }
}

labelled_enum! {
  /// A duty shift. Coverage rules are only defined for the three regular
  /// shifts; a `24h` guardia counts toward all of them.
  ShiftType {
    Morning => "morning",
    Evening => "evening",
    Night   => "night",
    FullDay => "24h",
  }
}

labelled_enum! {
  ScheduleStatus {
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled",
    NoShow    => "no_show",
    Swapped   => "swapped",
  }
}

labelled_enum! {
  /// Review state shared by absence and shift-swap requests.
  RequestStatus {
    Pending   => "pending",
    Approved  => "approved",
    Rejected  => "rejected",
    Cancelled => "cancelled",
  }
}

labelled_enum! {
  BedStatus {
    Empty       => "empty",
    Occupied    => "occupied",
    Reserved    => "reserved",
    Cleaning    => "cleaning",
    Maintenance => "maintenance",
  }
}

labelled_enum! {
  AgeGroup {
    Pediatric => "pediatric",
    Adult     => "adult",
    Geriatric => "geriatric",
  }
}

labelled_enum! {
  /// Severity classification of a patient.
  AcuityLevel {
    Stable   => "stable",
    Guarded  => "guarded",
    Critical => "critical",
  }
}

labelled_enum! {
  AdmissionType {
    Emergency => "emergency",
    Elective  => "elective",
    Transfer  => "transfer",
  }
}

labelled_enum! {
  PatientStatus {
    Admitted    => "admitted",
    Discharged  => "discharged",
    Transferred => "transferred",
    Deceased    => "deceased",
  }
}

labelled_enum! {
  EquipmentStatus {
    Available    => "available",
    InUse        => "in_use",
    Maintenance  => "maintenance",
    OutOfService => "out_of_service",
  }
}

labelled_enum! {
  /// Alert severity, least severe first.
  AlertSeverity {
    Low      => "low",
    Medium   => "medium",
    High     => "high",
    Critical => "critical",
  }
}

labelled_enum! {
  MessageType {
    General => "general",
    Policy  => "policy",
    Urgent  => "urgent",
    Alert   => "alert",
  }
}

labelled_enum! {
  Audience {
    All     => "all",
    Doctors => "doctors",
    Nurses  => "nurses",
    Admin   => "admin",
  }
}

labelled_enum! {
  /// Announcement priority, lowest first.
  Priority {
    Low    => "low",
    Normal => "normal",
    High   => "high",
    Urgent => "urgent",
  }
}

impl ShiftType {
  /// Whether a guardia of this type staffs the regular shift `other`.
  pub fn covers(self, other: ShiftType) -> bool {
    self == other || self == ShiftType::FullDay
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn labels_parse_back_to_their_variant() {
    for status in BedStatus::ALL {
      assert_eq!(status.as_str().parse::<BedStatus>().unwrap(), *status);
    }
    assert_eq!("24h".parse::<ShiftType>().unwrap(), ShiftType::FullDay);
  }

  #[test]
  fn unknown_label_is_rejected() {
    let err = "vacant".parse::<BedStatus>().unwrap_err();
    assert!(matches!(err, crate::Error::UnknownVariant { kind: "BedStatus", .. }));
  }

  #[test]
  fn serde_uses_the_stored_label() {
    let json = serde_json::to_string(&StaffRole::SeniorConsultant).unwrap();
    assert_eq!(json, "\"senior_consultant\"");
    let back: EquipmentStatus = serde_json::from_str("\"in_use\"").unwrap();
    assert_eq!(back, EquipmentStatus::InUse);
  }

  #[test]
  fn full_day_guardia_covers_every_shift() {
    assert!(ShiftType::FullDay.covers(ShiftType::Night));
    assert!(ShiftType::Morning.covers(ShiftType::Morning));
    assert!(!ShiftType::Morning.covers(ShiftType::Evening));
  }
}
