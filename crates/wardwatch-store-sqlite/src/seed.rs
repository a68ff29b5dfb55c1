//! Sample data set inserted by bootstrap into an empty store.
//!
//! Every relative date is derived from the `today` passed in, and bed
//! occupancy follows a fixed pattern, so two seeds on the same day produce
//! identical stores.

use chrono::{Days, NaiveDate, NaiveTime, TimeDelta};
use rusqlite::{Connection, OptionalExtension as _, params};

use crate::encode::{encode_date, encode_ts};

struct StaffSeed {
  first:          &'static str,
  last:           &'static str,
  title:          &'static str,
  code:           &'static str,
  specialization: &'static str,
  sub:            &'static str,
  qualifications: &'static str,
  license:        &'static str,
  years:          i64,
  unit:           &'static str,
  secondary:      &'static str,
  role:           &'static str,
  email:          &'static str,
  phone:          &'static str,
  contact:        &'static str,
  priority:       i64,
  rapid:          bool,
  backup:         &'static str,
  on_call:        bool,
  vent:           bool,
  procedures:     bool,
  competencies:   &'static str,
  shift:          &'static str,
  guardias:       i64,
  last_guardia:   u64,
}

const STAFF: &[StaffSeed] = &[
  StaffSeed { first: "Maria", last: "Rodriguez", title: "Chief of Department", code: "DR001", specialization: "Pulmonology", sub: "Interventional", qualifications: "MD, FCCP", license: "MED123001", years: 15, unit: "PICU", secondary: "2,3", role: "chief", email: "m.rodriguez@hospital.org", phone: "+1-555-0001", contact: "Admin Office: 5001", priority: 1, rapid: true, backup: "2,3,4", on_call: true, vent: true, procedures: true, competencies: "Bronchoscopy,Intubation,Thoracentesis", shift: "flexible", guardias: 12, last_guardia: 15 },
  StaffSeed { first: "James", last: "Wilson", title: "Senior Consultant", code: "DR002", specialization: "Critical Care", sub: "ICU Management", qualifications: "MD, FCCM", license: "MED123002", years: 12, unit: "PICU", secondary: "4,5", role: "senior_consultant", email: "j.wilson@hospital.org", phone: "+1-555-0002", contact: "ICU Desk: 5002", priority: 2, rapid: true, backup: "1,4", on_call: true, vent: true, procedures: true, competencies: "Vent Management,Code Blue", shift: "morning", guardias: 10, last_guardia: 8 },
  StaffSeed { first: "Sarah", last: "Chen", title: "Senior Consultant", code: "DR003", specialization: "Interventional", sub: "Bronchoscopy", qualifications: "MD, FCCP", license: "MED123003", years: 10, unit: "BSUITE", secondary: "1,2", role: "senior_consultant", email: "s.chen@hospital.org", phone: "+1-555-0003", contact: "Bronch Suite: 5003", priority: 3, rapid: true, backup: "1,3", on_call: false, vent: true, procedures: true, competencies: "EBUS,Cryotherapy,Stent", shift: "morning", guardias: 8, last_guardia: 12 },
  StaffSeed { first: "Robert", last: "Johnson", title: "Consultant", code: "DR004", specialization: "General Pulmonary", sub: "Sleep Medicine", qualifications: "MD", license: "MED123004", years: 8, unit: "GPULM", secondary: "1,5", role: "consultant", email: "r.johnson@hospital.org", phone: "+1-555-0004", contact: "Clinic: 5004", priority: 4, rapid: false, backup: "2,5", on_call: false, vent: false, procedures: false, competencies: "Sleep Studies,PFT", shift: "evening", guardias: 6, last_guardia: 20 },
  StaffSeed { first: "Emily", last: "Davis", title: "Consultant", code: "DR005", specialization: "Critical Care", sub: "ARDS", qualifications: "MD", license: "MED123005", years: 7, unit: "PICU", secondary: "4,5", role: "consultant", email: "e.davis@hospital.org", phone: "+1-555-0005", contact: "ICU: 5005", priority: 5, rapid: true, backup: "1,4", on_call: true, vent: true, procedures: false, competencies: "ECMO,Vent Management", shift: "night", guardias: 7, last_guardia: 5 },
  StaffSeed { first: "Michael", last: "Brown", title: "Consultant", code: "DR006", specialization: "Interventional", sub: "Pleural", qualifications: "MD", license: "MED123006", years: 6, unit: "BSUITE", secondary: "1,2", role: "consultant", email: "m.brown@hospital.org", phone: "+1-555-0006", contact: "Procedure: 5006", priority: 6, rapid: true, backup: "3,4", on_call: false, vent: true, procedures: true, competencies: "Thoracentesis,Chest Tube", shift: "flexible", guardias: 5, last_guardia: 25 },
  StaffSeed { first: "Lisa", last: "Garcia", title: "Resident", code: "DR007", specialization: "General Pulmonary", sub: "Fellow", qualifications: "MD", license: "MED123007", years: 3, unit: "GPULM", secondary: "1,2,5", role: "resident", email: "l.garcia@hospital.org", phone: "+1-555-0007", contact: "Resident Room: 5007", priority: 7, rapid: false, backup: "1,2,4,5", on_call: true, vent: true, procedures: false, competencies: "Basic Procedures", shift: "flexible", guardias: 15, last_guardia: 3 },
  StaffSeed { first: "David", last: "Martinez", title: "Resident", code: "DR008", specialization: "Critical Care", sub: "Fellow", qualifications: "MD", license: "MED123008", years: 2, unit: "PICU", secondary: "4,5", role: "resident", email: "d.martinez@hospital.org", phone: "+1-555-0008", contact: "Resident Room: 5008", priority: 8, rapid: false, backup: "1,4,5", on_call: true, vent: true, procedures: false, competencies: "Vent Basics", shift: "night", guardias: 12, last_guardia: 7 },
  StaffSeed { first: "Amanda", last: "Lee", title: "Resident", code: "DR009", specialization: "Interventional", sub: "Fellow", qualifications: "MD", license: "MED123009", years: 2, unit: "BSUITE", secondary: "1,3", role: "resident", email: "a.lee@hospital.org", phone: "+1-555-0009", contact: "Resident Room: 5009", priority: 9, rapid: false, backup: "3,4", on_call: false, vent: true, procedures: true, competencies: "Bronch Assist", shift: "morning", guardias: 8, last_guardia: 10 },
];

/// `(unit, shift, seniors, consultants, vent, procedure, critical)`
const COVERAGE_RULES: &[(&str, &str, i64, i64, i64, i64, bool)] = &[
  ("PICU", "morning", 1, 2, 2, 1, true),
  ("PICU", "evening", 1, 2, 2, 1, true),
  ("PICU", "night", 1, 2, 2, 1, true),
  ("GPULM", "morning", 0, 2, 1, 0, false),
  ("GPULM", "evening", 0, 1, 1, 0, false),
  ("GPULM", "night", 0, 1, 1, 0, false),
  ("BSUITE", "morning", 1, 1, 1, 1, false),
  ("BSUITE", "evening", 0, 1, 1, 1, false),
  ("ISOL", "morning", 0, 1, 1, 0, false),
  ("ISOL", "evening", 0, 1, 1, 0, false),
  ("ISOL", "night", 0, 1, 1, 0, false),
  ("SDU", "morning", 0, 1, 1, 0, false),
  ("SDU", "evening", 0, 1, 1, 0, false),
  ("SDU", "night", 0, 1, 1, 0, false),
];

/// Daily guardia pattern: `(staff, shift, unit, notes)`.
const DAILY_GUARDIAS: &[(&str, &str, &str, &str)] = &[
  ("DR001", "morning", "PICU", "Primary coverage"),
  ("DR002", "evening", "PICU", "Evening round"),
  ("DR005", "night", "PICU", "Night coverage"),
  ("DR004", "morning", "GPULM", "Clinic duty"),
  ("DR006", "evening", "GPULM", "Ward round"),
  ("DR008", "night", "ISOL", "Isolation coverage"),
];

/// Asks to swap away tomorrow's PICU evening round.
const SWAP_REQUESTER: &str = "DR002";

pub const SCHEDULE_DAYS: u64 = 7;
pub const ROOMS: u32 = 15;
pub const BEDS_PER_ROOM: u32 = 4;
pub const PATIENTS: usize = 15;

/// Two in five beds start occupied.
pub fn starts_occupied(room: u32, bed: u32) -> bool { (room + bed) % 5 < 2 }

fn days_after(today: NaiveDate, n: u64) -> String {
  encode_date(today.checked_add_days(Days::new(n)).unwrap_or(today))
}

fn days_before(today: NaiveDate, n: u64) -> String {
  encode_date(today.checked_sub_days(Days::new(n)).unwrap_or(today))
}

fn midnight(day: NaiveDate) -> String { encode_ts(day.and_time(NaiveTime::MIN)) }

fn at_hour(day: NaiveDate, hour: i64) -> String {
  encode_ts(day.and_time(NaiveTime::MIN) + TimeDelta::hours(hour))
}

/// Insert the sample data set, inside the caller's transaction.
///
/// Tables that already hold rows are left alone: tables with a natural key
/// take `INSERT OR IGNORE`, the rest are skipped when non-empty. References
/// resolve through unit codes, staff codes and bed numbers, so seeded rows
/// attach to whichever ids those rows carry.
pub fn seed(conn: &Connection, today: NaiveDate) -> rusqlite::Result<()> {
  if is_empty(conn, "hospital_system")? {
    tracing::info!("seeding hospital system configuration");
    conn.execute(
      "INSERT INTO hospital_system
         (hospital_name, chief_of_department, system_version, emergency_contact)
       VALUES (?1, ?2, ?3, ?4)",
      params![
        "Advanced Neumology & Pulmonary Center",
        "Dr. Maria Rodriguez",
        "PneumoTrack Enterprise v4.0",
        "Internal: 5555, External: +1-555-0123",
      ],
    )?;
  }

  seed_units(conn)?;
  seed_staff(conn, today)?;
  seed_coverage_rules(conn)?;
  seed_absences(conn, today)?;
  seed_schedules(conn, today)?;
  seed_beds(conn)?;
  seed_patients(conn, today)?;
  seed_equipment(conn, today)?;
  seed_clinical_load(conn, today)?;
  seed_alerts(conn, today)?;
  seed_announcements(conn, today)?;
  Ok(())
}

fn is_empty(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
  let empty: bool =
    conn.query_row(&format!("SELECT NOT EXISTS (SELECT 1 FROM {table})"), [], |r| r.get(0))?;
  if !empty {
    tracing::info!(table, "already populated, not seeding");
  }
  Ok(empty)
}

fn unit_id(conn: &Connection, code: &str) -> rusqlite::Result<i64> {
  conn
    .prepare_cached("SELECT id FROM department_units WHERE code = ?1")?
    .query_row([code], |r| r.get(0))
}

fn staff_id(conn: &Connection, code: &str) -> rusqlite::Result<i64> {
  conn
    .prepare_cached("SELECT id FROM medical_staff WHERE staff_code = ?1")?
    .query_row([code], |r| r.get(0))
}

fn bed_id(conn: &Connection, bed_number: &str) -> rusqlite::Result<Option<i64>> {
  conn
    .prepare_cached("SELECT id FROM enhanced_beds WHERE bed_number = ?1 ORDER BY id LIMIT 1")?
    .query_row([bed_number], |r| r.get(0))
    .optional()
}

fn seed_units(conn: &Connection) -> rusqlite::Result<()> {
  tracing::info!("seeding department units");
  let mut stmt = conn.prepare(
    "INSERT OR IGNORE INTO department_units
       (name, code, specialty, color_code, icon, description, total_beds, available_beds,
        standby_beds, vent_capable_beds, negative_pressure_rooms, is_procedure_capable,
        status, is_active, unit_phone, unit_location)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, 'operational', 1, ?13, ?14)",
  )?;
  stmt.execute(params!["Pulmonary ICU", "PICU", "Critical Care", "#e74c3c", "🏥", "Main intensive care unit for pulmonary patients", 20, 15, 5, 15, 4, true, "555-1001", "Floor 3, West Wing"])?;
  stmt.execute(params!["General Pulmonology", "GPULM", "General Pulmonary", "#3498db", "🫁", "General pulmonary care and consultations", 35, 28, 7, 5, 2, false, "555-1002", "Floor 2, Main Tower"])?;
  stmt.execute(params!["Bronchoscopy Suite", "BSUITE", "Procedural", "#9b59b6", "🔬", "Bronchoscopy and interventional procedures", 8, 6, 2, 8, 3, true, "555-1003", "Floor 3, Procedure Wing"])?;
  stmt.execute(params!["Respiratory Isolation", "ISOL", "Infectious Disease", "#f39c12", "⚠️", "Negative pressure isolation rooms", 12, 8, 4, 10, 12, false, "555-1004", "Floor 4, Isolation Wing"])?;
  stmt.execute(params!["Step-Down Unit", "SDU", "Intermediate Care", "#2ecc71", "📊", "Intermediate care step-down unit", 25, 20, 5, 8, 1, false, "555-1005", "Floor 3, East Wing"])?;
  Ok(())
}

fn seed_staff(conn: &Connection, today: NaiveDate) -> rusqlite::Result<()> {
  tracing::info!("seeding medical staff");
  let mut stmt = conn.prepare(
    "INSERT OR IGNORE INTO medical_staff
       (first_name, last_name, title, staff_code, specialization, sub_specialization,
        qualifications, license_number, years_experience, primary_unit_id, secondary_units,
        role, email, phone, emergency_contact, emergency_contact_priority,
        rapid_response_capable, backup_units, current_status, is_on_call, vent_trained,
        procedure_trained, competencies, is_active, preferred_shift, guardia_count,
        last_guardia_date)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18,
             'available', ?19, ?20, ?21, ?22, 1, ?23, ?24, ?25)",
  )?;
  for s in STAFF {
    stmt.execute(params![
      s.first, s.last, s.title, s.code, s.specialization, s.sub, s.qualifications, s.license,
      s.years, unit_id(conn, s.unit)?, s.secondary, s.role, s.email, s.phone, s.contact,
      s.priority, s.rapid, s.backup, s.on_call, s.vent, s.procedures, s.competencies, s.shift,
      s.guardias, days_before(today, s.last_guardia),
    ])?;
  }
  Ok(())
}

fn seed_coverage_rules(conn: &Connection) -> rusqlite::Result<()> {
  tracing::info!("seeding coverage rules");
  let mut stmt = conn.prepare(
    "INSERT OR IGNORE INTO coverage_rules
       (unit_id, shift_type, min_senior_consultants, min_consultants, min_vent_trained,
        min_procedure_trained, is_critical_coverage)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
  )?;
  for (unit, shift, seniors, consultants, vent, procedure, critical) in COVERAGE_RULES {
    stmt.execute(params![
      unit_id(conn, unit)?, shift, seniors, consultants, vent, procedure, critical,
    ])?;
  }
  Ok(())
}

fn seed_absences(conn: &Connection, today: NaiveDate) -> rusqlite::Result<()> {
  if !is_empty(conn, "absence_requests")? {
    return Ok(());
  }
  tracing::info!("seeding absence requests");
  let mut stmt = conn.prepare(
    "INSERT INTO absence_requests
       (staff_id, request_type, start_date, end_date, reason, status, approved_by,
        coverage_notes, approved_at)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
  )?;
  let approved_at = Some(midnight(today));
  stmt.execute(params![staff_id(conn, "DR004")?, "holiday", days_after(today, 10), days_after(today, 17), "Family vacation", "approved", Some("Dr. Rodriguez"), "Covered by Dr. Davis", approved_at])?;
  stmt.execute(params![staff_id(conn, "DR007")?, "sick_leave", days_before(today, 2), days_after(today, 2), "Seasonal flu", "approved", Some("Dr. Wilson"), "Resident coverage adjusted", approved_at])?;
  stmt.execute(params![staff_id(conn, "DR005")?, "emergency_leave", days_before(today, 1), days_after(today, 3), "Family emergency", "pending", None::<&str>, "Need coverage for ICU shifts", None::<String>])?;
  stmt.execute(params![staff_id(conn, "DR009")?, "maternity_leave", days_after(today, 30), days_after(today, 120), "Maternity leave", "approved", Some("Dr. Rodriguez"), "Long-term coverage plan in place", approved_at])?;
  stmt.execute(params![staff_id(conn, "DR006")?, "paternity_leave", days_after(today, 45), days_after(today, 60), "Paternity leave", "pending", None::<&str>, "Short-term coverage needed", None::<String>])?;
  stmt.execute(params![staff_id(conn, "DR008")?, "other", days_after(today, 15), days_after(today, 16), "Professional conference", "approved", Some("Dr. Chen"), "Single day coverage", approved_at])?;
  Ok(())
}

fn seed_schedules(conn: &Connection, today: NaiveDate) -> rusqlite::Result<()> {
  if !is_empty(conn, "guardia_schedules")? {
    return Ok(());
  }
  tracing::info!("seeding guardia schedules");
  let mut stmt = conn.prepare(
    "INSERT INTO guardia_schedules
       (staff_id, schedule_date, shift_type, unit_id, status, notes, created_by,
        conflict_checked, coverage_met, requires_attention)
     VALUES (?1, ?2, ?3, ?4, 'scheduled', ?5, 'system', 1, 1, 0)",
  )?;
  let mut swap_shift = None;
  for day in 0..SCHEDULE_DAYS {
    let date = days_after(today, day);
    for (staff, shift, unit, notes) in DAILY_GUARDIAS {
      stmt.execute(params![staff_id(conn, staff)?, date, shift, unit_id(conn, unit)?, notes])?;
      if day == 1 && *staff == SWAP_REQUESTER {
        swap_shift = Some(conn.last_insert_rowid());
      }
    }
  }

  // Tomorrow's PICU evening round, pending an agreed partner.
  if let Some(shift) = swap_shift
    && is_empty(conn, "shift_swap_requests")?
  {
    conn.execute(
      "INSERT INTO shift_swap_requests
         (original_shift_id, requesting_staff_id, potential_swap_staff_id, status, reason,
          requires_chief_approval)
       VALUES (?1, ?2, ?3, 'pending', 'Conference travel', 1)",
      params![shift, staff_id(conn, SWAP_REQUESTER)?, staff_id(conn, "DR006")?],
    )?;
  }
  Ok(())
}

fn seed_beds(conn: &Connection) -> rusqlite::Result<()> {
  tracing::info!("seeding enhanced beds");
  let mut stmt = conn.prepare(
    "INSERT OR IGNORE INTO enhanced_beds
       (room_code, bed_number, display_name, status, clinical_needs, equipment,
        updated_by, notes)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'system', 'Initial setup')",
  )?;
  for room in 1..=ROOMS {
    for bed in 1..=BEDS_PER_ROOM {
      let is_occupied = starts_occupied(room, bed);
      let equipment = if room <= 5 && bed == 1 { "ventilator" } else { "monitor,o2" };
      stmt.execute(params![
        format!("H{room}"),
        format!("BH{room}{bed}"),
        format!("Bed {bed} - H{room}"),
        if is_occupied { "occupied" } else { "empty" },
        is_occupied.then_some("oxygen,monitoring"),
        equipment,
      ])?;
    }
  }
  Ok(())
}

fn seed_patients(conn: &Connection, today: NaiveDate) -> rusqlite::Result<()> {
  if !is_empty(conn, "patient_flow")? {
    return Ok(());
  }
  tracing::info!("seeding patient flow");
  let occupied = {
    let mut stmt = conn.prepare(
      "SELECT id FROM enhanced_beds
       WHERE status = 'occupied' AND patient_id IS NULL
       ORDER BY id
       LIMIT ?1",
    )?;
    let rows: Vec<i64> =
      stmt.query_map([PATIENTS as i64], |r| r.get(0))?.collect::<rusqlite::Result<_>>()?;
    rows
  };

  let unit = unit_id(conn, "PICU")?;
  let (chief, senior) = (staff_id(conn, "DR001")?, staff_id(conn, "DR002")?);

  let mut insert_patient = conn.prepare(
    "INSERT INTO patient_flow
       (patient_code, anonymous_id, age_group, primary_diagnosis, secondary_diagnoses,
        acuity_level, current_bed_id, current_unit_id, attending_doctor_id, admission_type,
        admission_source, admission_datetime, expected_length_of_stay, treatment_phase,
        special_requirements, predicted_discharge, discharge_ready, discharge_notes,
        current_status, status_history)
     VALUES (?1, ?2, 'adult', 'COVID-19 ARDS', 'Hypertension,Diabetes', ?3, ?4, ?5, ?6,
             'emergency', 'ER', ?7, ?8, 'acute', ?9, ?10, ?11, '', 'admitted',
             'Admission notes here')",
  )?;
  let mut assign_bed =
    conn.prepare("UPDATE enhanced_beds SET patient_id = ?1, updated_by = 'seeder' WHERE id = ?2")?;
  let mut audit = conn.prepare(
    "INSERT INTO bed_audit_trail
       (bed_id, old_status, new_status, updated_by, update_reason, patient_id)
     VALUES (?1, 'empty', 'occupied', 'seeder', 'Initial patient assignment', ?2)",
  )?;

  for (i, bed_id) in occupied.iter().enumerate() {
    let n = i as u64 + 1;
    let critical = n <= 5;
    let admitted = today.checked_sub_days(Days::new(n * 3 % 10 + 1)).unwrap_or(today);
    let stay = 5 + n * 7 % 17;
    let discharge = admitted.checked_add_days(Days::new(stay)).unwrap_or(admitted);

    insert_patient.execute(params![
      format!("PT2024{n:03}"),
      format!("ANON{n:05}"),
      if critical { "critical" } else { "guarded" },
      bed_id,
      unit,
      if critical { senior } else { chief },
      midnight(admitted),
      stay as i64,
      if critical { "Ventilator" } else { "High-flow O2" },
      midnight(discharge),
      n > 10,
    ])?;
    let patient_id = conn.last_insert_rowid();
    assign_bed.execute(params![patient_id, bed_id])?;
    audit.execute(params![bed_id, patient_id])?;
  }
  Ok(())
}

fn seed_equipment(conn: &Connection, today: NaiveDate) -> rusqlite::Result<()> {
  tracing::info!("seeding medical equipment");
  let mut stmt = conn.prepare(
    "INSERT OR IGNORE INTO medical_equipment
       (equipment_type, model, serial_number, status, current_location, maintenance_due,
        last_service_date, capabilities, notes)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
  )?;
  let (picu, gpulm, bsuite) =
    (unit_id(conn, "PICU")?, unit_id(conn, "GPULM")?, unit_id(conn, "BSUITE")?);
  stmt.execute(params!["Ventilator", "Hamilton-C1", "VENT001", "in_use", picu, days_after(today, 60), days_before(today, 30), "ICU ventilation", "Primary vent for PICU"])?;
  stmt.execute(params!["Ventilator", "Hamilton-C1", "VENT002", "available", picu, days_after(today, 90), days_before(today, 15), "ICU ventilation", "Backup vent"])?;
  stmt.execute(params!["Bronchoscope", "Olympus-BF190", "BSC001", "in_use", bsuite, days_after(today, 30), days_before(today, 7), "Diagnostic bronchoscopy", "Main bronchoscope"])?;
  stmt.execute(params!["Monitor", "Philips-MX800", "MON001", "in_use", picu, days_after(today, 180), days_before(today, 60), "Vital signs monitoring", "ICU monitor"])?;
  stmt.execute(params!["High-Flow O2", "Airvo-2", "HFO001", "available", gpulm, days_after(today, 120), days_before(today, 45), "High flow oxygen therapy", "Mobile unit"])?;
  Ok(())
}

fn seed_clinical_load(conn: &Connection, today: NaiveDate) -> rusqlite::Result<()> {
  tracing::info!("seeding daily clinical load");
  let mut stmt = conn.prepare(
    "INSERT OR IGNORE INTO daily_clinical_load
       (report_date, total_patients, new_admissions, expected_discharges, vent_patients,
        high_flow_o2_patients, procedure_scheduled, reported_by, clinical_notes)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
  )?;
  for i in 0..5_i64 {
    let trend = if i < 2 { "stable" } else { "improving" };
    stmt.execute(params![
      days_before(today, i as u64),
      45 - i * 2,
      3 + i % 2,
      2 + i % 3,
      8 - i % 3,
      12 - i,
      4 - i % 2,
      if i == 0 { "Dr. Rodriguez" } else { "Dr. Wilson" },
      format!("Standard daily load. Trend: {trend}"),
    ])?;
  }
  Ok(())
}

fn seed_alerts(conn: &Connection, today: NaiveDate) -> rusqlite::Result<()> {
  tracing::info!("seeding predictive alerts");
  let now = midnight(today);
  let mut stmt = conn.prepare(
    "INSERT OR IGNORE INTO predictive_alerts
       (alert_code, alert_type, alert_category, severity, title, detailed_message,
        suggested_actions, target_units, target_roles, related_bed_id, related_staff_id,
        triggered_at, predicted_event_time, confidence_score, acknowledged, acknowledged_by,
        acknowledged_at)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
  )?;
  stmt.execute(params![
    "ALERT001", "staffing", "coverage", "medium", "Evening Shift Coverage Gap",
    "PICU evening shift has only 1 vent-trained staff scheduled",
    "Review schedule, consider calling backup", "1", "senior_consultant,consultant",
    bed_id(conn, "BH21")?, Some(staff_id(conn, "DR002")?), now, at_hour(today, 2), 0.75,
    false, None::<&str>, None::<String>,
  ])?;
  stmt.execute(params![
    "ALERT002", "equipment", "maintenance", "low", "Ventilator Maintenance Due",
    "VENT001 due for routine maintenance in 60 days", "Schedule maintenance before due date",
    "1", "all", None::<i64>, None::<i64>, now, midnight(
      today.checked_add_days(Days::new(45)).unwrap_or(today)
    ), 0.95, true, Some("Dr. Wilson"), Some(now.clone()),
  ])?;
  stmt.execute(params![
    "ALERT003", "patient", "acuity", "high", "Deteriorating Patient Cluster",
    "3 patients in PICU showing similar deterioration patterns",
    "Review cases, consider infection control measures", "1", "chief,senior_consultant",
    bed_id(conn, "BH13")?, Some(staff_id(conn, "DR001")?), now, at_hour(today, 6), 0.82,
    false, None::<&str>, None::<String>,
  ])?;
  Ok(())
}

fn seed_announcements(conn: &Connection, today: NaiveDate) -> rusqlite::Result<()> {
  if !is_empty(conn, "department_announcements")? {
    return Ok(());
  }
  tracing::info!("seeding department announcements");
  let from = midnight(today);
  let until = |days: u64| midnight(today.checked_add_days(Days::new(days)).unwrap_or(today));
  let mut stmt = conn.prepare(
    "INSERT INTO department_announcements
       (title, message, message_type, target_audience, target_units, target_roles,
        priority_level, effective_from, effective_until, posted_by, requires_acknowledgment,
        acknowledgment_count)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, 0)",
  )?;
  stmt.execute(params![
    "New Bronchoscopy Protocol",
    "All staff please review the updated bronchoscopy safety protocol in the shared folder.",
    "policy", "doctors", "3", "consultant,resident", "high", from, until(30), "Dr. Rodriguez", true,
  ])?;
  stmt.execute(params![
    "Quarterly Staff Meeting",
    "Mandatory quarterly staff meeting next Friday at 3 PM in Conference Room A.",
    "general", "all", "1,2,3,4,5", "all", "normal", from, until(14), "Dr. Rodriguez", false,
  ])?;
  stmt.execute(params![
    "Ventilator Training",
    "New ventilator equipment training session scheduled for next week.",
    "urgent", "doctors", "1", "resident", "high", from, until(7), "Dr. Wilson", true,
  ])?;
  Ok(())
}

/// Post-seed sanity counts: `(description, SQL)`. A zero means the matching
/// dashboard panel will render empty.
pub const VALIDATION_CHECKS: &[(&str, &str)] = &[
  ("active staff", "SELECT COUNT(*) FROM medical_staff WHERE is_active = 1"),
  ("beds", "SELECT COUNT(*) FROM enhanced_beds"),
  ("future schedules", "SELECT COUNT(*) FROM guardia_schedules WHERE schedule_date >= ?1"),
  ("active units", "SELECT COUNT(*) FROM department_units WHERE is_active = 1"),
  ("admitted patients", "SELECT COUNT(*) FROM patient_flow WHERE current_status = 'admitted'"),
];

/// Log the [`VALIDATION_CHECKS`] counts, warning on any zero.
pub fn validate(conn: &Connection, today: NaiveDate) -> rusqlite::Result<()> {
  let today = encode_date(today);
  for (description, sql) in VALIDATION_CHECKS {
    let mut stmt = conn.prepare(sql)?;
    let count: i64 = if stmt.parameter_count() == 1 {
      stmt.query_row(params![today], |r| r.get(0))?
    } else {
      stmt.query_row([], |r| r.get(0))?
    };
    if count == 0 {
      tracing::warn!("no {description} found after seeding; dashboards will show empty data");
    } else {
      tracing::info!("{description}: {count}");
    }
  }
  Ok(())
}
