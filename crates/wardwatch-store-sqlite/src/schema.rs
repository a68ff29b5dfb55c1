//! SQL schema for the Wardwatch SQLite store.
//!
//! Executed by bootstrap whenever a required table is missing. Every
//! statement is guarded with `IF NOT EXISTS`, so re-running it over a partial
//! schema only fills the gaps.

/// Per-connection settings. Must run outside a transaction.
pub const CONNECTION_PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
";

/// Tables whose absence makes bootstrap (re)run [`SCHEMA`].
pub const REQUIRED_TABLES: &[&str] = &[
  "hospital_system",
  "department_units",
  "medical_staff",
  "coverage_rules",
  "guardia_schedules",
  "shift_swap_requests",
  "absence_requests",
  "enhanced_beds",
  "bed_audit_trail",
  "medical_equipment",
  "daily_clinical_load",
  "patient_flow",
  "predictive_alerts",
  "department_announcements",
];

/// Full schema DDL.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS hospital_system (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    hospital_name       TEXT NOT NULL DEFAULT 'Advanced Neumology & Pulmonary Center',
    chief_of_department TEXT NOT NULL DEFAULT 'Dr. Maria Rodriguez',
    system_version      TEXT NOT NULL DEFAULT 'PneumoTrack Enterprise v4.0',
    emergency_contact   TEXT,
    created_at          TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS department_units (
    id                      INTEGER PRIMARY KEY AUTOINCREMENT,
    name                    TEXT NOT NULL,
    code                    TEXT NOT NULL UNIQUE,
    specialty               TEXT NOT NULL,
    color_code              TEXT DEFAULT '#3498db',
    icon                    TEXT,
    description             TEXT,
    total_beds              INTEGER NOT NULL DEFAULT 0 CHECK (total_beds >= 0),
    available_beds          INTEGER NOT NULL DEFAULT 0 CHECK (available_beds >= 0),
    standby_beds            INTEGER NOT NULL DEFAULT 0 CHECK (standby_beds >= 0),
    vent_capable_beds       INTEGER NOT NULL DEFAULT 0 CHECK (vent_capable_beds >= 0),
    negative_pressure_rooms INTEGER NOT NULL DEFAULT 0 CHECK (negative_pressure_rooms >= 0),
    is_procedure_capable    INTEGER NOT NULL DEFAULT 0,
    status                  TEXT NOT NULL DEFAULT 'operational'
                            CHECK (status IN ('operational', 'maintenance', 'closed')),
    is_active               INTEGER NOT NULL DEFAULT 1,
    unit_phone              TEXT,
    unit_location           TEXT,
    created_at              TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS medical_staff (
    id                         INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name                 TEXT NOT NULL,
    last_name                  TEXT NOT NULL,
    title                      TEXT,
    staff_code                 TEXT NOT NULL UNIQUE,
    specialization             TEXT NOT NULL,
    sub_specialization         TEXT,
    qualifications             TEXT,
    license_number             TEXT,
    years_experience           INTEGER NOT NULL DEFAULT 0 CHECK (years_experience >= 0),
    primary_unit_id            INTEGER REFERENCES department_units(id),
    secondary_units            TEXT,
    role                       TEXT NOT NULL DEFAULT 'consultant'
                               CHECK (role IN ('chief', 'senior_consultant', 'consultant', 'resident')),
    email                      TEXT,
    phone                      TEXT,
    emergency_contact          TEXT,
    emergency_contact_priority INTEGER NOT NULL DEFAULT 99 CHECK (emergency_contact_priority >= 0),
    rapid_response_capable     INTEGER NOT NULL DEFAULT 0,
    backup_units               TEXT,
    current_status             TEXT NOT NULL DEFAULT 'available'
                               CHECK (current_status IN ('available', 'busy', 'on_break', 'off_duty')),
    is_on_call                 INTEGER NOT NULL DEFAULT 0,
    vent_trained               INTEGER NOT NULL DEFAULT 0,
    procedure_trained          INTEGER NOT NULL DEFAULT 0,
    competencies               TEXT,
    is_active                  INTEGER NOT NULL DEFAULT 1,
    preferred_shift            TEXT CHECK (preferred_shift IN ('morning', 'evening', 'night', 'flexible')),
    absence_type               TEXT CHECK (absence_type IN
                               ('holiday', 'sick_leave', 'maternity_leave', 'paternity_leave', 'emergency_leave')),
    absence_start              TEXT,
    absence_end                TEXT,
    absence_reason             TEXT,
    guardia_count              INTEGER NOT NULL DEFAULT 0 CHECK (guardia_count >= 0),
    last_guardia_date          TEXT,
    created_at                 TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS coverage_rules (
    id                     INTEGER PRIMARY KEY AUTOINCREMENT,
    unit_id                INTEGER NOT NULL REFERENCES department_units(id),
    shift_type             TEXT NOT NULL CHECK (shift_type IN ('morning', 'evening', 'night')),
    min_senior_consultants INTEGER NOT NULL DEFAULT 0 CHECK (min_senior_consultants >= 0),
    min_consultants        INTEGER NOT NULL DEFAULT 1 CHECK (min_consultants >= 0),
    min_vent_trained       INTEGER NOT NULL DEFAULT 0 CHECK (min_vent_trained >= 0),
    min_procedure_trained  INTEGER NOT NULL DEFAULT 0 CHECK (min_procedure_trained >= 0),
    is_critical_coverage   INTEGER NOT NULL DEFAULT 0,
    created_at             TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    UNIQUE (unit_id, shift_type)
);

CREATE TABLE IF NOT EXISTS guardia_schedules (
    id                 INTEGER PRIMARY KEY AUTOINCREMENT,
    staff_id           INTEGER NOT NULL REFERENCES medical_staff(id),
    schedule_date      TEXT NOT NULL,
    shift_type         TEXT NOT NULL CHECK (shift_type IN ('morning', 'evening', 'night', '24h')),
    unit_id            INTEGER NOT NULL REFERENCES department_units(id),
    status             TEXT NOT NULL DEFAULT 'scheduled'
                       CHECK (status IN ('scheduled', 'completed', 'cancelled', 'no_show', 'swapped')),
    notes              TEXT,
    created_by         TEXT,
    conflict_checked   INTEGER NOT NULL DEFAULT 0,
    coverage_met       INTEGER NOT NULL DEFAULT 0,
    requires_attention INTEGER NOT NULL DEFAULT 0,
    attention_reason   TEXT,
    created_at         TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS shift_swap_requests (
    id                      INTEGER PRIMARY KEY AUTOINCREMENT,
    original_shift_id       INTEGER NOT NULL REFERENCES guardia_schedules(id),
    requesting_staff_id     INTEGER NOT NULL REFERENCES medical_staff(id),
    potential_swap_staff_id INTEGER REFERENCES medical_staff(id),
    status                  TEXT NOT NULL DEFAULT 'pending'
                            CHECK (status IN ('pending', 'approved', 'rejected', 'cancelled')),
    reason                  TEXT,
    requires_chief_approval INTEGER NOT NULL DEFAULT 0,
    chief_approved          INTEGER NOT NULL DEFAULT 0,
    created_at              TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS absence_requests (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    staff_id       INTEGER NOT NULL REFERENCES medical_staff(id),
    request_type   TEXT NOT NULL CHECK (request_type IN
                   ('holiday', 'sick_leave', 'emergency_leave', 'maternity_leave', 'paternity_leave', 'other')),
    start_date     TEXT NOT NULL,
    end_date       TEXT NOT NULL,
    reason         TEXT NOT NULL,
    status         TEXT NOT NULL DEFAULT 'pending'
                   CHECK (status IN ('pending', 'approved', 'rejected', 'cancelled')),
    approved_by    TEXT,
    approved_at    TEXT,
    coverage_notes TEXT,
    created_at     TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    CHECK (start_date <= end_date)
);

CREATE TABLE IF NOT EXISTS enhanced_beds (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    room_code      TEXT NOT NULL,              -- H1 .. H15
    bed_number     TEXT NOT NULL,              -- BH11 .. BH154
    display_name   TEXT,
    status         TEXT NOT NULL DEFAULT 'empty'
                   CHECK (status IN ('empty', 'occupied', 'reserved', 'cleaning', 'maintenance')),
    patient_id     INTEGER,
    clinical_needs TEXT,                       -- 'oxygen,isolation,monitoring'
    equipment      TEXT,                       -- 'ventilator,high_flow,cpap'
    last_updated   TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_by     TEXT,
    notes          TEXT,
    UNIQUE (room_code, bed_number)
);

-- Strictly append-only. No UPDATE or DELETE is ever issued against it.
CREATE TABLE IF NOT EXISTS bed_audit_trail (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    bed_id        INTEGER NOT NULL REFERENCES enhanced_beds(id),
    old_status    TEXT,
    new_status    TEXT NOT NULL,
    updated_by    TEXT NOT NULL,
    update_reason TEXT,
    patient_id    INTEGER,
    timestamp     TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS medical_equipment (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    equipment_type    TEXT NOT NULL,
    model             TEXT,
    serial_number     TEXT UNIQUE,
    status            TEXT NOT NULL DEFAULT 'available'
                      CHECK (status IN ('available', 'in_use', 'maintenance', 'out_of_service')),
    current_location  INTEGER REFERENCES department_units(id),
    maintenance_due   TEXT,
    last_service_date TEXT,
    capabilities      TEXT,
    notes             TEXT,
    created_at        TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS daily_clinical_load (
    id                    INTEGER PRIMARY KEY AUTOINCREMENT,
    report_date           TEXT NOT NULL UNIQUE,
    total_patients        INTEGER NOT NULL DEFAULT 0 CHECK (total_patients >= 0),
    new_admissions        INTEGER NOT NULL DEFAULT 0 CHECK (new_admissions >= 0),
    expected_discharges   INTEGER NOT NULL DEFAULT 0 CHECK (expected_discharges >= 0),
    vent_patients         INTEGER NOT NULL DEFAULT 0 CHECK (vent_patients >= 0),
    high_flow_o2_patients INTEGER NOT NULL DEFAULT 0 CHECK (high_flow_o2_patients >= 0),
    procedure_scheduled   INTEGER NOT NULL DEFAULT 0 CHECK (procedure_scheduled >= 0),
    reported_by           TEXT NOT NULL,
    clinical_notes        TEXT,
    created_at            TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS patient_flow (
    id                      INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_code            TEXT NOT NULL UNIQUE,
    anonymous_id            TEXT,
    age_group               TEXT CHECK (age_group IN ('pediatric', 'adult', 'geriatric')),
    primary_diagnosis       TEXT,
    secondary_diagnoses     TEXT,
    acuity_level            TEXT NOT NULL DEFAULT 'stable'
                            CHECK (acuity_level IN ('stable', 'guarded', 'critical')),
    current_bed_id          INTEGER REFERENCES enhanced_beds(id),
    current_unit_id         INTEGER REFERENCES department_units(id),
    attending_doctor_id     INTEGER REFERENCES medical_staff(id),
    admission_type          TEXT CHECK (admission_type IN ('emergency', 'elective', 'transfer')),
    admission_source        TEXT,
    admission_datetime      TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    expected_length_of_stay INTEGER CHECK (expected_length_of_stay >= 0),
    treatment_phase         TEXT,
    special_requirements    TEXT,
    predicted_discharge     TEXT,
    discharge_ready         INTEGER NOT NULL DEFAULT 0,
    discharge_notes         TEXT,
    current_status          TEXT NOT NULL DEFAULT 'admitted'
                            CHECK (current_status IN ('admitted', 'discharged', 'transferred', 'deceased')),
    status_history          TEXT,
    created_at              TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS predictive_alerts (
    id                   INTEGER PRIMARY KEY AUTOINCREMENT,
    alert_code           TEXT NOT NULL UNIQUE,
    alert_type           TEXT NOT NULL,
    alert_category       TEXT,
    severity             TEXT NOT NULL DEFAULT 'medium'
                         CHECK (severity IN ('low', 'medium', 'high', 'critical')),
    title                TEXT NOT NULL,
    detailed_message     TEXT NOT NULL,
    suggested_actions    TEXT,
    target_units         TEXT,
    target_roles         TEXT,
    related_bed_id       INTEGER REFERENCES enhanced_beds(id),
    related_staff_id     INTEGER REFERENCES medical_staff(id),
    triggered_at         TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    predicted_event_time TEXT,
    confidence_score     REAL NOT NULL DEFAULT 0.0
                         CHECK (confidence_score >= 0 AND confidence_score <= 1),
    acknowledged         INTEGER NOT NULL DEFAULT 0,
    acknowledged_by      TEXT,
    acknowledged_at      TEXT,
    resolved             INTEGER NOT NULL DEFAULT 0,
    resolved_by          TEXT,
    resolved_at          TEXT,
    resolution_notes     TEXT,
    created_at           TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS department_announcements (
    id                      INTEGER PRIMARY KEY AUTOINCREMENT,
    title                   TEXT NOT NULL,
    message                 TEXT NOT NULL,
    message_type            TEXT NOT NULL DEFAULT 'general'
                            CHECK (message_type IN ('general', 'policy', 'urgent', 'alert')),
    target_audience         TEXT NOT NULL DEFAULT 'all'
                            CHECK (target_audience IN ('all', 'doctors', 'nurses', 'admin')),
    target_units            TEXT,
    target_roles            TEXT,
    priority_level          TEXT NOT NULL DEFAULT 'normal'
                            CHECK (priority_level IN ('low', 'normal', 'high', 'urgent')),
    effective_from          TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    effective_until         TEXT,
    posted_by               TEXT NOT NULL,
    requires_acknowledgment INTEGER NOT NULL DEFAULT 0,
    acknowledgment_count    INTEGER NOT NULL DEFAULT 0 CHECK (acknowledgment_count >= 0),
    created_at              TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_staff_status          ON medical_staff(current_status, is_active);
CREATE INDEX IF NOT EXISTS idx_staff_unit            ON medical_staff(is_active, primary_unit_id);
CREATE INDEX IF NOT EXISTS idx_guardia_date          ON guardia_schedules(schedule_date, shift_type);
CREATE INDEX IF NOT EXISTS idx_guardia_unit          ON guardia_schedules(schedule_date, status, unit_id);
CREATE INDEX IF NOT EXISTS idx_enhanced_beds_status  ON enhanced_beds(status, room_code);
CREATE INDEX IF NOT EXISTS idx_bed_audit_recent      ON bed_audit_trail(bed_id, timestamp DESC);
CREATE INDEX IF NOT EXISTS idx_announcements_active  ON department_announcements(effective_from, effective_until, priority_level);
CREATE INDEX IF NOT EXISTS idx_patient_current       ON patient_flow(current_status, current_unit_id);
CREATE INDEX IF NOT EXISTS idx_alerts_active         ON predictive_alerts(resolved, severity, triggered_at);
CREATE INDEX IF NOT EXISTS idx_equipment_status      ON medical_equipment(status, current_location);

CREATE VIEW IF NOT EXISTS staff_schedule_view AS
SELECT
    gs.id,
    gs.schedule_date,
    gs.shift_type,
    gs.status,
    gs.staff_id,
    ms.first_name || ' ' || ms.last_name AS staff_name,
    ms.staff_code,
    ms.role,
    gs.unit_id,
    du.name AS unit_name,
    du.code AS unit_code,
    gs.notes,
    gs.coverage_met,
    gs.requires_attention,
    gs.attention_reason
FROM guardia_schedules gs
JOIN medical_staff     ms ON gs.staff_id = ms.id
JOIN department_units  du ON gs.unit_id  = du.id
WHERE ms.is_active = 1;

CREATE VIEW IF NOT EXISTS bed_management_view AS
SELECT
    eb.id,
    eb.room_code,
    eb.bed_number,
    eb.display_name,
    eb.status,
    eb.clinical_needs,
    eb.equipment,
    eb.last_updated,
    pf.patient_code,
    pf.acuity_level,
    ms.first_name || ' ' || ms.last_name AS attending_doctor
FROM enhanced_beds eb
LEFT JOIN patient_flow  pf ON eb.patient_id = pf.id
LEFT JOIN medical_staff ms ON pf.attending_doctor_id = ms.id;

CREATE TRIGGER IF NOT EXISTS validate_bed_assignment_insert
BEFORE INSERT ON enhanced_beds
FOR EACH ROW
WHEN NEW.patient_id IS NOT NULL AND NEW.status != 'occupied'
BEGIN
    SELECT RAISE(ABORT, 'Bed with patient must be occupied status');
END;

CREATE TRIGGER IF NOT EXISTS validate_bed_assignment
BEFORE UPDATE ON enhanced_beds
FOR EACH ROW
WHEN NEW.patient_id IS NOT NULL AND NEW.status != 'occupied'
BEGIN
    SELECT RAISE(ABORT, 'Bed with patient must be occupied status');
END;

CREATE TRIGGER IF NOT EXISTS validate_staff_absence
BEFORE UPDATE ON medical_staff
FOR EACH ROW
WHEN NEW.absence_type IS NOT NULL AND (NEW.absence_start IS NULL OR NEW.absence_end IS NULL)
BEGIN
    SELECT RAISE(ABORT, 'Absence requires both start and end dates');
END;

PRAGMA user_version = 1;
";
