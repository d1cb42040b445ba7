//! Constants used throughout the clinic core crate.
//!
//! File names and environment keys live here so the shells, the repository
//! and the tests agree on where records are kept.

/// Filename for patient records.
pub const PATIENTS_FILENAME: &str = "patients.csv";

/// Filename for doctor profiles.
pub const DOCTORS_FILENAME: &str = "doctors.csv";

/// Filename for booked appointments.
pub const APPOINTMENTS_FILENAME: &str = "appointments.csv";

/// Environment variable naming the directory that holds the CSV files.
pub const DATA_DIR_ENV: &str = "CLINIC_DATA_DIR";

/// Data directory used when neither a flag nor the environment names one.
pub const DEFAULT_DATA_DIR: &str = ".";

/// name, date, doctor, problem
pub const PATIENT_FIELDS: usize = 4;

/// name, speciality, availability
pub const DOCTOR_FIELDS: usize = 3;

/// doctor, patient, date
pub const APPOINTMENT_FIELDS: usize = 3;
