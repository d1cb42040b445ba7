//! Record types held by the clinic repository.
//!
//! Doctors, patients and appointments are independent plain structs. Each one
//! knows its CSV shape through [`CsvRecord`] and renders the single-line
//! summary the shells print through `Display`.

use crate::constants::{APPOINTMENT_FIELDS, DOCTOR_FIELDS, PATIENT_FIELDS};
use crate::RecordName;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

/// A row type stored in one of the clinic CSV files.
///
/// Fields are written and read positionally, in declaration order, with no
/// header row.
pub trait CsvRecord: Serialize + DeserializeOwned {
    /// Number of fields in a well-formed row.
    const FIELDS: usize;
    /// Human label used in log lines.
    const KIND: &'static str;
}

/// A doctor profile. `name` is the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: RecordName,
    pub speciality: String,
    /// Free text such as `Mon-Fri 9-5`.
    pub availability: String,
}

impl Doctor {
    pub fn new(
        name: RecordName,
        speciality: impl Into<String>,
        availability: impl Into<String>,
    ) -> Self {
        Self {
            name,
            speciality: speciality.into(),
            availability: availability.into(),
        }
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Speciality: {}, Availability: {}",
            self.name, self.speciality, self.availability
        )
    }
}

impl CsvRecord for Doctor {
    const FIELDS: usize = DOCTOR_FIELDS;
    const KIND: &'static str = "doctor";
}

/// A patient visit record.
///
/// `doctor` is whatever the admin typed; it is not checked against the
/// doctor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: RecordName,
    pub date: String,
    pub doctor: String,
    pub problem: String,
}

impl Patient {
    pub fn new(
        name: RecordName,
        date: impl Into<String>,
        doctor: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        Self {
            name,
            date: date.into(),
            doctor: doctor.into(),
            problem: problem.into(),
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Date: {}, Doctor: {}, Problem: {}",
            self.name, self.date, self.doctor, self.problem
        )
    }
}

impl CsvRecord for Patient {
    const FIELDS: usize = PATIENT_FIELDS;
    const KIND: &'static str = "patient";
}

/// A booked appointment. Appended on booking, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub doctor: RecordName,
    pub patient: RecordName,
    pub date: String,
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor: {}, Patient: {}, Date: {}",
            self.doctor, self.patient, self.date
        )
    }
}

impl CsvRecord for Appointment {
    const FIELDS: usize = APPOINTMENT_FIELDS;
    const KIND: &'static str = "appointment";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> RecordName {
        RecordName::new(s).expect("valid name")
    }

    #[test]
    fn doctor_display_matches_profile_line() {
        let doctor = Doctor::new(name("Dr. Lee"), "Cardiology", "Mon-Fri 9-5");
        assert_eq!(
            doctor.to_string(),
            "Name: Dr. Lee, Speciality: Cardiology, Availability: Mon-Fri 9-5"
        );
    }

    #[test]
    fn patient_display_matches_record_line() {
        let patient = Patient::new(name("Alice"), "2024-01-10", "Dr. Lee", "chest pain");
        assert_eq!(
            patient.to_string(),
            "Name: Alice, Date: 2024-01-10, Doctor: Dr. Lee, Problem: chest pain"
        );
    }

    #[test]
    fn appointment_display_lists_all_fields() {
        let appointment = Appointment {
            doctor: name("Dr. Lee"),
            patient: name("Alice"),
            date: "2024-01-10".into(),
        };
        assert_eq!(
            appointment.to_string(),
            "Doctor: Dr. Lee, Patient: Alice, Date: 2024-01-10"
        );
    }
}
