//! The clinic repository.
//!
//! [`ClinicRepository`] owns the in-memory doctor, patient and appointment
//! lists and is the only thing that writes the CSV files. Every mutation
//! rewrites the affected file straight away; there is no batching.
//!
//! Name-keyed operations (delete, search, availability, booking) act on the
//! first record in insertion order whose name matches exactly. Duplicate
//! names are accepted on insert.

use crate::config::CoreConfig;
use crate::records::{Appointment, Doctor, Patient};
use crate::store::{load_entities, save_entities, LoadReport};
use crate::{ClinicError, ClinicResult, RecordName};
use std::sync::Arc;

/// Reports from loading all three files at startup, in
/// patients, doctors, appointments order.
#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub patients: LoadReport,
    pub doctors: LoadReport,
    pub appointments: LoadReport,
}

impl LoadSummary {
    pub fn reports(&self) -> [&LoadReport; 3] {
        [&self.patients, &self.doctors, &self.appointments]
    }
}

#[derive(Debug)]
pub struct ClinicRepository {
    cfg: Arc<CoreConfig>,
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
}

impl ClinicRepository {
    /// Creates an empty repository. Call [`load`](Self::load) to read the
    /// files under the configured data directory.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            doctors: Vec::new(),
            patients: Vec::new(),
            appointments: Vec::new(),
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    /// Replaces the in-memory lists with the contents of the data files.
    ///
    /// Missing files load as empty lists. Nothing is replaced unless all three
    /// files were read.
    pub fn load(&mut self) -> ClinicResult<LoadSummary> {
        let patients = load_entities::<Patient>(&self.cfg.patients_path())?;
        let doctors = load_entities::<Doctor>(&self.cfg.doctors_path())?;
        let appointments = load_entities::<Appointment>(&self.cfg.appointments_path())?;

        self.patients = patients.records;
        self.doctors = doctors.records;
        self.appointments = appointments.records;

        Ok(LoadSummary {
            patients: patients.report,
            doctors: doctors.report,
            appointments: appointments.report,
        })
    }

    /// Rewrites all three data files.
    pub fn save_all(&self) -> ClinicResult<()> {
        self.save_patients()?;
        self.save_doctors()?;
        self.save_appointments()
    }

    fn save_patients(&self) -> ClinicResult<()> {
        save_entities(&self.cfg.patients_path(), &self.patients)
    }

    fn save_doctors(&self) -> ClinicResult<()> {
        save_entities(&self.cfg.doctors_path(), &self.doctors)
    }

    fn save_appointments(&self) -> ClinicResult<()> {
        save_entities(&self.cfg.appointments_path(), &self.appointments)
    }

    // ------------------------------------------------------------------
    // Patients
    // ------------------------------------------------------------------

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Appends a patient record and persists the patient file.
    ///
    /// If the write fails the record stays in memory and the error is
    /// returned; the next successful save will include it.
    pub fn add_patient(&mut self, patient: Patient) -> ClinicResult<()> {
        tracing::debug!("adding patient {}", patient.name);
        self.patients.push(patient);
        self.save_patients()
    }

    /// Removes the first patient called `name` and persists the patient file.
    pub fn delete_patient_by_name(&mut self, name: &str) -> ClinicResult<Patient> {
        let index = self
            .patients
            .iter()
            .position(|p| p.name == *name)
            .ok_or_else(|| ClinicError::PatientNotFound(name.to_string()))?;

        let removed = self.patients.remove(index);
        tracing::debug!("deleted patient {}", removed.name);
        self.save_patients()?;
        Ok(removed)
    }

    pub fn search_patient_by_name(&self, name: &str) -> ClinicResult<&Patient> {
        self.patients
            .iter()
            .find(|p| p.name == *name)
            .ok_or_else(|| ClinicError::PatientNotFound(name.to_string()))
    }

    // ------------------------------------------------------------------
    // Doctors
    // ------------------------------------------------------------------

    /// Appends a doctor profile and persists the doctor file.
    pub fn add_doctor(&mut self, doctor: Doctor) -> ClinicResult<()> {
        tracing::debug!("adding doctor {}", doctor.name);
        self.doctors.push(doctor);
        self.save_doctors()
    }

    /// Removes the first doctor called `name` and persists the doctor file.
    ///
    /// Appointments already booked with that doctor are kept.
    pub fn delete_doctor_by_name(&mut self, name: &str) -> ClinicResult<Doctor> {
        let index = self
            .doctors
            .iter()
            .position(|d| d.name == *name)
            .ok_or_else(|| ClinicError::DoctorNotFound(name.to_string()))?;

        let removed = self.doctors.remove(index);
        tracing::debug!("deleted doctor {}", removed.name);
        self.save_doctors()?;
        Ok(removed)
    }

    /// All doctor profiles, or [`ClinicError::NoDoctors`] when there are none.
    pub fn list_doctors(&self) -> ClinicResult<&[Doctor]> {
        if self.doctors.is_empty() {
            return Err(ClinicError::NoDoctors);
        }
        Ok(&self.doctors)
    }

    /// Doctors whose speciality equals `speciality` exactly.
    ///
    /// An empty match is reported as
    /// [`ClinicError::NoDoctorsWithSpeciality`], never as an empty `Vec`.
    pub fn find_doctors_by_speciality(&self, speciality: &str) -> ClinicResult<Vec<&Doctor>> {
        let found: Vec<&Doctor> = self
            .doctors
            .iter()
            .filter(|d| d.speciality == speciality)
            .collect();

        if found.is_empty() {
            return Err(ClinicError::NoDoctorsWithSpeciality(speciality.to_string()));
        }
        Ok(found)
    }

    fn find_doctor(&self, name: &str) -> ClinicResult<&Doctor> {
        self.doctors
            .iter()
            .find(|d| d.name == *name)
            .ok_or_else(|| ClinicError::DoctorNotFound(name.to_string()))
    }

    pub fn doctor_availability(&self, name: &str) -> ClinicResult<&str> {
        self.find_doctor(name).map(|d| d.availability.as_str())
    }

    // ------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Books `patient` with the first doctor called `doctor_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::DoctorNotFound`] without touching the
    /// appointment list or file when no doctor has that name.
    pub fn book_appointment(
        &mut self,
        doctor_name: &str,
        patient: RecordName,
        date: impl Into<String>,
    ) -> ClinicResult<&Appointment> {
        let doctor = self.find_doctor(doctor_name)?.name.clone();

        let appointment = Appointment {
            doctor,
            patient,
            date: date.into(),
        };
        tracing::debug!("booking appointment: {}", appointment);
        self.appointments.push(appointment);
        self.save_appointments()?;

        let index = self.appointments.len() - 1;
        Ok(&self.appointments[index])
    }
}
