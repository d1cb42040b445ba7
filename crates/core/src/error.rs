use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("name cannot be empty")]
    EmptyName,

    #[error("failed to read {path}: {source}", path = path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}", path = path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write CSV row to {path}: {source}", path = path.display())]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Patient {0} not found.")]
    PatientNotFound(String),
    #[error("Doctor {0} not found.")]
    DoctorNotFound(String),
    #[error("No doctor profiles found.")]
    NoDoctors,
    #[error("No doctors found with speciality: {0}")]
    NoDoctorsWithSpeciality(String),
}

impl ClinicError {
    /// True for lookup misses that leave the repository untouched.
    ///
    /// Everything else is a configuration or I/O fault.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClinicError::PatientNotFound(_)
                | ClinicError::DoctorNotFound(_)
                | ClinicError::NoDoctors
                | ClinicError::NoDoctorsWithSpeciality(_)
        )
    }
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
