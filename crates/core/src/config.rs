//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! repository as an `Arc<CoreConfig>`. Nothing below the shell reads the
//! process environment.

use crate::constants::{
    APPOINTMENTS_FILENAME, DEFAULT_DATA_DIR, DOCTORS_FILENAME, PATIENTS_FILENAME,
};
use crate::{ClinicError, ClinicResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` rooted at `data_dir`.
    ///
    /// The directory does not need to exist yet; it is created on first save.
    pub fn new(data_dir: PathBuf) -> ClinicResult<Self> {
        if data_dir.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ClinicError::InvalidInput(
                "data directory cannot be empty".into(),
            ));
        }

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn patients_path(&self) -> PathBuf {
        self.data_dir.join(PATIENTS_FILENAME)
    }

    pub fn doctors_path(&self) -> PathBuf {
        self.data_dir.join(DOCTORS_FILENAME)
    }

    pub fn appointments_path(&self) -> PathBuf {
        self.data_dir.join(APPOINTMENTS_FILENAME)
    }
}

/// Pick the data directory from an explicit override or an environment value.
///
/// `flag` wins over `env_value`. Whitespace-only values count as unset for the
/// environment but are an error when passed explicitly, since that is almost
/// certainly a typo on the command line.
pub fn resolve_data_dir(
    flag: Option<PathBuf>,
    env_value: Option<String>,
) -> ClinicResult<PathBuf> {
    if let Some(dir) = flag {
        if dir.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ClinicError::InvalidInput(
                "--data-dir cannot be empty".into(),
            ));
        }
        return Ok(dir);
    }

    let from_env = env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    Ok(from_env
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence_over_env() {
        let dir = resolve_data_dir(Some("/srv/clinic".into()), Some("/tmp/other".into()))
            .expect("resolve");
        assert_eq!(dir, PathBuf::from("/srv/clinic"));
    }

    #[test]
    fn blank_env_falls_back_to_default() {
        let dir = resolve_data_dir(None, Some("   ".into())).expect("resolve");
        assert_eq!(dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn blank_flag_is_rejected() {
        let err = resolve_data_dir(Some(" ".into()), None).expect_err("should reject");
        assert!(matches!(err, ClinicError::InvalidInput(_)));
    }

    #[test]
    fn paths_join_file_names() {
        let cfg = CoreConfig::new(PathBuf::from("records")).expect("config");
        assert_eq!(cfg.patients_path(), Path::new("records").join("patients.csv"));
        assert_eq!(cfg.doctors_path(), Path::new("records").join("doctors.csv"));
        assert_eq!(
            cfg.appointments_path(),
            Path::new("records").join("appointments.csv")
        );
    }
}
