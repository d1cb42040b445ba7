//! Flat-file persistence for clinic records.
//!
//! Each record type lives in its own headerless CSV file. Loading is lenient
//! about absence (a missing file is an empty list) and strict about shape (a
//! row with the wrong field count or a blank name is rejected and logged, the
//! rest of the file still loads). Saving rewrites the whole file through a
//! sibling temporary file so an interrupted write never truncates the data.

use crate::records::CsvRecord;
use crate::{ClinicError, ClinicResult};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What happened when a single file was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub path: PathBuf,
    pub kind: &'static str,
    pub loaded: usize,
    /// The file did not exist; nothing was loaded.
    pub missing: bool,
    /// 1-based lines of rows skipped because they were malformed.
    pub rejected_lines: Vec<u64>,
}

impl LoadReport {
    pub fn rejected(&self) -> usize {
        self.rejected_lines.len()
    }
}

/// Records read from a file together with the load report.
#[derive(Debug)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub report: LoadReport,
}

/// Read every well-formed row of `path` into `T`.
///
/// # Errors
///
/// Returns [`ClinicError::FileRead`] if the file exists but cannot be read.
/// Malformed rows are not errors; their lines are collected in
/// [`LoadReport::rejected_lines`].
pub fn load_entities<T: CsvRecord>(path: &Path) -> ClinicResult<Loaded<T>> {
    let mut report = LoadReport {
        path: path.to_path_buf(),
        kind: T::KIND,
        loaded: 0,
        missing: false,
        rejected_lines: Vec::new(),
    };

    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                "file {} not found, no {} records loaded",
                path.display(),
                T::KIND
            );
            report.missing = true;
            return Ok(Loaded {
                records: Vec::new(),
                report,
            });
        }
        Err(source) => {
            return Err(ClinicError::FileRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                let line = err.position().map(|p| p.line()).unwrap_or_default();
                match err.into_kind() {
                    csv::ErrorKind::Io(source) => {
                        return Err(ClinicError::FileRead {
                            path: path.to_path_buf(),
                            source,
                        })
                    }
                    other => {
                        tracing::warn!(
                            "rejecting {} row at {}:{}: {:?}",
                            T::KIND,
                            path.display(),
                            line,
                            other
                        );
                        report.rejected_lines.push(line);
                        continue;
                    }
                }
            }
        };

        let line = row.position().map(|p| p.line()).unwrap_or_default();

        if row.len() != T::FIELDS {
            tracing::warn!(
                "rejecting {} row at {}:{}: expected {} fields, found {}",
                T::KIND,
                path.display(),
                line,
                T::FIELDS,
                row.len()
            );
            report.rejected_lines.push(line);
            continue;
        }

        match row.deserialize::<T>(None) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(
                    "rejecting {} row at {}:{}: {}",
                    T::KIND,
                    path.display(),
                    line,
                    err
                );
                report.rejected_lines.push(line);
            }
        }
    }

    report.loaded = records.len();
    tracing::info!(
        "loaded {} {} records from {} ({} rejected)",
        report.loaded,
        T::KIND,
        path.display(),
        report.rejected()
    );

    Ok(Loaded { records, report })
}

/// Overwrite `path` with one row per record.
///
/// Fields are quoted only when they contain the delimiter, a quote or a line
/// break. The parent directory is created if needed.
pub fn save_entities<T: CsvRecord>(path: &Path, records: &[T]) -> ClinicResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ClinicError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let tmp = temp_path(path);
    let result = write_rows(&tmp, records).and_then(|()| {
        fs::rename(&tmp, path).map_err(|source| ClinicError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    });

    if result.is_err() {
        // Best effort; the write error is the one reported.
        let _ = fs::remove_file(&tmp);
    }
    result?;

    tracing::debug!(
        "saved {} {} records to {}",
        records.len(),
        T::KIND,
        path.display()
    );
    Ok(())
}

fn write_rows<T: CsvRecord>(tmp: &Path, records: &[T]) -> ClinicResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(tmp)
        .map_err(|source| ClinicError::CsvWrite {
            path: tmp.to_path_buf(),
            source,
        })?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|source| ClinicError::CsvWrite {
                path: tmp.to_path_buf(),
                source,
            })?;
    }

    let file = writer
        .into_inner()
        .map_err(|err| ClinicError::FileWrite {
            path: tmp.to_path_buf(),
            source: err.into_error(),
        })?;
    file.sync_all().map_err(|source| ClinicError::FileWrite {
        path: tmp.to_path_buf(),
        source,
    })
}

/// `doctors.csv` -> `doctors.csv.tmp`, in the same directory so the rename
/// stays on one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Appointment, Doctor, Patient, RecordName};
    use tempfile::TempDir;

    fn name(s: &str) -> RecordName {
        RecordName::new(s).expect("valid name")
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doctors.csv");

        let loaded = load_entities::<Doctor>(&path).expect("missing file is not an error");

        assert!(loaded.records.is_empty());
        assert!(loaded.report.missing);
        assert_eq!(loaded.report.rejected(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn round_trips_fields_with_delimiters_and_quotes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("patients.csv");

        let patients = vec![
            Patient::new(name("Alice"), "2024-01-10", "Dr. Lee", "chest pain"),
            Patient::new(
                name("Smith, John"),
                "10 Jan, 2024",
                "Dr. \"Bones\" McCoy",
                "cough,\nfever",
            ),
            Patient::new(name("Bob"), "", "", ""),
        ];

        save_entities(&path, &patients).expect("save");
        let loaded = load_entities::<Patient>(&path).expect("load");

        assert_eq!(loaded.records, patients);
        assert_eq!(loaded.report.loaded, 3);
        assert_eq!(loaded.report.rejected(), 0);
        assert!(!loaded.report.missing);
    }

    #[test]
    fn writes_headerless_rows_quoting_on_demand() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doctors.csv");

        let doctors = vec![
            Doctor::new(name("Dr. Lee"), "Cardiology", "Mon-Fri 9-5"),
            Doctor::new(name("Dr. Kim"), "Neurology, Paediatric", "Tue \"late\""),
        ];
        save_entities(&path, &doctors).expect("save");

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Dr. Lee,Cardiology,Mon-Fri 9-5\n\
             Dr. Kim,\"Neurology, Paediatric\",\"Tue \"\"late\"\"\"\n"
        );
    }

    #[test]
    fn rejects_malformed_rows_and_keeps_the_rest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doctors.csv");
        fs::write(
            &path,
            "Dr. Lee,Cardiology,Mon-Fri 9-5\n\
             broken,row\n\
             ,Neurology,Tue\n\
             Dr. Kim,Neurology,Wed,extra\n\
             Dr. Park,Dermatology,Thu\n",
        )
        .unwrap();

        let loaded = load_entities::<Doctor>(&path).expect("load");

        let names: Vec<&str> = loaded.records.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. Lee", "Dr. Park"]);
        assert_eq!(loaded.report.loaded, 2);
        assert_eq!(loaded.report.rejected(), 3);
        assert_eq!(loaded.report.rejected_lines, vec![2, 3, 4]);
    }

    #[test]
    fn rejects_rows_that_are_not_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doctors.csv");
        let mut bytes = b"Dr. Lee,Cardiology,Mon-Fri 9-5\n".to_vec();
        bytes.extend_from_slice(b"Dr. \xe9,Neurology,Tue\n");
        bytes.extend_from_slice(b"Dr. Park,Dermatology,Thu\n");
        fs::write(&path, bytes).unwrap();

        let loaded = load_entities::<Doctor>(&path).expect("load");

        let names: Vec<&str> = loaded.records.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. Lee", "Dr. Park"]);
        assert_eq!(loaded.report.loaded, 2);
        assert_eq!(loaded.report.rejected(), 1);
    }

    #[test]
    fn reads_crlf_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("appointments.csv");
        fs::write(&path, "Dr. Lee,Alice,2024-01-10\r\nDr. Lee,Bob,2024-01-11\r\n").unwrap();

        let loaded = load_entities::<Appointment>(&path).expect("load");

        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[1].patient.as_str(), "Bob");
        assert_eq!(loaded.records[1].date, "2024-01-11");
    }

    #[test]
    fn save_creates_missing_data_dir_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("records");
        let path = dir.join("appointments.csv");

        let appointments = vec![Appointment {
            doctor: name("Dr. Lee"),
            patient: name("Alice"),
            date: "2024-01-10".into(),
        }];
        save_entities(&path, &appointments).expect("save");

        assert!(path.is_file());
        assert!(!dir.join("appointments.csv.tmp").exists());
    }

    #[test]
    fn saving_an_empty_list_truncates_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("patients.csv");
        fs::write(&path, "Alice,2024-01-10,Dr. Lee,chest pain\n").unwrap();

        save_entities::<Patient>(&path, &[]).expect("save");

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        let loaded = load_entities::<Patient>(&path).expect("load");
        assert!(loaded.records.is_empty());
        assert!(!loaded.report.missing);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doctors.csv");
        fs::create_dir(&path).unwrap();

        let err = load_entities::<Doctor>(&path).expect_err("directory is not a CSV file");
        assert!(matches!(err, ClinicError::FileRead { .. }));
    }

    #[test]
    fn temp_path_sits_next_to_target() {
        let tmp = temp_path(Path::new("data/doctors.csv"));
        assert_eq!(tmp, Path::new("data").join("doctors.csv.tmp"));
    }
}
