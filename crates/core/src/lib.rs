//! # Clinic Core
//!
//! Record keeping for a small clinic: doctor profiles, patient records and
//! booked appointments, held in memory and persisted to flat CSV files.
//!
//! - [`records`]: the three record types and their CSV shape
//! - [`store`]: loading and saving headerless CSV files
//! - [`repository`]: [`ClinicRepository`], the single owner of the records
//! - [`config`]: where the data files live, resolved once at startup
//!
//! **No terminal concerns**: menus, prompts and user-facing wording belong in
//! `clinic-cli`.

pub mod config;
pub mod constants;
pub mod error;
pub mod records;
pub mod repository;
pub mod store;
mod text;

pub use config::CoreConfig;
pub use error::{ClinicError, ClinicResult};
pub use records::{Appointment, Doctor, Patient};
pub use repository::{ClinicRepository, LoadSummary};
pub use store::LoadReport;
pub use text::RecordName;
