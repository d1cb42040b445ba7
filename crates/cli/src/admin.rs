//! Admin mode: record management.

use crate::console::Console;
use crate::menu::AdminAction;
use clinic_core::{ClinicRepository, Doctor, Patient};
use std::io::{self, BufRead, Write};

pub fn run<R: BufRead, W: Write>(
    repo: &mut ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        match console.menu::<AdminAction>()? {
            AdminAction::AddPatient => add_patient(repo, console)?,
            AdminAction::DeletePatient => delete_patient(repo, console)?,
            AdminAction::SearchPatient => search_patient(repo, console)?,
            AdminAction::AddDoctor => add_doctor(repo, console)?,
            AdminAction::DeleteDoctor => delete_doctor(repo, console)?,
            AdminAction::ViewPatients => view_patients(repo, console)?,
            AdminAction::ViewAppointments => view_appointments(repo, console)?,
            AdminAction::Exit => return Ok(()),
        }
    }
}

fn add_patient<R: BufRead, W: Write>(
    repo: &mut ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(name) = console.prompt_name("Enter patient name: ")? else {
        return Ok(());
    };
    let Some(date) = console.prompt("Enter date: ")? else {
        return Ok(());
    };
    let Some(doctor) = console.prompt("Enter doctor name: ")? else {
        return Ok(());
    };
    let Some(problem) = console.prompt("Enter problem: ")? else {
        return Ok(());
    };

    match repo.add_patient(Patient::new(name, date, doctor, problem)) {
        Ok(()) => console.line("Patient record added successfully."),
        Err(e) => console.failure(&e),
    }
}

fn delete_patient<R: BufRead, W: Write>(
    repo: &mut ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(name) = console.prompt("Enter patient name to delete record: ")? else {
        return Ok(());
    };
    let name = name.trim();

    match repo.delete_patient_by_name(name) {
        Ok(_) => console.line(format_args!(
            "Patient {name} record deleted successfully."
        )),
        Err(e) => console.failure(&e),
    }
}

fn search_patient<R: BufRead, W: Write>(
    repo: &ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(name) = console.prompt("Enter patient name to search: ")? else {
        return Ok(());
    };

    match repo.search_patient_by_name(name.trim()) {
        Ok(patient) => console.line(patient),
        Err(e) => console.failure(&e),
    }
}

fn add_doctor<R: BufRead, W: Write>(
    repo: &mut ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(name) = console.prompt_name("Enter doctor name: ")? else {
        return Ok(());
    };
    let Some(speciality) = console.prompt("Enter speciality: ")? else {
        return Ok(());
    };
    let Some(availability) = console.prompt("Enter availability: ")? else {
        return Ok(());
    };

    match repo.add_doctor(Doctor::new(name, speciality, availability)) {
        Ok(()) => console.line("Doctor profile added successfully."),
        Err(e) => console.failure(&e),
    }
}

fn delete_doctor<R: BufRead, W: Write>(
    repo: &mut ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(name) = console.prompt("Enter doctor name to delete profile: ")? else {
        return Ok(());
    };
    let name = name.trim();

    match repo.delete_doctor_by_name(name) {
        Ok(_) => console.line(format_args!(
            "Doctor {name}'s profile deleted successfully."
        )),
        Err(e) => console.failure(&e),
    }
}

fn view_patients<R: BufRead, W: Write>(
    repo: &ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if repo.patients().is_empty() {
        return console.line("No patient records found.");
    }
    for patient in repo.patients() {
        console.line(patient)?;
    }
    Ok(())
}

fn view_appointments<R: BufRead, W: Write>(
    repo: &ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if repo.appointments().is_empty() {
        return console.line("No appointments booked.");
    }
    for appointment in repo.appointments() {
        console.line(appointment)?;
    }
    Ok(())
}
