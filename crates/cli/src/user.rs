//! User mode: doctor lookup and booking.

use crate::console::Console;
use crate::menu::UserAction;
use clinic_core::{ClinicError, ClinicRepository};
use std::io::{self, BufRead, Write};

pub fn run<R: BufRead, W: Write>(
    repo: &mut ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        match console.menu::<UserAction>()? {
            UserAction::ViewDoctors => view_doctors(repo, console)?,
            UserAction::SearchBySpeciality => search_by_speciality(repo, console)?,
            UserAction::CheckAvailability => check_availability(repo, console)?,
            UserAction::BookAppointment => {
                book(repo, console, "Enter doctor name for appointment: ")?
            }
            UserAction::Exit => return Ok(()),
        }
    }
}

fn view_doctors<R: BufRead, W: Write>(
    repo: &ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    match repo.list_doctors() {
        Ok(doctors) => {
            for doctor in doctors {
                console.line(doctor)?;
            }
            Ok(())
        }
        Err(e) => console.failure(&e),
    }
}

/// Lists matching doctors, then offers to book with one of them.
fn search_by_speciality<R: BufRead, W: Write>(
    repo: &mut ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(speciality) = console.prompt("Enter speciality to search: ")? else {
        return Ok(());
    };

    match repo.find_doctors_by_speciality(&speciality) {
        Ok(doctors) => {
            console.line("\nAvailable doctors:")?;
            for doctor in doctors {
                console.line(doctor)?;
            }
        }
        Err(e) => return console.failure(&e),
    }

    let Some(answer) = console.prompt("\nDo you want to book an appointment (y/n): ")? else {
        return Ok(());
    };
    if answer.trim().eq_ignore_ascii_case("y") {
        book(repo, console, "Enter doctor name to book appointment: ")?;
    }
    Ok(())
}

fn check_availability<R: BufRead, W: Write>(
    repo: &ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(name) = console.prompt("Enter doctor name to check availability: ")? else {
        return Ok(());
    };
    let name = name.trim();

    match repo.doctor_availability(name) {
        Ok(availability) => {
            console.line(format_args!("Doctor {name} is available on {availability}."))
        }
        Err(ClinicError::DoctorNotFound(_)) => console.line(format_args!(
            "Doctor {name} not found or availability not specified."
        )),
        Err(e) => console.failure(&e),
    }
}

fn book<R: BufRead, W: Write>(
    repo: &mut ClinicRepository,
    console: &mut Console<R, W>,
    doctor_label: &str,
) -> io::Result<()> {
    let Some(doctor) = console.prompt(doctor_label)? else {
        return Ok(());
    };
    let Some(patient) = console.prompt_name("Enter patient name: ")? else {
        return Ok(());
    };
    let Some(date) = console.prompt("Enter date for appointment: ")? else {
        return Ok(());
    };

    match repo.book_appointment(doctor.trim(), patient, date) {
        Ok(appointment) => {
            let message = format!(
                "Appointment booked for {} with {} on {}.",
                appointment.patient, appointment.doctor, appointment.date
            );
            console.line(message)
        }
        Err(e) => console.failure(&e),
    }
}
