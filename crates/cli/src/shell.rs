//! Top-level mode selection.

use crate::console::Console;
use crate::menu::Mode;
use crate::{admin, user};
use clinic_core::{ClinicRepository, LoadSummary};
use std::io::{self, BufRead, Write};

/// Tells the user about data files that were absent or partly unreadable.
pub fn report_load<R: BufRead, W: Write>(
    summary: &LoadSummary,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    for report in summary.reports() {
        if report.missing {
            let what = match report.kind {
                "appointment" => "appointments",
                _ => "data",
            };
            console.line(format_args!(
                "File {} not found. No {what} loaded.",
                report.path.display()
            ))?;
        } else if report.rejected() > 0 {
            let lines: Vec<String> = report
                .rejected_lines
                .iter()
                .map(|line| line.to_string())
                .collect();
            console.line(format_args!(
                "Skipped {} malformed row(s) in {} (line(s) {}).",
                report.rejected(),
                report.path.display(),
                lines.join(", ")
            ))?;
        }
    }
    Ok(())
}

/// Runs the mode menu until the user exits, then saves every file.
///
/// A failed final save is reported but does not abort; there is nothing
/// further the user could do from here.
pub fn run<R: BufRead, W: Write>(
    repo: &mut ClinicRepository,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        match console.menu::<Mode>()? {
            Mode::Admin => admin::run(repo, console)?,
            Mode::User => user::run(repo, console)?,
            Mode::Exit => {
                console.line("Thank You!!")?;
                if let Err(e) = repo.save_all() {
                    console.failure(&e)?;
                }
                return Ok(());
            }
        }
    }
}
