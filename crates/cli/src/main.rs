use clap::Parser;
use clinic_core::config::resolve_data_dir;
use clinic_core::constants::DATA_DIR_ENV;
use clinic_core::{ClinicRepository, CoreConfig};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod admin;
mod console;
mod menu;
mod shell;
mod user;

use console::Console;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic doctor and patient record keeping")]
struct Cli {
    /// Directory holding patients.csv, doctors.csv and appointments.csv
    /// (defaults to $CLINIC_DATA_DIR, then the current directory)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

/// Entry point for the interactive clinic shell.
///
/// Logs go to stderr so they never interleave with the menus on stdout.
///
/// # Environment Variables
/// - `CLINIC_DATA_DIR`: data directory when `--data-dir` is not given
/// - `RUST_LOG`: log filter (default: `clinic=warn,clinic_core=error`)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new("clinic=warn,clinic_core=error")?,
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir, std::env::var(DATA_DIR_ENV).ok())?;
    let cfg = Arc::new(CoreConfig::new(data_dir)?);
    tracing::info!("using data directory {}", cfg.data_dir().display());

    let mut repo = ClinicRepository::new(cfg);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    let summary = repo.load()?;
    shell::report_load(&summary, &mut console)?;
    shell::run(&mut repo, &mut console)?;

    Ok(())
}
