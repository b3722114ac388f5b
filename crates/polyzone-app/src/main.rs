//! Main application entry point.

use polyzone_app::{App, AppConfig, AppError, demo_session};
use std::path::PathBuf;
use std::process::ExitCode;

fn run() -> Result<(), AppError> {
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };

    let mut app = App::new(&config)?;
    let report = app.replay(demo_session());
    log::info!("Session done: {} applied, {} absorbed", report.applied, report.absorbed);

    app.render(&mut std::io::stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting polyzone");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
