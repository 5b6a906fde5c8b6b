use solver_core::config::Config;
use solver_core::console::TerminalConsole;
use solver_core::{InteractionLoop, SolverError};
use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

// The terminal belongs to the menus, so logs only go to a file when asked for.
fn init_logging(config: &Config) -> Result<(), SolverError> {
    if let Some(path) = &config.log_path {
        let file = File::options().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

fn run() -> Result<(), SolverError> {
    let config = Config::from_env()?;
    init_logging(&config)?;
    tracing::info!(language = %config.language, "substitution solver starting");

    let mut console = TerminalConsole::new();
    let end = InteractionLoop::new(&mut console, config.language).run()?;
    tracing::info!(?end, "substitution solver shutting down");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}
