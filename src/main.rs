use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rcat::cli::USAGE_ERROR_EXIT;
use rcat::driver::PROGRAM_NAME;
use rcat::{CatError, Cli, Concatenator};

/// Environment variable holding the log filter, e.g. `RCAT_LOG=debug`.
const LOG_ENV: &str = "RCAT_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.options().resolve();
    let sources = cli.sources();
    tracing::debug!(?config, sources = sources.len(), "starting");

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let summary = Concatenator::new(&config).run(&sources, &mut stdout, &mut stderr)?;

    tracing::debug!(
        completed = summary.completed,
        failed = summary.failed,
        lines = summary.lines,
        "done"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Error and usage hint go to stderr
            let _ = err.print();
            return ExitCode::from(USAGE_ERROR_EXIT);
        }
    };

    if let Some(text) = cli.informational_text() {
        let _ = io::stdout().write_all(text.as_bytes());
        return ExitCode::SUCCESS;
    }

    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<CatError>().map_or(1, CatError::exit_code);
            if code != 0 {
                eprintln!("{}: {}", PROGRAM_NAME, err);
            }
            ExitCode::from(code)
        }
    }
}
