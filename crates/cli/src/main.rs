//! Report binary entry point.

use std::io::Write;
use std::process::ExitCode;

use cli::{CliError, Config};

fn run() -> Result<(), CliError> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env()?;
    cli::telemetry::init_tracing(&config)?;

    // 2. Install Prometheus metrics recorder
    let metrics_handle = cli::telemetry::install_metrics()?;

    // 3. Load the dataset
    let mut dataset = cli::load_dataset(&config)?;

    // 4. Run the report
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run_report(&mut dataset, &mut out)?;
    out.flush()?;

    if config.emit_metrics {
        eprint!("{}", metrics_handle.render());
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "report failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
