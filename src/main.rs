use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use toggl2clockify::cli::Cli;
use toggl2clockify::{app, storage};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let result = storage::load_settings().and_then(|settings| {
        tracing::debug!(?settings, "loaded settings");
        app::run(&cli, settings)
    });

    match result {
        Ok(report) => {
            if let Err(err) = app::print_summary(&report, &mut io::stdout().lock()) {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
