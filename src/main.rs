//! `diffimg` CLI - Check that two images are equal within tolerance.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diffimg::{Checker, Config};

/// Compare two images sample by sample.
///
/// Exits 0 when the maximum deviation is within tolerance, 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "diffimg")]
#[command(version, about, long_about = None)]
struct Args {
    /// First image path.
    #[arg(value_name = "FIRST")]
    first: PathBuf,

    /// Second image path.
    #[arg(value_name = "SECOND")]
    second: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // Help and version go to stdout and are not failures.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Logs go to stderr; stdout carries only the report line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diffimg=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            println!("{err}");
            tracing::debug!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the two images are the same within tolerance.
fn run(args: &Args) -> Result<bool> {
    let checker = Checker::new(Config::default());
    let result = checker.compare(&args.first, &args.second)?;

    if !result.is_same() {
        println!(
            "{} and {} are different {}.",
            args.first.display(),
            args.second.display(),
            result.max_deviation()
        );
    }

    Ok(result.is_same())
}
