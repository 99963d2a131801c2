//! Main entry point for the `shotdata` CLI application.
//!
//! `shotdata` takes shot information (sequence, shot, frame count, artist),
//! either from flags or from a CSV file, serializes it to JSON and a binary
//! format, and renders it as HTML and plain text.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Sets up logging and the output directory
//! - Delegates the run to [`SerializerApp`]
//! - Prints every generated file and maps failures to exit codes
//!
//! # Exit Codes
//! - `0`: success
//! - `1`: validation failure (incomplete input, unknown `--format`)
//! - `2`: I/O or encoding failure
//! - `3`: `--verify` found a round-trip mismatch

use anyhow::{Context, Result};
use clap::Parser;
use shotdata::{Args, Config, RunError, RunReport, SerializerApp, logging};
use std::process::ExitCode;
use tracing::error;

fn run(args: &Args) -> Result<RunReport> {
    let mut config = Config::from_env();
    if let Some(dir) = &args.output_dir {
        config = config.with_output_dir(dir);
    }
    config.ensure_output_dir()?;

    let app = SerializerApp::new(config);
    let report = app
        .run(args)
        .context("Serialization run failed")?;
    Ok(report)
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(report) => {
            for path in report.paths() {
                println!("Output saved to: {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            let code = e.downcast_ref::<RunError>().map_or(2, RunError::exit_code);
            ExitCode::from(code)
        }
    }
}
