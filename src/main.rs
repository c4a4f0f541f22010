//! `check-ids`: quick integrity check for tracker output.
//!
//! Exits 0 when every id stays on one physical object and 1 when an id
//! jumps, or when the input cannot be loaded.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use idcheck::checker::{DEFAULT_MAX_DIST, DEFAULT_MAX_GAP};
use idcheck::{load_frames, Checking, JumpChecker, Report, Thresholds};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verify persistent ids in a tracking output file.
#[derive(Parser, Debug)]
#[command(name = "check-ids", version)]
struct Args {
    /// tracking_output.json file
    path: PathBuf,

    /// Max frame gap within which the distance limit is enforced
    #[arg(long, default_value_t = DEFAULT_MAX_GAP)]
    max_gap: usize,

    /// Max centroid distance (normalised) between two track points
    #[arg(long, default_value_t = DEFAULT_MAX_DIST, allow_negative_numbers = true)]
    max_dist: f64,

    /// Log level (trace, debug, info, warn, error), RUST_LOG takes priority
    #[arg(short, long, default_value = "error")]
    log_level: String,
}

fn run(args: &Args) -> anyhow::Result<Report> {
    let thresholds = Thresholds::new(args.max_gap, args.max_dist)?;
    let frames = load_frames(&args.path).context("Failed to load JSON")?;

    Ok(JumpChecker::new(thresholds).check(&frames))
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)))
        .init();

    let report = match run(&args) {
        Ok(report) => report,
        Err(err) => {
            println!("❌ {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Some(violation) = report.violation() {
        println!("{}", violation.trace());
    }

    let prefix = if report.is_ok() { "✅" } else { "❌" };
    println!("{} {}  ({})", prefix, report, args.path.display());

    if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
