//! PQC harness console program
//!
//! 1. Parse arguments and load settings
//! 2. Initialize logging (stderr)
//! 3. Run the interactive menu on stdin/stdout until exit

use anyhow::{Context, Result};
use clap::Parser;
use pqc_harness::config::{self, HarnessSettings, OutputFormat, MAX_PRECISION};
use pqc_harness::{Dispatcher, SignatureTiming};
use pqc_primitives::PqcryptoProvider;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Interactive post-quantum KEM and signature harness
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Steps of the signature workflow included in the timed window
    #[arg(long, value_enum)]
    timing: Option<SignatureTiming>,

    /// Decimals printed for elapsed seconds
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64))]
    precision: Option<u8>,

    /// Print key, ciphertext and signature sizes plus secret fingerprints
    #[arg(long, default_value_t = false)]
    details: bool,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let settings = load_settings(&args)?;
    init_logging(&settings.log_level)?;

    info!("Starting PQC harness v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Settings: timing={:?}, precision={}, details={}, format={:?}",
        settings.signature_timing, settings.precision, settings.show_details, settings.output_format
    );

    let provider = PqcryptoProvider::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut dispatcher = Dispatcher::new(&provider, stdin.lock(), stdout.lock(), settings);
    dispatcher.run().context("Console I/O failed")?;

    info!("Harness shutting down");
    Ok(())
}

/// Settings file and environment first, then command line overrides
fn load_settings(args: &Args) -> Result<HarnessSettings> {
    let mut settings =
        config::load_settings(args.config.as_deref()).context("Failed to load settings")?;

    if let Some(level) = &args.log_level {
        settings.log_level = level.clone();
    }
    if let Some(timing) = args.timing {
        settings.signature_timing = timing;
    }
    if let Some(precision) = args.precision {
        settings.precision = usize::from(precision);
    }
    if args.details {
        settings.show_details = true;
    }
    if let Some(format) = args.format {
        settings.output_format = format;
    }

    config::validate_settings(&settings).context("Invalid settings")?;
    Ok(settings)
}

/// Initialize logging system
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_logging(log_level: &str) -> Result<()> {
    let level = config::parse_log_level(log_level)?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}
