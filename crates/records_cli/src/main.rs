mod menu;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use records_core::{RecordsConfig, RecordsConfigBuilder};
use records_validator::Partitioner;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::menu::{MenuSession, SessionEnd};

#[derive(Parser)]
#[command(name = "car-records")]
#[command(
    version,
    about = "Validate car records and browse the valid and rejected entries",
    long_about = None
)]
struct Cli {
    /// Input file with one record per line (default: car_records.txt)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Error log for rejected lines, truncated on each run (default: invalid_records.txt)
    #[arg(short, long)]
    errors: Option<PathBuf>,

    /// TOML file overriding limits and file locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let config = load_config(&cli)?;
    debug!("Using configuration: {:?}", config);

    let partition = Partitioner::new(&config)
        .partition_files(&config.input_file, &config.error_file)
        .context("Failed to load car records")?;

    if partition.stats.capacity_reached {
        output::print_info(&format!(
            "Stopped after {} valid records; remaining input was not read",
            config.max_records
        ));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = MenuSession::new(&partition.records, &config.error_file)
        .run(stdin.lock(), &mut stdout.lock())
        .context("Console session failed")?;

    if end == SessionEnd::EndOfInput {
        info!("Console input closed, exiting");
    }

    Ok(())
}

/// Merges the optional config file with command line overrides.
fn load_config(cli: &Cli) -> Result<RecordsConfig> {
    let base = match &cli.config {
        Some(path) => RecordsConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => RecordsConfig::default(),
    };

    let mut builder = RecordsConfigBuilder::from_config(base);
    if let Some(input) = &cli.input {
        builder = builder.input_file(input);
    }
    if let Some(errors) = &cli.errors {
        builder = builder.error_file(errors);
    }

    builder.build().context("Invalid configuration")
}
