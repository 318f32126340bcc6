//! Benchmark Report Tool
//!
//! Generates the camera-ready artifacts (LaTeX tables, scatter and quantile
//! plots) from a benchmark-runner results CSV.
//!
//! # Usage
//!
//! ```bash
//! # Auto-select the most recent results file for table 5
//! cargo run --release --bin report -- --table 5
//!
//! # Explicit input, copy artifacts to the configured directory
//! cargo run --release --bin report -- --input results/constraints_20230601-0900_tbl5.csv --copy
//!
//! # Explain where results are stored
//! cargo run --release --bin report -- --explain
//! ```

use bench_report::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate camera-ready tables and plots from synthesis benchmark results.
#[derive(Parser)]
#[command(name = "report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The input file produced by the benchmark runner.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output path for the realizable-benchmarks table.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Table number to generate (only 0 and 5 produce artifacts).
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=5))]
    table: u8,

    /// Results CSV file, used when --input is absent (legacy flag).
    #[arg(short, long)]
    csv: Option<PathBuf>,

    /// Explain where benchmark results are stored and exit.
    #[arg(short, long)]
    explain: bool,

    /// Copy generated artifacts to the configured local copy directory.
    #[arg(short = 'y', long)]
    copy: bool,

    /// TOML configuration file overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML display-registry file overriding the builtin registry.
    #[arg(long)]
    registry: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => ReportConfig::load_toml(path)?,
        None => ReportConfig::default(),
    };
    let registry = match &cli.registry {
        Some(path) => DisplayRegistry::load_toml(path)?,
        None => DisplayRegistry::builtin(),
    };
    let driver = ReportDriver::new(config, registry)?;

    if cli.explain {
        driver.explain();
        return Ok(ExitCode::SUCCESS);
    }

    // Other table numbers are accepted but generate nothing.
    if cli.table != 0 && cli.table != 5 {
        return Ok(ExitCode::SUCCESS);
    }

    let explicit = cli.input.or(cli.csv);
    let auto_select = explicit.is_none();
    let Some(input) = driver.resolve_input(explicit, cli.table) else {
        println!(
            "No experimental data file found for table {} under {}.",
            cli.table,
            driver.config().results_dir.display()
        );
        return Ok(ExitCode::SUCCESS);
    };
    if auto_select {
        println!("Input file selected: {}", input.display());
    }

    let artifacts = driver.run(&input, cli.output.as_deref())?;

    if cli.copy {
        match driver.copy_artifacts(&artifacts)? {
            Some(dest) => println!("Artifacts copied to {}.", dest.display()),
            None => println!(
                "${} is not set; copy step skipped.",
                driver.config().local_copy_env
            ),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
