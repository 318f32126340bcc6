//! Report driver.
//!
//! Orchestration only: resolve the input file (explicit path or most recent
//! results file), fold every line through the parser and aggregator, render
//! the three plots and two tables, print the console summary, and optionally
//! copy the artifacts to an external directory named by an environment
//! variable.
//!
//! The run is purely sequential batch processing: read, fold, render. Output
//! I/O failures propagate and terminate the run; there is no recovery path
//! for a broken output directory.

use crate::aggregate::{Aggregation, Aggregator};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::record::{parse_line, LineOutcome};
use crate::registry::DisplayRegistry;
use crate::render::{PlotRenderer, TableRenderer};
use crate::select::latest_results_file;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Paths of the artifacts produced by one run.
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// Realizable-benchmarks LaTeX table.
    pub table: PathBuf,
    /// Unrealizable-benchmarks LaTeX table.
    pub table_unrealizable: PathBuf,
    /// Quantile plot.
    pub quantile: PathBuf,
    /// Scatter plot with timeouts.
    pub scatter: PathBuf,
    /// Scatter plot with timeout pairs removed.
    pub scatter_no_timeouts: PathBuf,
}

/// Drives one full report generation.
pub struct ReportDriver {
    config: ReportConfig,
    registry: DisplayRegistry,
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", base.display(), suffix))
}

impl ReportDriver {
    /// Build a driver from a validated configuration and a display registry.
    pub fn new(config: ReportConfig, registry: DisplayRegistry) -> Result<Self> {
        config.validate().map_err(ReportError::Config)?;
        Ok(Self { config, registry })
    }

    /// The configuration this driver runs with.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Resolve the input file: an explicit path wins, otherwise the most
    /// recent results file for `table_no`. `None` means nothing to report.
    pub fn resolve_input(&self, explicit: Option<PathBuf>, table_no: u8) -> Option<PathBuf> {
        if explicit.is_some() {
            return explicit;
        }
        latest_results_file(
            &self.config.results_dir,
            table_no,
            &self.config.timestamp_format,
        )
    }

    /// Print where results are stored and how the input file is chosen.
    pub fn explain(&self) {
        println!(
            "Experimental results are stored in {}.",
            self.config.results_dir.display()
        );
        println!("Result files are named <prefix>_<timestamp>_<suffix><table-number>.csv,");
        println!(
            "where <timestamp> follows the format {:?}.",
            self.config.timestamp_format
        );
        println!("Without --input, the file with the latest timestamp is selected.");
        println!(
            "With --copy, artifacts are copied to the directory named by ${}.",
            self.config.local_copy_env
        );
    }

    fn fold_input(&self, input: &Path) -> Result<Aggregation> {
        let mut aggregator = Aggregator::new(&self.config);

        println!("============== SUMMARY ================");
        println!("Summary of relative improvement of SE²GIS over the SEGIS baseline.");
        println!("improvement = baseline synt. time / SE²GIS synt. time");
        println!("+∞ means the baseline timed out, but SE²GIS did not,");
        println!("-∞ means SE²GIS timed out, but the baseline did not,");
        println!("! means both timed out.");
        println!("---------------------------------------------");
        println!(
            "{:>54}, {:>7}, {:>7} : {:>7}",
            "Benchmark", "SE2GIS", "SEGIS", "Speedup"
        );

        let reader = BufReader::new(fs::File::open(input)?);
        for line in reader.lines() {
            let line = line?;
            match parse_line(&line) {
                LineOutcome::Setup(setup) => aggregator.set_setup(setup),
                LineOutcome::Row(row) => {
                    let speedup = aggregator
                        .classifier()
                        .speedup(&row.candidate.time, &row.baseline.time)
                        .to_string();
                    println!(
                        "{:>54}, {:>7}, {:>7} : {:>7}",
                        row.benchmark_id, row.candidate.time, row.baseline.time, speedup
                    );
                    aggregator.ingest(*row);
                }
                LineOutcome::Skipped => {}
            }
        }

        Ok(aggregator.finish())
    }

    /// Generate all artifacts from `input` and print the summary.
    ///
    /// Table paths derive from the input file's base name unless `table_out`
    /// overrides the realizable table's destination.
    pub fn run(&self, input: &Path, table_out: Option<&Path>) -> Result<Artifacts> {
        let base = input.with_extension("");
        let artifacts = Artifacts {
            table: match table_out {
                Some(p) => p.to_path_buf(),
                None => with_suffix(&base, "_table.tex"),
            },
            table_unrealizable: match table_out {
                Some(p) => with_suffix(&p.with_extension(""), "_unrealizable.tex"),
                None => with_suffix(&base, "_table_unrealizable.tex"),
            },
            quantile: with_suffix(&base, "_quantile.svg"),
            scatter: with_suffix(&base, "_scatter.svg"),
            scatter_no_timeouts: with_suffix(&base, "_no_timeouts_scatter.svg"),
        };

        let agg = self.fold_input(input)?;

        let plots = PlotRenderer::new(&self.config);
        plots.scatter_with_timeouts(&artifacts.scatter, &agg)?;
        plots.scatter_no_timeouts(&artifacts.scatter_no_timeouts, &agg)?;
        plots.quantile(&artifacts.quantile, &agg)?;

        let tables = TableRenderer::new(&self.config, &self.registry);
        tables.write_realizable(&agg, &artifacts.table)?;
        tables.write_unrealizable(&agg, &artifacts.table_unrealizable)?;

        println!("Number of benchmarks: {}", agg.benchmark_count());
        println!(
            "{} timeouts for SEGIS, {} timeouts for SE2GIS.",
            agg.baseline_timeouts, agg.candidate_timeouts
        );
        println!("SE2GIS is faster on {} benchmarks.", agg.candidate_faster);
        println!("Tex table    : {}", artifacts.table.display());
        println!("Quantile plot: {}", artifacts.quantile.display());
        println!("Scatter plot : {}", artifacts.scatter.display());
        println!(
            "Scatter plot (omitting timeouts) : {}",
            artifacts.scatter_no_timeouts.display()
        );

        Ok(artifacts)
    }

    /// Copy artifacts to `$<local_copy_env>/tables` and `figures`.
    ///
    /// Returns the destination root, or `None` (step skipped) when the
    /// environment variable is unset.
    pub fn copy_artifacts(&self, artifacts: &Artifacts) -> Result<Option<PathBuf>> {
        let Ok(dest) = std::env::var(&self.config.local_copy_env) else {
            return Ok(None);
        };
        let dest = PathBuf::from(dest);

        let tables = dest.join("tables");
        let figures = dest.join("figures");
        fs::create_dir_all(&tables)?;
        fs::create_dir_all(&figures)?;

        fs::copy(&artifacts.table, tables.join("table.tex"))?;
        fs::copy(
            &artifacts.table_unrealizable,
            tables.join("table_unrealizable.tex"),
        )?;
        fs::copy(&artifacts.quantile, figures.join("quantile.svg"))?;
        fs::copy(&artifacts.scatter, figures.join("scatter.svg"))?;
        fs::copy(
            &artifacts.scatter_no_timeouts,
            figures.join("no_timeouts_scatter.svg"),
        )?;

        Ok(Some(dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_input_wins_over_selection() {
        let driver =
            ReportDriver::new(ReportConfig::default(), DisplayRegistry::builtin()).unwrap();
        let explicit = PathBuf::from("results.csv");
        assert_eq!(
            driver.resolve_input(Some(explicit.clone()), 5),
            Some(explicit)
        );
    }

    #[test]
    fn test_no_input_resolves_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::default().with_results_dir(dir.path());
        let driver = ReportDriver::new(config, DisplayRegistry::builtin()).unwrap();
        assert_eq!(driver.resolve_input(None, 5), None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ReportConfig::default();
        config.timeout_names.clear();
        assert!(ReportDriver::new(config, DisplayRegistry::builtin()).is_err());
    }
}
