//! Benchmark Report Pipeline
//!
//! Aggregates experiment-result records produced by the synthesis-tool
//! benchmark runner, compares the SE²GIS algorithm against the SEGIS
//! baseline per benchmark, and emits camera-ready artifacts: LaTeX tables
//! for the realizable and unrealizable benchmark sets, two scatter plots,
//! and a quantile plot.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                       Benchmark Report                         │
//! ├────────────────────────────────────────────────────────────────┤
//! │  record/rounds  - CSV row parsing, structured rounds encoding  │
//! │  classify       - timeout sentinels, speedup comparison        │
//! │  aggregate      - per-benchmark table, series, counters        │
//! │  select         - most recent results file by timestamp        │
//! │  render         - LaTeX tables and comparison plots            │
//! │  report         - driver: select → fold → render → summarize   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use bench_report::prelude::*;
//!
//! let config = ReportConfig::default();
//! let driver = ReportDriver::new(config, DisplayRegistry::builtin())?;
//!
//! if let Some(input) = driver.resolve_input(None, 5) {
//!     let artifacts = driver.run(&input, None)?;
//!     driver.copy_artifacts(&artifacts)?;
//! }
//! ```

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod render;
pub mod report;
pub mod rounds;
pub mod select;

// Re-exports - Configuration
pub use config::ReportConfig;

// Re-exports - Parsing
pub use record::{parse_line, BenchmarkRow, LineOutcome, ResultRecord};
pub use rounds::{RoundsField, Step};

// Re-exports - Classification and aggregation
pub use aggregate::{Aggregation, Aggregator, SeriesSet};
pub use classify::{Classifier, Speedup};

// Re-exports - Registry and selection
pub use registry::{DisplayRegistry, RegistryEntry, RegistryGroup};
pub use select::latest_results_file;

// Re-exports - Rendering and driver
pub use error::{ReportError, Result};
pub use render::{PlotRenderer, TableRenderer};
pub use report::{Artifacts, ReportDriver};
