//! Prelude module for convenient imports.
//!
//! Re-exports the types needed for typical report generation:
//!
//! ```ignore
//! use bench_report::prelude::*;
//!
//! let driver = ReportDriver::new(ReportConfig::default(), DisplayRegistry::builtin())?;
//! ```

pub use crate::aggregate::{Aggregation, Aggregator, SeriesSet};
pub use crate::classify::{Classifier, Speedup};
pub use crate::config::ReportConfig;
pub use crate::error::{ReportError, Result};
pub use crate::record::{parse_line, BenchmarkRow, LineOutcome, ResultRecord};
pub use crate::registry::{DisplayRegistry, RegistryEntry, RegistryGroup};
pub use crate::render::{PlotRenderer, TableRenderer};
pub use crate::report::{Artifacts, ReportDriver};
pub use crate::rounds::{RoundsField, Step};
pub use crate::select::latest_results_file;
