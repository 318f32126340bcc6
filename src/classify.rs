//! Timeout handling and candidate/baseline comparison.
//!
//! Time fields arrive as strings: either a numeric literal in seconds or one
//! of the configured timeout sentinels. [`Classifier::time_secs`] maps both
//! onto a single numeric scale by substituting the timeout value for
//! sentinels, so that a timeout is worse than any real measurement while
//! staying finite (and log-plottable). A time field that is neither a
//! sentinel nor a parseable number takes the same path.

use crate::config::ReportConfig;
use std::fmt;

/// Relative improvement of the candidate over the baseline on one benchmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speedup {
    /// Both runs finished: baseline time / candidate time.
    Ratio(f64),
    /// Only the baseline timed out; the candidate is strictly better.
    CandidateOnly,
    /// Only the candidate timed out.
    BaselineOnly,
    /// Both runs timed out.
    BothTimedOut,
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speedup::Ratio(r) => write!(f, "{r:.1}"),
            Speedup::CandidateOnly => write!(f, "+∞"),
            Speedup::BaselineOnly => write!(f, "-∞"),
            Speedup::BothTimedOut => write!(f, "!"),
        }
    }
}

/// Sentinel-aware interpretation of time fields.
#[derive(Debug, Clone)]
pub struct Classifier {
    timeout_value: f64,
    timeout_names: Vec<String>,
}

impl Classifier {
    /// Build a classifier from the run configuration.
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            timeout_value: config.timeout_value,
            timeout_names: config.timeout_names.clone(),
        }
    }

    /// The substitute value used for timed-out runs, in seconds.
    pub fn timeout_value(&self) -> f64 {
        self.timeout_value
    }

    /// True iff `time` is a timeout sentinel.
    pub fn is_timeout(&self, time: &str) -> bool {
        self.timeout_names.iter().any(|n| n == time)
    }

    /// Convert a time field to seconds for comparison purposes.
    ///
    /// Sentinels and unparseable values both map to the timeout value.
    pub fn time_secs(&self, time: &str) -> f64 {
        if self.is_timeout(time) {
            return self.timeout_value;
        }
        time.parse::<f64>().unwrap_or(self.timeout_value)
    }

    /// Relative improvement of candidate time `a` over baseline time `b`.
    pub fn speedup(&self, a: &str, b: &str) -> Speedup {
        match (self.is_timeout(a), self.is_timeout(b)) {
            (true, true) => Speedup::BothTimedOut,
            (true, false) => Speedup::BaselineOnly,
            (false, true) => Speedup::CandidateOnly,
            (false, false) => Speedup::Ratio(self.time_secs(b) / self.time_secs(a)),
        }
    }
}
