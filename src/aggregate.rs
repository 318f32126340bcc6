//! Folding parsed rows into the structures the renderers consume.
//!
//! Aggregation is a pure fold over the row stream: every row updates the
//! benchmark table (last write wins on duplicate ids), appends to the
//! realizable or unrealizable time series, and bumps the summary counters.
//! No entry is ever removed. Realizability is decided once per row from the
//! candidate's rounds field and applies to both algorithms.
//!
//! # Output Structure
//!
//! | Field | Description |
//! |-------|-------------|
//! | `table` | benchmark id → full row, last write wins |
//! | `realizable` / `unrealizable` | aligned candidate/baseline time series |
//! | `candidate_timeouts` / `baseline_timeouts` | per-algorithm timeout counts |
//! | `candidate_faster` | rows where the candidate beat the baseline |
//! | `setup` | experimental-setup label after `SETUP:` directives |

use crate::classify::Classifier;
use crate::config::ReportConfig;
use crate::record::BenchmarkRow;
use crate::rounds::RoundsField;
use ahash::AHashMap;

/// Aligned time series for one benchmark partition.
#[derive(Debug, Clone, Default)]
pub struct SeriesSet {
    /// Candidate (SE²GIS) times, in row order.
    pub candidate: Vec<f64>,
    /// Baseline (SEGIS) times, index-aligned with `candidate`.
    pub baseline: Vec<f64>,
    /// Secondary-baseline times for the rows that carried a third block.
    pub secondary: Vec<f64>,
}

impl SeriesSet {
    /// Number of benchmarks in this partition.
    pub fn len(&self) -> usize {
        self.candidate.len()
    }

    /// True iff no rows landed in this partition.
    pub fn is_empty(&self) -> bool {
        self.candidate.is_empty()
    }
}

/// Result of folding an entire results file.
#[derive(Debug, Clone)]
pub struct Aggregation {
    /// Benchmark id → latest row seen for that id.
    pub table: AHashMap<String, BenchmarkRow>,
    /// Series for benchmarks classified realizable.
    pub realizable: SeriesSet,
    /// Series for benchmarks classified unrealizable.
    pub unrealizable: SeriesSet,
    /// Rows where the candidate time resolved to the timeout value.
    pub candidate_timeouts: usize,
    /// Rows where the baseline time resolved to the timeout value.
    pub baseline_timeouts: usize,
    /// Rows where the candidate was strictly faster than the baseline.
    pub candidate_faster: usize,
    /// Experimental-setup label in effect at end of input.
    pub setup: String,
}

impl Aggregation {
    /// Total number of benchmark rows aggregated (duplicates included).
    pub fn benchmark_count(&self) -> usize {
        self.realizable.len() + self.unrealizable.len()
    }
}

/// Stateful fold over parsed rows.
#[derive(Debug)]
pub struct Aggregator {
    classifier: Classifier,
    agg: Aggregation,
}

impl Aggregator {
    /// Create an aggregator; the setup label starts from the configured
    /// default and `SETUP:` directives overwrite it.
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            classifier: Classifier::new(config),
            agg: Aggregation {
                table: AHashMap::new(),
                realizable: SeriesSet::default(),
                unrealizable: SeriesSet::default(),
                candidate_timeouts: 0,
                baseline_timeouts: 0,
                candidate_faster: 0,
                setup: config.default_setup.clone(),
            },
        }
    }

    /// The classifier this aggregator folds with.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Replace the experimental-setup label (last directive wins).
    pub fn set_setup(&mut self, setup: String) {
        self.agg.setup = setup;
    }

    /// Fold one row into the aggregation.
    pub fn ingest(&mut self, row: BenchmarkRow) {
        let timeout_value = self.classifier.timeout_value();
        let a = self.classifier.time_secs(&row.candidate.time);
        let b = self.classifier.time_secs(&row.baseline.time);

        if a < b {
            self.agg.candidate_faster += 1;
        }
        if a == timeout_value {
            self.agg.candidate_timeouts += 1;
        }
        if b == timeout_value {
            self.agg.baseline_timeouts += 1;
        }

        let unrealizable = RoundsField::parse(&row.candidate.rounds).is_unrealizable();
        let series = if unrealizable {
            &mut self.agg.unrealizable
        } else {
            &mut self.agg.realizable
        };
        series.candidate.push(a);
        series.baseline.push(b);
        if let Some(secondary) = &row.secondary {
            series
                .secondary
                .push(self.classifier.time_secs(&secondary.time));
        }

        self.agg.table.insert(row.benchmark_id.clone(), row);
    }

    /// Finish the fold and hand over the aggregation.
    pub fn finish(self) -> Aggregation {
        self.agg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{parse_line, LineOutcome};

    fn ingest_lines(lines: &[&str]) -> Aggregation {
        let config = ReportConfig::default();
        let mut aggregator = Aggregator::new(&config);
        for line in lines {
            match parse_line(line) {
                LineOutcome::Setup(s) => aggregator.set_setup(s),
                LineOutcome::Row(row) => aggregator.ingest(*row),
                LineOutcome::Skipped => {}
            }
        }
        aggregator.finish()
    }

    #[test]
    fn test_partitioning_by_realizability() {
        let agg = ingest_lines(&[
            "tree/sumtree.pmrs,a,0.5,d,+.+!,2,n,ok,b,2.0,d,++!,2,n,ok",
            "list/minhom.pmrs,a,1.0,d,+.+∅,2,n,ok,b,timeout,d,++∅,2,n,ok",
        ]);

        assert_eq!(agg.realizable.len(), 1);
        assert_eq!(agg.unrealizable.len(), 1);
        assert_eq!(agg.realizable.candidate, vec![0.5]);
        assert_eq!(agg.unrealizable.baseline, vec![600.0]);
    }

    #[test]
    fn test_counters() {
        let agg = ingest_lines(&[
            // Candidate faster.
            "t/a.pmrs,a,0.5,d,+!,2,n,ok,b,2.0,d,+!,2,n,ok",
            // Baseline timeout, so candidate faster too.
            "t/b.pmrs,a,1.0,d,+!,2,n,ok,b,timeout,d,+!,2,n,ok",
            // Candidate timeout only.
            "t/c.pmrs,a,timeout,d,+!,2,n,ok,b,3.0,d,+!,2,n,ok",
            // Both timeout: neither is faster.
            "t/d.pmrs,a,timeout,d,+!,2,n,ok,b,TIMEOUT,d,+!,2,n,ok",
        ]);

        assert_eq!(agg.candidate_faster, 2);
        assert_eq!(agg.candidate_timeouts, 2);
        assert_eq!(agg.baseline_timeouts, 2);
        assert_eq!(agg.benchmark_count(), 4);
    }

    #[test]
    fn test_duplicate_id_last_write_wins() {
        let agg = ingest_lines(&[
            "t/a.pmrs,a,9.0,d,+!,2,n,ok,b,2.0,d,+!,2,n,ok",
            "t/a.pmrs,a,0.5,d,+!,2,n,ok,b,2.0,d,+!,2,n,ok",
        ]);

        assert_eq!(agg.table.len(), 1);
        assert_eq!(agg.table["t/a"].candidate.time, "0.5");
        // Series keep both observations; only the table deduplicates.
        assert_eq!(agg.realizable.len(), 2);
    }

    #[test]
    fn test_secondary_series() {
        let agg = ingest_lines(&[
            "t/a.pmrs,a,1.0,d,+!,2,n,ok,b,2.0,d,+!,2,n,ok,4.0,d,+!,2,n,ok",
            "t/b.pmrs,a,1.0,d,+!,2,n,ok,b,2.0,d,+!,2,n,ok",
        ]);

        assert_eq!(agg.realizable.secondary, vec![4.0]);
        assert_eq!(agg.realizable.len(), 2);
    }

    #[test]
    fn test_setup_directive_last_wins() {
        let agg = ingest_lines(&[
            "SETUP: machine one",
            "t/a.pmrs,a,1.0,d,+!,2,n,ok,b,2.0,d,+!,2,n,ok",
            "SETUP: machine two",
        ]);
        assert_eq!(agg.setup, "machine two");
    }
}
