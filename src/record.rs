//! Parsing of benchmark-runner CSV lines.
//!
//! Each data row carries a benchmark file name followed by one result block
//! per algorithm at fixed offsets: the candidate (SE²GIS) block at fields
//! 2..=7, the baseline (SEGIS) block at fields 9..=14, and an optional
//! secondary-baseline block at fields 15..=20 when the row has 21 or more
//! fields.
//!
//! A line starting with `SETUP:` is a directive, not a data row: it replaces
//! the experimental-setup label for the remainder of the file. Rows with
//! fewer than 15 fields (blank lines, malformed output) are skipped silently;
//! skipping is routine, so it is a [`LineOutcome`] variant rather than an
//! error.

/// One algorithm's outcome for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    /// Synthesis time: a numeric literal in seconds, or a timeout sentinel.
    pub time: String,
    /// Raw delta encoding reported by the runner.
    pub delta: String,
    /// Raw rounds encoding; see [`crate::rounds::RoundsField`].
    pub rounds: String,
    /// Problem size parameter.
    pub n: String,
    /// Bounded-checking flag, `✓` when bounded checking was used.
    pub b: String,
    /// Verification detail string (unused in output).
    pub verif: String,
}

/// One parsed data row: a benchmark paired with its per-algorithm results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRow {
    /// Benchmark identifier: the first CSV field with its extension removed.
    pub benchmark_id: String,
    /// Candidate algorithm (SE²GIS) result.
    pub candidate: ResultRecord,
    /// Baseline algorithm (SEGIS) result.
    pub baseline: ResultRecord,
    /// Secondary baseline result, present only on 21+-field rows.
    pub secondary: Option<ResultRecord>,
}

/// Outcome of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A `SETUP:` directive; the payload is the new setup label.
    Setup(String),
    /// A well-formed data row.
    Row(Box<BenchmarkRow>),
    /// A line with too few fields; ignored by design.
    Skipped,
}

/// Directive prefix replacing the experimental-setup label.
pub const SETUP_PREFIX: &str = "SETUP:";

/// Minimum field count for a data row (candidate + baseline blocks).
const MIN_FIELDS: usize = 15;

/// Field count at which a secondary baseline block is present.
const SECONDARY_FIELDS: usize = 21;

fn record_at(fields: &[&str], offset: usize) -> ResultRecord {
    ResultRecord {
        time: fields[offset].to_string(),
        delta: fields[offset + 1].to_string(),
        rounds: fields[offset + 2].to_string(),
        n: fields[offset + 3].to_string(),
        b: fields[offset + 4].to_string(),
        verif: fields[offset + 5].to_string(),
    }
}

/// Parse one line of the results CSV.
pub fn parse_line(line: &str) -> LineOutcome {
    if let Some(rest) = line.strip_prefix(SETUP_PREFIX) {
        return LineOutcome::Setup(rest.trim().to_string());
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return LineOutcome::Skipped;
    }

    let benchmark_id = fields[0]
        .split('.')
        .next()
        .unwrap_or(fields[0])
        .to_string();

    let secondary = if fields.len() >= SECONDARY_FIELDS {
        Some(record_at(&fields, 15))
    } else {
        None
    };

    LineOutcome::Row(Box::new(BenchmarkRow {
        benchmark_id,
        candidate: record_at(&fields, 2),
        baseline: record_at(&fields, 9),
        secondary,
    }))
}
