//! Selection of the most recent results file.
//!
//! The benchmark runner drops CSV files named
//! `<prefix>_<timestamp>_<suffix><digit>.csv` into the results directory,
//! where `<digit>` is the table number the file belongs to. Many other files
//! live in the same tree, so anything whose name does not parse is excluded
//! silently rather than reported.
//!
//! Candidates are ordered by parsed timestamp; ties on the timestamp are
//! broken by the full file name so selection is deterministic regardless of
//! directory traversal order.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Parse a results file name into its timestamp and table number.
///
/// Returns `None` when the name does not follow the runner's pattern.
fn parse_file_name(name: &str, timestamp_format: &str) -> Option<(NaiveDateTime, u8)> {
    if !name.ends_with(".csv") {
        return None;
    }

    let comps: Vec<&str> = name.split('_').collect();
    if comps.len() < 3 {
        return None;
    }

    let timestamp = NaiveDateTime::parse_from_str(comps[1].trim(), timestamp_format).ok()?;
    let table_digit = comps[2]
        .split('.')
        .next()?
        .chars()
        .last()?
        .to_digit(10)?;

    Some((timestamp, table_digit as u8))
}

/// Find the most recent results file for `table_no` under `results_dir`.
///
/// Returns `None` when no matching file exists; callers treat that as
/// "nothing to report", not as an error.
pub fn latest_results_file(
    results_dir: &Path,
    table_no: u8,
    timestamp_format: &str,
) -> Option<PathBuf> {
    let mut candidates: Vec<(NaiveDateTime, String, PathBuf)> = Vec::new();

    for dir_entry in WalkDir::new(results_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let Some(name) = dir_entry.file_name().to_str() else {
            continue;
        };
        let Some((timestamp, digit)) = parse_file_name(name, timestamp_format) else {
            continue;
        };
        if digit == table_no {
            candidates.push((timestamp, name.to_string(), dir_entry.into_path()));
        }
    }

    candidates
        .into_iter()
        .max_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)))
        .map(|(_, _, path)| path)
}
