//! Results-file selection tests.
//!
//! The selector scans a directory tree for timestamped CSV files matching the
//! runner's naming pattern, excludes anything that fails to parse, and
//! returns the most recent match for the requested table number.

use bench_report::latest_results_file;
use std::fs;
use std::path::Path;

const FORMAT: &str = "%Y%m%d-%H%M";

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), "x").unwrap();
}

#[test]
fn test_latest_timestamp_wins() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "run_20230101-1200_tbl5.csv");
    touch(dir.path(), "run_20230601-0900_tbl5.csv");

    let selected = latest_results_file(dir.path(), 5, FORMAT).unwrap();
    assert_eq!(
        selected.file_name().unwrap().to_str().unwrap(),
        "run_20230601-0900_tbl5.csv"
    );
}

#[test]
fn test_table_number_filters_candidates() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "run_20230601-0900_tbl5.csv");
    touch(dir.path(), "run_20231231-2359_tbl4.csv");

    let selected = latest_results_file(dir.path(), 5, FORMAT).unwrap();
    assert_eq!(
        selected.file_name().unwrap().to_str().unwrap(),
        "run_20230601-0900_tbl5.csv"
    );
    assert!(latest_results_file(dir.path(), 3, FORMAT).is_none());
}

#[test]
fn test_non_matching_files_silently_excluded() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "README.md");
    touch(dir.path(), "nodate.csv");
    touch(dir.path(), "run_notadate_tbl5.csv");
    touch(dir.path(), "run_20230101-1200_tbl5.csv");

    let selected = latest_results_file(dir.path(), 5, FORMAT).unwrap();
    assert_eq!(
        selected.file_name().unwrap().to_str().unwrap(),
        "run_20230101-1200_tbl5.csv"
    );
}

#[test]
fn test_subdirectories_are_scanned() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("archive");
    fs::create_dir(&sub).unwrap();
    touch(&sub, "run_20230101-1200_tbl5.csv");

    assert!(latest_results_file(dir.path(), 5, FORMAT).is_some());
}

#[test]
fn test_timestamp_tie_breaks_by_filename() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "alpha_20230101-1200_tbl5.csv");
    touch(dir.path(), "zeta_20230101-1200_tbl5.csv");

    // Deterministic regardless of traversal order: greatest filename wins.
    let selected = latest_results_file(dir.path(), 5, FORMAT).unwrap();
    assert_eq!(
        selected.file_name().unwrap().to_str().unwrap(),
        "zeta_20230101-1200_tbl5.csv"
    );
}

#[test]
fn test_empty_directory_returns_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(latest_results_file(dir.path(), 5, FORMAT).is_none());
}
