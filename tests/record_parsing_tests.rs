//! Record parser contract tests.
//!
//! Every valid row with at least 15 fields must produce exactly one candidate
//! and one baseline record, plus one secondary record iff the row has 21 or
//! more fields. Shorter lines are skipped silently.

use bench_report::{parse_line, LineOutcome};

const BASE_ROW: &str = "tree/sumtree.pmrs,se2gis,0.12,d,+.+!,3,✓,ok,segis,1.50,d,+++!,4,n,ok";

#[test]
fn test_minimum_row_produces_candidate_and_baseline() {
    let LineOutcome::Row(row) = parse_line(BASE_ROW) else {
        panic!("expected a data row");
    };
    assert_eq!(row.benchmark_id, "tree/sumtree");
    assert_eq!(row.candidate.time, "0.12");
    assert_eq!(row.baseline.time, "1.50");
    assert!(row.secondary.is_none());
}

#[test]
fn test_twenty_one_fields_produce_secondary() {
    let line = format!("{BASE_ROW},3.00,d,++++!,5,n,ok");
    let LineOutcome::Row(row) = parse_line(&line) else {
        panic!("expected a data row");
    };
    let secondary = row.secondary.expect("secondary record");
    assert_eq!(secondary.time, "3.00");
    assert_eq!(secondary.n, "5");
}

#[test]
fn test_fourteen_fields_skipped() {
    // One field short of a complete baseline block.
    let line = "tree/sumtree.pmrs,se2gis,0.12,d,+.+!,3,✓,ok,segis,1.50,d,+++!,4,n";
    assert_eq!(parse_line(line), LineOutcome::Skipped);
}

#[test]
fn test_blank_and_garbage_lines_skipped() {
    assert_eq!(parse_line(""), LineOutcome::Skipped);
    assert_eq!(parse_line("   "), LineOutcome::Skipped);
    assert_eq!(parse_line("not,a,data,row"), LineOutcome::Skipped);
}

#[test]
fn test_setup_directive_is_not_a_row() {
    let outcome = parse_line("SETUP: an AWS c5.2xlarge instance");
    assert_eq!(
        outcome,
        LineOutcome::Setup("an AWS c5.2xlarge instance".to_string())
    );
}
