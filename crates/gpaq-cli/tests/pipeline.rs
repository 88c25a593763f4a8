//! Integration tests for the pipeline module.

use std::path::Path;

use gpaq_cli::pipeline::{BatchError, RunConfig, run_batch};
use gpaq_cli::types::TableStatus;
use gpaq_ingest::IngestError;
use gpaq_model::{DERIVED_COLUMNS, EXPECTED_COLUMNS};
use gpaq_output::{CONCATENATED_FILE_NAME, OutputLayout};
use tempfile::TempDir;

const HEADER: &str = "ID,P1,P2,P3a,P3b,P4,P5,P6a,P6b,P7,P8,P9a,P9b,P10,P11,P12a,P12b,P13,P14,P15a,P15b,P16a,P16b";

/// Vigorous work on 2 days for 1h30, 6 hours sitting.
fn clean_row(id: &str) -> String {
    format!("{id},1,2,1,30,2,,,,2,,,,2,,,,2,,,,6,0")
}

/// Answers "no" to travel but still gives 3 days of travel.
fn inconsistent_row(id: &str) -> String {
    format!("{id},1,2,1,30,2,,,,2,3,,,2,,,,2,,,,6,0")
}

fn write(dir: &Path, name: &str, rows: &[String]) {
    let mut content = format!("{HEADER}\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(dir.join(name), content).unwrap();
}

fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[test]
fn clean_batch_is_derived_and_concatenated() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "a.csv", &[clean_row("3"), clean_row("1")]);
    write(input.path(), "b.csv", &[clean_row("2")]);

    let outcome = run_batch(&RunConfig::new(input.path(), output.path())).unwrap();

    assert!(!outcome.needs_review());
    assert_eq!(outcome.derived_count(), 2);
    assert_eq!(outcome.written, vec![output.path().join(CONCATENATED_FILE_NAME)]);

    let (headers, rows) = read_rows(&outcome.written[0]);
    assert_eq!(headers.len(), EXPECTED_COLUMNS.len() + DERIVED_COLUMNS.len());
    let ids: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    let vpa_work = headers.iter().position(|h| h == "VPA_work").unwrap();
    let value: f64 = rows[0][vpa_work].parse().unwrap();
    assert_eq!(value, 1440.0);
}

#[test]
fn flagged_table_is_written_without_metrics() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "good.csv", &[clean_row("1")]);
    write(
        input.path(),
        "bad.csv",
        &[clean_row("2"), inconsistent_row("3")],
    );

    let config = RunConfig::new(input.path(), output.path()).with_layout(OutputLayout::Independent);
    let outcome = run_batch(&config).unwrap();

    assert!(outcome.needs_review());
    let bad = outcome.tables.iter().find(|t| t.name == "bad.csv").unwrap();
    assert_eq!(bad.status, TableStatus::Flagged);
    assert_eq!(bad.issues, 1);
    assert_eq!(bad.records, 2);

    let (bad_headers, bad_rows) = read_rows(&output.path().join("bad.csv"));
    assert_eq!(bad_headers, EXPECTED_COLUMNS.to_vec());
    assert_eq!(bad_rows.len(), 2);
    assert_eq!(bad_rows[0].join(","), clean_row("2"));
    assert_eq!(bad_rows[1].join(","), inconsistent_row("3"));

    let (good_headers, _) = read_rows(&output.path().join("good.csv"));
    assert_eq!(good_headers.last().map(String::as_str), Some("MVPA"));
}

#[test]
fn header_only_table_is_empty_not_derived() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "a.csv", &[clean_row("1")]);
    write(input.path(), "blank.csv", &[]);

    let config = RunConfig::new(input.path(), output.path()).with_layout(OutputLayout::Independent);
    let outcome = run_batch(&config).unwrap();

    assert!(!outcome.needs_review());
    assert_eq!(outcome.review_count(), 0);
    assert_eq!(outcome.derived_count(), 1);
    let blank = outcome.tables.iter().find(|t| t.name == "blank.csv").unwrap();
    assert_eq!(blank.status, TableStatus::Empty);
    assert_eq!(blank.records, 0);

    let (headers, rows) = read_rows(&output.path().join("blank.csv"));
    assert_eq!(headers, EXPECTED_COLUMNS.to_vec());
    assert!(rows.is_empty());
}

#[test]
fn rejected_file_does_not_stop_the_batch() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(input.path(), "good.csv", &[clean_row("1")]);
    std::fs::write(input.path().join("short.csv"), "ID,P1\n1,1\n").unwrap();

    let outcome = run_batch(&RunConfig::new(input.path(), output.path())).unwrap();

    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.issue_count(), 1);
    let short = outcome.tables.iter().find(|t| t.name == "short.csv").unwrap();
    assert_eq!(short.status, TableStatus::Rejected);
    assert!(output.path().join(CONCATENATED_FILE_NAME).exists());
}

#[test]
fn missing_directory_writes_nothing() {
    let root = TempDir::new().unwrap();
    let out = root.path().join("results");

    let err = run_batch(&RunConfig::new(root.path().join("absent"), &out)).unwrap_err();

    assert!(matches!(
        err,
        BatchError::Ingest(IngestError::DirectoryNotFound { .. })
    ));
    assert!(!out.exists());
}

#[test]
fn batch_without_valid_tables_is_an_error() {
    let input = TempDir::new().unwrap();
    let out = input.path().join("results");
    std::fs::write(input.path().join("short.csv"), "ID,P1\n1,1\n").unwrap();

    let err = run_batch(&RunConfig::new(input.path(), &out)).unwrap_err();

    assert!(matches!(
        err,
        BatchError::NothingImported { discovered: 1, .. }
    ));
    assert!(!out.exists());
}

#[test]
fn dry_run_writes_nothing() {
    let input = TempDir::new().unwrap();
    let out = input.path().join("results");
    write(input.path(), "a.csv", &[clean_row("1")]);

    let config = RunConfig::new(input.path(), &out).with_dry_run(true);
    let outcome = run_batch(&config).unwrap();

    assert!(outcome.written.is_empty());
    assert_eq!(outcome.derived_count(), 1);
    assert!(!out.exists());
}
