//! Integration tests for directory loading.

use std::path::Path;

use gpaq_ingest::{IngestError, load_batch, load_table};
use gpaq_model::EXPECTED_COLUMNS;
use tempfile::TempDir;

const HEADER: &str = "ID,P1,P2,P3a,P3b,P4,P5,P6a,P6b,P7,P8,P9a,P9b,P10,P11,P12a,P12b,P13,P14,P15a,P15b,P16a,P16b";

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

/// A respondent who did vigorous work twice a week and nothing else.
fn valid_row(id: &str) -> String {
    format!("{id},1,2,1,30,2,,,,2,,,,2,,,,2,,,,6,0")
}

#[test]
fn loads_every_valid_file_in_name_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b.csv", &format!("{HEADER}\n{}\n", valid_row("3")));
    write(
        dir.path(),
        "a.csv",
        &format!("{HEADER}\n{}\n{}\n", valid_row("1"), valid_row("2")),
    );
    write(dir.path(), "notes.txt", "ignored");

    let loaded = load_batch(dir.path()).unwrap();

    assert_eq!(loaded.discovered, 2);
    assert!(loaded.rejected.is_empty());
    let names: Vec<_> = loaded.batch.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["a.csv", "b.csv"]);
    assert_eq!(loaded.batch.record_count(), 3);
}

#[test]
fn headerless_file_keeps_first_row() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("raw.csv");
    std::fs::write(&path, format!("{}\n{}\n", valid_row("1"), valid_row("2"))).unwrap();

    let table = load_table(&path).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.records[0].id, "1");
    assert_eq!(table.records[0].vigorous_work.duration_minutes, Some(30.0));
    assert_eq!(table.source.as_deref(), Some(path.as_path()));
}

#[test]
fn item_number_header_is_remapped_by_position() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("numbered.csv");
    let header = "id,1,2,3a,3b,4,5,6a,6b,7,8,9a,9b,10,11,12a,12b,13,14,15a,15b,16a,16b";
    std::fs::write(&path, format!("{header}\n{}\n", valid_row("1"))).unwrap();

    let table = load_table(&path).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.records[0].id, "1");
    assert_eq!(table.records[0].vigorous_work.frequency_days, Some(2.0));
    assert_eq!(table.records[0].sedentary.duration_hours, Some(6.0));
}

#[test]
fn invalid_files_are_rejected_without_stopping_the_batch() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "good.csv", &format!("{HEADER}\n{}\n", valid_row("1")));
    write(dir.path(), "short.csv", "ID,P1,P2\n1,1,2\n");
    write(
        dir.path(),
        "text.csv",
        &format!("{HEADER}\n{}\n", valid_row("1").replacen(",2,", ",two,", 1)),
    );

    let loaded = load_batch(dir.path()).unwrap();

    assert_eq!(loaded.discovered, 3);
    assert_eq!(loaded.batch.len(), 1);
    assert_eq!(loaded.rejected.len(), 2);

    let short = loaded
        .rejected
        .iter()
        .find(|r| r.table == "short.csv")
        .unwrap();
    let IngestError::MissingColumns { columns, .. } = &short.error else {
        panic!("expected MissingColumns, got {}", short.error);
    };
    assert_eq!(columns.len(), EXPECTED_COLUMNS.len() - 3);

    let text = loaded
        .rejected
        .iter()
        .find(|r| r.table == "text.csv")
        .unwrap();
    assert!(matches!(text.error, IngestError::NonNumeric { .. }));
}

#[test]
fn missing_directory_is_batch_level() {
    let dir = TempDir::new().unwrap();
    let err = load_batch(&dir.path().join("absent")).unwrap_err();

    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    assert!(err.is_batch_level());
}

#[test]
fn directory_without_csv_is_batch_level() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "readme.md", "nothing here");

    let err = load_batch(dir.path()).unwrap_err();

    assert!(matches!(err, IngestError::NoCsvFiles { .. }));
}
