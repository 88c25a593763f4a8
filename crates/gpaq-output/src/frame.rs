//! DataFrame construction.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame};

use gpaq_model::{Batch, DERIVED_COLUMNS, EXPECTED_COLUMNS, Record, Table, format_numeric};

use crate::order::sorted_records;

/// Text column of optional numbers. Integral values carry no `.0`, so raw
/// answers are written as they were read.
fn numeric_text_column(name: &str, values: impl Iterator<Item = Option<f64>>) -> Column {
    let cells: Vec<Option<String>> = values.map(|v| v.map(format_numeric)).collect();
    Column::new(name.into(), cells)
}

/// Build a frame from records.
///
/// Columns are `ID`, the 22 measurement columns and, when `with_metrics`
/// is set, the derived columns. Records without metrics get nulls there.
pub fn records_frame(records: &[&Record], with_metrics: bool) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(EXPECTED_COLUMNS.len() + DERIVED_COLUMNS.len());

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    columns.push(Column::new(EXPECTED_COLUMNS[0].into(), ids));

    let values: Vec<_> = records.iter().map(|r| r.values()).collect();
    for (position, name) in EXPECTED_COLUMNS.iter().skip(1).enumerate() {
        columns.push(numeric_text_column(
            name,
            values.iter().map(|row| row[position]),
        ));
    }

    if with_metrics {
        let metrics: Vec<Option<[f64; 11]>> = records
            .iter()
            .map(|r| r.metrics.map(|m| m.values()))
            .collect();
        for (position, name) in DERIVED_COLUMNS.iter().enumerate() {
            columns.push(numeric_text_column(
                name,
                metrics.iter().map(|row| row.map(|values| values[position])),
            ));
        }
    }

    DataFrame::new(columns).context("build output frame")
}

/// Frame for one table. Derived columns are included only for derived tables.
pub fn table_frame(table: &Table) -> Result<DataFrame> {
    let records: Vec<&Record> = table.records.iter().collect();
    records_frame(&records, table.has_metrics())
        .with_context(|| format!("build frame for {}", table.name))
}

/// Union of every table's records, sorted by identifier.
///
/// Derived columns are included when any table was derived.
pub fn concatenated_frame(batch: &Batch) -> Result<DataFrame> {
    let with_metrics = batch.iter().any(Table::has_metrics);
    records_frame(&sorted_records(batch), with_metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpaq_model::MetMinutes;

    fn derived(id: &str, mvpa: f64) -> Record {
        let mut record = Record::new(id);
        record.metrics = Some(MetMinutes {
            moderate_to_vigorous: mvpa,
            ..MetMinutes::default()
        });
        record
    }

    #[test]
    fn test_raw_table_has_expected_columns() {
        let mut record = Record::new("R1");
        record.vigorous_work.gate = Some(2.0);
        let df = table_frame(&Table::new("t.csv", vec![record])).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, EXPECTED_COLUMNS.to_vec());
        assert_eq!(df.height(), 1);
        assert_eq!(df.column("P1").unwrap().str().unwrap().get(0), Some("2"));
        assert_eq!(df.column("P2").unwrap().null_count(), 1);
    }

    #[test]
    fn test_derived_table_appends_metrics() {
        let table = Table::new("t.csv", vec![derived("1", 120.0)]);
        let df = table_frame(&table).unwrap();

        assert_eq!(df.width(), EXPECTED_COLUMNS.len() + DERIVED_COLUMNS.len());
        assert_eq!(df.column("MVPA").unwrap().str().unwrap().get(0), Some("120"));
    }

    #[test]
    fn test_concatenated_nulls_for_underived_tables() {
        let batch: Batch = vec![
            Table::new("a.csv", vec![derived("2", 10.0)]),
            Table::new("b.csv", vec![Record::new("1")]),
        ]
        .into_iter()
        .collect();

        let df = concatenated_frame(&batch).unwrap();

        let ids: Vec<Option<&str>> = df.column("ID").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(ids, vec![Some("1"), Some("2")]);
        let mvpa = df.column("MVPA").unwrap().str().unwrap();
        assert_eq!(mvpa.get(0), None);
        assert_eq!(mvpa.get(1), Some("10"));
    }

    #[test]
    fn test_fractional_answers_keep_their_decimals() {
        let mut record = Record::new("1");
        record.sedentary.duration_hours = Some(1.5);
        record.sedentary.duration_minutes = Some(0.0);
        let df = table_frame(&Table::new("t.csv", vec![record])).unwrap();

        assert_eq!(df.column("P16a").unwrap().str().unwrap().get(0), Some("1.5"));
        assert_eq!(df.column("P16b").unwrap().str().unwrap().get(0), Some("0"));
    }
}
