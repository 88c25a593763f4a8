//! Schema validation: positional column mapping and numeric-or-empty cells.

use std::fmt;

use gpaq_model::{EXPECTED_COLUMNS, MEASUREMENT_COLUMN_COUNT, Record, Table, parse_cell};
use tracing::debug;

use crate::csv::CsvTable;
use crate::error::{IngestError, Result};

const MAX_SAMPLES: usize = 5;

/// A measurement column holding non-numeric values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonNumericColumn {
    pub column: String,
    pub count: usize,
    pub samples: Vec<String>,
}

impl fmt::Display for NonNumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} values", self.column, self.count)?;
        if !self.samples.is_empty() {
            write!(f, ", e.g. {}", self.samples.join(", "))?;
        }
        write!(f, ")")
    }
}

/// Validate raw cells against the questionnaire schema and build typed records.
///
/// Columns are mapped by position onto [`EXPECTED_COLUMNS`]; header labels,
/// if any, are ignored apart from a debug note when they differ. Fails when
/// columns are missing or extra, or when any measurement cell is neither
/// empty nor numeric. The identifier column is kept as text.
pub fn validate_schema(name: &str, raw: &CsvTable) -> Result<Table> {
    let width = raw.width();
    if width < EXPECTED_COLUMNS.len() {
        return Err(IngestError::MissingColumns {
            table: name.to_string(),
            columns: EXPECTED_COLUMNS[width..]
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
        });
    }
    if width > EXPECTED_COLUMNS.len() {
        return Err(IngestError::UnexpectedColumns {
            table: name.to_string(),
            found: width,
            expected: EXPECTED_COLUMNS.len(),
        });
    }

    if let Some(headers) = &raw.headers {
        let relabelled: Vec<String> = headers
            .iter()
            .zip(EXPECTED_COLUMNS)
            .filter(|(label, expected)| label.as_str() != *expected)
            .map(|(label, expected)| format!("{label} -> {expected}"))
            .collect();
        if !relabelled.is_empty() {
            debug!(
                table = name,
                remapped = %relabelled.join(", "),
                "header labels remapped by position"
            );
        }
    }

    let mut invalid: Vec<NonNumericColumn> = Vec::new();
    let mut records = Vec::with_capacity(raw.rows.len());
    for row in &raw.rows {
        let id = row.first().map(|v| v.trim().to_string()).unwrap_or_default();
        let mut values = [None; MEASUREMENT_COLUMN_COUNT];
        for (offset, slot) in values.iter_mut().enumerate() {
            let column_index = offset + 1;
            let cell = row.get(column_index).map_or("", String::as_str);
            match parse_cell(cell) {
                Ok(value) => *slot = value,
                Err(bad) => note_invalid(&mut invalid, EXPECTED_COLUMNS[column_index], bad.0),
            }
        }
        records.push(Record::from_values(id, values));
    }

    if !invalid.is_empty() {
        return Err(IngestError::NonNumeric {
            table: name.to_string(),
            columns: invalid,
        });
    }

    Ok(Table::new(name, records))
}

fn note_invalid(invalid: &mut Vec<NonNumericColumn>, column: &str, value: String) {
    if let Some(entry) = invalid.iter_mut().find(|entry| entry.column == column) {
        entry.count += 1;
        if entry.samples.len() < MAX_SAMPLES && !entry.samples.contains(&value) {
            entry.samples.push(value);
        }
        return;
    }
    invalid.push(NonNumericColumn {
        column: column.to_string(),
        count: 1,
        samples: vec![value],
    });
}
