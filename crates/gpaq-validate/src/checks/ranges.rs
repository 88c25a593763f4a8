//! Days, hours and minutes must lie within their acceptable ranges.

use gpaq_model::{COLUMN_SPECS, Table};

use super::record_ref;
use crate::issue::Issue;

/// Flag every non-empty value outside its column's inclusive range.
/// Applies regardless of the gate answer.
pub fn check(table: &Table) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (index, record) in table.records.iter().enumerate() {
        let values = record.values();
        for (spec, value) in COLUMN_SPECS.iter().zip(values) {
            let (Some(value), Some((min, max))) = (value, spec.range()) else {
                continue;
            };
            if (min..=max).contains(&value) {
                continue;
            }
            issues.push(Issue::OutOfRange {
                record: record_ref(index, &record.id),
                column: spec.name,
                value,
                min,
                max,
            });
        }
    }
    issues
}
