//! Gate answers must be 1 (yes) or 2 (no).

use gpaq_model::Table;

use super::record_ref;
use crate::issue::Issue;

/// Flag non-empty gates holding anything but 1 or 2. Empty gates pass.
pub fn check(table: &Table) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (index, record) in table.records.iter().enumerate() {
        for (block, answers) in record.gated_blocks() {
            let (Some(column), Some(value)) = (block.gate_column(), answers.gate) else {
                continue;
            };
            if answers.answered_yes() || answers.answered_no() {
                continue;
            }
            issues.push(Issue::InvalidGateValue {
                record: record_ref(index, &record.id),
                column,
                value,
            });
        }
    }
    issues
}
