//! A "yes" gate needs at least one day per week.

use gpaq_model::Table;

use super::record_ref;
use crate::issue::Issue;

pub fn check(table: &Table) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (index, record) in table.records.iter().enumerate() {
        for (block, answers) in record.gated_blocks() {
            if !answers.answered_yes() {
                continue;
            }
            let (Some(gate), Some(column)) = (block.gate_column(), block.frequency_column())
            else {
                continue;
            };
            if answers.frequency_days.is_some_and(|days| days >= 1.0) {
                continue;
            }
            issues.push(Issue::MissingFrequency {
                record: record_ref(index, &record.id),
                gate,
                column,
                value: answers.frequency_days,
            });
        }
    }
    issues
}
