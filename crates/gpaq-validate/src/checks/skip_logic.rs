//! A "no" gate must leave its block's follow-up items empty.

use gpaq_model::Table;

use super::record_ref;
use crate::issue::Issue;

pub fn check(table: &Table) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (index, record) in table.records.iter().enumerate() {
        for (block, answers) in record.gated_blocks() {
            if !answers.answered_no() {
                continue;
            }
            let Some(gate) = block.gate_column() else {
                continue;
            };
            let filled: Vec<&'static str> = [
                (block.frequency_column(), answers.frequency_days),
                (Some(block.hours_column()), answers.duration_hours),
                (Some(block.minutes_column()), answers.duration_minutes),
            ]
            .into_iter()
            .filter_map(|(column, value)| value.and(column))
            .collect();
            if filled.is_empty() {
                continue;
            }
            issues.push(Issue::DetailsAfterNo {
                record: record_ref(index, &record.id),
                gate,
                filled,
            });
        }
    }
    issues
}
