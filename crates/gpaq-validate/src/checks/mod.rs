//! Consistency check modules.
//!
//! Each module performs one skip-logic or range check.

mod duplicates;
mod duration;
mod frequency;
mod gates;
mod ranges;
mod skip_logic;

use gpaq_model::{Batch, Table};

use crate::issue::{Check, Issue, RecordRef};
use crate::report::{CheckResult, ConsistencyReport, Finding};

/// Run every consistency check on a batch.
pub fn run_all(batch: &Batch) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();

    // 1. Table names must be unique across the batch
    report.push(CheckResult::new(
        Check::DuplicateNames,
        duplicates::check(batch),
    ));

    // 2. Gates hold 1 (yes) or 2 (no)
    report.push(per_table(Check::GateValues, batch, gates::check));

    // 3. "No" leaves frequency and duration empty
    report.push(per_table(Check::NoActivityDetails, batch, skip_logic::check));

    // 4. "Yes" is followed by at least one day
    report.push(per_table(Check::ActivityFrequency, batch, frequency::check));

    // 5. "Yes" is followed by a duration of at least one hour or minute
    report.push(per_table(Check::ActivityDuration, batch, duration::check));

    // 6. Days, hours and minutes within range
    report.push(per_table(Check::ValueRanges, batch, ranges::check));

    report
}

/// Run the record-level checks (2 to 6) on a single table.
pub fn check_table(table: &Table) -> Vec<Issue> {
    let mut issues = gates::check(table);
    issues.extend(skip_logic::check(table));
    issues.extend(frequency::check(table));
    issues.extend(duration::check(table));
    issues.extend(ranges::check(table));
    issues
}

fn per_table(check: Check, batch: &Batch, rule: fn(&Table) -> Vec<Issue>) -> CheckResult {
    let findings = batch
        .iter()
        .flat_map(|table| {
            rule(table)
                .into_iter()
                .map(|issue| Finding::new(table.name.clone(), issue))
        })
        .collect();
    CheckResult::new(check, findings)
}

fn record_ref(index: usize, id: &str) -> RecordRef {
    RecordRef::new(index, id)
}
