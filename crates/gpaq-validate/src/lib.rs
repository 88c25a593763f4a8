//! Consistency checks for questionnaire batches.
//!
//! The questionnaire uses skip logic: a "no" to a gate question must leave
//! the block's follow-up items blank, and a "yes" must be followed by a
//! frequency and a duration. Generic schema checks cannot express these
//! cross-column constraints, so this crate evaluates them per record.
//!
//! Checks run in a fixed order (see [`Check::ALL`]); each returns its own
//! [`CheckResult`] and [`run_all`] merges them into a [`ConsistencyReport`].
//! A table with at least one finding is flagged and must not be scored.

mod checks;
mod issue;
mod report;

pub use checks::{check_table, run_all};
pub use issue::{Check, Issue, RecordRef};
pub use report::{CheckResult, ConsistencyReport, Finding};
