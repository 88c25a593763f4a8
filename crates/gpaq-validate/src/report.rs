//! Check results and the merged consistency report.

use std::collections::BTreeSet;

use crate::issue::{Check, Issue};

/// An issue attributed to a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub table: String,
    pub issue: Issue,
}

impl Finding {
    pub fn new(table: impl Into<String>, issue: Issue) -> Self {
        Self {
            table: table.into(),
            issue,
        }
    }
}

/// Outcome of one check across the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub check: Check,
    pub findings: Vec<Finding>,
}

impl CheckResult {
    pub fn new(check: Check, findings: Vec<Finding>) -> Self {
        Self { check, findings }
    }

    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Merged results of every check, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsistencyReport {
    pub results: Vec<CheckResult>,
}

impl ConsistencyReport {
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Union of the tables flagged by any check.
    pub fn flagged(&self) -> BTreeSet<String> {
        self.findings().map(|f| f.table.clone()).collect()
    }

    pub fn is_flagged(&self, table: &str) -> bool {
        self.findings().any(|f| f.table == table)
    }

    /// Every finding, grouped by check.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.results.iter().flat_map(|r| r.findings.iter())
    }

    pub fn findings_for<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.findings().filter(move |f| f.table == table)
    }

    pub fn result(&self, check: Check) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.check == check)
    }

    pub fn issue_count(&self) -> usize {
        self.results.iter().map(|r| r.findings.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.results.iter().all(CheckResult::passed)
    }
}
