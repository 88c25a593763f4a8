use std::path::PathBuf;
use std::time::Duration;

use gpaq_ingest::RejectedFile;
use gpaq_model::Table;
use gpaq_output::OutputLayout;
use gpaq_validate::ConsistencyReport;

/// What happened to one input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    /// Passed every check and received metrics.
    Derived,
    /// Passed every check but holds no records, so nothing was derived.
    Empty,
    /// Failed a consistency check; written without metrics.
    Flagged,
    /// Failed reading or schema validation; not written.
    Rejected,
}

impl TableStatus {
    /// Status of a loaded table after the checks and derivation ran.
    pub fn of(table: &Table, report: &ConsistencyReport) -> Self {
        if report.is_flagged(&table.name) {
            Self::Flagged
        } else if table.has_metrics() {
            Self::Derived
        } else {
            Self::Empty
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Derived => "derived",
            Self::Empty => "empty",
            Self::Flagged => "flagged",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub name: String,
    pub records: usize,
    pub status: TableStatus,
    pub issues: usize,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub layout: OutputLayout,
    pub dry_run: bool,
    /// Loaded tables in file-name order, followed by rejected files.
    pub tables: Vec<TableSummary>,
    pub report: ConsistencyReport,
    pub rejected: Vec<RejectedFile>,
    pub written: Vec<PathBuf>,
    pub elapsed: Duration,
}

impl BatchOutcome {
    /// Consistency findings plus rejected files.
    pub fn issue_count(&self) -> usize {
        self.report.issue_count() + self.rejected.len()
    }

    /// Tables that need a look in the raw data.
    pub fn review_count(&self) -> usize {
        self.tables
            .iter()
            .filter(|t| matches!(t.status, TableStatus::Flagged | TableStatus::Rejected))
            .count()
    }

    pub fn needs_review(&self) -> bool {
        self.issue_count() > 0
    }

    pub fn derived_count(&self) -> usize {
        self.tables
            .iter()
            .filter(|t| t.status == TableStatus::Derived)
            .count()
    }
}
