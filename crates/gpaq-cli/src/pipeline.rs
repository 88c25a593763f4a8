//! Batch processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Discover, read and schema-validate the CSV files
//! 2. **Check**: Run the consistency checks across the batch
//! 3. **Derive**: Compute MET-minutes for tables that passed every check
//! 4. **Output**: Write per-table files or one concatenated file
//!
//! Per-table failures never stop the batch. Only a missing input directory,
//! a directory without CSV files, a batch where no file could be imported,
//! or a failed write ends the run with an error. Nothing is written in the
//! first three cases.

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{info, info_span, warn};

use gpaq_ingest::{IngestError, LoadedBatch, load_batch};
use gpaq_model::Batch;
use gpaq_output::{OutputLayout, write_batch};
use gpaq_transform::{DerivationSummary, derive_batch};
use gpaq_validate::{ConsistencyReport, run_all};

use crate::types::{BatchOutcome, TableStatus, TableSummary};

/// Settings of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub layout: OutputLayout,
    /// Check and derive without writing anything.
    pub dry_run: bool,
}

impl RunConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            layout: OutputLayout::default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Failures that end a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("none of the {discovered} .csv files in {path} could be imported")]
    NothingImported { path: PathBuf, discovered: usize },

    #[error("failed to write results to {path}")]
    Output {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Load every CSV file of the input directory.
pub fn ingest(input_dir: &Path) -> Result<LoadedBatch, BatchError> {
    let loaded = load_batch(input_dir)?;
    if loaded.batch.is_empty() {
        return Err(BatchError::NothingImported {
            path: input_dir.to_path_buf(),
            discovered: loaded.discovered,
        });
    }
    Ok(loaded)
}

// ============================================================================
// Stage 2: Check
// ============================================================================

/// Run the consistency checks and report every finding.
pub fn check(batch: &Batch) -> ConsistencyReport {
    let report = run_all(batch);
    for result in &report.results {
        for finding in &result.findings {
            let record = finding.issue.record();
            warn!(
                table = %finding.table,
                check = %result.check,
                index = record.map(|r| r.index),
                id = record.map(|r| r.id.as_str()),
                column = finding.issue.column(),
                "Error in {}: {}",
                finding.table,
                finding.issue
            );
        }
        if !result.passed()
            && let Some(guidance) = result.check.guidance()
        {
            warn!(check = %result.check, "{guidance}");
        }
    }
    report
}

// ============================================================================
// Stage 3: Derive
// ============================================================================

/// Derive metrics for every table the checks left unflagged.
pub fn derive(batch: &mut Batch, report: &ConsistencyReport) -> DerivationSummary {
    derive_batch(batch, &report.flagged())
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Write the batch to the output directory.
pub fn output(batch: &Batch, config: &RunConfig) -> Result<Vec<PathBuf>, BatchError> {
    write_batch(batch, &config.output_dir, config.layout).map_err(|error| BatchError::Output {
        path: config.output_dir.clone(),
        source: error.into(),
    })
}

/// Run every stage over the input directory.
pub fn run_batch(config: &RunConfig) -> Result<BatchOutcome, BatchError> {
    let start = Instant::now();
    let batch_span = info_span!("batch", input = %config.input_dir.display());
    let _batch_guard = batch_span.enter();

    let ingest_start = Instant::now();
    let LoadedBatch {
        mut batch,
        rejected,
        discovered,
    } = info_span!("ingest").in_scope(|| ingest(&config.input_dir))?;
    info!(
        discovered,
        imported = batch.len(),
        records = batch.record_count(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let check_start = Instant::now();
    let report = info_span!("check").in_scope(|| check(&batch));
    info!(
        issues = report.issue_count(),
        flagged = report.flagged().len(),
        duration_ms = check_start.elapsed().as_millis(),
        "consistency checks complete"
    );

    let derive_start = Instant::now();
    let summary = info_span!("derive").in_scope(|| derive(&mut batch, &report));
    info!(
        derived = summary.derived.len(),
        skipped = summary.skipped.len(),
        duration_ms = derive_start.elapsed().as_millis(),
        "derivation complete"
    );

    let written = if config.dry_run {
        info!("dry run: no files written");
        Vec::new()
    } else {
        let output_start = Instant::now();
        let written = info_span!("output").in_scope(|| output(&batch, config))?;
        info!(
            files = written.len(),
            duration_ms = output_start.elapsed().as_millis(),
            "output complete"
        );
        written
    };

    let mut tables: Vec<TableSummary> = batch
        .iter()
        .map(|table| TableSummary {
            name: table.name.clone(),
            records: table.len(),
            status: TableStatus::of(table, &report),
            issues: report.findings_for(&table.name).count(),
        })
        .collect();
    tables.extend(rejected.iter().map(|file| TableSummary {
        name: file.table.clone(),
        records: 0,
        status: TableStatus::Rejected,
        issues: 1,
    }));

    let outcome = BatchOutcome {
        input_dir: config.input_dir.clone(),
        output_dir: config.output_dir.clone(),
        layout: config.layout,
        dry_run: config.dry_run,
        tables,
        report,
        rejected,
        written,
        elapsed: start.elapsed(),
    };

    if outcome.needs_review() {
        warn!(
            issues = outcome.issue_count(),
            tables = outcome.review_count(),
            "{} issues found in {} tables; manual review required in raw data",
            outcome.issue_count(),
            outcome.review_count()
        );
    } else {
        info!("No issues found in data integrity checks.");
    }
    info!(
        duration_ms = outcome.elapsed.as_millis(),
        "Done in {:.2} seconds.",
        outcome.elapsed.as_secs_f64()
    );
    Ok(outcome)
}
