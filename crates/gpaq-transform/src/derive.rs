//! Table- and batch-level derivation.

use std::collections::BTreeSet;

use gpaq_model::{Batch, Table};
use tracing::{debug, info};

use crate::met::met_minutes;

/// Which tables received metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivationSummary {
    pub derived: Vec<String>,
    pub skipped: Vec<String>,
}

/// Attach metrics to every record of a table, replacing any earlier values.
pub fn derive_table(table: &mut Table) {
    for record in &mut table.records {
        record.metrics = Some(met_minutes(record));
    }
    debug!(table = %table.name, records = table.len(), "metrics derived");
}

/// Derive every table that is not in `flagged`.
///
/// Flagged tables are left untouched and any metrics they carry are cleared.
pub fn derive_batch(batch: &mut Batch, flagged: &BTreeSet<String>) -> DerivationSummary {
    info!("calculating MET minutes");
    let mut summary = DerivationSummary::default();
    for table in batch.tables_mut() {
        if flagged.contains(&table.name) {
            info!("Skipping {} due to integrity issues", table.name);
            for record in &mut table.records {
                record.metrics = None;
            }
            summary.skipped.push(table.name.clone());
            continue;
        }
        derive_table(table);
        summary.derived.push(table.name.clone());
    }
    summary
}
