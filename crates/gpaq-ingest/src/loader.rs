//! Batch loading with per-file isolation.

use std::path::{Path, PathBuf};

use gpaq_model::{Batch, Table};
use tracing::{debug, info, warn};

use crate::csv::read_csv_table;
use crate::discovery::list_csv_files;
use crate::error::{IngestError, Result};
use crate::schema::validate_schema;

/// A file excluded from the batch by a read or schema failure.
#[derive(Debug)]
pub struct RejectedFile {
    pub path: PathBuf,
    pub table: String,
    pub error: IngestError,
}

/// Result of loading an input directory.
#[derive(Debug, Default)]
pub struct LoadedBatch {
    /// Tables that passed schema validation, in file-name order.
    pub batch: Batch,
    /// Files that were found but could not be loaded.
    pub rejected: Vec<RejectedFile>,
    /// Number of CSV files discovered.
    pub discovered: usize,
}

/// Table name for a file: its file name, extension included.
pub fn table_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read and schema-validate a single file.
pub fn load_table(path: &Path) -> Result<Table> {
    let name = table_name(path);
    let raw = read_csv_table(path)?;
    let table = validate_schema(&name, &raw)?;
    debug!(
        table = %name,
        records = table.len(),
        has_header = raw.headers.is_some(),
        "table loaded"
    );
    Ok(table.with_source(path))
}

/// Load every CSV file of a directory.
///
/// A missing directory or a directory without CSV files is an error for the
/// whole batch. Any other failure only drops the offending file, which is
/// reported in [`LoadedBatch::rejected`].
pub fn load_batch(dir: &Path) -> Result<LoadedBatch> {
    info!(path = %dir.display(), "importing data");
    let files = list_csv_files(dir)?;
    if files.is_empty() {
        return Err(IngestError::NoCsvFiles {
            path: dir.to_path_buf(),
        });
    }

    let mut loaded = LoadedBatch {
        discovered: files.len(),
        ..LoadedBatch::default()
    };
    for path in files {
        match load_table(&path) {
            Ok(table) => loaded.batch.push(table),
            Err(error) => {
                let table = table_name(&path);
                warn!(table = %table, error = %error, "table excluded from batch");
                loaded.rejected.push(RejectedFile { path, table, error });
            }
        }
    }

    if loaded.rejected.is_empty() {
        info!(count = loaded.discovered, "csv files imported");
    } else {
        warn!(
            found = loaded.discovered,
            imported = loaded.batch.len(),
            "{} .csv files found but only {} imported",
            loaded.discovered,
            loaded.batch.len()
        );
    }
    Ok(loaded)
}
