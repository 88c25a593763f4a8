//! CSV writing.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{info, warn};

use gpaq_model::Batch;

use crate::frame::{concatenated_frame, table_frame};

/// File name of the concatenated output.
pub const CONCATENATED_FILE_NAME: &str = "concatenated_data.csv";

/// How the batch is laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputLayout {
    /// One file per input table, named after the table.
    Independent,
    /// A single file holding every record, sorted by identifier.
    #[default]
    Concatenated,
}

/// Create the output directory if needed.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))
}

/// Write a frame as CSV with a header row. Nulls are written as empty cells.
pub fn write_frame(path: &Path, df: &mut DataFrame) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("write {}", path.display()))
}

/// Write one file per table. Returns the written paths.
pub fn write_independent(batch: &Batch, dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_output_dir(dir)?;
    let mut written: Vec<PathBuf> = Vec::with_capacity(batch.len());
    for table in batch {
        let path = dir.join(&table.name);
        if written.contains(&path) {
            warn!(table = %table.name, "duplicate table name; overwriting earlier output");
        }
        let mut df = table_frame(table)?;
        write_frame(&path, &mut df)?;
        info!("Saved independent file: {}", path.display());
        if !written.contains(&path) {
            written.push(path);
        }
    }
    Ok(written)
}

/// Write the concatenated file. Returns its path.
pub fn write_concatenated(batch: &Batch, dir: &Path) -> Result<PathBuf> {
    ensure_output_dir(dir)?;
    let path = dir.join(CONCATENATED_FILE_NAME);
    let mut df = concatenated_frame(batch)?;
    write_frame(&path, &mut df)?;
    info!("Saved concatenated file: {}", path.display());
    Ok(path)
}

/// Write the batch using the given layout.
pub fn write_batch(batch: &Batch, dir: &Path, layout: OutputLayout) -> Result<Vec<PathBuf>> {
    info!(layout = ?layout, path = %dir.display(), "saving files");
    match layout {
        OutputLayout::Independent => write_independent(batch, dir),
        OutputLayout::Concatenated => Ok(vec![write_concatenated(batch, dir)?]),
    }
}
