//! Input folder scanning.
//!
//! Every regular `.csv` file directly inside the folder is one questionnaire
//! table. Spreadsheet lock files (`~$survey.csv`) and hidden files are not
//! tables and are left out.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// True for names a spreadsheet tool or the OS leaves next to real exports.
fn is_scratch_file(name: &str) -> bool {
    name.starts_with("~$") || name.starts_with('.')
}

fn is_csv_table(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(OsStr::to_str) else {
        return false;
    };
    if is_scratch_file(name) {
        debug!(file = name, "skipping scratch file");
        return false;
    }
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        && path.is_file()
}

/// Questionnaire files of `dir`, sorted by file name.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let read_error = |source: std::io::Error| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if is_csv_table(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
