//! Error types for questionnaire ingestion.

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::NonNumericColumn;

/// Errors that can occur while loading questionnaire files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("the path {path} does not exist")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory holds no CSV files.
    #[error("the directory {path} is empty or contains no .csv files")]
    NoCsvFiles { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to split the file into records.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty or has no non-blank rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors (fatal for the table) ===
    /// Fewer columns than the questionnaire schema.
    #[error("the following expected columns are missing in {table}: {}", .columns.join(", "))]
    MissingColumns { table: String, columns: Vec<String> },

    /// More columns than the questionnaire schema.
    #[error("{table} has {found} columns, expected {expected}")]
    UnexpectedColumns {
        table: String,
        found: usize,
        expected: usize,
    },

    /// Measurement columns holding values that are neither empty nor numeric.
    #[error(
        "{table}: columns {} should contain only empty or numeric values",
        .columns.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    NonNumeric {
        table: String,
        columns: Vec<NonNumericColumn>,
    },
}

impl IngestError {
    /// True for errors that stop the whole batch rather than one table.
    pub fn is_batch_level(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::DirectoryRead { .. } | Self::NoCsvFiles { .. }
        )
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
