//! Questionnaire data ingestion.
//!
//! This crate turns a directory of delimited files into a typed
//! [`Batch`](gpaq_model::Batch):
//!
//! - **Discovery**: list the `.csv` files of an input directory
//! - **CSV Loading**: decode, split and detect an optional header row
//! - **Schema Validation**: remap columns positionally onto the 23-column
//!   schema and reject tables with missing columns or non-numeric answers
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gpaq_ingest::load_batch;
//!
//! let loaded = load_batch(Path::new("./data"))?;
//! for rejected in &loaded.rejected {
//!     eprintln!("{}: {}", rejected.path.display(), rejected.error);
//! }
//! ```

mod csv;
mod discovery;
mod error;
mod loader;
mod schema;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{CsvTable, decode_bytes, read_csv_table};

// === File Discovery ===
pub use discovery::list_csv_files;

// === Schema Validation ===
pub use schema::{NonNumericColumn, validate_schema};

// === Batch Loading ===
pub use loader::{LoadedBatch, RejectedFile, load_batch, load_table, table_name};
