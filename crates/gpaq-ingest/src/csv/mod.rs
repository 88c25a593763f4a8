//! CSV reading utilities.

mod header;
mod reader;

pub use reader::{CsvTable, decode_bytes, read_csv_table};
