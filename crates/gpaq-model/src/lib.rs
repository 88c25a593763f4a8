//! Data model for physical-activity questionnaire (GPAQ) batches.
//!
//! The questionnaire is a fixed 23-column instrument: a respondent identifier
//! followed by five gated activity blocks and one ungated sedentary block.
//! This crate defines the column schema, the typed [`Record`] built from it,
//! and the [`Table`] / [`Batch`] containers the pipeline operates on.

pub mod columns;
pub mod metrics;
pub mod record;
pub mod table;
pub mod value;

pub use columns::{
    ActivityBlock, COLUMN_SPECS, ColumnSpec, EXPECTED_COLUMNS, FieldKind, ID_COLUMN,
    MEASUREMENT_COLUMN_COUNT, column_spec,
};
pub use metrics::{DERIVED_COLUMNS, MetMinutes};
pub use record::{GatedBlock, Record, SedentaryBlock};
pub use table::{Batch, Table};
pub use value::{NonNumericCell, format_numeric, is_missing_token, parse_cell};
