//! Output generation: questionnaire tables as CSV.
//!
//! Tables are converted to polars frames (raw answers followed by the derived
//! metrics, when present) and written either one file per table or as a single
//! concatenated file sorted by respondent identifier.

mod frame;
mod order;
mod writer;

pub use frame::{concatenated_frame, records_frame, table_frame};
pub use order::{compare_ids, sorted_records};
pub use writer::{
    CONCATENATED_FILE_NAME, OutputLayout, ensure_output_dir, write_batch, write_concatenated,
    write_frame, write_independent,
};
