//! Weekly MET-minute derivation.
//!
//! Each activity block contributes `weight * days * (hours * 60 + minutes)`,
//! with vigorous activity weighted 8 and moderate activity and travel weighted
//! 4. Sitting time is weighted 7 and has no frequency. Missing answers count
//! as zero.
//!
//! Derivation is all-or-nothing per table: a table flagged by the consistency
//! checks gets no metrics at all.

mod derive;
mod met;

pub use derive::{DerivationSummary, derive_batch, derive_table};
pub use met::{MODERATE_MET, SEDENTARY_WEIGHT, VIGOROUS_MET, met_minutes, weekly_met_minutes};
