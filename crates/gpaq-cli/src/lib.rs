//! CLI library components for the GPAQ batch checker.

pub mod logging;
pub mod pipeline;
pub mod types;
