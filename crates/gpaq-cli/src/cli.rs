//! CLI argument definitions for the GPAQ batch checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gpaq",
    version,
    about = "GPAQ checker - validate questionnaire answers and derive MET-minutes",
    long_about = "Validate Global Physical Activity Questionnaire tables and derive weekly MET-minutes.\n\n\
                  Every .csv file of the input directory is checked for structure and skip-logic\n\
                  consistency. Consistent tables receive MET-minute columns; the others are\n\
                  written unchanged and reported for manual review."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a directory of questionnaire tables and write the results.
    Run(RunArgs),

    /// List the expected columns and their acceptable values.
    Columns,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory containing the CSV files.
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        default_value = "./data"
    )]
    pub directory: PathBuf,

    /// Directory to save results.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = "./results"
    )]
    pub output: PathBuf,

    /// Save one file per input table instead of a single concatenated file.
    #[arg(long = "ind")]
    pub independent: bool,

    /// Validate and derive without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
