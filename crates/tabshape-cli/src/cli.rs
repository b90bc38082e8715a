//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabshape",
    version,
    about = "Reshape tabular files: pick columns, add defaults, export",
    long_about = "Load a CSV or Excel file, choose which columns survive,\n\
                  add custom columns with typed default values, and export\n\
                  the result to CSV (UTF-8 with BOM) or xlsx."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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
    /// Load a file and preview the current projection.
    Inspect(InspectArgs),

    /// Project a file into a new CSV or spreadsheet.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the tabular file (.csv, .xlsx or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of preview rows.
    #[arg(long = "rows", value_name = "N", default_value_t = 5)]
    pub rows: usize,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the tabular file (.csv, .xlsx or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Destination path; a .csv extension writes CSV, anything else xlsx.
    #[arg(long = "output", short = 'o', value_name = "DEST")]
    pub output: PathBuf,

    /// Exclude a source column from the output (repeatable).
    #[arg(long = "drop", value_name = "COLUMN")]
    pub drop: Vec<String>,

    /// Add a custom column: NAME[=DEFAULT][:TYPE], TYPE one of
    /// text|number|date|formula (repeatable).
    #[arg(long = "field", value_name = "FIELD")]
    pub field: Vec<String>,

    /// Print the processing result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
