//! CLI argument definitions.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mailprep",
    version,
    about = "Normalize customer/vehicle CSV exports",
    long_about = "Normalize customer/vehicle CSV exports for mailing-list use.\n\n\
                  Maps variable column names onto a fixed record schema, cleans up\n\
                  names, phones, zips, and dates, and re-emits CSV or JSON."
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
    /// Normalize a CSV export into records.
    Run(RunArgs),

    /// List the semantic fields, their header synonyms, and format rules.
    Fields,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Input CSV file (reads stdin when omitted).
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Ordered comma-separated subset of fields to emit.
    #[arg(long = "fields", value_name = "NAMES", value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Fail unless firstname, lastname, address1, city, state, and zip all
    /// have a mapped column.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Worker count for row formatting.
    #[arg(long = "jobs", value_name = "N", default_value_t = NonZeroUsize::MIN)]
    pub jobs: NonZeroUsize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
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
