//! CLI argument definitions for the roster browser.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::Field;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Browse, search, sort and edit an in-memory employee roster",
    long_about = "Browse, search, sort and edit an in-memory employee roster.\n\n\
                  Records are generated at startup and live only as long as the process."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
        default_value = "compact",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: settings.toml in the user config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the interactive browser on stdin/stdout.
    Browse(BrowseArgs),

    /// Print one page of the roster and exit.
    List(ListArgs),

    /// Show the effective settings, optionally writing them to the settings file.
    Config(ConfigArgs),
}

/// Options shared by commands that build a dataset.
#[derive(Args, Clone, Default)]
pub struct DataArgs {
    /// Number of records to generate (default from settings, else 100).
    #[arg(long = "records", value_name = "N")]
    pub records: Option<usize>,

    /// Seed for a reproducible dataset.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Rows per page.
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<NonZeroUsize>,
}

#[derive(Parser)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Only show records whose full name contains this text.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Column to sort by.
    #[arg(long = "sort", value_enum, value_name = "COLUMN")]
    pub sort: Option<SortColumnArg>,

    /// Sort descending instead of ascending.
    #[arg(long = "desc", requires = "sort")]
    pub descending: bool,

    /// Page to show (1-based). Pages past the end show the last page.
    #[arg(long = "page", value_name = "N", default_value = "1")]
    pub page: NonZeroUsize,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write the effective settings to the settings file.
    #[arg(long = "write")]
    pub write: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortColumnArg {
    Name,
    Dob,
    Position,
    Salary,
}

impl From<SortColumnArg> for Field {
    fn from(value: SortColumnArg) -> Self {
        match value {
            SortColumnArg::Name => Field::FullName,
            SortColumnArg::Dob => Field::DateOfBirth,
            SortColumnArg::Position => Field::Position,
            SortColumnArg::Salary => Field::Salary,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
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
