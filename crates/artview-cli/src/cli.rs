//! CLI argument definitions for `artview`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "artview",
    version,
    about = "Browse and bulk-select artworks from the Art Institute of Chicago",
    long_about = "Browse the Art Institute of Chicago collection one page at a time.\n\n\
                  Pages are numbered from 1 and hold 12 artworks each. The bulk command\n\
                  selects N rows starting at a page, spilling onto the pages after it."
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
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file to read (default: the GUI's settings file).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overriding the settings file.
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one page of artworks.
    Page(PageArgs),

    /// Select rows across pages and print the selection.
    Bulk(BulkArgs),

    /// Print the effective settings.
    ShowConfig,
}

#[derive(Parser)]
pub struct PageArgs {
    /// Page number, starting at 1.
    #[arg(value_name = "PAGE", default_value_t = 1)]
    pub page: usize,
}

#[derive(Parser)]
pub struct BulkArgs {
    /// Page to start selecting from, starting at 1.
    #[arg(long = "start", value_name = "PAGE", default_value_t = 1)]
    pub start: usize,

    /// Number of rows to select.
    #[arg(long = "count", value_name = "N")]
    pub count: usize,
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
