//! CLI argument definitions for the parts adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use parts_model::options::{
    DEFAULT_FULFILLMENT_CHANNEL, DEFAULT_LIST_PRICE_MARKUP, DEFAULT_TAX_CODE,
};

#[derive(Parser)]
#[command(
    name = "parts-adapter",
    version,
    about = "Convert supplier auto parts listings into marketplace upload files",
    long_about = "Convert supplier auto parts listings into marketplace upload files.\n\n\
                  Headers are matched against a fixed vocabulary regardless of case,\n\
                  cells are cleaned, and every upload field is filled from its\n\
                  source columns or a default."
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

    /// Log output format.
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a listing CSV into an upload file.
    Convert(ConvertArgs),

    /// List canonical fields and the header spellings they accept.
    Fields,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Listing file to convert (must end in .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Exact path of the upload file.
    #[arg(long = "output", short = 'o', value_name = "PATH", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for a timestamped upload file (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also write the cleaned canonical table to this path.
    #[arg(long = "emit-canonical", value_name = "PATH")]
    pub emit_canonical: Option<PathBuf>,

    /// Run the conversion and report without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the summary as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Multiplier from standard price to list price.
    #[arg(long = "list-price-markup", value_name = "F", default_value_t = DEFAULT_LIST_PRICE_MARKUP)]
    pub list_price_markup: f64,

    /// Product tax code written to every row.
    #[arg(long = "tax-code", value_name = "CODE", default_value = DEFAULT_TAX_CODE)]
    pub tax_code: String,

    /// Fulfillment channel written to every row.
    #[arg(long = "fulfillment-channel", value_name = "CH", default_value = DEFAULT_FULFILLMENT_CHANNEL)]
    pub fulfillment_channel: String,
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
