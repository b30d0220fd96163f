//! CLI argument definitions for the WDPA quality checks.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "wdpa-qa",
    version,
    about = "WDPA quality assurance - validate protected-area tables",
    long_about = "Validate World Database on Protected Areas tables against the QA rule catalog.\n\n\
                  Writes qa_report.json and one CSV of violating rows per rule."
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
    /// Validate a polygon table (core and area rules).
    Poly(TableArgs),

    /// Validate a point table (core rules).
    Point(TableArgs),

    /// Cross-check the polygon, point and source tables of one release.
    Integrity(IntegrityArgs),

    /// List the rule catalog.
    Rules(RulesArgs),
}

#[derive(Args)]
pub struct TableArgs {
    /// CSV export of the table to validate.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// CSV with an `alpha-3` column listing valid ISO3 codes.
    ///
    /// Without it the ISO3 and PARENT_ISO3 rules are reported as errored.
    #[arg(long = "countries", value_name = "CSV")]
    pub countries: Option<PathBuf>,

    /// TOML file overriding thresholds and runner settings.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Output directory (default: <CSV folder>/qa_output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Only write qa_report.json, not the per-rule CSV files.
    #[arg(long = "no-export")]
    pub no_export: bool,
}

#[derive(Args)]
pub struct IntegrityArgs {
    /// Polygon table CSV.
    #[arg(long = "polygons", value_name = "CSV")]
    pub polygons: PathBuf,

    /// Point table CSV.
    #[arg(long = "points", value_name = "CSV")]
    pub points: PathBuf,

    /// Source (metadata) table CSV.
    #[arg(long = "source", value_name = "CSV")]
    pub source: PathBuf,

    /// Output directory (default: <polygon CSV folder>/qa_output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Only write qa_report.json, not the per-rule CSV files.
    #[arg(long = "no-export")]
    pub no_export: bool,
}

#[derive(Args)]
pub struct RulesArgs {
    /// Only list the rules run for this scope.
    #[arg(long = "scope", value_enum)]
    pub scope: Option<ScopeArg>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    Poly,
    Point,
    Integrity,
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
