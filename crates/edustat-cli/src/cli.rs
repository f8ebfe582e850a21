//! CLI argument definitions for EduStat.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "edustat",
    version,
    about = "EduStat - query education and development statistics",
    long_about = "Query an in-memory institution catalog, regional cost indexes, and\n\
                  census snapshots: filter, aggregate, look up, and compare\n\
                  development indicators across year ranges."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory containing the CSV datasets.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = ".",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Print results as JSON instead of tables.
    #[arg(long = "json", global = true)]
    pub json: bool,

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
    /// Find institutions matching optional region/category/budget criteria.
    Find(FindArgs),

    /// Average fees per stream, highest first.
    Averages,

    /// List distinct institution names.
    Names,

    /// Compare two institutions side by side.
    Compare(CompareArgs),

    /// Cost and job index record for one state.
    StateCosts(StateArgs),

    /// Latest census record for one state.
    Census(StateArgs),

    /// Compare development indicators of two states across year ranges.
    Development(DevelopmentArgs),

    /// List government schemes a person is eligible for.
    Schemes(SchemesArgs),
}

#[derive(Parser)]
pub struct FindArgs {
    /// Filter by state, exact and case-insensitive.
    #[arg(long)]
    pub region: Option<String>,

    /// Filter by stream, exact and case-insensitive.
    #[arg(long)]
    pub category: Option<String>,

    /// Inclusive upper bound on fees.
    #[arg(long = "max-budget", value_name = "AMOUNT")]
    pub max_budget: Option<f64>,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// First institution name.
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second institution name.
    #[arg(value_name = "SECOND")]
    pub second: String,
}

#[derive(Parser)]
pub struct StateArgs {
    /// State name, exact and case-insensitive.
    #[arg(value_name = "STATE")]
    pub state: String,
}

#[derive(Parser)]
pub struct DevelopmentArgs {
    /// First state to compare.
    #[arg(long)]
    pub state1: String,

    /// Second state to compare.
    #[arg(long)]
    pub state2: String,

    /// Year selecting the "from" range.
    #[arg(long)]
    pub from: i32,

    /// Year selecting the "to" range.
    #[arg(long)]
    pub to: i32,
}

#[derive(Parser)]
pub struct SchemesArgs {
    /// State of residence (exact match).
    #[arg(long)]
    pub state: String,

    /// Employment sector (exact match).
    #[arg(long)]
    pub sector: String,

    /// Applicant age in years.
    #[arg(long)]
    pub age: i64,
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
