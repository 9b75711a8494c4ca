//! CLI argument definitions for lightmap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lightmap",
    version,
    about = "Map untyped JSON records onto declared target properties",
    long_about = "Map an untyped JSON source record onto the properties declared in a spec document.\n\n\
                  Each property is required, optional or nullable, may read from one or several\n\
                  candidate source keys, and may apply a named transformation."
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

    /// Allow source and mapped values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map a JSON source record through a spec document.
    Map(MapArgs),

    /// Run the built-in example mapping.
    Demo(DemoArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Spec document: property name to requirement/options, in mapping order.
    #[arg(long = "specs", value_name = "FILE")]
    pub specs: PathBuf,

    /// Source record (a JSON object).
    #[arg(long = "source", value_name = "FILE")]
    pub source: PathBuf,

    /// Property to leave out of the mapping (repeatable).
    ///
    /// Excluding a required property is an error.
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Override a property with a literal value: NAME=JSON (repeatable).
    ///
    /// Values that are not valid JSON are taken as plain strings.
    #[arg(long = "replace", value_name = "NAME=VALUE")]
    pub replace: Vec<String>,

    /// Output format for the mapped record.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct DemoArgs {
    /// Output format for the mapped record.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Table,
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
