//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rulekit",
    version,
    about = "Run named validation rules against JSON values",
    long_about = "Run named validation rules against JSON values.\n\n\
                  Values, options and records are JSON. A value that is not valid JSON\n\
                  is taken as a plain string."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one value against one rule.
    ///
    /// Prints `pass` or `fail`. Exits 0 on pass, 1 on fail, 2 on errors.
    Check(CheckArgs),

    /// List the registered rule names.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Rule name, e.g. `email` or `requiredWith`.
    #[arg(value_name = "RULE")]
    pub rule: String,

    /// Value under validation (JSON, or a plain string).
    #[arg(long, value_name = "JSON", allow_hyphen_values = true)]
    pub value: String,

    /// Rule options (JSON). Omitted means `null`.
    #[arg(long, value_name = "JSON", allow_hyphen_values = true)]
    pub options: Option<String>,

    /// The record the value belongs to (JSON object).
    #[arg(long, value_name = "JSON", conflicts_with = "record_file")]
    pub record: Option<String>,

    /// Read the record from a JSON file.
    #[arg(long = "record-file", value_name = "PATH")]
    pub record_file: Option<PathBuf>,

    /// Engine configuration file (`.toml` or `.json`).
    #[arg(long, value_name = "PATH", env = "RULEKIT_CONFIG")]
    pub config: Option<PathBuf>,
}
