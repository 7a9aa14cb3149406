//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rulekit_validator::RuleEngine;
use rulekit_validator::catalog::{DefaultCatalog, render_error};
use rulekit_validator::config::EngineConfig;
use rulekit_validator::foundation::{Record, RuleError};
use serde_json::Value;
use tracing::debug;

use crate::cli::CheckArgs;

/// Result of `rulekit check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The rule ran; `true` means the value passed.
    Evaluated(bool),
    /// The rule could not run.
    Rejected(RuleError),
}

impl CheckOutcome {
    /// Process exit code.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Evaluated(true) => 0,
            Self::Evaluated(false) => 1,
            Self::Rejected(_) => 2,
        }
    }
}

/// Runs one rule and reports the outcome.
pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let config = load_config(args.config.as_deref())?;
    let engine = RuleEngine::from_config(&config);

    let value = parse_value(&args.value);
    let options = match &args.options {
        Some(text) => serde_json::from_str(text).context("--options is not valid JSON")?,
        None => Value::Null,
    };
    let record = load_record(args)?;

    debug!(rule = %args.rule, "checking value");
    Ok(
        match engine.validate(&args.rule, &value, &options, record.as_ref()) {
            Ok(valid) => CheckOutcome::Evaluated(valid),
            Err(error) => CheckOutcome::Rejected(error),
        },
    )
}

/// Prints a check outcome to stdout, or its error to stderr.
pub fn print_outcome(outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Evaluated(true) => println!("pass"),
        CheckOutcome::Evaluated(false) => println!("fail"),
        CheckOutcome::Rejected(error) => {
            eprintln!("error: {}", render_error(&DefaultCatalog, error));
        }
    }
}

/// Prints the registered rule names, one per line.
pub fn run_rules() {
    let engine = RuleEngine::default();
    for name in engine.registry().names() {
        println!("{name}");
    }
}

/// Values that are not JSON are plain strings.
fn parse_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

fn load_record(args: &CheckArgs) -> Result<Option<Record>> {
    let text = match (&args.record, &args.record_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read record file {}", path.display()))?,
        (None, None) => return Ok(None),
    };
    match serde_json::from_str::<Value>(&text).context("record is not valid JSON")? {
        Value::Object(record) => Ok(Some(record)),
        other => bail!("record must be a JSON object, got {other}"),
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let parsed = if path.extension().is_some_and(|ext| ext == "json") {
                EngineConfig::from_json_str(&text)
            } else {
                EngineConfig::from_toml_str(&text)
            };
            parsed.with_context(|| format!("invalid config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}
