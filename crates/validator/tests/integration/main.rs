//! Integration tests for rulekit-validator.
//!
//! Everything here goes through the public engine surface.

mod catalog;
mod comparison;
mod dependent;
mod engine;
mod logging;
mod messages;

use rulekit_validator::foundation::Record;
use serde_json::Value;

/// Turns a `json!({...})` literal into a record.
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("record must be an object, got {other}"),
    }
}
