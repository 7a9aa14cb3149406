//! Comparison rules: field-or-literal options and the "now" sentinel.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, SecondsFormat, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use rulekit_validator::foundation::{FixedClock, OptionShape, RuleError};
use rulekit_validator::config::{ClockMode, EngineConfig};
use rulekit_validator::{RuleEngine, validate};
use serde_json::{Value, json};

use super::record;

fn frozen() -> RuleEngine {
    let now = NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|date| date.and_hms_opt(7, 8, 9))
        .unwrap();
    RuleEngine::builder().clock(Arc::new(FixedClock(now))).build()
}

#[test]
fn contains_uses_literal_when_no_field_matches() {
    let engine = RuleEngine::default();
    assert_eq!(
        engine.pretreat("contains", &json!("needle"), None),
        Ok(json!("needle"))
    );
    assert_eq!(
        validate("contains", &json!("haystack with needle"), &json!("needle"), None),
        Ok(true)
    );
    assert_eq!(validate("contains", &json!("haystack"), &json!("needle"), None), Ok(false));
}

#[test]
fn equals_reads_sibling_field() {
    let record = record(json!({"password": "hunter2"}));
    assert_eq!(
        validate("equals", &json!("hunter2"), &json!("password"), Some(&record)),
        Ok(true)
    );
    assert_eq!(
        validate("different", &json!("hunter2"), &json!("password"), Some(&record)),
        Ok(false)
    );
}

#[test]
fn equals_compares_string_forms() {
    assert_eq!(validate("equals", &json!(42), &json!("42"), None), Ok(true));
    assert_eq!(validate("equals", &json!(true), &json!("true"), None), Ok(true));
}

#[rstest]
#[case::null(Value::Null)]
#[case::array(json!(["a"]))]
#[case::object(json!({"a": 1}))]
fn comparison_options_must_be_scalar(#[case] options: Value) {
    for rule in ["contains", "equals", "different"] {
        assert_eq!(
            validate(rule, &json!("x"), &options, None),
            Err(RuleError::invalid_shape(rule.to_owned(), OptionShape::FieldOrLiteral))
        );
    }
}

#[test]
fn before_true_means_now() {
    let engine = frozen();
    assert_eq!(
        engine.pretreat("before", &json!(true), None),
        Ok(json!("2024-3-5 7:8:9"))
    );
    assert_eq!(
        engine.validate("before", &json!("2000-01-01 00:00:00"), &json!(true), None),
        Ok(true)
    );
    assert_eq!(
        engine.validate("after", &json!("2000-01-01 00:00:00"), &json!(true), None),
        Ok(false)
    );
}

#[test]
fn equals_stringifies_resolved_field() {
    let record = record(json!({"quantity": 10}));
    assert_eq!(
        validate("equals", &json!("10"), &json!("quantity"), Some(&record)),
        Ok(true)
    );
    assert_eq!(
        validate("different", &json!("10"), &json!("quantity"), Some(&record)),
        Ok(false)
    );
}

#[test]
fn utc_clock_agrees_with_offset_dates() {
    let config = EngineConfig {
        clock: ClockMode::Utc,
        ..EngineConfig::default()
    };
    let engine = RuleEngine::from_config(&config);
    let hour_ago = (Utc::now() - Duration::hours(1)).to_rfc3339_opts(SecondsFormat::Secs, true);

    assert_eq!(engine.validate("before", &json!(hour_ago), &json!(true), None), Ok(true));
    assert_eq!(engine.validate("after", &json!(hour_ago), &json!(true), None), Ok(false));
}

#[test]
fn explicit_dates_pass_through() {
    let engine = frozen();
    assert_eq!(
        engine.validate("after", &json!("2021-06-01"), &json!("2021-01-01"), None),
        Ok(true)
    );
    assert_eq!(
        engine.validate("before", &json!("not a date"), &json!("2021-01-01"), None),
        Ok(false)
    );
}

#[rstest]
#[case::garbage(json!("someday"))]
#[case::falsy(json!(false))]
#[case::number(json!(20_240_305))]
fn date_options_must_be_date_or_true(#[case] options: Value) {
    for rule in ["before", "after"] {
        assert_eq!(
            validate(rule, &json!("2000-01-01"), &options, None),
            Err(RuleError::invalid_shape(rule.to_owned(), OptionShape::DateOrTrue))
        );
    }
}
