//! Dependent-field rules through the default engine.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rulekit_validator::foundation::{OptionShape, RuleError};
use rulekit_validator::{RuleEngine, validate};
use serde_json::{Value, json};

use super::record;

#[test]
fn password_confirmation_is_required_when_password_matches() {
    let record = record(json!({"password": "x", "password_confirm": ""}));
    let engine = RuleEngine::default();

    assert_eq!(
        engine.pretreat("requiredIf", &json!(["password", "x"]), Some(&record)),
        Ok(json!(["x", "x"]))
    );
    assert_eq!(
        validate("requiredIf", &json!(""), &json!(["password", "x"]), Some(&record)),
        Ok(true)
    );
}

#[test]
fn required_without_resolves_every_sibling() {
    let record = record(json!({"a": "", "b": "", "c": "1"}));
    let engine = RuleEngine::default();

    assert_eq!(
        engine.pretreat("requiredWithOut", &json!(["a", "b"]), Some(&record)),
        Ok(json!(["", ""]))
    );
    assert_eq!(
        validate("requiredWithOut", &json!("1"), &json!(["a", "b"]), Some(&record)),
        Ok(true)
    );
}

#[test]
fn required_with_all_fails_on_one_empty_sibling() {
    let record = record(json!({"a": "1", "b": ""}));
    let engine = RuleEngine::default();

    assert_eq!(
        engine.pretreat("requiredWithAll", &json!(["a", "b"]), Some(&record)),
        Ok(json!(["1", ""]))
    );
    assert_eq!(
        validate("requiredWithAll", &json!(""), &json!(["a", "b"]), Some(&record)),
        Ok(false)
    );
}

#[rstest]
#[case::missing(json!({}))]
#[case::null(json!({"a": null}))]
#[case::empty_string(json!({"a": ""}))]
fn emptiness_is_uniform(#[case] record_value: Value) {
    let record = record(record_value);
    let options = json!(["a"]);
    let check = |rule: &str| validate(rule, &json!(""), &options, Some(&record));

    assert_eq!(check("requiredWith"), Ok(false));
    assert_eq!(check("requiredWithAll"), Ok(false));
    assert_eq!(check("requiredWithOut"), Ok(true));
    assert_eq!(check("requiredWithOutAll"), Ok(true));
}

#[rstest]
#[case::zero(json!(0))]
#[case::falsy(json!(false))]
#[case::empty_array(json!([]))]
#[case::empty_object(json!({}))]
fn only_null_and_empty_string_are_empty(#[case] sibling: Value) {
    let record = record(json!({"a": sibling}));
    assert_eq!(
        validate("requiredWith", &json!(""), &json!(["a"]), Some(&record)),
        Ok(true)
    );
}

#[test]
fn required_if_falls_back_to_literal_option() {
    // No `status` field, so the literal "status" is compared.
    assert_eq!(
        validate("requiredIf", &json!(""), &json!(["status", "status"]), None),
        Ok(true)
    );
    assert_eq!(
        validate("requiredNotIf", &json!(""), &json!(["status", "status"]), None),
        Ok(false)
    );
}

#[test]
fn required_if_compares_strictly() {
    let record = record(json!({"count": 1}));
    assert_eq!(
        validate("requiredIf", &json!(""), &json!(["count", 1.0]), Some(&record)),
        Ok(true)
    );
    assert_eq!(
        validate("requiredIf", &json!(""), &json!(["count", "1"]), Some(&record)),
        Ok(false)
    );
}

#[rstest]
#[case("requiredIf")]
#[case("requiredNotIf")]
#[case("requiredWith")]
#[case("requiredWithAll")]
#[case("requiredWithOut")]
#[case("requiredWithOutAll")]
fn non_array_options_are_rejected(#[case] rule: &str) {
    let expected = Err(RuleError::invalid_shape(rule.to_owned(), OptionShape::Array));
    assert_eq!(validate(rule, &json!(""), &json!("a"), None), expected);
    assert_eq!(validate(rule, &json!(""), &json!({"a": 1}), None), expected);
}
