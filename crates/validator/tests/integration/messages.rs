//! Error text and message rendering.

use insta::assert_snapshot;
use rulekit_validator::catalog::{DefaultCatalog, render, render_error};
use rulekit_validator::validate;
use serde_json::json;

#[test]
fn unknown_rule_message() {
    let error = validate("shoeSize", &json!(1), &json!(null), None).unwrap_err();
    assert_snapshot!(error.to_string(), @"unknown rule `shoeSize`");
    assert_snapshot!(render_error(&DefaultCatalog, &error), @"no rule named shoeSize is registered");
}

#[test]
fn invalid_option_shape_message() {
    let error = validate("requiredWith", &json!(""), &json!("a"), None).unwrap_err();
    assert_snapshot!(error.to_string(), @"requiredWith's options should be array");
    assert_snapshot!(error.code(), @"invalid_option_shape");

    let error = validate("before", &json!(""), &json!("someday"), None).unwrap_err();
    assert_snapshot!(error.to_string(), @"before's options should be date string or true");
}

#[test]
fn rule_messages() {
    assert_snapshot!(
        render(&DefaultCatalog, "in", "color", &json!(["red", "green"])),
        @"color should be one of red, green"
    );
    assert_snapshot!(
        render(&DefaultCatalog, "requiredWith", "phone", &json!(["email"])),
        @"phone is required"
    );
    assert_snapshot!(
        render(&DefaultCatalog, "notARule", "field", &json!(null)),
        @"field is not valid"
    );
}
