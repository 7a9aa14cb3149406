//! Format and type rules across the built-in catalog.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rulekit_validator::foundation::{OptionShape, RuleError};
use rulekit_validator::validate;
use serde_json::{Value, json};

#[rstest]
// Character classes
#[case("alpha", json!("abcXYZ"), Value::Null, true)]
#[case("alpha", json!("abc1"), Value::Null, false)]
#[case("alphaDash", json!("snake_case"), Value::Null, true)]
#[case("alphaDash", json!("snake_case_2"), Value::Null, false)]
#[case("alphaNumeric", json!("abc123"), Value::Null, true)]
#[case("alphaNumericDash", json!("abc_123"), Value::Null, true)]
#[case("alphaNumericDash", json!("abc-123"), Value::Null, false)]
#[case("lowercase", json!("abc"), Value::Null, true)]
#[case("uppercase", json!("abc"), Value::Null, false)]
// Length
#[case("length", json!("ab"), json!({"min": 2}), true)]
#[case("length", json!("a"), json!({"min": 2}), false)]
#[case("length", json!("abcd"), json!({"min": 1, "max": 3}), false)]
// Numbers, coerced from JSON numbers
#[case("int", json!(42), json!(true), true)]
#[case("int", json!("4.2"), json!(true), false)]
#[case("int", json!(42), json!({"max": 10}), false)]
#[case("float", json!("0.5"), json!({"gt": 0, "lt": 1}), true)]
#[case("divisibleBy", json!(10), json!(5), true)]
#[case("divisibleBy", json!(10), json!(3), false)]
// Network
#[case("email", json!("user@example.com"), json!(true), true)]
#[case("email", json!("user@localhost"), json!(true), false)]
#[case("url", json!("https://example.com/path"), json!(true), true)]
#[case("fqdn", json!("example.com"), json!(true), true)]
#[case("ip", json!("::1"), Value::Null, true)]
#[case("ip4", json!("192.168.0.1"), Value::Null, true)]
#[case("ip6", json!("192.168.0.1"), Value::Null, false)]
#[case("macAddress", json!("AA:BB:CC:DD:EE:FF"), Value::Null, true)]
// Identifiers
#[case("creditCard", json!("4111111111111111"), Value::Null, true)]
#[case("creditCard", json!("4111111111111112"), Value::Null, false)]
#[case("isbn", json!("978-0-306-40615-7"), Value::Null, true)]
#[case("isin", json!("US0378331005"), Value::Null, true)]
#[case("issn", json!("0378-5955"), json!(true), true)]
#[case("uuid", json!("550e8400-e29b-41d4-a716-446655440000"), Value::Null, true)]
#[case("md5", json!("d41d8cd98f00b204e9800998ecf8427e"), Value::Null, true)]
#[case("mongoId", json!("507f1f77bcf86cd799439011"), Value::Null, true)]
// Dates and phones
#[case("iso8601", json!("2009-05-19T14:39Z"), Value::Null, true)]
#[case("iso8601", json!("May 19, 2009"), Value::Null, false)]
#[case("mobile", json!("13800138000"), json!(true), true)]
#[case("mobile", json!("07911123456"), json!("en-GB"), true)]
// Types and membership
#[case("string", json!(1), Value::Null, false)]
#[case("array", json!([1]), Value::Null, true)]
#[case("boolean", json!("true"), Value::Null, false)]
#[case("object", json!({"a": 1}), Value::Null, true)]
#[case("in", json!(2), json!([1, 2, 3]), true)]
#[case("notIn", json!("c"), json!(["a", "b"]), true)]
#[case("startWith", json!("prefix-body"), json!("prefix"), true)]
#[case("endWith", json!("file.rs"), json!(".toml"), false)]
#[case("regexp", json!("ABC"), json!({"source": "^abc$", "flags": "i"}), true)]
#[case("image", json!({"originalFilename": "cat.png"}), Value::Null, true)]
#[case("required", json!(""), json!(true), true)]
fn builtin_rule(
    #[case] rule: &str,
    #[case] value: Value,
    #[case] options: Value,
    #[case] expected: bool,
) {
    assert_eq!(validate(rule, &value, &options, None), Ok(expected), "{rule}");
}

#[rstest]
#[case("email", json!("user@example.com"))]
#[case("url", json!("https://example.com/path"))]
#[case("int", json!("42"))]
#[case("float", json!("0.5"))]
#[case("fqdn", json!("example.com"))]
#[case("currency", json!("$10.99"))]
#[case("issn", json!("0378-5955"))]
fn absent_options_mean_defaults(#[case] rule: &str, #[case] value: Value) {
    let absent = validate(rule, &value, &Value::Null, None);
    assert_eq!(absent, Ok(true), "{rule}");
    assert_eq!(absent, validate(rule, &value, &json!(true), None), "{rule}");
}

#[rstest]
#[case("length", json!(true), OptionShape::Object)]
#[case("length", json!({"min": "two"}), OptionShape::Object)]
#[case("byteLength", json!(null), OptionShape::Object)]
#[case("int", json!(false), OptionShape::ObjectOrTrue)]
#[case("email", json!("yes"), OptionShape::ObjectOrTrue)]
#[case("url", json!([]), OptionShape::ObjectOrTrue)]
#[case("in", json!("a,b"), OptionShape::Array)]
#[case("startWith", json!(1), OptionShape::String)]
#[case("divisibleBy", json!("three"), OptionShape::Number)]
#[case("regexp", json!("("), OptionShape::Regex)]
#[case("required", json!("yes"), OptionShape::Boolean)]
#[case("mobile", json!("xx-XX"), OptionShape::LocaleOrTrue)]
fn option_contract_is_checked_first(
    #[case] rule: &str,
    #[case] options: Value,
    #[case] expected: OptionShape,
) {
    // The value would fail anyway; the contract error still wins.
    assert_eq!(
        validate(rule, &json!("\u{0}"), &options, None),
        Err(RuleError::invalid_shape(rule.to_owned(), expected))
    );
}
