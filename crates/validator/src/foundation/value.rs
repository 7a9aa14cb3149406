//! Type guards, emptiness and string coercion over JSON values.
//!
//! Rules receive values and options as `serde_json::Value`. These helpers
//! give every rule the same answer to "is this empty", "is this an object"
//! and "what string does this compare as".

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{OptionShape, RuleError};

// ============================================================================
// TYPE GUARDS
// ============================================================================

/// Returns true for a JSON array.
#[inline]
#[must_use]
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Returns true for a JSON object (never for arrays or `null`).
#[inline]
#[must_use]
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Returns true for a JSON boolean.
#[inline]
#[must_use]
pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

/// Returns true for a JSON string.
#[inline]
#[must_use]
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Returns true only for the literal `true`.
#[inline]
#[must_use]
pub fn is_literal_true(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

/// The uniform "absent value" predicate.
///
/// A missing field, `null` and `""` are empty. `0`, `false`, `[]` and `{}`
/// are values like any other.
#[must_use]
pub fn is_true_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

// ============================================================================
// COERCION
// ============================================================================

/// Coerces any value to the string the predicate library compares against.
///
/// Total over all JSON values:
///
/// | value | result |
/// |---|---|
/// | string | itself |
/// | number | JSON rendering (`1`, `1.5`) |
/// | boolean | `"true"` / `"false"` |
/// | `null` | `""` |
/// | array | elements coerced and joined with `,` |
/// | object | `"[object Object]"` |
#[must_use]
pub fn to_comparable_string(value: &Value) -> String {
    match coerce(value) {
        Cow::Borrowed(s) => s.to_owned(),
        Cow::Owned(s) => s,
    }
}

/// Borrowing form of [`to_comparable_string`].
#[must_use]
pub fn coerce(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => Cow::Owned(render_number(n)),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Null => Cow::Borrowed(""),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(coerce)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

/// Integral floats render without a fractional part (`1.0` → `"1"`).
fn render_number(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(x) = n.as_f64() {
            if x.fract() == 0.0 && x.abs() < 1e15 {
                return format!("{}", x as i64);
            }
            return x.to_string();
        }
    }
    n.to_string()
}

/// The record key an option names, if it can name one.
///
/// Strings, numbers and booleans name the field with their string form.
/// `null`, arrays and objects never name a field.
#[must_use]
pub fn field_key(option: &Value) -> Option<Cow<'_, str>> {
    match option {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Some(coerce(option)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// ============================================================================
// EQUALITY
// ============================================================================

/// Strict equality used to match trigger values.
///
/// Numbers compare by numeric value so `1` equals `1.0`; a string never
/// equals a number. Everything else uses structural JSON equality.
#[must_use]
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => a == b,
        },
        _ => left == right,
    }
}

// ============================================================================
// OPTION CONTRACTS
// ============================================================================

/// Asserts that `options` is an array and returns its elements.
pub fn expect_array<'a>(
    rule: &'static str,
    options: &'a Value,
) -> Result<&'a [Value], RuleError> {
    options
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| RuleError::invalid_shape(rule, OptionShape::Array))
}

/// Deserializes an options object into `T`.
///
/// Anything other than a JSON object, or an object whose fields have the
/// wrong types, violates the `Object` contract.
pub fn expect_object<T: DeserializeOwned>(
    rule: &'static str,
    options: &Value,
) -> Result<T, RuleError> {
    if !options.is_object() {
        return Err(RuleError::invalid_shape(rule, OptionShape::Object));
    }
    serde_json::from_value(options.clone())
        .map_err(|_| RuleError::invalid_shape(rule, OptionShape::Object))
}

/// Deserializes an "object or `true`" option.
///
/// `true` and absent options (`null`) both yield `T::default()`.
pub fn expect_object_or_true<T: DeserializeOwned + Default>(
    rule: &'static str,
    options: &Value,
) -> Result<T, RuleError> {
    if options.is_null() || is_literal_true(options) {
        return Ok(T::default());
    }
    if !options.is_object() {
        return Err(RuleError::invalid_shape(rule, OptionShape::ObjectOrTrue));
    }
    serde_json::from_value(options.clone())
        .map_err(|_| RuleError::invalid_shape(rule, OptionShape::ObjectOrTrue))
}

/// Asserts that `options` is a string.
pub fn expect_str<'a>(rule: &'static str, options: &'a Value) -> Result<&'a str, RuleError> {
    options
        .as_str()
        .ok_or_else(|| RuleError::invalid_shape(rule, OptionShape::String))
}

/// Reads a number or numeric string.
pub fn expect_number(rule: &'static str, options: &Value) -> Result<f64, RuleError> {
    let parsed = match options {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|n| n.is_finite())
        .ok_or_else(|| RuleError::invalid_shape(rule, OptionShape::Number))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_semantics() {
        assert!(is_true_empty(None));
        assert!(is_true_empty(Some(&Value::Null)));
        assert!(is_true_empty(Some(&json!(""))));

        assert!(!is_true_empty(Some(&json!(" "))));
        assert!(!is_true_empty(Some(&json!(0))));
        assert!(!is_true_empty(Some(&json!(false))));
        assert!(!is_true_empty(Some(&json!([]))));
        assert!(!is_true_empty(Some(&json!({}))));
    }

    #[test]
    fn test_coercion() {
        assert_eq!(to_comparable_string(&json!("abc")), "abc");
        assert_eq!(to_comparable_string(&json!(42)), "42");
        assert_eq!(to_comparable_string(&json!(-1.5)), "-1.5");
        assert_eq!(to_comparable_string(&json!(2.0)), "2");
        assert_eq!(to_comparable_string(&json!(true)), "true");
        assert_eq!(to_comparable_string(&Value::Null), "");
        assert_eq!(to_comparable_string(&json!([1, "a", [2, 3]])), "1,a,2,3");
        assert_eq!(to_comparable_string(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn test_field_key() {
        assert_eq!(field_key(&json!("password")).as_deref(), Some("password"));
        assert_eq!(field_key(&json!(3)).as_deref(), Some("3"));
        assert_eq!(field_key(&Value::Null), None);
        assert_eq!(field_key(&json!(["a"])), None);
    }

    #[test]
    fn test_strict_equals() {
        assert!(strict_equals(&json!(1), &json!(1.0)));
        assert!(strict_equals(&json!("x"), &json!("x")));
        assert!(!strict_equals(&json!("1"), &json!(1)));
        assert!(!strict_equals(&json!(true), &json!("true")));
        assert!(strict_equals(&Value::Null, &Value::Null));
    }

    #[test]
    fn test_expect_array() {
        assert_eq!(expect_array("in", &json!(["a"])).unwrap().len(), 1);
        let err = expect_array("in", &json!("a")).unwrap_err();
        assert_eq!(err, RuleError::invalid_shape("in", OptionShape::Array));
    }

    #[test]
    fn test_expect_number() {
        assert_eq!(expect_number("divisibleBy", &json!(3)).unwrap(), 3.0);
        assert_eq!(expect_number("divisibleBy", &json!(" 4 ")).unwrap(), 4.0);
        assert!(expect_number("divisibleBy", &json!("four")).is_err());
        assert!(expect_number("divisibleBy", &json!(true)).is_err());
    }

    #[test]
    fn test_expect_object_or_true_defaults() {
        #[derive(Debug, Default, PartialEq, serde::Deserialize)]
        #[serde(default)]
        struct Limits {
            max: Option<u32>,
        }

        let absent: Limits = expect_object_or_true("int", &Value::Null).unwrap();
        let flagged: Limits = expect_object_or_true("int", &json!(true)).unwrap();
        assert_eq!(absent, Limits::default());
        assert_eq!(flagged, Limits::default());

        let given: Limits = expect_object_or_true("int", &json!({"max": 3})).unwrap();
        assert_eq!(given.max, Some(3));

        let err = expect_object_or_true::<Limits>("int", &json!(false)).unwrap_err();
        assert_eq!(err, RuleError::invalid_shape("int", OptionShape::ObjectOrTrue));
    }
}
