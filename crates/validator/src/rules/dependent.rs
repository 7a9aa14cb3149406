//! Rules whose required-ness depends on sibling fields.
//!
//! Pretreat turns field names into the record's current values; validate
//! only ever sees those values.
//!
//! | Rule | Resolved | Passes when |
//! |---|---|---|
//! | `requiredIf` | position 0 | resolved\[0\] equals one of resolved\[1..\] |
//! | `requiredNotIf` | position 0 | resolved\[0\] equals none of resolved\[1..\] |
//! | `requiredWith` | every position | some sibling is non-empty |
//! | `requiredWithAll` | every position | every sibling is non-empty |
//! | `requiredWithOut` | every position | some sibling is empty |
//! | `requiredWithOutAll` | every position | every sibling is empty |
//!
//! Position 0 of `requiredIf` falls back to the literal option when the
//! field is empty. The `requiredWith` family resolves an empty or missing
//! field to `""`, so a sibling that is not filled in always counts as empty.

use serde_json::Value;

use crate::foundation::value::expect_array;
use crate::foundation::{RuleContext, RuleDescriptor, RuleError, is_true_empty, strict_equals};
use crate::registry::RuleRegistry;

// ============================================================================
// PRETREAT
// ============================================================================

fn resolve_first(
    rule: &'static str,
    options: &Value,
    ctx: &RuleContext<'_>,
) -> Result<Value, RuleError> {
    let mut resolved = expect_array(rule, options)?.to_vec();
    if let Some(first) = resolved.first_mut() {
        *first = ctx.resolve_or_literal(first);
    }
    Ok(Value::Array(resolved))
}

fn resolve_all(
    rule: &'static str,
    options: &Value,
    ctx: &RuleContext<'_>,
) -> Result<Value, RuleError> {
    let resolved = expect_array(rule, options)?
        .iter()
        .map(|option| ctx.resolve_or_empty(option))
        .collect();
    Ok(Value::Array(resolved))
}

// ============================================================================
// VALIDATE
// ============================================================================

fn first_matches_any(rule: &'static str, resolved: &Value) -> Result<bool, RuleError> {
    let matched = expect_array(rule, resolved)?
        .split_first()
        .is_some_and(|(first, triggers)| triggers.iter().any(|t| strict_equals(first, t)));
    Ok(matched)
}

fn present(value: &Value) -> bool {
    !is_true_empty(Some(value))
}

fn absent(value: &Value) -> bool {
    is_true_empty(Some(value))
}

// ============================================================================
// REGISTRATION
// ============================================================================

macro_rules! dependent {
    ($registry:ident, $name:literal, $resolve:ident, |$resolved:ident| $body:expr) => {
        $registry.register(
            $name,
            RuleDescriptor::new(|_value, $resolved| $body)
                .with_pretreat(|options, ctx| $resolve($name, options, ctx)),
        );
    };
}

pub(super) fn install(registry: &mut RuleRegistry) {
    dependent!(registry, "requiredIf", resolve_first, |resolved| {
        first_matches_any("requiredIf", resolved)
    });
    dependent!(registry, "requiredNotIf", resolve_first, |resolved| {
        first_matches_any("requiredNotIf", resolved).map(|matched| !matched)
    });
    dependent!(registry, "requiredWith", resolve_all, |resolved| {
        Ok(expect_array("requiredWith", resolved)?.iter().any(present))
    });
    dependent!(registry, "requiredWithAll", resolve_all, |resolved| {
        Ok(expect_array("requiredWithAll", resolved)?.iter().all(present))
    });
    dependent!(registry, "requiredWithOut", resolve_all, |resolved| {
        Ok(expect_array("requiredWithOut", resolved)?.iter().any(absent))
    });
    dependent!(registry, "requiredWithOutAll", resolve_all, |resolved| {
        Ok(expect_array("requiredWithOutAll", resolved)?.iter().all(absent))
    });
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{FixedClock, OptionShape, Record, Settings};
    use chrono::NaiveDateTime;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test records are objects"),
        }
    }

    fn run(rule: &str, options: Value, rec: &Record) -> Result<bool, RuleError> {
        let registry = RuleRegistry::builtin();
        let descriptor = registry.lookup(rule).unwrap();
        let settings = Settings::default();
        let clock = FixedClock(NaiveDateTime::default());
        let ctx = RuleContext::new(rec, &settings, &clock);
        descriptor.run(&json!(""), &options, &ctx)
    }

    #[test]
    fn test_required_if_resolves_only_first_position() {
        let rec = record(json!({"password": "x", "x": "not a trigger"}));
        assert_eq!(run("requiredIf", json!(["password", "x"]), &rec), Ok(true));
        assert_eq!(run("requiredIf", json!(["password", "y"]), &rec), Ok(false));
    }

    #[test]
    fn test_required_if_literal_fallback() {
        let rec = record(json!({"role": ""}));
        assert_eq!(run("requiredIf", json!(["role", "role"]), &rec), Ok(true));
        assert_eq!(run("requiredIf", json!(["missing", "admin"]), &rec), Ok(false));
    }

    #[test]
    fn test_required_if_strict_equality() {
        let rec = record(json!({"count": 1}));
        assert_eq!(run("requiredIf", json!(["count", 1.0]), &rec), Ok(true));
        assert_eq!(run("requiredIf", json!(["count", "1"]), &rec), Ok(false));
    }

    #[test]
    fn test_required_not_if() {
        let rec = record(json!({"status": "draft"}));
        assert_eq!(run("requiredNotIf", json!(["status", "draft"]), &rec), Ok(false));
        assert_eq!(run("requiredNotIf", json!(["status", "published"]), &rec), Ok(true));
    }

    #[test]
    fn test_with_family() {
        let rec = record(json!({"a": "1", "b": "", "c": null}));

        assert_eq!(run("requiredWith", json!(["a", "b"]), &rec), Ok(true));
        assert_eq!(run("requiredWith", json!(["b", "c", "d"]), &rec), Ok(false));

        assert_eq!(run("requiredWithAll", json!(["a", "b"]), &rec), Ok(false));
        assert_eq!(run("requiredWithAll", json!(["a"]), &rec), Ok(true));

        assert_eq!(run("requiredWithOut", json!(["a", "b"]), &rec), Ok(true));
        assert_eq!(run("requiredWithOut", json!(["a"]), &rec), Ok(false));

        assert_eq!(run("requiredWithOutAll", json!(["b", "c", "d"]), &rec), Ok(true));
        assert_eq!(run("requiredWithOutAll", json!(["a", "b"]), &rec), Ok(false));
    }

    #[test]
    fn test_zero_and_false_are_present() {
        let rec = record(json!({"zero": 0, "no": false}));
        assert_eq!(run("requiredWithAll", json!(["zero", "no"]), &rec), Ok(true));
    }

    #[test]
    fn test_non_array_options_rejected() {
        let rec = Record::new();
        for rule in [
            "requiredIf",
            "requiredNotIf",
            "requiredWith",
            "requiredWithAll",
            "requiredWithOut",
            "requiredWithOutAll",
        ] {
            assert_eq!(
                run(rule, json!("a"), &rec),
                Err(RuleError::invalid_shape(rule.to_owned(), OptionShape::Array)),
                "{rule}"
            );
        }
    }

    #[test]
    fn test_pretreat_does_not_mutate_options() {
        let rec = record(json!({"a": "1"}));
        let options = json!(["a", "b"]);
        let registry = RuleRegistry::builtin();
        let settings = Settings::default();
        let clock = FixedClock(NaiveDateTime::default());
        let ctx = RuleContext::new(&rec, &settings, &clock);

        let resolved = registry
            .lookup("requiredWith")
            .unwrap()
            .pretreat(&options, &ctx)
            .unwrap();
        assert_eq!(resolved, json!(["1", ""]));
        assert_eq!(options, json!(["a", "b"]));
    }
}
