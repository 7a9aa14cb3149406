//! Single-option comparison rules.
//!
//! `contains`, `equals` and `different` take a scalar that either names a
//! sibling field or is used as-is. `before` and `after` take a date string,
//! or `true` for "now" on the engine clock.

use serde_json::Value;

use crate::foundation::{
    OptionShape, RuleContext, RuleDescriptor, RuleError, coerce, is_literal_true,
};
use crate::predicates::{format_timestamp, is_after, is_before, is_date, string};
use crate::registry::RuleRegistry;

// ============================================================================
// PRETREAT
// ============================================================================

fn resolve_scalar(
    rule: &'static str,
    option: &Value,
    ctx: &RuleContext<'_>,
) -> Result<Value, RuleError> {
    match option {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(ctx.resolve_or_literal(option)),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            Err(RuleError::invalid_shape(rule, OptionShape::FieldOrLiteral))
        }
    }
}

fn resolve_date(
    rule: &'static str,
    option: &Value,
    ctx: &RuleContext<'_>,
) -> Result<Value, RuleError> {
    if is_literal_true(option) {
        // A non-local "now" keeps its offset so it parses into the same frame
        // as offset-bearing values.
        let stamp = format_timestamp(ctx.now());
        return Ok(Value::String(match ctx.clock_offset() {
            Some(offset) => format!("{stamp}{offset}"),
            None => stamp,
        }));
    }
    match option.as_str() {
        Some(date) if is_date(date) => Ok(option.clone()),
        _ => Err(RuleError::invalid_shape(rule, OptionShape::DateOrTrue)),
    }
}

// ============================================================================
// REGISTRATION
// ============================================================================

fn compare(predicate: fn(&str, &str) -> bool) -> RuleDescriptor {
    RuleDescriptor::new(move |value, resolved| Ok(predicate(&coerce(value), &coerce(resolved))))
}

pub(super) fn install(registry: &mut RuleRegistry) {
    registry.register(
        "contains",
        compare(string::contains)
            .with_pretreat(|options, ctx| resolve_scalar("contains", options, ctx)),
    );
    registry.register(
        "equals",
        compare(string::equals)
            .with_pretreat(|options, ctx| resolve_scalar("equals", options, ctx)),
    );
    registry.register(
        "different",
        compare(|value, comparison| !string::equals(value, comparison))
            .with_pretreat(|options, ctx| resolve_scalar("different", options, ctx)),
    );
    registry.register(
        "before",
        compare(is_before).with_pretreat(|options, ctx| resolve_date("before", options, ctx)),
    );
    registry.register(
        "after",
        compare(is_after).with_pretreat(|options, ctx| resolve_date("after", options, ctx)),
    );
}

// ============================================================================
// TESTS
// ============================================================================
