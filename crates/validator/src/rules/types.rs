//! Type, membership, affix and pattern rules.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use serde_json::Value;

use crate::foundation::value::{expect_array, expect_str};
use crate::foundation::{
    OptionShape, RuleDescriptor, RuleError, coerce, is_array, is_boolean, is_object, is_string,
};
use crate::predicates::{self, is_field_list, is_image_name, is_order_clause};
use crate::registry::RuleRegistry;
use crate::string_rule;

#[derive(Debug, Deserialize)]
struct PatternSpec {
    source: String,
    #[serde(default)]
    flags: String,
}

/// Compiles a `regexp` option: a pattern string, or `{source, flags}` with
/// `i`, `m` and `s` honoured and `g`, `u`, `y` accepted as no-ops.
fn compile_pattern(options: &Value) -> Result<Regex, RuleError> {
    let invalid = || RuleError::invalid_shape("regexp", OptionShape::Regex);

    let spec = match options {
        Value::String(source) => PatternSpec {
            source: source.clone(),
            flags: String::new(),
        },
        Value::Object(_) => serde_json::from_value(options.clone()).map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };

    let mut builder = RegexBuilder::new(&spec.source);
    for flag in spec.flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'g' | 'u' | 'y' => {}
            _ => return Err(invalid()),
        }
    }
    builder.build().map_err(|_| invalid())
}

fn image_name(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Object(file) => file
            .get("originalFilename")
            .and_then(Value::as_str)
            .map(Cow::Borrowed),
        _ => Some(coerce(value)),
    }
}

fn membership(rule: &'static str, negate: bool) -> RuleDescriptor {
    RuleDescriptor::new(move |value, options| {
        let allowed: Vec<_> = expect_array(rule, options)?.iter().map(coerce).collect();
        Ok(predicates::is_in(&coerce(value), &allowed) != negate)
    })
}

fn affix(rule: &'static str, test: fn(&str, &str) -> bool) -> RuleDescriptor {
    RuleDescriptor::new(move |value, options| {
        let affix = expect_str(rule, options)?;
        Ok(test(&coerce(value), affix))
    })
}

pub(super) fn install(registry: &mut RuleRegistry) {
    registry.register(
        "required",
        RuleDescriptor::new(|_value, options| {
            options
                .as_bool()
                .ok_or_else(|| RuleError::invalid_shape("required", OptionShape::Boolean))
        }),
    );

    // JSON types are checked on the raw value, not its string form.
    registry.register("string", RuleDescriptor::new(|value, _| Ok(is_string(value))));
    registry.register("array", RuleDescriptor::new(|value, _| Ok(is_array(value))));
    registry.register("boolean", RuleDescriptor::new(|value, _| Ok(is_boolean(value))));
    registry.register("object", RuleDescriptor::new(|value, _| Ok(is_object(value))));

    registry.register("in", membership("in", false));
    registry.register("notIn", membership("notIn", true));

    registry.register("startWith", affix("startWith", |value, prefix| value.starts_with(prefix)));
    registry.register("endWith", affix("endWith", |value, suffix| value.ends_with(suffix)));

    registry.register("order", string_rule!(v => is_order_clause(v)));
    registry.register("field", string_rule!(v => is_field_list(v)));
    registry.register(
        "image",
        RuleDescriptor::new(|value, _| {
            Ok(image_name(value).is_some_and(|name| is_image_name(&name)))
        }),
    );

    registry.register(
        "regexp",
        RuleDescriptor::new(|value, options| {
            let pattern = compile_pattern(options)?;
            Ok(pattern.is_match(&coerce(value)))
        }),
    );
}
