//! Engine construction, custom registries and configuration.

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use rulekit_validator::config::{ClockMode, EngineConfig};
use rulekit_validator::foundation::{RuleDescriptor, RuleError};
use rulekit_validator::registry::default_registry;
use rulekit_validator::{RuleEngine, RuleRegistry, string_rule};
use serde_json::{Value, json};

use super::record;

#[test]
fn unknown_rule_is_an_error_not_false() {
    assert_eq!(
        rulekit_validator::validate("shoeSize", &json!(42), &Value::Null, None),
        Err(RuleError::unknown_rule("shoeSize"))
    );
}

#[test]
fn custom_rule_with_pretreat() {
    let mut registry = RuleRegistry::builtin();
    registry.register(
        "atLeastField",
        RuleDescriptor::new(|value, resolved| {
            Ok(value.as_f64().zip(resolved.as_f64()).is_some_and(|(v, min)| v >= min))
        })
        .with_pretreat(|options, ctx| Ok(ctx.resolve_or_literal(options))),
    );
    let engine = RuleEngine::builder().registry(registry).build();
    let record = record(json!({"floor": 10}));

    assert_eq!(
        engine.validate("atLeastField", &json!(12), &json!("floor"), Some(&record)),
        Ok(true)
    );
    assert_eq!(
        engine.validate("atLeastField", &json!(8), &json!("floor"), Some(&record)),
        Ok(false)
    );
    // Built-ins are still there.
    assert_eq!(engine.validate("alpha", &json!("abc"), &Value::Null, None), Ok(true));
}

#[test]
fn overriding_a_builtin_rule() {
    let mut registry = RuleRegistry::builtin();
    let previous = registry.register("alpha", string_rule!(v => v == "only"));
    assert!(previous.is_some());

    let engine = RuleEngine::builder().registry(registry).build();
    assert_eq!(engine.validate("alpha", &json!("abc"), &Value::Null, None), Ok(false));
    assert_eq!(engine.validate("alpha", &json!("only"), &Value::Null, None), Ok(true));

    // The shared default registry is untouched.
    assert!(default_registry().lookup("alpha").is_ok());
    assert_eq!(
        rulekit_validator::validate("alpha", &json!("abc"), &Value::Null, None),
        Ok(true)
    );
}

#[test]
fn engine_from_toml_config() {
    let config = EngineConfig::from_toml_str(
        r#"
        default_mobile_locale = "en-GB"
        clock = "utc"
        "#,
    )
    .unwrap();
    assert_eq!(config.clock, ClockMode::Utc);

    let engine = RuleEngine::from_config(&config);
    assert_eq!(
        engine.validate("mobile", &json!("07911123456"), &json!(true), None),
        Ok(true)
    );
}

#[test]
fn concurrent_validation_shares_one_engine() {
    let engine = Arc::new(RuleEngine::default());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let record = record(json!({"a": i.to_string()}));
                engine.validate("requiredWith", &json!(""), &json!(["a"]), Some(&record))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(true));
    }
}
