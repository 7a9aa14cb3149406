//! Basic usage example for rulekit-validator

use rulekit_validator::catalog::{DefaultCatalog, render, render_error};
use rulekit_validator::validate;
use serde_json::json;

fn main() {
    let signup = json!({
        "email": "jane@example.com",
        "password": "hunter2",
        "password_confirm": "hunter3",
    });
    let record = signup.as_object();

    let checks = [
        ("email", "email", json!(true)),
        ("password", "length", json!({"min": 8})),
        ("password_confirm", "equals", json!("password")),
        ("password_confirm", "requiredWith", json!(["password"])),
    ];

    for (field, rule, options) in checks {
        let value = &signup[field];
        match validate(rule, value, &options, record) {
            Ok(true) => println!("✓ {field} passes {rule}"),
            Ok(false) => println!("✗ {}", render(&DefaultCatalog, rule, field, &options)),
            Err(e) => println!("! {}", render_error(&DefaultCatalog, &e)),
        }
    }

    // Options that break a rule's contract are errors, not failures.
    if let Err(e) = validate("in", &json!("red"), &json!("red,green"), None) {
        println!("! {}", render_error(&DefaultCatalog, &e));
    }
}
