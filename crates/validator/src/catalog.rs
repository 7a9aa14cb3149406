//! Message catalog.
//!
//! Rules only return booleans and errors only carry codes. Turning either
//! into text is the caller's job; this module provides the lookup interface
//! and an English default.
//!
//! Templates use two placeholders:
//!
//! - `{name}`: the field being validated
//! - `{args}`: the rule's options, rendered as text
//!
//! ```
//! use rulekit_validator::catalog::{DefaultCatalog, render};
//! use serde_json::json;
//!
//! let message = render(&DefaultCatalog, "length", "username", &json!({"min": 3}));
//! assert_eq!(message, r#"username's length should match {"min":3}"#);
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value;

use crate::foundation::{RuleError, to_comparable_string};

/// Template used when a catalog has no entry for a key.
pub const FALLBACK_TEMPLATE: &str = "{name} is not valid";

/// Keyed lookup of message templates.
pub trait MessageCatalog {
    /// The template for a rule name or error code, if known.
    fn template(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl MessageCatalog for HashMap<String, String> {
    fn template(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|template| Cow::Borrowed(template.as_str()))
    }
}

/// English templates for every built-in rule and error code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultCatalog;

impl DefaultCatalog {
    fn lookup(key: &str) -> Option<&'static str> {
        let template = match key {
            // Error codes
            "unknown_rule" => "no rule named {args} is registered",
            "invalid_option_shape" => "options for {name} should be {args}",

            // Dependent
            "requiredIf" | "requiredNotIf" | "requiredWith" | "requiredWithAll"
            | "requiredWithOut" | "requiredWithOutAll" | "required" => "{name} is required",

            // Comparison
            "contains" => "{name} should contain {args}",
            "equals" => "{name} should equal {args}",
            "different" => "{name} should differ from {args}",
            "before" => "{name} should be before {args}",
            "after" => "{name} should be after {args}",

            // Types
            "string" => "{name} should be a string",
            "array" => "{name} should be an array",
            "boolean" => "{name} should be a boolean",
            "object" => "{name} should be an object",
            "in" => "{name} should be one of {args}",
            "notIn" => "{name} should not be one of {args}",
            "startWith" => "{name} should start with {args}",
            "endWith" => "{name} should end with {args}",
            "regexp" => "{name} should match {args}",
            "order" => "{name} is not a valid order clause",
            "field" => "{name} is not a valid field list",
            "image" => "{name} should be an image file",

            // Character classes
            "alpha" => "{name} should contain only letters",
            "alphaDash" => "{name} should contain only letters and underscores",
            "alphaNumeric" => "{name} should contain only letters and digits",
            "alphaNumericDash" => "{name} should contain only letters, digits and underscores",
            "ascii" => "{name} should contain only ASCII characters",
            "lowercase" => "{name} should be lowercase",
            "uppercase" => "{name} should be uppercase",
            "fullWidth" => "{name} should contain full-width characters",
            "halfWidth" => "{name} should contain half-width characters",
            "variableWidth" => "{name} should mix full-width and half-width characters",
            "multibyte" => "{name} should contain multibyte characters",

            // Length and encodings
            "length" => "{name}'s length should match {args}",
            "byteLength" => "{name}'s byte length should match {args}",
            "hex" => "{name} should be hexadecimal",
            "hexColor" => "{name} should be a hex color",
            "base64" => "{name} should be base64 encoded",
            "dataURI" => "{name} should be a data URI",

            // Numbers
            "int" => "{name} should be an integer",
            "float" => "{name} should be a number",
            "decimal" => "{name} should be a decimal number",
            "numeric" => "{name} should contain only digits",
            "divisibleBy" => "{name} should be divisible by {args}",
            "currency" => "{name} should be a currency amount",

            // Network
            "email" => "{name} should be an email address",
            "url" => "{name} should be a URL",
            "fqdn" => "{name} should be a fully qualified domain name",
            "ip" => "{name} should be an IP address",
            "ip4" => "{name} should be an IPv4 address",
            "ip6" => "{name} should be an IPv6 address",
            "macAddress" => "{name} should be a MAC address",

            // Identifiers
            "creditCard" => "{name} should be a credit card number",
            "isbn" => "{name} should be an ISBN",
            "isin" => "{name} should be an ISIN",
            "issn" => "{name} should be an ISSN",
            "uuid" => "{name} should be a UUID",
            "md5" => "{name} should be an MD5 hash",
            "mongoId" => "{name} should be a MongoDB ObjectId",

            // Dates and phones
            "date" => "{name} should be a date",
            "iso8601" => "{name} should be an ISO 8601 date",
            "mobile" => "{name} should be a mobile phone number",

            _ => return None,
        };
        Some(template)
    }
}

impl MessageCatalog for DefaultCatalog {
    fn template(&self, key: &str) -> Option<Cow<'_, str>> {
        Self::lookup(key).map(Cow::Borrowed)
    }
}

/// Renders options for the `{args}` placeholder.
///
/// Scalars use their comparable string form, arrays are joined with `", "`,
/// objects are shown as compact JSON.
#[must_use]
pub fn render_args(options: &Value) -> String {
    match options {
        Value::Array(items) => items
            .iter()
            .map(to_comparable_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => options.to_string(),
        _ => to_comparable_string(options),
    }
}

/// Renders the message for `key`, falling back to [`FALLBACK_TEMPLATE`].
#[must_use]
pub fn render(catalog: &impl MessageCatalog, key: &str, field: &str, options: &Value) -> String {
    let template = catalog
        .template(key)
        .unwrap_or(Cow::Borrowed(FALLBACK_TEMPLATE));
    template
        .replace("{name}", field)
        .replace("{args}", &render_args(options))
}

/// Renders a rule error through its code's template.
#[must_use]
pub fn render_error(catalog: &impl MessageCatalog, error: &RuleError) -> String {
    match error {
        RuleError::UnknownRule { name } => {
            render(catalog, error.code(), "", &Value::String(name.clone()))
        }
        RuleError::InvalidOptionShape { rule, expected } => render(
            catalog,
            error.code(),
            rule,
            &Value::String(expected.to_string()),
        ),
    }
}

// ============================================================================
// TESTS
// ============================================================================
