//! Macros for declaring string rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`string_rule!`]: build a [`RuleDescriptor`](crate::foundation::RuleDescriptor)
//!   whose value is coerced to a string before the predicate runs
//!
//! # Examples
//!
//! ```
//! use rulekit_validator::string_rule;
//! use rulekit_validator::predicates::{is_email, EmailOptions};
//! use serde_json::json;
//!
//! // Options ignored
//! let shouty = string_rule!(value => value.chars().all(|c| !c.is_lowercase()));
//! assert_eq!(shouty.validate(&json!("OK"), &json!(null)), Ok(true));
//!
//! // Options deserialized from an object, or defaulted from `true`
//! let email = string_rule!(value, opts: EmailOptions = object_or_true("email") => is_email(value, opts));
//! assert_eq!(email.validate(&json!("a@example.com"), &json!(true)), Ok(true));
//! assert!(email.validate(&json!("a@example.com"), &json!("yes")).is_err());
//! ```

// ============================================================================
// STRING RULE MACRO
// ============================================================================

/// Creates a validate-only [`RuleDescriptor`](crate::foundation::RuleDescriptor)
/// over the coerced string form of the value.
///
/// # Variants
///
/// **Options ignored**:
/// ```rust,ignore
/// string_rule!(value => is_alpha(value))
/// ```
///
/// **Options as an object** (`{...}` only):
/// ```rust,ignore
/// string_rule!(value, opts: LengthOptions = object("length") => is_length(value, opts))
/// ```
///
/// **Options as an object or `true`** (`true` or `null` means all defaults):
/// ```rust,ignore
/// string_rule!(value, opts: IntOptions = object_or_true("int") => is_int(value, opts))
/// ```
///
/// In every variant the option contract is checked before the predicate
/// runs, so a bad option fails even when the value would not match anyway.
#[macro_export]
macro_rules! string_rule {
    // ── Variant 1: options ignored ───────────────────────────────────────
    ($value:ident => $body:expr) => {
        $crate::foundation::RuleDescriptor::new(|value, _options| {
            let coerced = $crate::foundation::coerce(value);
            let $value: &str = coerced.as_ref();
            Ok($body)
        })
    };

    // ── Variant 2: options deserialized from an object ───────────────────
    ($value:ident, $opts:ident : $ty:ty = object($rule:literal) => $body:expr) => {
        $crate::foundation::RuleDescriptor::new(|value, options| {
            let $opts: $ty = $crate::foundation::value::expect_object($rule, options)?;
            let coerced = $crate::foundation::coerce(value);
            let $value: &str = coerced.as_ref();
            Ok($body)
        })
    };

    // ── Variant 3: options deserialized from an object, or `true` ────────
    ($value:ident, $opts:ident : $ty:ty = object_or_true($rule:literal) => $body:expr) => {
        $crate::foundation::RuleDescriptor::new(|value, options| {
            let $opts: $ty = $crate::foundation::value::expect_object_or_true($rule, options)?;
            let coerced = $crate::foundation::coerce(value);
            let $value: &str = coerced.as_ref();
            Ok($body)
        })
    };
}
