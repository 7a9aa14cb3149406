//! Error types for rule dispatch and option-shape contracts.
//!
//! A rule that runs and decides the value is invalid returns `Ok(false)`.
//! The errors here are caller errors: an unknown rule name, or options that
//! break the rule's declared contract. Neither is retried or recovered at
//! this layer.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// OPTION SHAPE
// ============================================================================

/// The option contract a rule declares.
///
/// Carried by [`RuleError::InvalidOptionShape`] so callers can report what
/// the rule expected without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionShape {
    /// An ordered sequence (`[...]`).
    Array,
    /// A mapping (`{...}`).
    Object,
    /// A mapping or the literal `true`.
    ObjectOrTrue,
    /// A boolean flag.
    Boolean,
    /// A parseable date string or the literal `true` ("now").
    DateOrTrue,
    /// A scalar naming a record field or used literally.
    FieldOrLiteral,
    /// A number or numeric string.
    Number,
    /// A string.
    String,
    /// A compilable regular expression.
    Regex,
    /// A supported mobile locale or the literal `true`.
    LocaleOrTrue,
}

impl OptionShape {
    /// Human-readable description of the contract.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Object => "object",
            Self::ObjectOrTrue => "object or true",
            Self::Boolean => "boolean",
            Self::DateOrTrue => "date string or true",
            Self::FieldOrLiteral => "field name or literal scalar",
            Self::Number => "number",
            Self::String => "string",
            Self::Regex => "regular expression",
            Self::LocaleOrTrue => "supported locale or true",
        }
    }
}

impl fmt::Display for OptionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

// ============================================================================
// RULE ERROR
// ============================================================================

/// Errors raised while dispatching or preparing a rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// No rule is registered under this name.
    #[error("unknown rule `{name}`")]
    UnknownRule {
        /// The name that was looked up.
        name: String,
    },

    /// The options given to a rule violate its declared contract.
    #[error("{rule}'s options should be {expected}")]
    InvalidOptionShape {
        /// Rule whose contract was violated.
        rule: Cow<'static, str>,
        /// The contract the rule declares.
        expected: OptionShape,
    },
}

impl RuleError {
    /// Creates an `UnknownRule` error.
    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }

    /// Creates an `InvalidOptionShape` error.
    pub fn invalid_shape(rule: impl Into<Cow<'static, str>>, expected: OptionShape) -> Self {
        Self::InvalidOptionShape {
            rule: rule.into(),
            expected,
        }
    }

    /// Stable identifier used to key message catalogs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownRule { .. } => "unknown_rule",
            Self::InvalidOptionShape { .. } => "invalid_option_shape",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
