//! Core rule types and helpers
//!
//! This module contains the building blocks every rule is made of:
//!
//! - **Descriptors**: [`RuleDescriptor`], an optional pretreat stage plus a
//!   mandatory validate stage
//! - **Context**: [`RuleContext`], [`Record`], [`Clock`], what pretreat may read
//! - **Errors**: [`RuleError`], [`OptionShape`]
//! - **Values**: type guards, the uniform emptiness check, string coercion
//!
//! # Architecture
//!
//! ## 1. Two phases
//!
//! Pretreat consumes raw options and the record; validate consumes the
//! field value and the resolved options. Neither crosses into the other's
//! inputs:
//!
//! ```text
//! raw options ─┐
//!              ├─ pretreat ─> resolved options ─┐
//! record ──────┘                                ├─ validate ─> bool
//! value ────────────────────────────────────────┘
//! ```
//!
//! ## 2. Fail-fast contracts
//!
//! Option-shape violations are `Err(RuleError::InvalidOptionShape)`, never
//! `Ok(false)`. A value that merely fails a rule is `Ok(false)`.
//!
//! # Examples
//!
//! ```
//! use rulekit_validator::foundation::{Record, RuleContext, Settings, LocalClock};
//! use serde_json::json;
//!
//! let mut record = Record::new();
//! record.insert("password".into(), json!("x"));
//!
//! let settings = Settings::default();
//! let ctx = RuleContext::new(&record, &settings, &LocalClock);
//! assert_eq!(ctx.resolve_or_literal(&json!("password")), json!("x"));
//! assert_eq!(ctx.resolve_or_literal(&json!("other")), json!("other"));
//! ```

pub mod context;
pub mod descriptor;
pub mod error;
pub mod value;

pub use context::{
    Clock, FixedClock, LocalClock, Record, RuleContext, Settings, UtcClock, empty_record,
};
pub use descriptor::{PretreatFn, RuleDescriptor, ValidateFn};
pub use error::{OptionShape, RuleError};
pub use value::{
    coerce, is_array, is_boolean, is_literal_true, is_object, is_string, is_true_empty,
    strict_equals, to_comparable_string,
};

/// A rule outcome: `Ok(pass)` or a caller error.
pub type RuleResult = Result<bool, RuleError>;
