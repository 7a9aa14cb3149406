//! # rulekit-validator
//!
//! Named-rule field validation. A caller names a rule, hands over a value,
//! the rule's options and optionally the whole record, and gets back a
//! boolean.
//!
//! ## Quick Start
//!
//! ```rust
//! use rulekit_validator::prelude::*;
//! use serde_json::json;
//!
//! assert_eq!(validate("email", &json!("user@example.com"), &json!(null), None), Ok(true));
//! assert_eq!(validate("length", &json!("a"), &json!({"min": 2}), None), Ok(false));
//! ```
//!
//! ## Two stages
//!
//! Every rule is a [`RuleDescriptor`](foundation::RuleDescriptor):
//!
//! - **pretreat** resolves raw options against the [`Record`](foundation::Record),
//!   replacing field names with sibling values and sentinels like `true`
//!   with engine defaults
//! - **validate** is a pure check of the value against resolved options
//!
//! Rules that need no resolution skip pretreat and see the raw options.
//!
//! ## Dependent fields
//!
//! ```rust
//! use rulekit_validator::prelude::*;
//! use serde_json::json;
//!
//! let record = json!({"a": "", "b": "", "c": "1"});
//! let record = record.as_object();
//!
//! // Some sibling is empty, so `c` is required.
//! assert_eq!(validate("requiredWithOut", &json!("1"), &json!(["a", "b"]), record), Ok(true));
//! ```
//!
//! ## Errors
//!
//! A value that fails a rule is `Ok(false)`. [`RuleError`](foundation::RuleError)
//! is reserved for caller mistakes: an unknown rule name, or options that
//! break the rule's contract.
//!
//! ## Modules
//!
//! - [`foundation`]: value model, descriptors, context, errors
//! - [`predicates`]: the string predicate library
//! - [`registry`]: name to descriptor mapping and the built-in catalog
//! - [`engine`]: dispatch, pretreat and validate
//! - [`catalog`]: message templates
//! - [`config`]: engine configuration

pub mod catalog;
pub mod config;
pub mod engine;
pub mod foundation;
mod macros;
pub mod predicates;
pub mod prelude;
pub mod registry;
mod rules;

pub use engine::{RuleEngine, validate};
pub use registry::RuleRegistry;
