//! Prelude module for convenient imports.
//!
//! Provides a single `use rulekit_validator::prelude::*;` import that brings
//! in the engine, the descriptor types and the value helpers custom rules
//! are written with.
//!
//! # Examples
//!
//! ```rust
//! use rulekit_validator::prelude::*;
//! use serde_json::json;
//!
//! let mut registry = RuleRegistry::builtin();
//! registry.register("slug", string_rule!(v => !v.is_empty() && v.chars().all(|c| c.is_ascii_lowercase() || c == '-')));
//!
//! let engine = RuleEngine::builder().registry(registry).build();
//! assert_eq!(engine.validate("slug", &json!("hello-world"), &json!(null), None), Ok(true));
//! ```

// ============================================================================
// FOUNDATION: Descriptors, context, errors, value helpers
// ============================================================================

pub use crate::foundation::{
    Clock, FixedClock, LocalClock, OptionShape, Record, RuleContext, RuleDescriptor, RuleError,
    RuleResult, Settings, UtcClock, coerce, is_true_empty, strict_equals, to_comparable_string,
};

// ============================================================================
// ENGINE: Dispatch and registry
// ============================================================================

pub use crate::engine::{RuleEngine, RuleEngineBuilder, validate};
pub use crate::registry::{RuleRegistry, default_registry};

// ============================================================================
// SUPPORT: Configuration and messages
// ============================================================================

pub use crate::catalog::{DefaultCatalog, MessageCatalog, render, render_error};
pub use crate::config::{ClockMode, ConfigError, EngineConfig};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::string_rule;
