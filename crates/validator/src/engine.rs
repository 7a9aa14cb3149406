//! Rule engine: the public entry point.
//!
//! An engine pairs a [`RuleRegistry`] with the [`Settings`] and [`Clock`]
//! pretreat may consult. Validation is lookup, then pretreat, then validate:
//!
//! ```
//! use rulekit_validator::engine::RuleEngine;
//! use serde_json::json;
//!
//! let engine = RuleEngine::default();
//! let record = json!({"password": "x", "password_confirm": ""});
//! let record = record.as_object().unwrap();
//!
//! // `password` resolves to the record value "x", which is in ["x"].
//! let required = engine
//!     .validate("requiredIf", &json!(""), &json!(["password", "x"]), Some(record))
//!     .unwrap();
//! assert!(required);
//!
//! assert!(engine.validate("nope", &json!(1), &json!(null), None).is_err());
//! ```

use std::sync::{Arc, LazyLock};

use serde_json::Value;
use tracing::{debug, trace, trace_span};

use crate::config::EngineConfig;
use crate::foundation::{
    Clock, LocalClock, Record, RuleContext, RuleError, RuleResult, Settings, empty_record,
};
use crate::registry::{RuleRegistry, default_registry};

static DEFAULT_ENGINE: LazyLock<RuleEngine> = LazyLock::new(RuleEngine::default);

/// Validates `value` against a built-in rule using the default engine.
///
/// # Errors
///
/// See [`RuleEngine::validate`].
pub fn validate(
    rule: &str,
    value: &Value,
    options: &Value,
    record: Option<&Record>,
) -> RuleResult {
    DEFAULT_ENGINE.validate(rule, value, options, record)
}

/// Dispatches rules by name.
///
/// Cheap to clone: the registry and clock are shared.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    registry: Arc<RuleRegistry>,
    settings: Settings,
    clock: Arc<dyn Clock>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RuleEngine {
    /// Creates a builder starting from the built-in registry, default
    /// settings and the local clock.
    #[must_use]
    pub fn builder() -> RuleEngineBuilder {
        RuleEngineBuilder::new()
    }

    /// Creates an engine over the built-in registry from a configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::builder()
            .settings(config.settings())
            .clock(config.clock.clock())
            .build()
    }

    /// The registry rules are looked up in.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// The settings pretreat sees.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolves a rule's options against a record without validating.
    ///
    /// Rules without a pretreat stage return the options unchanged.
    ///
    /// # Errors
    ///
    /// [`RuleError::UnknownRule`] or [`RuleError::InvalidOptionShape`].
    pub fn pretreat(
        &self,
        rule: &str,
        options: &Value,
        record: Option<&Record>,
    ) -> Result<Value, RuleError> {
        let descriptor = self.registry.lookup(rule)?;
        descriptor.pretreat(options, &self.context(record))
    }

    /// Validates `value` against `rule`.
    ///
    /// A value that merely fails the rule is `Ok(false)`.
    ///
    /// # Errors
    ///
    /// [`RuleError::UnknownRule`] if `rule` is not registered, or
    /// [`RuleError::InvalidOptionShape`] if `options` break its contract.
    pub fn validate(
        &self,
        rule: &str,
        value: &Value,
        options: &Value,
        record: Option<&Record>,
    ) -> RuleResult {
        let span = trace_span!("rule.validate", rule);
        let _guard = span.enter();

        let outcome = self
            .registry
            .lookup(rule)
            .and_then(|descriptor| descriptor.run(value, options, &self.context(record)));

        match &outcome {
            Ok(valid) => trace!(valid, "rule evaluated"),
            Err(error) => debug!(code = error.code(), %error, "rule rejected"),
        }
        outcome
    }

    fn context<'a>(&'a self, record: Option<&'a Record>) -> RuleContext<'a> {
        RuleContext::new(
            record.unwrap_or(empty_record()),
            &self.settings,
            self.clock.as_ref(),
        )
    }
}

/// Builder for [`RuleEngine`].
#[derive(Debug)]
pub struct RuleEngineBuilder {
    registry: Arc<RuleRegistry>,
    settings: Settings,
    clock: Arc<dyn Clock>,
}

impl Default for RuleEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngineBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: default_registry(),
            settings: Settings::default(),
            clock: Arc::new(LocalClock),
        }
    }

    /// Replaces the registry.
    #[must_use = "builder methods must be chained or built"]
    pub fn registry(mut self, registry: impl Into<Arc<RuleRegistry>>) -> Self {
        self.registry = registry.into();
        self
    }

    /// Replaces the settings.
    #[must_use = "builder methods must be chained or built"]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Replaces the clock.
    #[must_use = "builder methods must be chained or built"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> RuleEngine {
        RuleEngine {
            registry: self.registry,
            settings: self.settings,
            clock: self.clock,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
