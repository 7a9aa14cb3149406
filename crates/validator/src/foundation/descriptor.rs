//! Rule descriptors: the two-phase pretreat → validate contract.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::context::RuleContext;
use super::RuleResult;
use super::error::RuleError;

/// Resolves raw options against the record. Never sees the value.
pub type PretreatFn = dyn Fn(&Value, &RuleContext<'_>) -> Result<Value, RuleError> + Send + Sync;

/// Applies resolved options to the value. Never sees the record.
pub type ValidateFn = dyn Fn(&Value, &Value) -> RuleResult + Send + Sync;

/// A registered rule.
///
/// `validate` is mandatory. `pretreat` is present only for rules whose
/// options depend on the record or on engine defaults; without it the raw
/// options reach `validate` untouched.
///
/// # Examples
///
/// ```
/// use rulekit_validator::foundation::RuleDescriptor;
/// use serde_json::json;
///
/// let non_blank = RuleDescriptor::new(|value, _options| {
///     Ok(value.as_str().is_some_and(|s| !s.trim().is_empty()))
/// });
/// assert!(!non_blank.has_pretreat());
/// assert_eq!(non_blank.validate(&json!("  "), &json!(null)), Ok(false));
/// ```
#[derive(Clone)]
pub struct RuleDescriptor {
    pretreat: Option<Arc<PretreatFn>>,
    validate: Arc<ValidateFn>,
}

impl RuleDescriptor {
    /// Creates a validate-only descriptor.
    pub fn new<V>(validate: V) -> Self
    where
        V: Fn(&Value, &Value) -> RuleResult + Send + Sync + 'static,
    {
        Self {
            pretreat: None,
            validate: Arc::new(validate),
        }
    }

    /// Adds a pretreat stage.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_pretreat<P>(mut self, pretreat: P) -> Self
    where
        P: Fn(&Value, &RuleContext<'_>) -> Result<Value, RuleError> + Send + Sync + 'static,
    {
        self.pretreat = Some(Arc::new(pretreat));
        self
    }

    /// Returns true if the rule resolves its options before validating.
    #[must_use]
    pub fn has_pretreat(&self) -> bool {
        self.pretreat.is_some()
    }

    /// Runs the pretreat stage, or passes the options through unchanged.
    pub fn pretreat(&self, options: &Value, ctx: &RuleContext<'_>) -> Result<Value, RuleError> {
        match &self.pretreat {
            Some(pretreat) => pretreat(options, ctx),
            None => Ok(options.clone()),
        }
    }

    /// Runs the validate stage against already-resolved options.
    pub fn validate(&self, value: &Value, resolved: &Value) -> RuleResult {
        (self.validate)(value, resolved)
    }

    /// Pretreat, then validate.
    pub fn run(&self, value: &Value, options: &Value, ctx: &RuleContext<'_>) -> RuleResult {
        let resolved = self.pretreat(options, ctx)?;
        self.validate(value, &resolved)
    }
}

impl fmt::Debug for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDescriptor")
            .field("has_pretreat", &self.has_pretreat())
            .finish_non_exhaustive()
    }
}
