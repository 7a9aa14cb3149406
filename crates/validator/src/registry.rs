//! Rule registry: name → descriptor.
//!
//! Built once, then shared read-only. A registry is plain data, so callers
//! that need a custom catalog build their own and hand it to
//! [`RuleEngine::builder`](crate::engine::RuleEngine::builder).

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use tracing::{debug, warn};

use crate::foundation::{RuleDescriptor, RuleError};
use crate::rules;

static DEFAULT_REGISTRY: LazyLock<Arc<RuleRegistry>> =
    LazyLock::new(|| Arc::new(RuleRegistry::builtin()));

/// The process-wide built-in registry, initialised on first use.
#[must_use]
pub fn default_registry() -> Arc<RuleRegistry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

/// Mapping from rule name to descriptor.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, RuleDescriptor>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the full built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        rules::install(&mut registry);
        debug!(rules = registry.len(), "built-in rule catalog registered");
        registry
    }

    /// Inserts a rule, replacing any existing rule of the same name.
    ///
    /// Returns the replaced descriptor, if any.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        descriptor: RuleDescriptor,
    ) -> Option<RuleDescriptor> {
        let name = name.into();
        let previous = self.rules.insert(name.clone(), descriptor);
        if previous.is_some() {
            warn!(rule = %name, "rule overwritten");
        } else {
            debug!(rule = %name, "rule registered");
        }
        previous
    }

    /// Looks a rule up by name.
    ///
    /// # Errors
    ///
    /// [`RuleError::UnknownRule`] if nothing is registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&RuleDescriptor, RuleError> {
        self.rules
            .get(name)
            .ok_or_else(|| RuleError::unknown_rule(name))
    }

    /// Returns true if a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
