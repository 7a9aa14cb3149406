//! Built-in rule catalog
//!
//! Every rule is a [`RuleDescriptor`](crate::foundation::RuleDescriptor)
//! registered under its name by [`RuleRegistry::builtin`].
//!
//! # Families
//!
//! - **Dependent**: `requiredIf`, `requiredNotIf`, `requiredWith`,
//!   `requiredWithAll`, `requiredWithOut`, `requiredWithOutAll`
//! - **Comparison**: `contains`, `equals`, `different`, `before`, `after`
//! - **Format**: string predicates such as `email`, `url`, `int`, `length`
//! - **Types**: `required`, JSON types, membership, affixes, `regexp`
//!
//! Dependent and comparison rules carry a pretreat stage; format and type
//! rules are validate-only, except `mobile`, whose `true` option resolves to
//! the engine's default locale.

mod comparison;
mod dependent;
mod format;
mod types;

use crate::registry::RuleRegistry;

/// Registers the full catalog.
pub(crate) fn install(registry: &mut RuleRegistry) {
    types::install(registry);
    dependent::install(registry);
    comparison::install(registry);
    format::install(registry);
}
