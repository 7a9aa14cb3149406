//! The read-only context handed to a rule's pretreat stage.
//!
//! Pretreat sees the record being validated, the engine settings and a
//! clock. It never sees the value under validation, and validate never sees
//! any of this.

use std::fmt;
use std::sync::LazyLock;

use chrono::{FixedOffset, Local, NaiveDateTime, Utc};
use serde_json::Value;

use super::value::{field_key, is_true_empty};

/// The object under validation: field name to arbitrary value.
pub type Record = serde_json::Map<String, Value>;

static EMPTY_RECORD: LazyLock<Record> = LazyLock::new(Record::new);

/// A shared empty record, used when the caller supplies none.
#[must_use]
pub fn empty_record() -> &'static Record {
    &EMPTY_RECORD
}

// ============================================================================
// CLOCK
// ============================================================================

/// Source of "now" for rules whose options default to the current time.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// The offset [`now`](Clock::now) is expressed in; `None` means local time.
    fn offset(&self) -> Option<FixedOffset> {
        None
    }
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// UTC wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    fn offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(0)
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

// ============================================================================
// SETTINGS
// ============================================================================

/// Engine-wide defaults that pretreat may substitute for sentinel options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Locale used when `mobile` is given `true`.
    pub default_mobile_locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_mobile_locale: "zh-CN".to_owned(),
        }
    }
}

// ============================================================================
// RULE CONTEXT
// ============================================================================

/// Everything pretreat may read.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    record: &'a Record,
    settings: &'a Settings,
    clock: &'a dyn Clock,
}

impl<'a> RuleContext<'a> {
    /// Creates a context over a record.
    #[must_use]
    pub fn new(record: &'a Record, settings: &'a Settings, clock: &'a dyn Clock) -> Self {
        Self {
            record,
            settings,
            clock,
        }
    }

    /// The record being validated.
    #[must_use]
    pub fn record(&self) -> &'a Record {
        self.record
    }

    /// Engine settings.
    #[must_use]
    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Current time from the engine clock.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Offset of [`now`](Self::now), or `None` for local time.
    #[must_use]
    pub fn clock_offset(&self) -> Option<FixedOffset> {
        self.clock.offset()
    }

    /// The non-empty record value the option names, if any.
    #[must_use]
    pub fn non_empty_field(&self, option: &Value) -> Option<&'a Value> {
        let key = field_key(option)?;
        let value = self.record.get(key.as_ref());
        if is_true_empty(value) { None } else { value }
    }

    /// Substitutes the named field's value, or keeps the option itself.
    #[must_use]
    pub fn resolve_or_literal(&self, option: &Value) -> Value {
        self.non_empty_field(option)
            .cloned()
            .unwrap_or_else(|| option.clone())
    }

    /// Substitutes the named field's value, or `""` when it is empty or absent.
    #[must_use]
    pub fn resolve_or_empty(&self, option: &Value) -> Value {
        self.non_empty_field(option)
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
