//! Engine configuration.
//!
//! Loaded from TOML or JSON, then optionally overridden from the
//! environment:
//!
//! | Variable | Field |
//! |---|---|
//! | `RULEKIT_MOBILE_LOCALE` | `default_mobile_locale` |
//! | `RULEKIT_CLOCK` | `clock` (`local` or `utc`) |

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::foundation::{Clock, LocalClock, Settings, UtcClock};
use crate::predicates::is_supported_locale;

/// Environment variable overriding [`EngineConfig::default_mobile_locale`].
pub const ENV_MOBILE_LOCALE: &str = "RULEKIT_MOBILE_LOCALE";
/// Environment variable overriding [`EngineConfig::clock`].
pub const ENV_CLOCK: &str = "RULEKIT_CLOCK";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML input did not parse or had unknown keys.
    #[cfg(feature = "toml")]
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON input did not parse or had unknown keys.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// An environment variable held an unusable value.
    #[error("invalid value `{value}` for {var}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },

    /// The default mobile locale has no phone pattern.
    #[error("unsupported mobile locale `{0}`")]
    UnsupportedLocale(String),
}

/// Which wall clock `before`/`after` read "now" from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// Local time.
    #[default]
    Local,
    /// UTC.
    Utc,
}

impl ClockMode {
    /// Creates the clock this mode selects.
    #[must_use]
    pub fn clock(self) -> Arc<dyn Clock> {
        match self {
            Self::Local => Arc::new(LocalClock),
            Self::Utc => Arc::new(UtcClock),
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Some(Self::Local),
            "utc" => Some(Self::Utc),
            _ => None,
        }
    }
}

/// Engine settings as they appear in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Locale `mobile` uses when given `true`.
    pub default_mobile_locale: String,
    /// Clock for the "now" sentinel.
    pub clock: ClockMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_mobile_locale: Settings::default().default_mobile_locale,
            clock: ClockMode::default(),
        }
    }
}

impl EngineConfig {
    /// Parses TOML.
    ///
    /// # Errors
    ///
    /// Malformed input, unknown keys or an unsupported locale.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validated()
    }

    /// Parses JSON.
    ///
    /// # Errors
    ///
    /// Malformed input, unknown keys or an unsupported locale.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validated()
    }

    /// Applies `RULEKIT_*` environment overrides.
    ///
    /// # Errors
    ///
    /// An override holding an unusable value.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Applies overrides from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// An override holding an unusable value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup(ENV_MOBILE_LOCALE) {
            if !is_supported_locale(&locale) {
                return Err(ConfigError::InvalidEnv {
                    var: ENV_MOBILE_LOCALE,
                    value: locale,
                });
            }
            self.default_mobile_locale = locale;
        }

        if let Some(value) = lookup(ENV_CLOCK) {
            self.clock = ClockMode::parse(&value).ok_or(ConfigError::InvalidEnv {
                var: ENV_CLOCK,
                value,
            })?;
        }

        Ok(self)
    }

    /// The rule-visible part of the configuration.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            default_mobile_locale: self.default_mobile_locale.clone(),
        }
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if is_supported_locale(&self.default_mobile_locale) {
            Ok(self)
        } else {
            Err(ConfigError::UnsupportedLocale(self.default_mobile_locale))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
