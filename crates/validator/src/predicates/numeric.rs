//! Numeric string predicates: integers, floats, decimals and currency.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

static INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-+]?(?:0|[1-9][0-9]*)$").unwrap());
static INT_LEADING_ZEROES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());
static FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:[0-9]+)?(?:\.[0-9]*)?(?:[eE][-+]?[0-9]+)?$").unwrap()
});
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(?:[0-9]+)?(?:\.[0-9]+)?$").unwrap());
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());

// ============================================================================
// BOUNDS
// ============================================================================

/// Range bounds shared by [`is_int`] and [`is_float`].
///
/// `min`/`max` are inclusive, `gt`/`lt` exclusive. Absent bounds never fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumberBounds {
    /// Inclusive lower bound.
    pub min: Option<f64>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
    /// Exclusive lower bound.
    pub gt: Option<f64>,
    /// Exclusive upper bound.
    pub lt: Option<f64>,
}

impl NumberBounds {
    fn admits(&self, n: f64) -> bool {
        self.min.is_none_or(|min| n >= min)
            && self.max.is_none_or(|max| n <= max)
            && self.gt.is_none_or(|gt| n > gt)
            && self.lt.is_none_or(|lt| n < lt)
    }
}

/// Options for [`is_int`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct IntOptions {
    /// Value bounds.
    #[serde(flatten)]
    pub bounds: NumberBounds,
    /// Accept `007`.
    pub allow_leading_zeroes: bool,
}

impl Default for IntOptions {
    fn default() -> Self {
        Self {
            bounds: NumberBounds::default(),
            allow_leading_zeroes: true,
        }
    }
}

/// A base-10 integer within bounds.
pub fn is_int(input: &str, options: IntOptions) -> bool {
    let pattern = if options.allow_leading_zeroes {
        &*INT_LEADING_ZEROES
    } else {
        &*INT
    };
    pattern.is_match(input)
        && input
            .parse::<f64>()
            .is_ok_and(|n| options.bounds.admits(n))
}

/// A floating-point number within bounds.
pub fn is_float(input: &str, bounds: NumberBounds) -> bool {
    parse_float(input).is_some_and(|n| bounds.admits(n))
}

/// Parses the strings [`is_float`] accepts.
pub fn parse_float(input: &str) -> Option<f64> {
    if matches!(input, "" | "." | "-" | "+") || !FLOAT.is_match(input) {
        return None;
    }
    input.parse::<f64>().ok()
}

/// A signed decimal number.
pub fn is_decimal(input: &str) -> bool {
    !matches!(input, "" | "-" | "+") && DECIMAL.is_match(input)
}

/// Signed integer digits; leading zeroes allowed.
pub fn is_numeric(input: &str) -> bool {
    NUMERIC.is_match(input)
}

/// The float value of `input` is an exact multiple of the integer part of
/// `divisor`. A zero divisor never divides.
pub fn is_divisible_by(input: &str, divisor: f64) -> bool {
    let divisor = divisor.trunc();
    if divisor == 0.0 {
        return false;
    }
    parse_float(input).is_some_and(|n| n % divisor == 0.0)
}

// ============================================================================
// CURRENCY
// ============================================================================

/// Options for [`is_currency`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyOptions {
    /// Currency symbol.
    pub symbol: String,
    /// The symbol must be present.
    pub require_symbol: bool,
    /// Accept one space between symbol and amount.
    pub allow_space_after_symbol: bool,
    /// The symbol follows the amount.
    pub symbol_after_digits: bool,
    /// Accept negative amounts.
    pub allow_negatives: bool,
    /// Negative amounts are written `(1.00)` rather than `-1.00`.
    pub parens_for_negatives: bool,
    /// Accept one space between amount and a trailing symbol.
    pub allow_space_after_digits: bool,
    /// Thousands group separator.
    pub thousands_separator: String,
    /// Decimal separator.
    pub decimal_separator: String,
    /// Accept a fractional part.
    pub allow_decimal: bool,
    /// The fractional part is mandatory.
    pub require_decimal: bool,
    /// Accepted fractional digit counts.
    pub digits_after_decimal: Vec<u8>,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            symbol: "$".into(),
            require_symbol: false,
            allow_space_after_symbol: false,
            symbol_after_digits: false,
            allow_negatives: true,
            parens_for_negatives: false,
            allow_space_after_digits: false,
            thousands_separator: ",".into(),
            decimal_separator: ".".into(),
            allow_decimal: true,
            require_decimal: false,
            digits_after_decimal: vec![2],
        }
    }
}

impl CurrencyOptions {
    fn pattern(&self) -> Option<String> {
        let thousands = regex::escape(&self.thousands_separator);
        let whole = format!(r"(?:0|[1-9]\d{{0,2}}(?:{thousands}\d{{3}})*|[1-9]\d*)");

        let amount = if self.allow_decimal && !self.digits_after_decimal.is_empty() {
            let places = self
                .digits_after_decimal
                .iter()
                .map(|n| format!(r"\d{{{n}}}"))
                .collect::<Vec<_>>()
                .join("|");
            let fraction = format!("(?:{}(?:{places}))", regex::escape(&self.decimal_separator));
            let quantifier = if self.require_decimal { "" } else { "?" };
            format!("{whole}{fraction}{quantifier}")
        } else if self.require_decimal {
            return None;
        } else {
            whole
        };

        let symbol = regex::escape(&self.symbol);
        let body = if self.symbol_after_digits {
            let gap = if self.allow_space_after_digits { " ?" } else { "" };
            let suffix = if self.require_symbol {
                format!("{gap}{symbol}")
            } else {
                format!("(?:{gap}{symbol})?")
            };
            format!("{amount}{suffix}")
        } else {
            let gap = if self.allow_space_after_symbol { " ?" } else { "" };
            let prefix = if self.require_symbol {
                format!("{symbol}{gap}")
            } else {
                format!("(?:{symbol}{gap})?")
            };
            format!("{prefix}{amount}")
        };

        let signed = match (self.allow_negatives, self.parens_for_negatives) {
            (false, _) => body,
            (true, false) => format!("-?{body}"),
            (true, true) => format!(r"(?:{body}|\({body}\))"),
        };
        Some(format!("^{signed}$"))
    }
}

/// A currency amount.
pub fn is_currency(input: &str, options: &CurrencyOptions) -> bool {
    options
        .pattern()
        .and_then(|pattern| Regex::new(&pattern).ok())
        .is_some_and(|re| re.is_match(input))
}

// ============================================================================
// TESTS
// ============================================================================
