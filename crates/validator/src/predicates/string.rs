//! Character-class, case, width, encoding and list-shape predicates.

use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use serde::Deserialize;

static ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
static ALPHA_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_]+$").unwrap());
static ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());
static ALPHANUMERIC_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());
static HEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]+$").unwrap());
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap());
static DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*data:(?:[a-z]+/[a-z0-9\-+.]+(?:;[a-z\-]+=[a-z0-9\-]+)*)?(?:;base64)?,[a-z0-9!$&',()*+;=\-._~:@/?%\s]*\s*$",
    )
    .unwrap()
});
static LIST_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());
static ORDER_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Za-z0-9_]+\s+(?:ASC|DESC)$").unwrap());
static FIELD_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());
static IMAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(?:jpeg|jpg|png|bmp|gif|svg)$").unwrap());

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

/// ASCII letters only.
pub fn is_alpha(input: &str) -> bool {
    ALPHA.is_match(input)
}

/// ASCII letters and `_`. Digits are not accepted.
pub fn is_alpha_dash(input: &str) -> bool {
    ALPHA_DASH.is_match(input)
}

/// ASCII letters and digits.
pub fn is_alphanumeric(input: &str) -> bool {
    ALPHANUMERIC.is_match(input)
}

/// ASCII letters, digits and `_`.
pub fn is_alphanumeric_dash(input: &str) -> bool {
    ALPHANUMERIC_DASH.is_match(input)
}

/// Seven-bit characters only; the empty string is not ASCII text.
pub fn is_ascii(input: &str) -> bool {
    !input.is_empty() && input.is_ascii()
}

/// No uppercase letters.
pub fn is_lowercase(input: &str) -> bool {
    input == input.to_lowercase()
}

/// No lowercase letters.
pub fn is_uppercase(input: &str) -> bool {
    input == input.to_uppercase()
}

// ============================================================================
// WIDTH
// ============================================================================

fn is_half_width_char(c: char) -> bool {
    matches!(
        c,
        '\u{0020}'..='\u{007E}'
            | '\u{FF61}'..='\u{FF9F}'
            | '\u{FFA0}'..='\u{FFDC}'
            | '\u{FFE8}'..='\u{FFEE}'
    )
}

/// Contains at least one full-width character.
pub fn is_full_width(input: &str) -> bool {
    input.chars().any(|c| !is_half_width_char(c))
}

/// Contains at least one half-width character.
pub fn is_half_width(input: &str) -> bool {
    input.chars().any(is_half_width_char)
}

/// Mixes full-width and half-width characters.
pub fn is_variable_width(input: &str) -> bool {
    is_full_width(input) && is_half_width(input)
}

/// Contains at least one non-ASCII character.
pub fn is_multibyte(input: &str) -> bool {
    !input.is_ascii()
}

// ============================================================================
// LENGTH
// ============================================================================

/// `{min?, max?}` bounds for the length rules. `min` defaults to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LengthOptions {
    /// Inclusive lower bound.
    pub min: Option<u64>,
    /// Inclusive upper bound; unbounded when absent.
    pub max: Option<u64>,
}

impl LengthOptions {
    fn admits(self, len: usize) -> bool {
        let len = len as u64;
        len >= self.min.unwrap_or(0) && self.max.is_none_or(|max| len <= max)
    }
}

/// Character count within bounds.
pub fn is_length(input: &str, options: LengthOptions) -> bool {
    options.admits(input.chars().count())
}

/// UTF-8 byte count within bounds.
pub fn is_byte_length(input: &str, options: LengthOptions) -> bool {
    options.admits(input.len())
}

// ============================================================================
// ENCODINGS
// ============================================================================

/// Hexadecimal digits.
pub fn is_hexadecimal(input: &str) -> bool {
    HEX.is_match(input)
}

/// `#abc` or `#aabbcc`, the `#` optional.
pub fn is_hex_color(input: &str) -> bool {
    HEX_COLOR.is_match(input)
}

/// Canonical, padded standard-alphabet base64.
pub fn is_base64(input: &str) -> bool {
    !input.is_empty() && input.len() % 4 == 0 && STANDARD.decode(input).is_ok()
}

/// A `data:` URI.
pub fn is_data_uri(input: &str) -> bool {
    DATA_URI.is_match(input)
}

// ============================================================================
// CONTENT
// ============================================================================

/// Substring containment.
pub fn contains(input: &str, seed: &str) -> bool {
    input.contains(seed)
}

/// Exact string equality.
pub fn equals(input: &str, comparison: &str) -> bool {
    input == comparison
}

/// Membership in a list of allowed strings.
pub fn is_in<S: AsRef<str>>(input: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|candidate| candidate.as_ref() == input)
}

/// A comma-separated list of `<column> ASC|DESC` items.
pub fn is_order_clause(input: &str) -> bool {
    LIST_SEPARATOR
        .split(input)
        .all(|item| ORDER_ITEM.is_match(item))
}

/// A comma-separated list of `*` or column names.
pub fn is_field_list(input: &str) -> bool {
    LIST_SEPARATOR
        .split(input)
        .all(|item| item == "*" || FIELD_ITEM.is_match(item))
}

/// A file name with an image extension.
pub fn is_image_name(input: &str) -> bool {
    IMAGE_NAME.is_match(input)
}

// ============================================================================
// TESTS
// ============================================================================
