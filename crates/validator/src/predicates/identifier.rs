//! Identifier predicates: card numbers, ISBN/ISIN/ISSN, UUIDs and hashes.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

static UUID_V3: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9A-F]{8}-[0-9A-F]{4}-3[0-9A-F]{3}-[0-9A-F]{4}-[0-9A-F]{12}$").unwrap()
});
static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9A-F]{8}-[0-9A-F]{4}-4[0-9A-F]{3}-[89AB][0-9A-F]{3}-[0-9A-F]{12}$")
        .unwrap()
});
static UUID_V5: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9A-F]{8}-[0-9A-F]{4}-5[0-9A-F]{3}-[89AB][0-9A-F]{3}-[0-9A-F]{12}$")
        .unwrap()
});
static MD5: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-f0-9]{32}$").unwrap());
static MONGO_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{24}$").unwrap());
static ISIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9A-Z]{9}[0-9]$").unwrap());
static ISSN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-?\d{3}[\dX]$").unwrap());
static ISSN_HYPHEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{3}[\dX]$").unwrap());

// ============================================================================
// LUHN
// ============================================================================

/// Mod-10 checksum over a string of ASCII digits, check digit last.
pub fn luhn(digits: &str) -> bool {
    let mut sum = 0;
    let mut double = false;

    for c in digits.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };

        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        sum += digit;
        double = !double;
    }

    !digits.is_empty() && sum % 10 == 0
}

// ============================================================================
// CREDIT CARD
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardType {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Jcb,
    DinersClub,
    UnionPay,
}

fn prefix(digits: &str, len: usize) -> Option<u32> {
    digits.get(..len)?.parse().ok()
}

fn detect_card_type(digits: &str) -> Option<CardType> {
    if digits.starts_with('4') {
        return Some(CardType::Visa);
    }
    if prefix(digits, 2).is_some_and(|p| (51..=55).contains(&p))
        || prefix(digits, 4).is_some_and(|p| (2221..=2720).contains(&p))
    {
        return Some(CardType::Mastercard);
    }
    if digits.starts_with("34") || digits.starts_with("37") {
        return Some(CardType::Amex);
    }
    if digits.starts_with("6011")
        || digits.starts_with("65")
        || prefix(digits, 3).is_some_and(|p| (644..=649).contains(&p))
        || prefix(digits, 6).is_some_and(|p| (622_126..=622_925).contains(&p))
    {
        return Some(CardType::Discover);
    }
    if prefix(digits, 4).is_some_and(|p| (3528..=3589).contains(&p)) {
        return Some(CardType::Jcb);
    }
    if prefix(digits, 3).is_some_and(|p| (300..=305).contains(&p))
        || digits.starts_with("36")
        || digits.starts_with("38")
    {
        return Some(CardType::DinersClub);
    }
    if digits.starts_with("62") {
        return Some(CardType::UnionPay);
    }
    None
}

fn card_length_ok(card_type: CardType, len: usize) -> bool {
    match card_type {
        CardType::Visa => len == 13 || len == 16 || len == 19,
        CardType::Mastercard | CardType::Discover => len == 16,
        CardType::Amex => len == 15,
        CardType::DinersClub => len == 14,
        CardType::Jcb | CardType::UnionPay => (16..=19).contains(&len),
    }
}

/// A card number from a known issuer with a valid Luhn checksum.
///
/// Spaces and hyphens between digit groups are ignored.
pub fn is_credit_card(input: &str) -> bool {
    let digits: String = input.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    detect_card_type(&digits).is_some_and(|card| card_length_ok(card, digits.len()))
        && luhn(&digits)
}

// ============================================================================
// ISBN / ISIN / ISSN
// ============================================================================

fn isbn10(digits: &[u32], last: char) -> bool {
    let body: u32 = digits.iter().zip(1..).map(|(d, weight)| d * weight).sum();
    let check = match last {
        'X' => 10,
        c => match c.to_digit(10) {
            Some(d) => d,
            None => return false,
        },
    };
    (body + check * 10) % 11 == 0
}

fn isbn13(digits: &[u32]) -> bool {
    let body: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    (10 - body % 10) % 10 == digits[12]
}

/// An ISBN-10 or ISBN-13 with a valid check digit.
///
/// Spaces and hyphens are ignored.
pub fn is_isbn(input: &str) -> bool {
    let sanitized: String = input.chars().filter(|c| !matches!(c, ' ' | '-')).collect();

    match sanitized.len() {
        10 => {
            let Some(last) = sanitized.chars().last() else {
                return false;
            };
            let body: Option<Vec<u32>> = sanitized.chars().take(9).map(|c| c.to_digit(10)).collect();
            body.is_some_and(|body| isbn10(&body, last))
        }
        13 => {
            let digits: Option<Vec<u32>> = sanitized.chars().map(|c| c.to_digit(10)).collect();
            digits.is_some_and(|digits| isbn13(&digits))
        }
        _ => false,
    }
}

/// An International Securities Identification Number.
///
/// Letters expand to their base-36 value before the Luhn check.
pub fn is_isin(input: &str) -> bool {
    if !ISIN.is_match(input) {
        return false;
    }

    let expanded: String = input
        .chars()
        .filter_map(|c| c.to_digit(36))
        .map(|d| d.to_string())
        .collect();
    luhn(&expanded)
}

/// Options for [`is_issn`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IssnOptions {
    /// A lowercase `x` check digit is rejected.
    pub case_sensitive: bool,
    /// The hyphen after the fourth digit is mandatory.
    pub require_hyphen: bool,
}

/// An International Standard Serial Number with a valid check digit.
pub fn is_issn(input: &str, options: IssnOptions) -> bool {
    let candidate = if options.case_sensitive {
        input.to_owned()
    } else {
        input.to_ascii_uppercase()
    };
    let pattern = if options.require_hyphen {
        &*ISSN_HYPHEN
    } else {
        &*ISSN
    };
    if !pattern.is_match(&candidate) {
        return false;
    }

    let checksum: u32 = candidate
        .chars()
        .filter(|c| *c != '-')
        .zip((1..=8).rev())
        .map(|(c, weight)| {
            let digit = if c == 'X' { 10 } else { c.to_digit(10).unwrap_or(0) };
            digit * weight
        })
        .sum();
    checksum % 11 == 0
}

// ============================================================================
// UUID / HASHES
// ============================================================================

/// A UUID of version 3, 4 or 5.
pub fn is_uuid(input: &str) -> bool {
    UUID_V3.is_match(input) || UUID_V4.is_match(input) || UUID_V5.is_match(input)
}

/// A lowercase hex MD5 digest.
pub fn is_md5(input: &str) -> bool {
    MD5.is_match(input)
}

/// A MongoDB ObjectId.
pub fn is_mongo_id(input: &str) -> bool {
    MONGO_ID.is_match(input)
}

// ============================================================================
// TESTS
// ============================================================================
