//! Locale-specific mobile phone number patterns.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

const PATTERNS: &[(&str, &str)] = &[
    ("ar-EG", r"^(?:(?:\+?20)|0)?1[012]\d{8}$"),
    ("de-DE", r"^(?:\+?49[ .\-])?(?:\(\d{1,6}\))?[0-9 .\-/]{3,20}(?:(?:x|ext|extension) ?\d{1,4})?$"),
    ("en-AU", r"^(?:\+?61|0)4\d{8}$"),
    ("en-GB", r"^(?:\+?44|0)7\d{9}$"),
    ("en-HK", r"^(?:\+?852-?)?[569]\d{3}-?\d{4}$"),
    ("en-IN", r"^(?:\+?91|0)?[789]\d{9}$"),
    ("en-NZ", r"^(?:\+?64|0)2\d{7,9}$"),
    ("en-US", r"^(?:\+?1)?[2-9]\d{2}[2-9](?:[02-9]\d|1[02-9])\d{4}$"),
    ("es-ES", r"^(?:\+?34)?(?:6\d|7[1234])\d{7}$"),
    ("fr-FR", r"^(?:\+?33|0)[67]\d{8}$"),
    ("it-IT", r"^(?:\+?39)?\s?3\d{2} ?\d{6,7}$"),
    ("ja-JP", r"^(?:\+?81|0)[789]0[ \-]?[1-9]\d{2}[ \-]?\d{5}$"),
    ("ko-KR", r"^(?:\+?82[ \-]?)?0?1[016789][ \-]?\d{3,4}[ \-]?\d{4}$"),
    ("nl-BE", r"^(?:\+?32|0)4?\d{8}$"),
    ("pl-PL", r"^(?:\+?48 ?)?\d{3}[ \-]?\d{3}[ \-]?\d{3}$"),
    ("pt-BR", r"^(?:\+?55|0)-?[1-9]{2}-?[2-9]\d{3,4}-?\d{4}$"),
    ("ru-RU", r"^(?:\+?7|8)?9\d{9}$"),
    ("zh-CN", r"^(?:\+?0?86-?)?1[3456789]\d{9}$"),
    ("zh-TW", r"^(?:\+?886-?|0)?9\d{8}$"),
];

static MOBILE: LazyLock<BTreeMap<&'static str, Regex>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|(locale, pattern)| (*locale, Regex::new(pattern).unwrap()))
        .collect()
});

/// Locale matching every supported pattern.
pub const ANY_LOCALE: &str = "any";

/// Returns true if `locale` names a pattern or is [`ANY_LOCALE`].
pub fn is_supported_locale(locale: &str) -> bool {
    locale == ANY_LOCALE || MOBILE.contains_key(locale)
}

/// Supported locale names, sorted.
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    MOBILE.keys().copied()
}

/// A mobile number for `locale`. `None` for an unsupported locale.
pub fn is_mobile_phone(input: &str, locale: &str) -> Option<bool> {
    if locale == ANY_LOCALE {
        return Some(MOBILE.values().any(|re| re.is_match(input)));
    }
    MOBILE.get(locale).map(|re| re.is_match(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zh_cn() {
        assert_eq!(is_mobile_phone("13800138000", "zh-CN"), Some(true));
        assert_eq!(is_mobile_phone("+8613800138000", "zh-CN"), Some(true));
        assert_eq!(is_mobile_phone("12800138000", "zh-CN"), Some(false));
        assert_eq!(is_mobile_phone("1380013800", "zh-CN"), Some(false));
    }

    #[test]
    fn test_en_us_excludes_n11_exchanges() {
        assert_eq!(is_mobile_phone("2125551234", "en-US"), Some(true));
        assert_eq!(is_mobile_phone("+12125551234", "en-US"), Some(true));
        assert_eq!(is_mobile_phone("2122111234", "en-US"), Some(false));
    }

    #[test]
    fn test_any_locale() {
        assert_eq!(is_mobile_phone("07911123456", ANY_LOCALE), Some(true));
        assert_eq!(is_mobile_phone("hello", ANY_LOCALE), Some(false));
    }

    #[test]
    fn test_unknown_locale() {
        assert_eq!(is_mobile_phone("13800138000", "xx-XX"), None);
        assert!(!is_supported_locale("xx-XX"));
        assert!(is_supported_locale("en-GB"));
        assert!(is_supported_locale(ANY_LOCALE));
    }

    #[test]
    fn test_locales_sorted() {
        let locales: Vec<_> = supported_locales().collect();
        let mut sorted = locales.clone();
        sorted.sort_unstable();
        assert_eq!(locales, sorted);
        assert!(locales.contains(&"zh-CN"));
    }
}
