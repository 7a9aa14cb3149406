//! Network-address predicates: hostnames, e-mail, URLs, IP and MAC.
//!
//! Domain checks follow RFC 1123 label rules:
//! - Total length: at most 253 characters (excluding an optional trailing dot)
//! - Each label: 1..=63 characters, letters, digits, `-` and non-ASCII letters
//! - Labels must not start or end with a hyphen
//! - With `require_tld`, the last label is an alphabetic or punycode TLD

use std::borrow::Cow;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use url::{Host, Url};

static TLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[a-z\u{00a1}-\u{ffff}]{2,}|xn[a-z0-9-]{2,})$").unwrap());
static EMAIL_DISPLAY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^<>]+?\s*<(.+)>$").unwrap());
static EMAIL_USER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9!#$%&'*+\-/=?^_`{|}~]+$").unwrap());
static EMAIL_USER_UTF8: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+\-/=?^_`{|}~\u{00A0}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFEF}]+$",
    )
    .unwrap()
});

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;
const MAX_URL_LEN: usize = 2083;

// ============================================================================
// FQDN
// ============================================================================

/// Options for [`is_fqdn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FqdnOptions {
    /// The last label must look like a top-level domain.
    pub require_tld: bool,
    /// Accept `_` inside labels.
    pub allow_underscores: bool,
    /// Accept a single trailing `.`.
    pub allow_trailing_dot: bool,
}

impl Default for FqdnOptions {
    fn default() -> Self {
        Self {
            require_tld: true,
            allow_underscores: false,
            allow_trailing_dot: false,
        }
    }
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || ('\u{00a1}'..='\u{ffff}').contains(&c)
}

// Fullwidth ASCII variants look like labels but are not.
fn is_fullwidth_ascii(c: char) -> bool {
    ('\u{ff01}'..='\u{ff5e}').contains(&c)
}

/// A fully qualified domain name.
pub fn is_fqdn(input: &str, options: FqdnOptions) -> bool {
    let domain = if options.allow_trailing_dot {
        input.strip_suffix('.').unwrap_or(input)
    } else {
        input
    };

    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let mut labels: Vec<&str> = domain.split('.').collect();

    if options.require_tld {
        let Some(tld) = labels.pop() else {
            return false;
        };
        if labels.is_empty() || !TLD.is_match(tld) || tld.chars().any(char::is_whitespace) {
            return false;
        }
        labels.push(tld);
    }

    labels.into_iter().all(|label| {
        let label: Cow<'_, str> = if options.allow_underscores {
            Cow::Owned(label.replace('_', ""))
        } else {
            Cow::Borrowed(label)
        };
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(is_label_char)
            && !label.chars().any(is_fullwidth_ascii)
    })
}

// ============================================================================
// EMAIL
// ============================================================================

/// Options for [`is_email`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailOptions {
    /// Accept `Display Name <local@domain>`.
    pub allow_display_name: bool,
    /// Require the display-name form.
    pub require_display_name: bool,
    /// Accept non-ASCII characters in the local part.
    pub allow_utf8_local_part: bool,
    /// The domain must end in a top-level domain.
    pub require_tld: bool,
    /// Skip the 64/254 length limits.
    pub ignore_max_length: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            allow_display_name: false,
            require_display_name: false,
            allow_utf8_local_part: true,
            require_tld: true,
            ignore_max_length: false,
        }
    }
}

/// An e-mail address.
pub fn is_email(input: &str, options: EmailOptions) -> bool {
    let address = if options.allow_display_name || options.require_display_name {
        match EMAIL_DISPLAY_NAME.captures(input).and_then(|c| c.get(1)) {
            Some(inner) => inner.as_str(),
            None if options.require_display_name => return false,
            None => input,
        }
    } else {
        input
    };

    let Some((user, domain)) = address.rsplit_once('@') else {
        return false;
    };

    if !options.ignore_max_length && (user.len() > 64 || domain.len() > 254) {
        return false;
    }

    let domain_options = FqdnOptions {
        require_tld: options.require_tld,
        ..FqdnOptions::default()
    };
    if !is_fqdn(domain, domain_options) {
        return false;
    }

    let pattern = if options.allow_utf8_local_part {
        &*EMAIL_USER_UTF8
    } else {
        &*EMAIL_USER
    };
    user.split('.').all(|part| pattern.is_match(part))
}

// ============================================================================
// URL
// ============================================================================

/// Options for [`is_url`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UrlOptions {
    /// Accepted schemes.
    pub protocols: Vec<String>,
    /// The host must end in a top-level domain.
    pub require_tld: bool,
    /// A scheme must be present.
    pub require_protocol: bool,
    /// A host must be present.
    pub require_host: bool,
    /// The scheme must be one of `protocols`.
    pub require_valid_protocol: bool,
    /// Accept `_` in host labels.
    pub allow_underscores: bool,
    /// Accept a trailing `.` on the host.
    pub allow_trailing_dot: bool,
    /// Accept `//host/path`.
    pub allow_protocol_relative_urls: bool,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            protocols: vec!["http".into(), "https".into(), "ftp".into()],
            require_tld: true,
            require_protocol: false,
            require_host: true,
            require_valid_protocol: true,
            allow_underscores: false,
            allow_trailing_dot: false,
            allow_protocol_relative_urls: false,
        }
    }
}

/// A URL.
///
/// Parsing is done by the `url` crate; the host is then checked with
/// [`is_fqdn`] unless it is an IP literal.
pub fn is_url(input: &str, options: &UrlOptions) -> bool {
    if input.is_empty()
        || input.len() >= MAX_URL_LEN
        || input.chars().any(char::is_whitespace)
        || input.starts_with("mailto:")
    {
        return false;
    }

    let candidate: Cow<'_, str> = if let Some((scheme, _)) = input.split_once("://") {
        let scheme = scheme.to_ascii_lowercase();
        if options.require_valid_protocol && !options.protocols.iter().any(|p| *p == scheme) {
            return false;
        }
        Cow::Borrowed(input)
    } else if options.require_protocol {
        return false;
    } else if input.starts_with("//") {
        if !options.allow_protocol_relative_urls {
            return false;
        }
        Cow::Owned(format!("http:{input}"))
    } else {
        Cow::Owned(format!("http://{input}"))
    };

    let Ok(parsed) = Url::parse(&candidate) else {
        return false;
    };

    match parsed.host() {
        Some(Host::Domain(domain)) => is_fqdn(
            domain,
            FqdnOptions {
                require_tld: options.require_tld,
                allow_underscores: options.allow_underscores,
                allow_trailing_dot: options.allow_trailing_dot,
            },
        ),
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
        None => !options.require_host,
    }
}

// ============================================================================
// IP
// ============================================================================

/// An IP address of the given family (`4`, `6`), or of either when `None`.
pub fn is_ip(input: &str, version: Option<u8>) -> bool {
    match version {
        Some(4) => input.parse::<Ipv4Addr>().is_ok(),
        Some(6) => input.parse::<Ipv6Addr>().is_ok(),
        None => is_ip(input, Some(4)) || is_ip(input, Some(6)),
        Some(_) => false,
    }
}

// ============================================================================
// MAC ADDRESS
// ============================================================================

fn is_hex_octet(part: &str) -> bool {
    part.len() == 2 && part.chars().all(|c| c.is_ascii_hexdigit())
}

/// Six hex octets separated by `:` or `-`, or twelve contiguous hex digits.
///
/// Separators may not be mixed.
pub fn is_mac_address(input: &str) -> bool {
    if !input.contains([':', '-']) {
        return input.len() == 12 && input.chars().all(|c| c.is_ascii_hexdigit());
    }

    [':', '-'].into_iter().any(|separator| {
        let parts: Vec<&str> = input.split(separator).collect();
        parts.len() == 6 && parts.iter().all(|part| is_hex_octet(part))
    })
}

// ============================================================================
// TESTS
// ============================================================================
