//! Date parsing and ordering.
//!
//! Accepted inputs, tried in order:
//! - RFC 3339 (`2024-03-05T07:08:09Z`, with offset)
//! - RFC 2822 (`Tue, 5 Mar 2024 07:08:09 +0000`)
//! - `Y-M-D[ H:m[:s[.f]]][offset]`, unpadded fields allowed, `-`, `/` or `.`
//!   as the date separator and `T` or a space before the time
//! - `M/D/Y[ H:m[:s]]`
//!
//! Inputs carrying an offset are converted to local wall-clock time; all
//! others are read as local wall-clock time already.

use std::sync::LazyLock;

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike,
};
use regex::{Captures, Regex};

static YMD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?<y>\d{4})[-/.](?<m>\d{1,2})[-/.](?<d>\d{1,2})(?:[T ](?<h>\d{1,2}):(?<mi>\d{1,2})(?::(?<s>\d{1,2})(?:\.(?<f>\d{1,9}))?)?)?\s*(?<tz>Z|[+-]\d{2}:?\d{2})?$",
    )
    .unwrap()
});
static MDY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?<m>\d{1,2})/(?<d>\d{1,2})/(?<y>\d{4})(?:\s+(?<h>\d{1,2}):(?<mi>\d{1,2})(?::(?<s>\d{1,2}))?)?$",
    )
    .unwrap()
});
static ISO8601: LazyLock<Regex> = LazyLock::new(|| {
    const YEAR: &str = r"[+-]?\d{4}";
    const MONTH: &str = r"(?:0[1-9]|1[0-2])";
    const DAY: &str = r"(?:0[1-9]|[12]\d|3[01])";
    const WEEK: &str = r"W(?:[0-4]\d|5[0-3])";
    const ORDINAL: &str = r"(?:00[1-9]|0[1-9]\d|[12]\d{2}|3(?:[0-5]\d|6[0-6]))";
    const TIME: &str = r"(?:[01]\d|2[0-3])(?::?[0-5]\d(?::?[0-5]\d(?:[.,]\d+)?)?)?";
    const ZONE: &str = r"(?:[zZ]|[+-](?:[01]\d|2[0-3])(?::?[0-5]\d)?)";

    let date = [
        format!("{YEAR}-{MONTH}(?:-{DAY})?"),
        format!("{YEAR}{MONTH}{DAY}"),
        format!("{YEAR}-?{WEEK}(?:-?[1-7])?"),
        format!("{YEAR}-?{ORDINAL}"),
        YEAR.to_owned(),
    ]
    .join("|");
    Regex::new(&format!(r"^(?:{date})(?:[T\s]{TIME}{ZONE}?)?$")).unwrap()
});

fn field(caps: &Captures<'_>, name: &str) -> u32 {
    caps.name(name)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn nanos(caps: &Captures<'_>) -> u32 {
    caps.name("f").map_or(0, |m| {
        let digits = m.as_str();
        let scale = 10u32.pow(9 - digits.len() as u32);
        digits.parse::<u32>().unwrap_or(0) * scale
    })
}

fn build(caps: &Captures<'_>) -> Option<NaiveDateTime> {
    let year = caps.name("y")?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, field(caps, "m"), field(caps, "d"))?;
    let time = NaiveTime::from_hms_nano_opt(
        field(caps, "h"),
        field(caps, "mi"),
        field(caps, "s"),
        nanos(caps),
    )?;
    Some(date.and_time(time))
}

fn parse_offset(tz: &str) -> Option<FixedOffset> {
    if tz == "Z" {
        return FixedOffset::east_opt(0);
    }
    let sign = if tz.starts_with('-') { -1 } else { 1 };
    let digits: String = tz[1..].chars().filter(char::is_ascii_digit).collect();
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = digits.get(2..4)?.parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn to_local<Tz: TimeZone>(dt: &DateTime<Tz>) -> NaiveDateTime {
    dt.with_timezone(&Local).naive_local()
}

/// Parses a date-like string into local wall-clock time.
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(to_local(&dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(to_local(&dt));
    }

    if let Some(caps) = YMD.captures(input) {
        let naive = build(&caps)?;
        return match caps.name("tz") {
            Some(tz) => {
                let offset = parse_offset(tz.as_str())?;
                let dt = offset.from_local_datetime(&naive).single()?;
                Some(to_local(&dt))
            }
            None => Some(naive),
        };
    }

    MDY.captures(input).and_then(|caps| build(&caps))
}

/// A parseable date.
pub fn is_date(input: &str) -> bool {
    parse_date(input).is_some()
}

/// `input` is a date strictly earlier than `comparison`.
pub fn is_before(input: &str, comparison: &str) -> bool {
    match (parse_date(input), parse_date(comparison)) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// `input` is a date strictly later than `comparison`.
pub fn is_after(input: &str, comparison: &str) -> bool {
    match (parse_date(input), parse_date(comparison)) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

/// An ISO 8601 calendar, week or ordinal date with an optional time.
pub fn is_iso8601(input: &str) -> bool {
    ISO8601.is_match(input)
}

/// Formats a timestamp as `Y-M-D H:m:s` with no zero padding.
///
/// This is the form `before`/`after` substitute for "now"; [`parse_date`]
/// reads it back.
pub fn format_timestamp(dt: NaiveDateTime) -> String {
    format!(
        "{}-{}-{} {}:{}:{}",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

// ============================================================================
// TESTS
// ============================================================================
