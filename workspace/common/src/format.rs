//! Display formatting for numbers, dates and statuses.
//!
//! Everything here is pure: the same input always renders the same text,
//! independent of the browser locale (output is always en-US style).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

pub const NOT_AVAILABLE: &str = "N/A";
pub const SYSTEM_USER: &str = "System";

const DATE_FORMAT: &str = "%b %-d, %Y";
const DATETIME_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Formats a number with fixed precision and `,` thousands separators.
///
/// A missing value renders as `"0"`.
pub fn format_number(value: Option<Decimal>, decimals: u32) -> String {
    match value {
        Some(value) => format_decimal(value, decimals),
        None => "0".to_string(),
    }
}

/// Like [`format_number`] with a unit suffix, but renders `"N/A"` when absent.
pub fn format_optional_number(value: Option<Decimal>, decimals: u32, suffix: &str) -> String {
    match value {
        Some(value) => format!("{}{}", format_decimal(value, decimals), suffix),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn format_decimal(value: Decimal, decimals: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = rounded.abs();
    }

    let fixed = format!("{:.*}", decimals as usize, rounded);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// Parses the timestamp shapes the backend emits: ISO dates, ISO/RFC 3339
/// datetimes and RFC 2822 HTTP dates. Offsets are kept as wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Short human date, e.g. `Jan 5, 2024`. Missing input renders `"N/A"`,
/// unparseable input is passed through unchanged.
pub fn format_date(raw: Option<&str>) -> String {
    format_timestamp(raw, DATE_FORMAT)
}

/// Date plus time of day, e.g. `Jan 5, 2024, 02:30 PM`.
pub fn format_datetime(raw: Option<&str>) -> String {
    format_timestamp(raw, DATETIME_FORMAT)
}

fn format_timestamp(raw: Option<&str>, pattern: &str) -> String {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    match parse_timestamp(raw) {
        Some(parsed) => parsed.format(pattern).to_string(),
        None => {
            tracing::warn!("Unrecognised timestamp '{}', rendering as-is", raw);
            raw.to_string()
        }
    }
}

/// Maps a backend status string to its badge class.
pub fn status_class(status: Option<&str>) -> &'static str {
    match status {
        Some("Normal") => "status-normal",
        Some("Low") => "status-low",
        Some("Critical") => "status-critical",
        Some("High") => "status-high",
        _ => "status-normal",
    }
}

/// Returns the text, or `fallback` when it is missing or blank.
pub fn text_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_missing_is_zero() {
        assert_eq!(format_number(None, 0), "0");
        assert_eq!(format_number(None, 2), "0");
    }

    #[test]
    fn test_format_number_precision_and_grouping() {
        assert_eq!(format_number(Some(Decimal::new(12345, 1)), 2), "1,234.50");
        assert_eq!(format_number(Some(Decimal::new(1234567, 0)), 0), "1,234,567");
        assert_eq!(format_number(Some(Decimal::new(999, 0)), 0), "999");
        assert_eq!(format_number(Some(Decimal::new(100000, 0)), 1), "100,000.0");
        assert_eq!(format_number(Some(Decimal::ZERO), 1), "0.0");
    }

    #[test]
    fn test_format_number_rounds_half_away_from_zero() {
        assert_eq!(format_number(Some(Decimal::new(25, 1)), 0), "3");
        assert_eq!(format_number(Some(Decimal::new(-25, 1)), 0), "-3");
        assert_eq!(format_number(Some(Decimal::new(-1234567, 3)), 1), "-1,234.6");
        assert_eq!(format_number(Some(Decimal::new(-4, 3)), 2), "0.00");
    }

    #[test]
    fn test_format_optional_number() {
        assert_eq!(format_optional_number(None, 1, "L"), "N/A");
        assert_eq!(format_optional_number(Some(Decimal::new(4255, 1)), 1, "L"), "425.5L");
    }

    #[test]
    fn test_format_date_shapes() {
        assert_eq!(format_date(Some("2024-01-05")), "Jan 5, 2024");
        assert_eq!(format_date(Some("2024-01-05T13:45:00")), "Jan 5, 2024");
        assert_eq!(format_date(Some("Fri, 05 Jan 2024 00:00:00 GMT")), "Jan 5, 2024");
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("  ")), "N/A");
        assert_eq!(format_date(Some("soon")), "soon");
    }

    #[test]
    fn test_format_datetime_includes_time_of_day() {
        assert_eq!(format_datetime(Some("2024-01-05T14:30:00")), "Jan 5, 2024, 02:30 PM");
        assert_eq!(format_datetime(Some("2024-11-20 08:05:59.123")), "Nov 20, 2024, 08:05 AM");
        assert_eq!(format_datetime(Some("2024-01-05T14:30:00+02:00")), "Jan 5, 2024, 02:30 PM");
        assert_eq!(format_datetime(None), "N/A");
    }

    #[test]
    fn test_status_class_known_and_unknown() {
        assert_eq!(status_class(Some("Normal")), "status-normal");
        assert_eq!(status_class(Some("Low")), "status-low");
        assert_eq!(status_class(Some("Critical")), "status-critical");
        assert_eq!(status_class(Some("High")), "status-high");
        assert_eq!(status_class(Some("critical")), "status-normal");
        assert_eq!(status_class(Some("Overflowing")), "status-normal");
        assert_eq!(status_class(None), "status-normal");
    }

    #[test]
    fn test_text_or_fallbacks() {
        assert_eq!(text_or(Some("Alice"), SYSTEM_USER), "Alice");
        assert_eq!(text_or(Some(""), SYSTEM_USER), "System");
        assert_eq!(text_or(None, NOT_AVAILABLE), "N/A");
    }
}
