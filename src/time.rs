//! Time-of-day codec.
//!
//! All engine times are `i64` microseconds since midnight. Integer
//! microseconds keep interval arithmetic exact; hours are only produced
//! as `f64` for gap scores.
//!
//! # Lenient vs. strict parsing
//!
//! [`parse_hhmm`] never fails: malformed input degrades to partial or
//! zero values and out-of-range fields are not rejected (`"25:00"` is
//! 25 hours). Callers that accept user input should validate upstream
//! with [`try_parse_hhmm`].

use thiserror::Error;

/// Microseconds in one hour.
pub const HOUR_US: i64 = 3_600_000_000;

/// Microseconds in one minute.
pub const MINUTE_US: i64 = 60_000_000;

/// Default buffer between two jobs (15 minutes).
pub const DEFAULT_BUFFER_US: i64 = 15 * MINUTE_US;

/// Errors from [`try_parse_hhmm`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// No `:` between hours and minutes.
    #[error("missing ':' separator in '{0}'")]
    MissingSeparator(String),

    /// A field is empty, has the wrong width, or contains non-digits.
    #[error("invalid number in '{0}'")]
    InvalidNumber(String),

    /// Hour outside 0..=23.
    #[error("hour {0} out of range 0..=23")]
    HourOutOfRange(i64),

    /// Minute outside 0..=59.
    #[error("minute {0} out of range 0..=59")]
    MinuteOutOfRange(i64),
}

/// Formats a microsecond offset as `"HH:MM"`.
///
/// Offsets are not wrapped at 24h: `format_hhmm(25 * HOUR_US)` is `"25:00"`.
///
/// ```
/// use u_matchmaking::time::{format_hhmm, HOUR_US, MINUTE_US};
///
/// assert_eq!(format_hhmm(10 * HOUR_US + 30 * MINUTE_US), "10:30");
/// ```
pub fn format_hhmm(us: i64) -> String {
    let hours = us / HOUR_US;
    let minutes = (us % HOUR_US) / MINUTE_US;
    format!("{hours:02}:{minutes:02}")
}

/// Parses `"HH:MM"` into microseconds since midnight without validation.
///
/// Reads a leading integer, a literal `:`, and another leading integer.
/// Scanning stops at the first field that cannot be read; fields not
/// read count as zero.
///
/// ```
/// use u_matchmaking::time::{parse_hhmm, HOUR_US, MINUTE_US};
///
/// assert_eq!(parse_hhmm("08:15"), 8 * HOUR_US + 15 * MINUTE_US);
/// assert_eq!(parse_hhmm("garbage"), 0);
/// ```
pub fn parse_hhmm(s: &str) -> i64 {
    let Some((hours, rest)) = scan_int(s) else {
        return 0;
    };
    let minutes = rest
        .strip_prefix(':')
        .and_then(scan_int)
        .map_or(0, |(m, _)| m);

    hours
        .saturating_mul(HOUR_US)
        .saturating_add(minutes.saturating_mul(MINUTE_US))
}

/// Strictly parses `"H:MM"` / `"HH:MM"` with range checks.
///
/// ```
/// use u_matchmaking::time::{try_parse_hhmm, TimeParseError};
///
/// assert!(try_parse_hhmm("23:59").is_ok());
/// assert_eq!(try_parse_hhmm("24:00"), Err(TimeParseError::HourOutOfRange(24)));
/// ```
pub fn try_parse_hhmm(s: &str) -> Result<i64, TimeParseError> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| TimeParseError::MissingSeparator(s.to_string()))?;

    let valid_width = (1..=2).contains(&h.len()) && m.len() == 2;
    let all_digits = h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit());
    if !valid_width || !all_digits {
        return Err(TimeParseError::InvalidNumber(s.to_string()));
    }

    let hours: i64 = h
        .parse()
        .map_err(|_| TimeParseError::InvalidNumber(s.to_string()))?;
    let minutes: i64 = m
        .parse()
        .map_err(|_| TimeParseError::InvalidNumber(s.to_string()))?;

    if hours > 23 {
        return Err(TimeParseError::HourOutOfRange(hours));
    }
    if minutes > 59 {
        return Err(TimeParseError::MinuteOutOfRange(minutes));
    }
    Ok(hours * HOUR_US + minutes * MINUTE_US)
}

/// Converts microseconds to fractional hours.
#[inline]
pub fn micros_to_hours(us: i64) -> f64 {
    us as f64 / HOUR_US as f64
}

/// Scans an optionally signed decimal integer after leading whitespace.
///
/// Returns the value and the unconsumed remainder.
fn scan_int(s: &str) -> Option<(i64, &str)> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    let end = sign_len + digits_len;
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hours: i64, mins: i64) -> i64 {
        hours * HOUR_US + mins * MINUTE_US
    }

    #[test]
    fn test_format_hhmm() {
        assert_eq!(format_hhmm(0), "00:00");
        assert_eq!(format_hhmm(hm(8, 0)), "08:00");
        assert_eq!(format_hhmm(hm(10, 30)), "10:30");
        assert_eq!(format_hhmm(hm(14, 45)), "14:45");
        assert_eq!(format_hhmm(hm(23, 59)), "23:59");
    }

    #[test]
    fn test_format_does_not_wrap() {
        assert_eq!(format_hhmm(hm(25, 5)), "25:05");
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("00:00"), 0);
        assert_eq!(parse_hhmm("08:00"), hm(8, 0));
        assert_eq!(parse_hhmm("10:30"), hm(10, 30));
        assert_eq!(parse_hhmm("23:59"), hm(23, 59));
        assert_eq!(parse_hhmm("8:5"), hm(8, 5));
    }

    #[test]
    fn test_round_trip_full_day() {
        for h in 0..24 {
            for m in 0..60 {
                let s = format!("{h:02}:{m:02}");
                assert_eq!(format_hhmm(parse_hhmm(&s)), s);
            }
        }
    }

    #[test]
    fn test_parse_is_lenient() {
        // No validation: out-of-range fields pass through.
        assert_eq!(parse_hhmm("25:00"), hm(25, 0));
        assert_eq!(parse_hhmm("10:75"), hm(10, 75));
        // Partial input: unread fields are zero.
        assert_eq!(parse_hhmm("09"), hm(9, 0));
        assert_eq!(parse_hhmm("09:xx"), hm(9, 0));
        assert_eq!(parse_hhmm("12h30"), hm(12, 0));
        // Unreadable hour stops the scan.
        assert_eq!(parse_hhmm("ab:30"), 0);
        assert_eq!(parse_hhmm(""), 0);
        assert_eq!(parse_hhmm(" 7:05"), hm(7, 5));
    }

    #[test]
    fn test_try_parse_ok() {
        assert_eq!(try_parse_hhmm("00:00"), Ok(0));
        assert_eq!(try_parse_hhmm("7:30"), Ok(hm(7, 30)));
        assert_eq!(try_parse_hhmm("23:59"), Ok(hm(23, 59)));
    }

    #[test]
    fn test_try_parse_errors() {
        assert_eq!(
            try_parse_hhmm("0800"),
            Err(TimeParseError::MissingSeparator("0800".into()))
        );
        assert!(matches!(
            try_parse_hhmm("08:5"),
            Err(TimeParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            try_parse_hhmm("-1:00"),
            Err(TimeParseError::InvalidNumber(_))
        ));
        assert_eq!(try_parse_hhmm("10:60"), Err(TimeParseError::MinuteOutOfRange(60)));
    }

    #[test]
    fn test_micros_to_hours() {
        assert!((micros_to_hours(hm(1, 30)) - 1.5).abs() < 1e-10);
        assert!((micros_to_hours(0)).abs() < 1e-10);
    }
}
