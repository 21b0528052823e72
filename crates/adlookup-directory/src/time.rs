//! Active Directory generalized-time parsing.

use chrono::{DateTime, NaiveDate, Utc};

use adlookup_core::{Error, Result};

// YYYYMMDDHHMMSS, the fixed-width prefix of a generalized-time string.
const TIMESTAMP_DIGITS: usize = 14;

/// Parses a generalized-time string such as `20151008164023.0Z` into a UTC
/// instant.
///
/// Only the fixed-width `YYYYMMDDHHMMSS` prefix is interpreted; the
/// fractional-seconds and `Z` tail is ignored. Malformed input is rejected
/// rather than mapped to a sentinel value.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] when the input is shorter than 14
/// characters, contains non-digits in the fixed-width prefix, or names an
/// impossible calendar instant.
pub fn parse_generalized_time(raw: &str) -> Result<DateTime<Utc>> {
    let digits = raw
        .get(..TIMESTAMP_DIGITS)
        .filter(|prefix| prefix.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| invalid(raw))?;

    let year = field(digits, 0, 4).try_into().map_err(|_| invalid(raw))?;
    let month = field(digits, 4, 6);
    let day = field(digits, 6, 8);
    let hour = field(digits, 8, 10);
    let minute = field(digits, 10, 12);
    let second = field(digits, 12, 14);

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|datetime| datetime.and_utc())
        .ok_or_else(|| invalid(raw))
}

fn field(digits: &str, start: usize, end: usize) -> u32 {
    // Callers guarantee `digits` is 14 ASCII digits, so this cannot fail.
    digits[start..end].parse().unwrap_or_default()
}

fn invalid(raw: &str) -> Error {
    Error::InvalidTimestamp(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_when_created_timestamp() {
        let instant = parse_generalized_time("20151008164023.0Z").unwrap();
        assert_eq!(instant.to_rfc3339(), "2015-10-08T16:40:23+00:00");
    }

    #[test]
    fn parses_when_changed_timestamp() {
        let instant = parse_generalized_time("20190227163916.0Z").unwrap();
        assert_eq!(instant.year(), 2019);
        assert_eq!(instant.month(), 2);
        assert_eq!(instant.day(), 27);
        assert_eq!(instant.hour(), 16);
        assert_eq!(instant.minute(), 39);
        assert_eq!(instant.second(), 16);
    }

    #[test]
    fn tail_is_ignored() {
        let bare = parse_generalized_time("20151008164023").unwrap();
        let tailed = parse_generalized_time("20151008164023.123456Z").unwrap();
        assert_eq!(bare, tailed);
    }

    #[test]
    fn short_input_is_rejected() {
        assert!(matches!(
            parse_generalized_time("2015").unwrap_err(),
            Error::InvalidTimestamp(_)
        ));
    }

    #[test]
    fn non_digit_prefix_is_rejected() {
        assert!(matches!(
            parse_generalized_time("2015-10-08T16:40").unwrap_err(),
            Error::InvalidTimestamp(_)
        ));
    }

    #[test]
    fn impossible_calendar_values_are_rejected() {
        // Month 13, day 40
        assert!(parse_generalized_time("20151340164023.0Z").is_err());
        // Hour 25
        assert!(parse_generalized_time("20151008254023.0Z").is_err());
    }
}
