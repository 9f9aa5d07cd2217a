//! Date display and form-input helpers
//!
//! Deadlines travel as full timestamps but are edited as plain
//! `YYYY-MM-DD` strings from a date input. Parsing pins the chosen day
//! to midnight UTC so a date survives the round trip unchanged.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// List/card format, e.g. "Aug 25, 2026"
pub fn format_short(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// Detail-page format, e.g. "August 25, 2026"
pub fn format_long(dt: &DateTime<Utc>) -> String {
    dt.format("%B %-d, %Y").to_string()
}

/// Parse a `YYYY-MM-DD` date-input value. Returns `None` for empty or
/// malformed input.
pub fn parse_date_input(s: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

/// Render a timestamp back into date-input form (`YYYY-MM-DD`)
pub fn to_date_input(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// The user's current calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today in date-input form, used as the input's `min` attribute
pub fn today_input() -> String {
    today().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime<Utc> {
        parse_date_input("2026-08-25").unwrap()
    }

    #[test]
    fn test_format_short() {
        assert_eq!(format_short(&sample()), "Aug 25, 2026");
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long(&sample()), "August 25, 2026");
    }

    #[test]
    fn test_format_single_digit_day_unpadded() {
        let dt = parse_date_input("2026-09-01").unwrap();
        assert_eq!(format_short(&dt), "Sep 1, 2026");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("yesterday"), None);
        assert_eq!(parse_date_input("2026-13-40"), None);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_date_input(" 2026-08-25 ").is_some());
    }

    #[test]
    fn test_input_roundtrip() {
        let dt = sample();
        assert_eq!(to_date_input(&dt), "2026-08-25");
        assert_eq!(parse_date_input(&to_date_input(&dt)), Some(dt));
    }
}
