//! Date utility functions
//!
//! Dates cross the storage boundary as plain `YYYY-MM-DD` strings; this module
//! centralizes parsing, formatting, and the human-readable rendering used for
//! expiration dates ("today", "tomorrow", weekday names).

use chrono::{Local, NaiveDate};

/// Wire format for all dates stored in the database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in `YYYY-MM-DD` format.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a `NaiveDate` to a `YYYY-MM-DD` string.
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Today's local date in `YYYY-MM-DD` format.
pub fn format_today() -> String {
    format_ymd(Local::now().date_naive())
}

/// Render a stored date string the way the UI displays expiration dates.
///
/// Falls back to the raw string if it does not parse, so a malformed value in
/// storage never panics the renderer.
pub fn format_human_date(date_str: &str) -> String {
    let input_date = match parse_date(date_str) {
        Ok(date) => date,
        Err(_) => return date_str.to_string(),
    };

    human_date_from(input_date, Local::now().date_naive())
}

fn human_date_from(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("{}", date.format("%A")),
        _ => format!("{}", date.format("%b %-d, %Y")),
    }
}

/// Re-render a stored date string with the configured display format.
///
/// Falls back to the raw string if it does not parse.
pub fn reformat(date_str: &str, display_format: &str) -> String {
    match parse_date(date_str) {
        Ok(date) => format!("{}", date.format(display_format)),
        Err(_) => date_str.to_string(),
    }
}

/// True if the stored date string is strictly before today.
pub fn is_past(date_str: &str) -> bool {
    match parse_date(date_str) {
        Ok(date) => date < Local::now().date_naive(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration};

    #[test]
    fn test_parse_and_format_round_trip() {
        let date = parse_date("2026-03-09").unwrap();
        assert_eq!(date.year(), 2026);
        assert_eq!(format_ymd(date), "2026-03-09");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2026-13-40").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_human_date_relative_names() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(human_date_from(today, today), "today");
        assert_eq!(human_date_from(today + Duration::days(1), today), "tomorrow");
        assert_eq!(human_date_from(today - Duration::days(1), today), "yesterday");
    }

    #[test]
    fn test_human_date_weekday_within_a_week() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(); // a Monday
        let thursday = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        assert_eq!(human_date_from(thursday, today), "Thursday");
    }

    #[test]
    fn test_human_date_falls_back_to_full_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let far = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
        assert_eq!(human_date_from(far, today), "Dec 25, 2026");
    }

    #[test]
    fn test_human_date_unparseable_passthrough() {
        assert_eq!(format_human_date("whenever"), "whenever");
    }

    #[test]
    fn test_reformat_applies_display_format() {
        assert_eq!(reformat("2026-08-24", "%d/%m/%Y"), "24/08/2026");
        assert_eq!(reformat("garbage", "%d/%m/%Y"), "garbage");
    }
}
