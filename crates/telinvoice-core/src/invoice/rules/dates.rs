//! Date assembly for invoice headers.

use chrono::NaiveDate;
use regex::Captures;

/// Format day/month/year captures as `YYYY-MM-DD`.
///
/// Returns an empty string when the parts do not form a real calendar date.
pub fn calendar_date(day: &str, month: &str, year: &str) -> String {
    let (Ok(day), Ok(month), Ok(year)) = (
        day.parse::<u32>(),
        month.parse::<u32>(),
        year.parse::<i32>(),
    ) else {
        return String::new();
    };

    if year < 1 {
        return String::new();
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Build a date from a match whose groups 1..=3 are day, month, year.
pub fn date_from_captures(caps: &Captures<'_>) -> String {
    calendar_date(&caps[1], &caps[2], &caps[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_valid() {
        assert_eq!(calendar_date("05", "12", "2024"), "2024-12-05");
        assert_eq!(calendar_date("1", "2", "2025"), "2025-02-01");
        assert_eq!(calendar_date("29", "2", "2024"), "2024-02-29");
    }

    #[test]
    fn test_calendar_date_invalid_is_empty() {
        assert_eq!(calendar_date("31", "02", "2024"), "");
        assert_eq!(calendar_date("29", "2", "2023"), "");
        assert_eq!(calendar_date("10", "13", "2024"), "");
        assert_eq!(calendar_date("00", "01", "2024"), "");
        assert_eq!(calendar_date("01", "01", "0000"), "");
    }
}
