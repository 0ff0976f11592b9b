use std::fmt;

use chrono::NaiveDate;

/// Storage and interchange form of a calendar day.
pub const ISO_DAY_FORMAT: &str = "%Y-%m-%d";

/// Form shown inside the picker widgets.
pub const DISPLAY_DAY_FORMAT: &str = "%d-%m-%Y";

/// Format a day in the ISO `YYYY-MM-DD` form.
pub fn format_iso(day: NaiveDate) -> String {
    day.format(ISO_DAY_FORMAT).to_string()
}

/// Parse an ISO `YYYY-MM-DD` string into a calendar day.
pub fn parse_iso(text: &str) -> Result<NaiveDate, DayFormatError> {
    NaiveDate::parse_from_str(text, ISO_DAY_FORMAT)
        .map_err(|_| DayFormatError::BadDay(text.to_string()))
}

/// Truncate a full timestamp to its calendar day.
///
/// Accepts an RFC 3339 timestamp or a bare ISO day; everything from the `T`
/// separator on (time-of-day, offset) is discarded.
pub fn day_from_timestamp(timestamp: &str) -> Result<NaiveDate, DayFormatError> {
    match timestamp.split('T').next() {
        Some(date_part) => parse_iso(date_part),
        None => Err(DayFormatError::BadDay(timestamp.to_string())),
    }
}

/// Format a day in the `DD-MM-YYYY` display form.
pub fn format_display(day: NaiveDate) -> String {
    day.format(DISPLAY_DAY_FORMAT).to_string()
}

/// Parse a `DD-MM-YYYY` display string back into a calendar day.
pub fn parse_display(text: &str) -> Result<NaiveDate, DayFormatError> {
    NaiveDate::parse_from_str(text, DISPLAY_DAY_FORMAT)
        .map_err(|_| DayFormatError::BadDisplayDay(text.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayFormatError {
    /// Text was not an ISO calendar day (or a timestamp starting with one).
    BadDay(String),
    /// Text was not a `DD-MM-YYYY` display day.
    BadDisplayDay(String),
}

impl fmt::Display for DayFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFormatError::BadDay(text) => {
                write!(f, "not a YYYY-MM-DD calendar day: {:?}", text)
            }
            DayFormatError::BadDisplayDay(text) => {
                write!(f, "not a DD-MM-YYYY calendar day: {:?}", text)
            }
        }
    }
}

impl std::error::Error for DayFormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dom).unwrap()
    }

    #[test]
    fn test_iso_round_trip() {
        let d = day(2024, 6, 3);
        assert_eq!(format_iso(d), "2024-06-03");
        assert_eq!(parse_iso("2024-06-03").unwrap(), d);
    }

    #[test]
    fn test_display_round_trip() {
        // Formatting to display form and back recovers the same calendar day
        let d = day(2024, 6, 3);
        let shown = format_display(d);
        assert_eq!(shown, "03-06-2024");
        assert_eq!(parse_display(&shown).unwrap(), d);
    }

    #[test]
    fn test_display_round_trip_leap_day() {
        let d = day(2024, 2, 29);
        assert_eq!(parse_display(&format_display(d)).unwrap(), d);
    }

    #[test]
    fn test_day_from_timestamp_discards_time_of_day() {
        assert_eq!(
            day_from_timestamp("2024-06-10T12:34:56.000Z").unwrap(),
            day(2024, 6, 10)
        );
        assert_eq!(
            day_from_timestamp("2024-06-10T00:00:00+03:00").unwrap(),
            day(2024, 6, 10)
        );
    }

    #[test]
    fn test_day_from_timestamp_accepts_bare_day() {
        assert_eq!(day_from_timestamp("2024-06-10").unwrap(), day(2024, 6, 10));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_iso("10-06-2024").is_err());
        assert!(parse_iso("2024-6-x").is_err());
        assert!(parse_iso("").is_err());
        assert!(parse_display("2024-06-10").is_err());
        assert!(day_from_timestamp("not a date").is_err());
    }

    #[test]
    fn test_parse_rejects_nonexistent_day() {
        // 2023 is not a leap year
        assert!(parse_iso("2023-02-29").is_err());
        assert!(parse_display("31-04-2024").is_err());
    }
}
