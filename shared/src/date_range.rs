use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::day_format::{self, DayFormatError};

/// Inclusive range of calendar days, as selected on the statistics page.
///
/// Both endpoints are day-granular (no time-of-day component) and ordered
/// `start <= end`. The serialized form carries the endpoints as ISO
/// `YYYY-MM-DD` strings; deserialization rejects inverted endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeEndpoints", into = "RangeEndpoints")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range from explicit endpoints, rejecting inverted input.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// The page-mount default: the seven days leading up to `end`.
    pub fn week_ending(end: NaiveDate) -> Self {
        Self {
            start: end - Days::new(7),
            end,
        }
    }

    /// Parse a range from its external ISO `YYYY-MM-DD` form.
    pub fn parse(start_iso: &str, end_iso: &str) -> Result<Self, DateRangeError> {
        let start = day_format::parse_iso(start_iso)?;
        let end = day_format::parse_iso(end_iso)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// External ISO form of the start endpoint.
    pub fn start_iso(&self) -> String {
        day_format::format_iso(self.start)
    }

    /// External ISO form of the end endpoint.
    pub fn end_iso(&self) -> String {
        day_format::format_iso(self.end)
    }

    /// Move the start endpoint.
    ///
    /// Callers keep `day` within the selectable bounds (`day <= end`); the
    /// picker widgets never offer anything outside them.
    pub fn set_start(&mut self, day: NaiveDate) {
        debug_assert!(day <= self.end, "start moved past end");
        self.start = day;
    }

    /// Move the end endpoint. Counterpart of [`DateRange::set_start`],
    /// with `day >= start`.
    pub fn set_end(&mut self, day: NaiveDate) {
        debug_assert!(day >= self.start, "end moved before start");
        self.end = day;
    }

    /// Latest day the start picker may offer (capped at the current end).
    pub fn max_selectable_start(&self) -> NaiveDate {
        self.end
    }

    /// Earliest day the end picker may offer (floored at the current start).
    pub fn min_selectable_end(&self) -> NaiveDate {
        self.start
    }

    pub fn is_selectable_start(&self, day: NaiveDate) -> bool {
        day <= self.end
    }

    pub fn is_selectable_end(&self, day: NaiveDate) -> bool {
        day >= self.start
    }
}

/// External form of [`DateRange`]: bare endpoints, ordering unchecked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RangeEndpoints {
    start: NaiveDate,
    end: NaiveDate,
}

impl From<DateRange> for RangeEndpoints {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl TryFrom<RangeEndpoints> for DateRange {
    type Error = DateRangeError;

    fn try_from(raw: RangeEndpoints) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Endpoints arrived in the wrong order.
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
    /// An endpoint string was not a valid calendar day.
    BadEndpoint(DayFormatError),
}

impl From<DayFormatError> for DateRangeError {
    fn from(err: DayFormatError) -> Self {
        DateRangeError::BadEndpoint(err)
    }
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::StartAfterEnd { start, end } => {
                write!(f, "range start {} is after its end {}", start, end)
            }
            DateRangeError::BadEndpoint(err) => write!(f, "invalid range endpoint: {}", err),
        }
    }
}

impl std::error::Error for DateRangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DateRangeError::BadEndpoint(err) => Some(err),
            DateRangeError::StartAfterEnd { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dom).unwrap()
    }

    #[test]
    fn test_week_ending_default() {
        // Mounting the page on 2024-06-10 selects the week leading up to it
        let range = DateRange::week_ending(day(2024, 6, 10));
        assert_eq!(range.start(), day(2024, 6, 3));
        assert_eq!(range.end(), day(2024, 6, 10));
        assert_eq!(range.start_iso(), "2024-06-03");
        assert_eq!(range.end_iso(), "2024-06-10");
    }

    #[test]
    fn test_week_ending_crosses_month_boundary() {
        let range = DateRange::week_ending(day(2024, 3, 4));
        assert_eq!(range.start(), day(2024, 2, 26));
    }

    #[test]
    fn test_new_rejects_inverted_endpoints() {
        let err = DateRange::new(day(2024, 6, 10), day(2024, 6, 3)).unwrap_err();
        assert!(matches!(err, DateRangeError::StartAfterEnd { .. }));
    }

    #[test]
    fn test_new_accepts_equal_endpoints() {
        let range = DateRange::new(day(2024, 6, 3), day(2024, 6, 3)).unwrap();
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn test_set_start_updates_endpoint_and_keeps_ordering() {
        let mut range = DateRange::week_ending(day(2024, 6, 10));
        range.set_start(day(2024, 6, 8));
        assert_eq!(range.start(), day(2024, 6, 8));
        assert!(range.start() <= range.end());
    }

    #[test]
    fn test_set_start_is_idempotent() {
        let mut range = DateRange::week_ending(day(2024, 6, 10));
        let before = range;
        range.set_start(range.start());
        assert_eq!(range, before);
    }

    #[test]
    fn test_set_end_accepts_day_equal_to_start() {
        // Collapsing the range onto its start day is permitted
        let mut range = DateRange::parse("2024-06-03", "2024-06-10").unwrap();
        range.set_end(day(2024, 6, 3));
        assert_eq!(range.end(), day(2024, 6, 3));
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn test_selectable_bounds_follow_current_endpoints() {
        let range = DateRange::parse("2024-06-03", "2024-06-10").unwrap();
        assert_eq!(range.max_selectable_start(), day(2024, 6, 10));
        assert_eq!(range.min_selectable_end(), day(2024, 6, 3));

        assert!(range.is_selectable_start(day(2024, 6, 10)));
        assert!(!range.is_selectable_start(day(2024, 6, 11)));
        assert!(range.is_selectable_end(day(2024, 6, 3)));
        assert!(!range.is_selectable_end(day(2024, 6, 2)));
    }

    #[test]
    fn test_parse_propagates_endpoint_errors() {
        assert!(matches!(
            DateRange::parse("junk", "2024-06-10").unwrap_err(),
            DateRangeError::BadEndpoint(_)
        ));
        assert!(matches!(
            DateRange::parse("2024-06-10", "2024-06-03").unwrap_err(),
            DateRangeError::StartAfterEnd { .. }
        ));
    }

    #[test]
    fn test_serialized_form_uses_iso_days() {
        let range = DateRange::parse("2024-06-03", "2024-06-10").unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start":"2024-06-03","end":"2024-06-10"}"#);

        let back: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }

    #[test]
    fn test_deserialization_rejects_inverted_endpoints() {
        let json = r#"{"start":"2024-06-10","end":"2024-06-03"}"#;
        assert!(serde_json::from_str::<DateRange>(json).is_err());
    }
}
