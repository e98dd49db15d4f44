//! Calendar month windows
//!
//! The dashboard reconciliation works on whole calendar months: all
//! transactions stamped within a month's window belong to that month, and a
//! budget belongs to a month when its date interval overlaps the window.
//! Windows are closed on both ends, spanning the first instant of day 1
//! through the last instant of the last day.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, identified by year and month number (1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Create a month from year and month number
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Get the month containing the given date
    ///
    /// The day of month is irrelevant; any reference date inside a month
    /// identifies that month.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the month containing the given timestamp
    pub fn containing_instant(instant: DateTime<Utc>) -> Self {
        Self::containing(instant.date_naive())
    }

    /// Get the current month (UTC clock)
    pub fn current() -> Self {
        Self::containing(Utc::now().date_naive())
    }

    /// First calendar day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).expect("valid date"))
    }

    /// Last calendar day of this month
    ///
    /// Derived as the first day of the following month minus one day, which
    /// handles 28/29/30/31-day months and the December rollover uniformly.
    pub fn last_day(&self) -> NaiveDate {
        let next_month_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month_first.expect("valid date") - Duration::days(1)
    }

    /// The closed time window spanning this whole month
    pub fn window(&self) -> MonthWindow {
        MonthWindow {
            start: self
                .first_day()
                .and_hms_opt(0, 0, 0)
                .expect("valid time")
                .and_utc(),
            end: self
                .last_day()
                .and_hms_milli_opt(23, 59, 59, 999)
                .expect("valid time")
                .and_utc(),
        }
    }

    /// The month immediately before this one
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The month immediately after this one
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Check if a date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse a month string in "YYYY-MM" form
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = parts[0]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }

        Ok(Self { year, month })
    }

    /// Format in a human-friendly way ("March 2024")
    pub fn friendly(&self) -> String {
        let month_names = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        format!("{} {}", month_names[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A closed time interval covering one calendar month
///
/// Both bounds are inclusive: `start` is day 1 at 00:00:00.000 and `end` is
/// the last day at 23:59:59.999.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    /// Check if a timestamp falls inside the window (both bounds inclusive)
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// First calendar day of the window
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Last calendar day of the window
    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_date(), self.end_date())
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_window_bounds() {
        let window = Month::new(2024, 3).window();
        assert_eq!(
            window.start_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            window.end_date(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        );
        assert_eq!(window.start.time().hour(), 0);
        assert_eq!(window.start.time().minute(), 0);
        assert_eq!(window.end.time().hour(), 23);
        assert_eq!(window.end.time().minute(), 59);
        assert_eq!(window.end.time().second(), 59);
    }

    #[test]
    fn test_leap_year_february() {
        // 2024 is a leap year, 2025 is not
        assert_eq!(
            Month::new(2024, 2).last_day(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            Month::new(2025, 2).last_day(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_december_window() {
        // The December window must not bleed into the next year
        let window = Month::new(2024, 12).window();
        assert_eq!(
            window.start_date(),
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
        );
        assert_eq!(
            window.end_date(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_prev_rolls_year_back() {
        // January's previous month is December of the prior year
        let jan = Month::new(2025, 1);
        assert_eq!(jan.prev(), Month::new(2024, 12));

        let prev_window = jan.prev().window();
        assert_eq!(
            prev_window.start_date(),
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
        );
        assert_eq!(
            prev_window.end_date(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_next_rolls_year_forward() {
        let dec = Month::new(2024, 12);
        assert_eq!(dec.next(), Month::new(2025, 1));
    }

    #[test]
    fn test_containing_ignores_day() {
        let mid = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();

        assert_eq!(Month::containing(mid), Month::new(2024, 3));
        assert_eq!(Month::containing(first), Month::containing(last));
    }

    #[test]
    fn test_window_contains_is_inclusive() {
        let window = Month::new(2024, 3).window();
        assert!(window.contains(window.start));
        assert!(window.contains(window.end));

        let before = window.start - Duration::milliseconds(1);
        let after = window.end + Duration::milliseconds(1);
        assert!(!window.contains(before));
        assert!(!window.contains(after));
    }

    #[test]
    fn test_parse_and_display() {
        let month = Month::parse("2024-03").unwrap();
        assert_eq!(month, Month::new(2024, 3));
        assert_eq!(month.to_string(), "2024-03");
        assert_eq!(month.friendly(), "March 2024");

        assert!(Month::parse("2024-13").is_err());
        assert!(Month::parse("nope").is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Month::new(2024, 12) < Month::new(2025, 1));
        assert!(Month::new(2025, 2) > Month::new(2025, 1));
    }

    #[test]
    fn test_serialization() {
        let month = Month::new(2025, 1);
        let json = serde_json::to_string(&month).unwrap();
        let deserialized: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, deserialized);
    }
}
