//! Report windows.
//!
//! Every report reads the closed entries whose clock-in falls inside a
//! half-open UTC window. This module builds those windows for a day, a
//! Monday–Saturday week, and a calendar month.

use chrono::{DateTime, Days, Month, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriod, start_of_day};

/// A half-open UTC time window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// First instant inside the window.
    pub start: DateTime<Utc>,
    /// First instant after the window.
    pub end: DateTime<Utc>,
}

impl ReportWindow {
    /// The window covering one UTC calendar day.
    pub fn day(date: NaiveDate) -> Self {
        ReportWindow {
            start: start_of_day(date),
            end: start_of_day(date + Days::new(1)),
        }
    }

    /// The window covering the pay period that contains `date`.
    ///
    /// Runs from the period's Monday up to, not including, the Sunday after
    /// its Saturday.
    pub fn pay_period(period: &PayPeriod) -> Self {
        let (start, end) = period.window();
        ReportWindow { start, end }
    }

    /// The window covering a calendar month.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `month` is not 1–12 or the year is
    /// outside chrono's range.
    ///
    /// # Example
    ///
    /// ```
    /// use crew_hours::calculation::ReportWindow;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let window = ReportWindow::month(2024, 12).unwrap();
    /// assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap());
    /// assert_eq!(window.end, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    /// ```
    pub fn month(year: i32, month: u32) -> EngineResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| EngineError::validation("month", format!("{year}-{month} is not a valid month")))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or_else(|| EngineError::validation("year", format!("{year} is out of range")))?;

        Ok(ReportWindow {
            start: start_of_day(first),
            end: start_of_day(next_first),
        })
    }

    /// Returns true if `instant` lies inside the window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// English name of a month number, e.g. `1` -> `"January"`.
pub fn month_name(month: u32) -> EngineResult<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .ok_or_else(|| EngineError::validation("month", "must be between 1 and 12"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_window() {
        let window = ReportWindow::day(date(2024, 2, 29));
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_window_is_half_open() {
        let window = ReportWindow::day(date(2024, 1, 8));
        assert!(window.contains(window.start));
        assert!(!window.contains(window.end));
        assert!(window.contains(window.end - chrono::Duration::milliseconds(1)));
    }

    #[test]
    fn test_pay_period_window_excludes_sunday() {
        let window = ReportWindow::pay_period(&PayPeriod::containing(date(2024, 1, 11)));
        assert!(window.contains(Utc.with_ymd_and_hms(2024, 1, 13, 23, 59, 59).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2024, 1, 14, 9, 0, 0).unwrap()));
    }

    #[test]
    fn test_month_window_february_leap_year() {
        let window = ReportWindow::month(2024, 2).unwrap();
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_month_is_validation_error() {
        assert!(matches!(
            ReportWindow::month(2024, 13),
            Err(EngineError::Validation { .. })
        ));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1).unwrap(), "January");
        assert_eq!(month_name(12).unwrap(), "December");
        assert!(month_name(0).is_err());
        assert!(month_name(13).is_err());
    }
}
