//! Pay period model.
//!
//! The company works a fixed Monday–Saturday week. This module contains the
//! [`PayPeriod`] type and the [`monday_of`] / [`saturday_of`] helpers that map
//! any date onto that week. Periods are derived values and are never stored.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Number of days from a period's Monday to its Saturday.
pub const DAYS_MONDAY_TO_SATURDAY: u64 = 5;

/// Returns the Monday on or before `date`.
///
/// Sunday maps back six days to the Monday that started its week.
///
/// # Example
///
/// ```
/// use crew_hours::models::monday_of;
/// use chrono::NaiveDate;
///
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
/// assert_eq!(monday_of(sunday), NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
/// ```
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let days_back = date.weekday().num_days_from_monday();
    date - Days::new(u64::from(days_back))
}

/// Returns the Saturday that closes the week starting on `monday`.
pub fn saturday_of(monday: NaiveDate) -> NaiveDate {
    monday + Days::new(DAYS_MONDAY_TO_SATURDAY)
}

/// Midnight UTC at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// A Monday–Saturday pay period.
///
/// # Example
///
/// ```
/// use crew_hours::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::containing(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 1, 13).unwrap());
/// assert_eq!(period.label(), "2024-01-08 - 2024-01-13");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPeriod {
    /// The Monday the period starts on (inclusive).
    pub start_date: NaiveDate,
    /// The Saturday the period ends on (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Returns the pay period whose week contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start_date = monday_of(date);
        PayPeriod {
            start_date,
            end_date: saturday_of(start_date),
        }
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates, so the Sunday
    /// after the period is outside it.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The half-open UTC window `[Monday 00:00, Sunday 00:00)` for the period.
    pub fn window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            start_of_day(self.start_date),
            start_of_day(self.end_date + Days::new(1)),
        )
    }

    /// Human-readable label used in CSV exports.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )
    }
}
