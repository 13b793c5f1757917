//! Time entry model.
//!
//! This module defines the [`TimeEntry`] struct: a single clock-in/clock-out
//! interval for one employee at one job site.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Milliseconds in one hour.
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Returns the elapsed hours between two instants.
///
/// The result is negative when `end` precedes `start`; callers decide
/// whether that is an error.
///
/// # Example
///
/// ```
/// use crew_hours::models::hours_between;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 8, 8, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 8, 16, 30, 0).unwrap();
/// assert_eq!(hours_between(start, end), Decimal::new(85, 1));
/// ```
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Decimal {
    let millis = (end - start).num_milliseconds();
    Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR)
}

/// A clock-in/clock-out pair for an employee at a job site.
///
/// An entry without a `clock_out_time` is open (the employee is still on
/// the clock). Open entries never contribute to historical reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// Stable identifier of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    pub employee_name: String,
    /// Stable identifier of the job site.
    pub job_site_id: String,
    /// Display name of the job site.
    pub job_site_name: String,
    /// When the employee clocked in.
    pub clock_in_time: DateTime<Utc>,
    /// When the employee clocked out, if they have.
    #[serde(default)]
    pub clock_out_time: Option<DateTime<Utc>>,
}

impl TimeEntry {
    /// Returns true if the entry has not been clocked out.
    pub fn is_open(&self) -> bool {
        self.clock_out_time.is_none()
    }

    /// Returns the worked hours for a closed entry.
    ///
    /// Open entries return `None`. The value is not rounded and may be
    /// zero or negative for inconsistent data; see [`TimeEntry::has_valid_interval`].
    ///
    /// # Examples
    ///
    /// ```
    /// use crew_hours::models::TimeEntry;
    /// use chrono::{TimeZone, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeEntry {
    ///     id: "te_001".to_string(),
    ///     employee_id: "emp_a".to_string(),
    ///     employee_name: "Alex".to_string(),
    ///     job_site_id: "site_x".to_string(),
    ///     job_site_name: "Harbour Rd".to_string(),
    ///     clock_in_time: Utc.with_ymd_and_hms(2024, 1, 9, 8, 0, 0).unwrap(),
    ///     clock_out_time: Some(Utc.with_ymd_and_hms(2024, 1, 9, 20, 0, 0).unwrap()),
    /// };
    /// assert_eq!(entry.worked_hours(), Some(Decimal::new(12, 0)));
    /// ```
    pub fn worked_hours(&self) -> Option<Decimal> {
        self.clock_out_time
            .map(|clock_out| hours_between(self.clock_in_time, clock_out))
    }

    /// Returns true if the entry is closed and ends strictly after it starts.
    pub fn has_valid_interval(&self) -> bool {
        self.clock_out_time
            .is_some_and(|clock_out| clock_out > self.clock_in_time)
    }

    /// Hours on the clock as of `now`.
    ///
    /// Closed entries return their worked hours; open entries are measured
    /// against `now` and never go below zero. This depends on the wall clock
    /// and is only meant for live views, never for historical reports.
    pub fn elapsed_hours(&self, now: DateTime<Utc>) -> Decimal {
        match self.clock_out_time {
            Some(clock_out) => hours_between(self.clock_in_time, clock_out),
            None => hours_between(self.clock_in_time, now).max(Decimal::ZERO),
        }
    }

    /// The UTC calendar date the entry was clocked in on.
    pub fn clock_in_date(&self) -> NaiveDate {
        self.clock_in_time.date_naive()
    }
}
