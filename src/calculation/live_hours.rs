//! Live hours for the active-crew dashboard.
//!
//! Unlike the report builders, everything here depends on the current time:
//! open entries are measured against `now`, and "today" is the UTC date of
//! `now`. Callers pass `now` in so the functions stay testable.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TimeEntry;

use super::rounding::round_hours;
use super::windows::ReportWindow;

/// An employee currently on the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveShift {
    /// The open time entry.
    pub entry_id: String,
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
    /// Hours on the clock so far.
    #[serde(with = "rust_decimal::serde::float")]
    pub hours_so_far: Decimal,
}

/// Snapshot of who is working right now and today's hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDashboard {
    /// The instant the snapshot was taken.
    pub as_of: DateTime<Utc>,
    /// The UTC date of `as_of`.
    pub date: NaiveDate,
    /// Open entries, longest-running first.
    pub active: Vec<ActiveShift>,
    /// Hours from shifts clocked in and out today.
    #[serde(with = "rust_decimal::serde::float")]
    pub completed_hours_today: Decimal,
    /// Completed hours plus the open shifts' hours so far.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_hours_today: Decimal,
}

/// Builds the dashboard snapshot at `now`.
///
/// `entries` may mix open and closed entries; closed entries only count when
/// they were clocked in today (UTC) and end after they start. Open entries
/// count in full regardless of the day they started.
///
/// # Example
///
/// ```
/// use crew_hours::calculation::build_active_dashboard;
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
///     clock_in_time: Utc.with_ymd_and_hms(2024, 1, 8, 8, 0, 0).unwrap(),
///     clock_out_time: None,
/// };
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 8, 10, 30, 0).unwrap();
/// let dashboard = build_active_dashboard(&[entry], now);
/// assert_eq!(dashboard.active[0].hours_so_far, Decimal::new(25, 1));
/// ```
pub fn build_active_dashboard(entries: &[TimeEntry], now: DateTime<Utc>) -> ActiveDashboard {
    let date = now.date_naive();
    let today = ReportWindow::day(date);

    let mut active: Vec<&TimeEntry> = entries.iter().filter(|e| e.is_open()).collect();
    active.sort_by(|a, b| (a.clock_in_time, &a.id).cmp(&(b.clock_in_time, &b.id)));

    let active_hours: Decimal = active.iter().map(|e| e.elapsed_hours(now)).sum();
    let completed_hours: Decimal = entries
        .iter()
        .filter(|e| e.has_valid_interval() && today.contains(e.clock_in_time))
        .filter_map(|e| e.worked_hours())
        .sum();

    ActiveDashboard {
        as_of: now,
        date,
        active: active
            .into_iter()
            .map(|e| ActiveShift {
                entry_id: e.id.clone(),
                employee_id: e.employee_id.clone(),
                employee_name: e.employee_name.clone(),
                job_site_id: e.job_site_id.clone(),
                job_site_name: e.job_site_name.clone(),
                clock_in_time: e.clock_in_time,
                hours_so_far: round_hours(e.elapsed_hours(now)),
            })
            .collect(),
        completed_hours_today: round_hours(completed_hours),
        total_hours_today: round_hours(completed_hours + active_hours),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn entry(id: &str, clock_in: DateTime<Utc>, clock_out: Option<DateTime<Utc>>) -> TimeEntry {
        TimeEntry {
            id: id.to_string(),
            employee_id: format!("emp_{}", id),
            employee_name: format!("Crew {}", id),
            job_site_id: "site_x".to_string(),
            job_site_name: "Site X".to_string(),
            clock_in_time: clock_in,
            clock_out_time: clock_out,
        }
    }

    #[test]
    fn test_empty_dashboard() {
        let now = at(2024, 1, 8, 12, 0);
        let dashboard = build_active_dashboard(&[], now);
        assert!(dashboard.active.is_empty());
        assert_eq!(dashboard.total_hours_today, Decimal::ZERO);
        assert_eq!(dashboard.date, now.date_naive());
    }

    #[test]
    fn test_active_and_completed_hours() {
        let now = at(2024, 1, 8, 12, 0);
        let entries = vec![
            entry("b", at(2024, 1, 8, 9, 0), None),
            entry("a", at(2024, 1, 8, 6, 0), None),
            entry("c", at(2024, 1, 8, 5, 0), Some(at(2024, 1, 8, 7, 30))),
            // yesterday's closed shift does not count
            entry("d", at(2024, 1, 7, 8, 0), Some(at(2024, 1, 7, 16, 0))),
        ];

        let dashboard = build_active_dashboard(&entries, now);
        assert_eq!(dashboard.active.len(), 2);
        assert_eq!(dashboard.active[0].entry_id, "a");
        assert_eq!(dashboard.active[0].hours_so_far, Decimal::new(6, 0));
        assert_eq!(dashboard.active[1].hours_so_far, Decimal::new(3, 0));
        assert_eq!(dashboard.completed_hours_today, Decimal::new(25, 1));
        assert_eq!(dashboard.total_hours_today, Decimal::new(115, 1));
    }

    #[test]
    fn test_overnight_open_entry_counts_in_full() {
        let now = at(2024, 1, 9, 2, 0);
        let entries = vec![entry("n", at(2024, 1, 8, 22, 0), None)];
        let dashboard = build_active_dashboard(&entries, now);
        assert_eq!(dashboard.total_hours_today, Decimal::new(4, 0));
    }

    #[test]
    fn test_result_changes_with_now() {
        let entries = vec![entry("a", at(2024, 1, 8, 8, 0), None)];
        let earlier = build_active_dashboard(&entries, at(2024, 1, 8, 9, 0));
        let later = build_active_dashboard(&entries, at(2024, 1, 8, 10, 0));
        assert!(later.total_hours_today > earlier.total_hours_today);
    }
}
