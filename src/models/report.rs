//! Report models for the crew hours engine.
//!
//! This module contains the three report shapes (daily, weekly, monthly) and
//! the per-employee and per-job-site summaries they are built from. Every
//! hour figure here is already rounded to two decimal places and serializes
//! as a JSON number.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours an employee worked at one job site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSiteHours {
    /// Stable identifier of the job site.
    pub job_site_id: String,
    /// Display name of the job site.
    pub job_site_name: String,
    /// Hours worked there.
    #[serde(with = "rust_decimal::serde::float")]
    pub hours: Decimal,
}

/// Hours one employee contributed to a job site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeHours {
    /// Stable identifier of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    pub employee_name: String,
    /// Hours worked at the job site.
    #[serde(with = "rust_decimal::serde::float")]
    pub hours: Decimal,
}

/// Per-employee totals for a daily report. Daily reports carry no overtime split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEmployeeSummary {
    /// Stable identifier of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    pub employee_name: String,
    /// Hours worked on the day.
    #[serde(with = "rust_decimal::serde::float")]
    pub hours_worked: Decimal,
    /// Breakdown of the day's hours by job site.
    pub job_sites: Vec<JobSiteHours>,
}

/// Per-employee totals with the overtime split, used by weekly and monthly reports.
///
/// `regular_hours + overtime_hours == total_hours`, and `has_overtime` is
/// true exactly when `overtime_hours` is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeHourSummary {
    /// Stable identifier of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    pub employee_name: String,
    /// Hours up to the overtime threshold.
    #[serde(with = "rust_decimal::serde::float")]
    pub regular_hours: Decimal,
    /// Hours beyond the overtime threshold.
    #[serde(with = "rust_decimal::serde::float")]
    pub overtime_hours: Decimal,
    /// All hours worked in the period.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_hours: Decimal,
    /// Whether the total exceeded the threshold.
    pub has_overtime: bool,
    /// Breakdown of the hours by job site.
    pub job_sites: Vec<JobSiteHours>,
}

/// Per-job-site totals, with a breakdown by employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSiteHourSummary {
    /// Stable identifier of the job site.
    pub job_site_id: String,
    /// Display name of the job site.
    pub job_site_name: String,
    /// All hours worked at the site.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_hours: Decimal,
    /// Breakdown of the hours by employee.
    pub employees: Vec<EmployeeHours>,
}

/// One closed shift as it appears in the daily CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftLine {
    /// The time entry this line came from.
    pub entry_id: String,
    /// Display name of the employee.
    pub employee_name: String,
    /// Display name of the job site.
    pub job_site_name: String,
    /// When the shift started.
    pub clock_in_time: DateTime<Utc>,
    /// Hours worked in the shift.
    #[serde(with = "rust_decimal::serde::float")]
    pub hours: Decimal,
}

/// Hours worked on a single UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    /// The reported day.
    pub date: NaiveDate,
    /// Hours worked by everyone on the day.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_hours: Decimal,
    /// Per-employee totals.
    pub employees: Vec<DailyEmployeeSummary>,
    /// Per-job-site totals.
    pub job_sites: Vec<JobSiteHourSummary>,
    /// Closed entries excluded for inconsistent clock times.
    pub skipped_entries: usize,
    /// The individual shifts, in clock-in order. Only the CSV export uses these.
    #[serde(skip)]
    pub shifts: Vec<ShiftLine>,
}

/// Hours worked in one Monday–Saturday week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    /// The Monday the week starts on.
    pub week_start: NaiveDate,
    /// The Saturday the week ends on.
    pub week_end: NaiveDate,
    /// Hours worked by everyone in the week.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_hours: Decimal,
    /// Per-employee totals with the overtime split.
    pub employees: Vec<EmployeeHourSummary>,
    /// Per-job-site totals.
    pub job_sites: Vec<JobSiteHourSummary>,
    /// Closed entries excluded for inconsistent clock times.
    pub skipped_entries: usize,
}

/// A weekly-shaped breakdown of one pay period inside a monthly report.
///
/// Only the month's own days contribute, so the first and last periods of a
/// month can be partial and can start in the previous month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPeriodReport {
    /// The Monday the period starts on.
    pub period_start: NaiveDate,
    /// The Saturday the period ends on.
    pub period_end: NaiveDate,
    /// Hours worked by everyone in the period.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_hours: Decimal,
    /// Per-employee totals with the overtime split for this period.
    pub employees: Vec<EmployeeHourSummary>,
    /// Per-job-site totals for this period.
    pub job_sites: Vec<JobSiteHourSummary>,
}

/// Hours worked in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    /// English month name, e.g. "January".
    pub month: String,
    /// The month number, 1–12.
    pub month_number: u32,
    /// The year.
    pub year: i32,
    /// Hours worked by everyone in the month.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_hours: Decimal,
    /// One entry per pay period that has hours, ordered by start date.
    pub pay_periods: Vec<PayPeriodReport>,
    /// Month-level per-employee totals; overtime follows the configured monthly policy.
    pub employees: Vec<EmployeeHourSummary>,
    /// Per-job-site totals for the month.
    pub job_sites: Vec<JobSiteHourSummary>,
    /// Closed entries excluded for inconsistent clock times.
    pub skipped_entries: usize,
}
