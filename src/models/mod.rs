//! Core data models for the crew hours engine.
//!
//! This module contains the time entry model, the Monday–Saturday pay period,
//! and the report shapes produced by the report builders.

mod pay_period;
mod report;
mod time_entry;

pub use pay_period::{
    DAYS_MONDAY_TO_SATURDAY, PayPeriod, monday_of, saturday_of, start_of_day,
};
pub use report::{
    DailyEmployeeSummary, DailyReport, EmployeeHourSummary, EmployeeHours, JobSiteHourSummary,
    JobSiteHours, MonthlyReport, PayPeriodReport, ShiftLine, WeeklyReport,
};
pub use time_entry::{TimeEntry, hours_between};
