//! Calculation logic for the crew hours engine.
//!
//! This module contains the pure reporting core: hour rounding, UTC report
//! windows, the weekly and monthly overtime split, the single-pass
//! aggregator, and the daily, weekly and monthly report builders. The live
//! dashboard computation ([`build_active_dashboard`]) depends on the current
//! time and sits beside it.

mod aggregator;
mod live_hours;
mod overtime;
mod report_builder;
mod rounding;
mod windows;

pub use aggregator::{
    Aggregation, AggregationOptions, EmployeeTotals, HourTotals, JobSiteTotals, NamedHours,
    aggregate_entries,
};
pub use live_hours::{ActiveDashboard, ActiveShift, build_active_dashboard};
pub use overtime::{OvertimeSplit, monthly_overtime, split_overtime};
pub use report_builder::{build_daily_report, build_monthly_report, build_weekly_report};
pub use rounding::{HOURS_DECIMAL_PLACES, round_hours};
pub use windows::{ReportWindow, month_name};
