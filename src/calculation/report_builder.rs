//! Report builders.
//!
//! Each builder restricts the given entries to its report window, aggregates
//! them, and shapes the totals into a daily, weekly or monthly report. The
//! builders are pure: the same entries and parameters always give the same
//! report.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::ReportConfig;
use crate::error::EngineResult;
use crate::models::{
    DailyEmployeeSummary, DailyReport, EmployeeHourSummary, EmployeeHours, JobSiteHourSummary,
    JobSiteHours, MonthlyReport, PayPeriod, PayPeriodReport, ShiftLine, TimeEntry, WeeklyReport,
};

use super::aggregator::{Aggregation, AggregationOptions, HourTotals, NamedHours, aggregate_entries};
use super::overtime::{OvertimeSplit, monthly_overtime, split_overtime};
use super::rounding::round_hours;
use super::windows::{ReportWindow, month_name};

/// Builds the report for one UTC calendar day.
///
/// Daily reports carry a single `hours_worked` per employee and no overtime
/// split. The individual shifts are kept on the report for the CSV export.
///
/// # Example
///
/// ```
/// use crew_hours::calculation::build_daily_report;
/// use crew_hours::config::ReportConfig;
/// use crew_hours::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// let entries: Vec<TimeEntry> = vec![];
/// let report = build_daily_report(date, &entries, &ReportConfig::default()).unwrap();
/// assert_eq!(report.total_hours, Decimal::ZERO);
/// assert!(report.employees.is_empty());
/// assert!(report.job_sites.is_empty());
/// ```
pub fn build_daily_report(
    date: NaiveDate,
    entries: &[TimeEntry],
    config: &ReportConfig,
) -> EngineResult<DailyReport> {
    let window = ReportWindow::day(date);
    let in_window = entries_in_window(entries, &window);
    let aggregation = aggregate_entries(in_window.iter().copied(), options(config, false))?;

    let mut shifts: Vec<ShiftLine> = in_window
        .iter()
        .filter(|entry| entry.has_valid_interval())
        .filter_map(|entry| {
            entry.worked_hours().map(|hours| ShiftLine {
                entry_id: entry.id.clone(),
                employee_name: entry.employee_name.clone(),
                job_site_name: entry.job_site_name.clone(),
                clock_in_time: entry.clock_in_time,
                hours: round_hours(hours),
            })
        })
        .collect();
    shifts.sort_by(|a, b| {
        (a.clock_in_time, &a.employee_name, &a.entry_id)
            .cmp(&(b.clock_in_time, &b.employee_name, &b.entry_id))
    });

    let mut employees: Vec<DailyEmployeeSummary> = aggregation
        .totals
        .employees
        .iter()
        .map(|(employee_id, employee)| DailyEmployeeSummary {
            employee_id: employee_id.clone(),
            employee_name: employee.employee_name.clone(),
            hours_worked: round_hours(employee.hours),
            job_sites: job_site_breakdown(&employee.job_sites),
        })
        .collect();
    employees.sort_by(|a, b| (&a.employee_name, &a.employee_id).cmp(&(&b.employee_name, &b.employee_id)));

    debug!(
        date = %date,
        entries = in_window.len(),
        employees = employees.len(),
        "Built daily report"
    );

    Ok(DailyReport {
        date,
        total_hours: round_hours(aggregation.totals.total_hours),
        employees,
        job_sites: job_site_summaries(&aggregation.totals),
        skipped_entries: aggregation.skipped_entry_ids.len(),
        shifts,
    })
}

/// Builds the report for the Monday–Saturday week containing `any_date`.
///
/// Overtime is split per employee against the configured threshold for the
/// week.
pub fn build_weekly_report(
    any_date: NaiveDate,
    entries: &[TimeEntry],
    config: &ReportConfig,
) -> EngineResult<WeeklyReport> {
    let period = PayPeriod::containing(any_date);
    let window = ReportWindow::pay_period(&period);
    let in_window = entries_in_window(entries, &window);
    let aggregation = aggregate_entries(in_window.iter().copied(), options(config, false))?;
    let threshold = config.overtime.threshold_hours;

    debug!(
        week_start = %period.start_date,
        entries = in_window.len(),
        employees = aggregation.totals.employees.len(),
        "Built weekly report"
    );

    Ok(WeeklyReport {
        week_start: period.start_date,
        week_end: period.end_date,
        total_hours: round_hours(aggregation.totals.total_hours),
        employees: employee_summaries(&aggregation.totals, |_, hours| {
            split_overtime(hours, threshold)
        }),
        job_sites: job_site_summaries(&aggregation.totals),
        skipped_entries: aggregation.skipped_entry_ids.len(),
    })
}

/// Builds the report for a calendar month.
///
/// Only entries clocked in during the month count. They are also bucketed by
/// the Monday of their week, so the first and last pay periods may be
/// partial and may start in the previous month; a Sunday entry lands in the
/// period of the Monday before it. Each pay period splits overtime on its
/// own; the month-level employee figures follow
/// [`crate::config::MonthlyOvertimePolicy`].
///
/// # Errors
///
/// Returns a validation error for a month outside 1–12, and a data integrity
/// error when an inconsistent entry is found under the `Reject` policy.
pub fn build_monthly_report(
    year: i32,
    month: u32,
    entries: &[TimeEntry],
    config: &ReportConfig,
) -> EngineResult<MonthlyReport> {
    let window = ReportWindow::month(year, month)?;
    let name = month_name(month)?;
    let in_window = entries_in_window(entries, &window);
    let aggregation = aggregate_entries(in_window.iter().copied(), options(config, true))?;
    let threshold = config.overtime.threshold_hours;
    let policy = config.overtime.monthly_policy;

    let pay_periods: Vec<PayPeriodReport> = aggregation
        .pay_periods
        .iter()
        .map(|(monday, totals)| {
            let period = PayPeriod::containing(*monday);
            PayPeriodReport {
                period_start: period.start_date,
                period_end: period.end_date,
                total_hours: round_hours(totals.total_hours),
                employees: employee_summaries(totals, |_, hours| split_overtime(hours, threshold)),
                job_sites: job_site_summaries(totals),
            }
        })
        .collect();

    let employees = employee_summaries(&aggregation.totals, |employee_id, hours| {
        monthly_overtime(
            policy,
            hours,
            period_hours(&aggregation, employee_id),
            threshold,
        )
    });

    debug!(
        year = year,
        month = month,
        entries = in_window.len(),
        pay_periods = pay_periods.len(),
        "Built monthly report"
    );

    Ok(MonthlyReport {
        month: name.to_string(),
        month_number: month,
        year,
        total_hours: round_hours(aggregation.totals.total_hours),
        pay_periods,
        employees,
        job_sites: job_site_summaries(&aggregation.totals),
        skipped_entries: aggregation.skipped_entry_ids.len(),
    })
}

fn options(config: &ReportConfig, by_pay_period: bool) -> AggregationOptions {
    AggregationOptions {
        by_pay_period,
        integrity_policy: config.data_integrity.policy,
    }
}

fn entries_in_window<'a>(entries: &'a [TimeEntry], window: &ReportWindow) -> Vec<&'a TimeEntry> {
    entries
        .iter()
        .filter(|entry| window.contains(entry.clock_in_time))
        .collect()
}

/// An employee's unrounded hours in each pay period of the aggregation.
fn period_hours<'a>(
    aggregation: &'a Aggregation,
    employee_id: &'a str,
) -> impl Iterator<Item = Decimal> + 'a {
    aggregation
        .pay_periods
        .values()
        .filter_map(move |totals| totals.employees.get(employee_id).map(|e| e.hours))
}

fn employee_summaries<F>(totals: &HourTotals, split: F) -> Vec<EmployeeHourSummary>
where
    F: Fn(&str, Decimal) -> OvertimeSplit,
{
    let mut summaries: Vec<EmployeeHourSummary> = totals
        .employees
        .iter()
        .map(|(employee_id, employee)| {
            let split = split(employee_id, employee.hours);
            EmployeeHourSummary {
                employee_id: employee_id.clone(),
                employee_name: employee.employee_name.clone(),
                regular_hours: round_hours(split.regular_hours),
                overtime_hours: round_hours(split.overtime_hours),
                total_hours: round_hours(split.total_hours),
                has_overtime: split.has_overtime,
                job_sites: job_site_breakdown(&employee.job_sites),
            }
        })
        .collect();
    summaries.sort_by(|a, b| (&a.employee_name, &a.employee_id).cmp(&(&b.employee_name, &b.employee_id)));
    summaries
}

fn job_site_summaries(totals: &HourTotals) -> Vec<JobSiteHourSummary> {
    let mut summaries: Vec<JobSiteHourSummary> = totals
        .job_sites
        .iter()
        .map(|(job_site_id, job_site)| JobSiteHourSummary {
            job_site_id: job_site_id.clone(),
            job_site_name: job_site.job_site_name.clone(),
            total_hours: round_hours(job_site.hours),
            employees: employee_breakdown(&job_site.employees),
        })
        .collect();
    summaries.sort_by(|a, b| (&a.job_site_name, &a.job_site_id).cmp(&(&b.job_site_name, &b.job_site_id)));
    summaries
}

fn job_site_breakdown(job_sites: &BTreeMap<String, NamedHours>) -> Vec<JobSiteHours> {
    let mut breakdown: Vec<JobSiteHours> = job_sites
        .iter()
        .map(|(job_site_id, named)| JobSiteHours {
            job_site_id: job_site_id.clone(),
            job_site_name: named.name.clone(),
            hours: round_hours(named.hours),
        })
        .collect();
    breakdown.sort_by(|a, b| (&a.job_site_name, &a.job_site_id).cmp(&(&b.job_site_name, &b.job_site_id)));
    breakdown
}

fn employee_breakdown(employees: &BTreeMap<String, NamedHours>) -> Vec<EmployeeHours> {
    let mut breakdown: Vec<EmployeeHours> = employees
        .iter()
        .map(|(employee_id, named)| EmployeeHours {
            employee_id: employee_id.clone(),
            employee_name: named.name.clone(),
            hours: round_hours(named.hours),
        })
        .collect();
    breakdown.sort_by(|a, b| (&a.employee_name, &a.employee_id).cmp(&(&b.employee_name, &b.employee_id)));
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IntegrityPolicy, MonthlyOvertimePolicy};
    use crate::error::EngineError;
    use chrono::{DateTime, TimeZone, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn shift(
        id: &str,
        employee: (&str, &str),
        site: (&str, &str),
        clock_in: DateTime<Utc>,
        hours: i64,
    ) -> TimeEntry {
        TimeEntry {
            id: id.to_string(),
            employee_id: employee.0.to_string(),
            employee_name: employee.1.to_string(),
            job_site_id: site.0.to_string(),
            job_site_name: site.1.to_string(),
            clock_in_time: clock_in,
            clock_out_time: Some(clock_in + chrono::Duration::hours(hours)),
        }
    }

    /// Employee A: Site X Monday 08:00–16:30, Site Y Tuesday 08:00–20:00.
    fn week_of_2024_01_08() -> Vec<TimeEntry> {
        vec![
            TimeEntry {
                id: "te_1".to_string(),
                employee_id: "emp_a".to_string(),
                employee_name: "Employee A".to_string(),
                job_site_id: "site_x".to_string(),
                job_site_name: "Site X".to_string(),
                clock_in_time: at(2024, 1, 8, 8, 0),
                clock_out_time: Some(at(2024, 1, 8, 16, 30)),
            },
            shift("te_2", ("emp_a", "Employee A"), ("site_y", "Site Y"), at(2024, 1, 9, 8, 0), 12),
        ]
    }

    #[test]
    fn test_weekly_report_scenario() {
        let report =
            build_weekly_report(date(2024, 1, 8), &week_of_2024_01_08(), &ReportConfig::default())
                .unwrap();

        assert_eq!(report.week_start, date(2024, 1, 8));
        assert_eq!(report.week_end, date(2024, 1, 13));
        assert_eq!(report.total_hours, dec("20.5"));

        let a = &report.employees[0];
        assert_eq!(a.employee_id, "emp_a");
        assert_eq!(a.regular_hours, dec("20.5"));
        assert_eq!(a.overtime_hours, Decimal::ZERO);
        assert_eq!(a.total_hours, dec("20.5"));
        assert!(!a.has_overtime);
        assert_eq!(a.job_sites.len(), 2);
        assert_eq!(a.job_sites[0].job_site_name, "Site X");
        assert_eq!(a.job_sites[0].hours, dec("8.5"));
        assert_eq!(a.job_sites[1].hours, dec("12"));

        assert_eq!(report.job_sites.len(), 2);
        assert_eq!(report.job_sites[1].employees[0].hours, dec("12"));
    }

    #[test]
    fn test_weekly_report_from_midweek_date() {
        let report =
            build_weekly_report(date(2024, 1, 12), &week_of_2024_01_08(), &ReportConfig::default())
                .unwrap();
        assert_eq!(report.week_start, date(2024, 1, 8));
        assert_eq!(report.total_hours, dec("20.5"));
    }

    #[test]
    fn test_weekly_overtime_at_45_hours() {
        let entries: Vec<TimeEntry> = (0..5)
            .map(|day| {
                shift(
                    &format!("te_{}", day),
                    ("emp_a", "Alex"),
                    ("site_x", "Site X"),
                    at(2024, 1, 8 + day, 6, 0),
                    9,
                )
            })
            .collect();

        let report =
            build_weekly_report(date(2024, 1, 8), &entries, &ReportConfig::default()).unwrap();
        let a = &report.employees[0];
        assert_eq!(a.total_hours, dec("45"));
        assert_eq!(a.regular_hours, dec("40"));
        assert_eq!(a.overtime_hours, dec("5"));
        assert!(a.has_overtime);
    }

    #[test]
    fn test_weekly_report_excludes_sunday_and_next_week() {
        let entries = vec![
            shift("sat", ("emp_a", "Alex"), ("site_x", "Site X"), at(2024, 1, 13, 8, 0), 4),
            shift("sun", ("emp_a", "Alex"), ("site_x", "Site X"), at(2024, 1, 14, 8, 0), 4),
            shift("mon", ("emp_a", "Alex"), ("site_x", "Site X"), at(2024, 1, 15, 8, 0), 4),
        ];
        let report =
            build_weekly_report(date(2024, 1, 8), &entries, &ReportConfig::default()).unwrap();
        assert_eq!(report.total_hours, dec("4"));
    }

    #[test]
    fn test_daily_report_empty_day() {
        let report =
            build_daily_report(date(2024, 1, 10), &week_of_2024_01_08(), &ReportConfig::default())
                .unwrap();
        assert_eq!(report.total_hours, Decimal::ZERO);
        assert!(report.employees.is_empty());
        assert!(report.job_sites.is_empty());
        assert!(report.shifts.is_empty());
    }

    #[test]
    fn test_daily_report_totals_and_shifts() {
        let mut entries = week_of_2024_01_08();
        entries.push(shift("te_3", ("emp_b", "Blair"), ("site_x", "Site X"), at(2024, 1, 8, 6, 0), 2));

        let report =
            build_daily_report(date(2024, 1, 8), &entries, &ReportConfig::default()).unwrap();
        assert_eq!(report.total_hours, dec("10.5"));
        assert_eq!(report.employees.len(), 2);
        assert_eq!(report.employees[0].employee_name, "Blair");
        assert_eq!(report.employees[1].hours_worked, dec("8.5"));
        assert_eq!(report.job_sites.len(), 1);
        assert_eq!(report.job_sites[0].total_hours, dec("10.5"));

        // shifts in clock-in order
        assert_eq!(report.shifts.len(), 2);
        assert_eq!(report.shifts[0].entry_id, "te_3");
        assert_eq!(report.shifts[1].hours, dec("8.5"));
    }

    #[test]
    fn test_daily_report_ignores_open_entries() {
        let mut entries = week_of_2024_01_08();
        entries.push(TimeEntry {
            clock_out_time: None,
            ..shift("open", ("emp_b", "Blair"), ("site_x", "Site X"), at(2024, 1, 8, 9, 0), 1)
        });

        let report =
            build_daily_report(date(2024, 1, 8), &entries, &ReportConfig::default()).unwrap();
        assert_eq!(report.total_hours, dec("8.5"));
        assert_eq!(report.employees.len(), 1);
    }

    #[test]
    fn test_skipped_entries_are_counted() {
        let mut entries = week_of_2024_01_08();
        entries.push(TimeEntry {
            clock_out_time: Some(at(2024, 1, 8, 7, 0)),
            ..shift("bad", ("emp_b", "Blair"), ("site_x", "Site X"), at(2024, 1, 8, 9, 0), 1)
        });

        let report =
            build_daily_report(date(2024, 1, 8), &entries, &ReportConfig::default()).unwrap();
        assert_eq!(report.skipped_entries, 1);
        assert_eq!(report.total_hours, dec("8.5"));
        assert_eq!(report.shifts.len(), 1);
    }

    #[test]
    fn test_reject_policy_fails_report() {
        let mut config = ReportConfig::default();
        config.data_integrity.policy = IntegrityPolicy::Reject;
        let mut entries = week_of_2024_01_08();
        entries.push(TimeEntry {
            clock_out_time: Some(at(2024, 1, 9, 7, 0)),
            ..shift("bad", ("emp_b", "Blair"), ("site_x", "Site X"), at(2024, 1, 9, 9, 0), 1)
        });

        let result = build_weekly_report(date(2024, 1, 8), &entries, &config);
        assert!(matches!(result, Err(EngineError::DataIntegrity { .. })));
    }

    #[test]
    fn test_rounding_happens_after_summing() {
        // Three 20-minute shifts sum to exactly one hour
        let entries: Vec<TimeEntry> = (0..3)
            .map(|i| TimeEntry {
                clock_out_time: Some(at(2024, 1, 8, 8 + i, 20)),
                ..shift(&format!("te_{}", i), ("emp_a", "Alex"), ("site_x", "Site X"), at(2024, 1, 8, 8 + i, 0), 0)
            })
            .collect();

        let report =
            build_daily_report(date(2024, 1, 8), &entries, &ReportConfig::default()).unwrap();
        assert_eq!(report.total_hours, dec("1.00"));
        assert_eq!(report.shifts[0].hours, dec("0.33"));
    }

    /// January 2024: Monday 2024-01-01 starts a period; Wednesday 2024-01-31
    /// sits in the period of Monday 2024-01-29, which ends in February.
    fn january_2024() -> Vec<TimeEntry> {
        let mut entries = Vec::new();
        // 30 hours in each of the four full weeks of January
        for (week, monday) in [1u32, 8, 15, 22].into_iter().enumerate() {
            for day in 0..3 {
                entries.push(shift(
                    &format!("w{}d{}", week, day),
                    ("emp_a", "Alex"),
                    ("site_x", "Site X"),
                    at(2024, 1, monday + day, 7, 0),
                    10,
                ));
            }
        }
        // Boundary week: Wednesday Jan 31 is in, Thursday Feb 1 is out
        entries.push(shift("jan31", ("emp_a", "Alex"), ("site_y", "Site Y"), at(2024, 1, 31, 8, 0), 8));
        entries.push(shift("feb1", ("emp_a", "Alex"), ("site_y", "Site Y"), at(2024, 2, 1, 8, 0), 8));
        // December entry from the week before is out
        entries.push(shift("dec31", ("emp_b", "Blair"), ("site_x", "Site X"), at(2023, 12, 31, 8, 0), 8));
        entries
    }

    #[test]
    fn test_monthly_report_pay_periods() {
        let report = build_monthly_report(2024, 1, &january_2024(), &ReportConfig::default()).unwrap();

        assert_eq!(report.month, "January");
        assert_eq!(report.month_number, 1);
        assert_eq!(report.year, 2024);
        assert_eq!(report.total_hours, dec("128"));
        assert_eq!(report.pay_periods.len(), 5);
        assert_eq!(report.pay_periods[0].period_start, date(2024, 1, 1));
        assert_eq!(report.pay_periods[0].employees[0].total_hours, dec("30"));
        assert!(!report.pay_periods[0].employees[0].has_overtime);

        // Boundary period is keyed by its Monday and only holds January days
        let last = &report.pay_periods[4];
        assert_eq!(last.period_start, date(2024, 1, 29));
        assert_eq!(last.period_end, date(2024, 2, 3));
        assert_eq!(last.total_hours, dec("8"));
        assert!(report.employees.iter().all(|e| e.employee_id != "emp_b"));
    }

    #[test]
    fn test_monthly_whole_month_overtime_preserved() {
        let report = build_monthly_report(2024, 1, &january_2024(), &ReportConfig::default()).unwrap();
        let a = &report.employees[0];
        assert_eq!(a.total_hours, dec("128"));
        assert_eq!(a.regular_hours, dec("40"));
        assert_eq!(a.overtime_hours, dec("88"));
        assert!(a.has_overtime);
        assert!(report.pay_periods.iter().all(|p| !p.employees[0].has_overtime));
    }

    #[test]
    fn test_monthly_per_pay_period_overtime_policy() {
        let mut config = ReportConfig::default();
        config.overtime.monthly_policy = MonthlyOvertimePolicy::PerPayPeriod;

        let report = build_monthly_report(2024, 1, &january_2024(), &config).unwrap();
        let a = &report.employees[0];
        assert_eq!(a.total_hours, dec("128"));
        assert_eq!(a.regular_hours, dec("128"));
        assert_eq!(a.overtime_hours, Decimal::ZERO);
        assert!(!a.has_overtime);
    }

    #[test]
    fn test_monthly_sunday_entry_joins_previous_monday_period() {
        let entries = vec![shift(
            "sun",
            ("emp_a", "Alex"),
            ("site_x", "Site X"),
            at(2024, 1, 14, 8, 0),
            5,
        )];
        let report = build_monthly_report(2024, 1, &entries, &ReportConfig::default()).unwrap();
        assert_eq!(report.pay_periods.len(), 1);
        assert_eq!(report.pay_periods[0].period_start, date(2024, 1, 8));
        assert_eq!(report.pay_periods[0].total_hours, dec("5"));
    }

    #[test]
    fn test_monthly_report_empty_month() {
        let report = build_monthly_report(2024, 6, &january_2024(), &ReportConfig::default()).unwrap();
        assert_eq!(report.month, "June");
        assert_eq!(report.total_hours, Decimal::ZERO);
        assert!(report.pay_periods.is_empty());
        assert!(report.employees.is_empty());
        assert!(report.job_sites.is_empty());
    }

    #[test]
    fn test_monthly_report_invalid_month() {
        let result = build_monthly_report(2024, 0, &[], &ReportConfig::default());
        assert!(matches!(result, Err(EngineError::Validation { .. })));
    }
}
