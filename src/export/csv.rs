//! CSV rendering for built reports.
//!
//! Text fields (employee and job site names, pay period labels) are escaped:
//! a value containing a comma, double quote or line break is wrapped in
//! double quotes with inner quotes doubled. Numeric fields are written with
//! two decimal places and never quoted.

use std::borrow::Cow;

use rust_decimal::Decimal;

use crate::models::{DailyReport, MonthlyReport, PayPeriod, WeeklyReport};

/// Header row of the daily export (one row per shift).
pub const DAILY_CSV_HEADER: &str = "Employee Name,Job Site,Hours Worked,Date";
/// Header row of the weekly export (one row per employee).
pub const WEEKLY_CSV_HEADER: &str =
    "Employee Name,Regular Hours,Overtime Hours,Total Hours,Overtime Flag,Job Sites";
/// Header row of the monthly export (one row per employee per pay period).
pub const MONTHLY_CSV_HEADER: &str =
    "Employee Name,Pay Period,Regular Hours,Overtime Hours,Total Hours,Overtime Flag,Job Sites";

/// Separator between job site names in a single cell.
const JOB_SITE_SEPARATOR: &str = "; ";

/// Escapes a text value for a CSV cell.
///
/// # Example
///
/// ```
/// use crew_hours::export::escape_csv_field;
///
/// assert_eq!(escape_csv_field("Harbour Rd"), "Harbour Rd");
/// assert_eq!(escape_csv_field(r#"O'Brien, "Big" Team"#), r#""O'Brien, ""Big"" Team""#);
/// ```
pub fn escape_csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// A report that can be exported as CSV.
pub trait CsvExport {
    /// The report type used in the file name: `daily`, `weekly` or `monthly`.
    fn report_type(&self) -> &'static str;

    /// The date or period the file name is keyed on.
    fn period_key(&self) -> String;

    /// Renders the report as CSV text, header row first.
    fn to_csv(&self) -> String;

    /// Suggested download name, `{type}-report-{date-or-period}.csv`.
    fn csv_filename(&self) -> String {
        format!("{}-report-{}.csv", self.report_type(), self.period_key())
    }
}

impl CsvExport for DailyReport {
    fn report_type(&self) -> &'static str {
        "daily"
    }

    fn period_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// One row per shift, not per employee total.
    fn to_csv(&self) -> String {
        let rows = self.shifts.iter().map(|shift| {
            format!(
                "{},{},{},{}",
                escape_csv_field(&shift.employee_name),
                escape_csv_field(&shift.job_site_name),
                hours_cell(shift.hours),
                shift.clock_in_time.format("%Y-%m-%d")
            )
        });
        render(DAILY_CSV_HEADER, rows)
    }
}

impl CsvExport for WeeklyReport {
    fn report_type(&self) -> &'static str {
        "weekly"
    }

    fn period_key(&self) -> String {
        self.week_start.format("%Y-%m-%d").to_string()
    }

    fn to_csv(&self) -> String {
        let rows = self.employees.iter().map(|employee| {
            let job_sites: Vec<&str> = employee
                .job_sites
                .iter()
                .map(|site| site.job_site_name.as_str())
                .collect();
            format!(
                "{},{},{},{},{},{}",
                escape_csv_field(&employee.employee_name),
                hours_cell(employee.regular_hours),
                hours_cell(employee.overtime_hours),
                hours_cell(employee.total_hours),
                flag_cell(employee.has_overtime),
                escape_csv_field(&job_sites.join(JOB_SITE_SEPARATOR))
            )
        });
        render(WEEKLY_CSV_HEADER, rows)
    }
}

impl CsvExport for MonthlyReport {
    fn report_type(&self) -> &'static str {
        "monthly"
    }

    fn period_key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month_number)
    }

    /// One row per employee per pay period, sorted by employee then period start.
    fn to_csv(&self) -> String {
        let mut rows: Vec<(&str, &str, PayPeriod, String)> = self
            .pay_periods
            .iter()
            .flat_map(|period| {
                let pay_period = PayPeriod {
                    start_date: period.period_start,
                    end_date: period.period_end,
                };
                period.employees.iter().map(move |employee| {
                    let job_sites: Vec<&str> = employee
                        .job_sites
                        .iter()
                        .map(|site| site.job_site_name.as_str())
                        .collect();
                    let line = format!(
                        "{},{},{},{},{},{},{}",
                        escape_csv_field(&employee.employee_name),
                        escape_csv_field(&pay_period.label()),
                        hours_cell(employee.regular_hours),
                        hours_cell(employee.overtime_hours),
                        hours_cell(employee.total_hours),
                        flag_cell(employee.has_overtime),
                        escape_csv_field(&job_sites.join(JOB_SITE_SEPARATOR))
                    );
                    (
                        employee.employee_name.as_str(),
                        employee.employee_id.as_str(),
                        pay_period,
                        line,
                    )
                })
            })
            .collect();
        rows.sort_by(|a, b| (a.0, a.1, a.2).cmp(&(b.0, b.1, b.2)));

        render(MONTHLY_CSV_HEADER, rows.into_iter().map(|(_, _, _, line)| line))
    }
}

fn render<I>(header: &str, rows: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut csv = String::from(header);
    csv.push('\n');
    for row in rows {
        csv.push_str(&row);
        csv.push('\n');
    }
    csv
}

fn hours_cell(hours: Decimal) -> String {
    format!("{:.2}", hours)
}

fn flag_cell(has_overtime: bool) -> &'static str {
    if has_overtime { "Yes" } else { "No" }
}
