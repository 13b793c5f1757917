//! Request types for the crew hours API.
//!
//! Report parameters arrive as raw query strings and are validated here, so a
//! malformed value is rejected before any entries are fetched.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::store::NewTimeEntry;

/// Longest accepted employee or job site identifier.
const MAX_ID_LENGTH: usize = 128;

/// Query for `GET /reports/daily`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReportQuery {
    /// The day to report, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Restrict the report to one employee.
    pub employee_id: Option<String>,
}

/// Query for `GET /reports/weekly`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReportQuery {
    /// Any day in the target week, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Restrict the report to one employee.
    pub employee_id: Option<String>,
}

/// Query for `GET /reports/monthly`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportQuery {
    /// Four digit year.
    pub year: Option<String>,
    /// Month number, 1–12.
    pub month: Option<String>,
    /// Restrict the report to one employee.
    pub employee_id: Option<String>,
}

impl DailyReportQuery {
    /// Validated `(date, employee_id)`.
    pub fn parse(&self) -> EngineResult<(NaiveDate, Option<&str>)> {
        let date = parse_date("date", required("date", &self.date)?)?;
        Ok((date, parse_employee_id(&self.employee_id)?))
    }
}

impl WeeklyReportQuery {
    /// Validated `(start_date, employee_id)`.
    pub fn parse(&self) -> EngineResult<(NaiveDate, Option<&str>)> {
        let date = parse_date("startDate", required("startDate", &self.start_date)?)?;
        Ok((date, parse_employee_id(&self.employee_id)?))
    }
}

impl MonthlyReportQuery {
    /// Validated `(year, month, employee_id)`.
    ///
    /// Only the integer syntax is checked here; the ranges are enforced by
    /// [`crate::service::ReportService::monthly_report`].
    pub fn parse(&self) -> EngineResult<(i32, u32, Option<&str>)> {
        let year = parse_integer("year", required("year", &self.year)?)?;
        let month = parse_integer("month", required("month", &self.month)?)?;
        Ok((year, month, parse_employee_id(&self.employee_id)?))
    }
}

/// Request body for `POST /time-entries/clock-in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockInRequest {
    /// Stable identifier of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    pub employee_name: String,
    /// Stable identifier of the job site.
    pub job_site_id: String,
    /// Display name of the job site.
    pub job_site_name: String,
    /// Clock-in instant; the server time when absent.
    #[serde(default)]
    pub clock_in_time: Option<DateTime<Utc>>,
}

impl ClockInRequest {
    /// Validates the identifiers and resolves the clock-in instant.
    pub fn into_new_entry(self, now: DateTime<Utc>) -> EngineResult<NewTimeEntry> {
        check_id("employeeId", &self.employee_id)?;
        check_id("jobSiteId", &self.job_site_id)?;
        if self.employee_name.trim().is_empty() {
            return Err(EngineError::validation("employeeName", "must not be empty"));
        }
        if self.job_site_name.trim().is_empty() {
            return Err(EngineError::validation("jobSiteName", "must not be empty"));
        }

        Ok(NewTimeEntry {
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            job_site_id: self.job_site_id,
            job_site_name: self.job_site_name,
            clock_in_time: self.clock_in_time.unwrap_or(now),
        })
    }
}

/// Request body for `POST /time-entries/{id}/clock-out`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockOutRequest {
    /// Clock-out instant; the server time when absent.
    #[serde(default)]
    pub clock_out_time: Option<DateTime<Utc>>,
}

fn required<'a>(field: &str, value: &'a Option<String>) -> EngineResult<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(EngineError::validation(field, "is required")),
    }
}

/// Parses a strict `YYYY-MM-DD` date.
fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    let shape_ok = value.len() == 10
        && value.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(EngineError::validation(
            field,
            format!("'{}' is not a date in YYYY-MM-DD format", value),
        ));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        EngineError::validation(field, format!("'{}' is not a valid calendar date", value))
    })
}

fn parse_integer<T: std::str::FromStr>(field: &str, value: &str) -> EngineResult<T> {
    value
        .parse()
        .map_err(|_| EngineError::validation(field, format!("'{}' is not an integer", value)))
}

fn parse_employee_id(value: &Option<String>) -> EngineResult<Option<&str>> {
    match value.as_deref() {
        None => Ok(None),
        Some(id) => {
            check_id("employeeId", id)?;
            Ok(Some(id))
        }
    }
}

fn check_id(field: &str, id: &str) -> EngineResult<()> {
    if id.trim().is_empty() {
        return Err(EngineError::validation(field, "must not be empty"));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(EngineError::validation(
            field,
            format!("must be at most {} characters", MAX_ID_LENGTH),
        ));
    }
    if id.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(EngineError::validation(
            field,
            "must not contain whitespace or control characters",
        ));
    }
    Ok(())
}
