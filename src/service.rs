//! Report generation service.
//!
//! [`ReportService`] ties the pieces together for one request: validate the
//! parameters, fetch closed entries for the report window, then build the
//! report. The JSON and CSV endpoints share it, so both fail the same way.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::calculation::{
    ActiveDashboard, ReportWindow, build_active_dashboard, build_daily_report,
    build_monthly_report, build_weekly_report,
};
use crate::config::ReportConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{DailyReport, MonthlyReport, PayPeriod, TimeEntry, WeeklyReport};
use crate::store::TimeEntryStore;

/// Earliest year a monthly report may be requested for.
pub const MIN_REPORT_YEAR: i32 = 2000;
/// Latest year a monthly report may be requested for.
pub const MAX_REPORT_YEAR: i32 = 2100;

/// Builds reports from the entries held in a [`TimeEntryStore`].
#[derive(Clone)]
pub struct ReportService {
    store: Arc<dyn TimeEntryStore>,
    config: ReportConfig,
}

impl ReportService {
    /// Creates a service over `store` using `config` for overtime and integrity rules.
    pub fn new(store: Arc<dyn TimeEntryStore>, config: ReportConfig) -> Self {
        Self { store, config }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<dyn TimeEntryStore> {
        &self.store
    }

    /// Returns the report configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Builds the daily report for `date`.
    pub async fn daily_report(
        &self,
        date: NaiveDate,
        employee_id: Option<&str>,
    ) -> EngineResult<DailyReport> {
        let window = ReportWindow::day(date);
        let entries = self.fetch(&window, employee_id).await?;
        build_daily_report(date, &entries, &self.config)
    }

    /// Builds the weekly report for the pay period containing `any_date`.
    pub async fn weekly_report(
        &self,
        any_date: NaiveDate,
        employee_id: Option<&str>,
    ) -> EngineResult<WeeklyReport> {
        let window = ReportWindow::pay_period(&PayPeriod::containing(any_date));
        let entries = self.fetch(&window, employee_id).await?;
        build_weekly_report(any_date, &entries, &self.config)
    }

    /// Builds the monthly report for `year`/`month`.
    ///
    /// # Errors
    ///
    /// The year must lie in [`MIN_REPORT_YEAR`]..=[`MAX_REPORT_YEAR`] and the
    /// month in 1–12; both are checked before the store is queried.
    pub async fn monthly_report(
        &self,
        year: i32,
        month: u32,
        employee_id: Option<&str>,
    ) -> EngineResult<MonthlyReport> {
        if !(MIN_REPORT_YEAR..=MAX_REPORT_YEAR).contains(&year) {
            return Err(EngineError::validation(
                "year",
                format!("must be between {} and {}", MIN_REPORT_YEAR, MAX_REPORT_YEAR),
            ));
        }
        let window = ReportWindow::month(year, month)?;
        let entries = self.fetch(&window, employee_id).await?;
        build_monthly_report(year, month, &entries, &self.config)
    }

    /// Snapshot of open entries and today's hours at `now`.
    pub async fn active_dashboard(&self, now: DateTime<Utc>) -> EngineResult<ActiveDashboard> {
        let today = ReportWindow::day(now.date_naive());
        let mut entries = self.store.active_entries().await?;
        entries.extend(self.fetch(&today, None).await?);
        Ok(build_active_dashboard(&entries, now))
    }

    async fn fetch(
        &self,
        window: &ReportWindow,
        employee_id: Option<&str>,
    ) -> EngineResult<Vec<TimeEntry>> {
        let started = Instant::now();
        let entries = self
            .store
            .fetch_closed_entries(window.start, window.end, employee_id)
            .await?;

        info!(
            window_start = %window.start,
            window_end = %window.end,
            employee_id = employee_id.unwrap_or("*"),
            entries = entries.len(),
            duration_us = started.elapsed().as_micros() as u64,
            "Fetched closed time entries"
        );
        Ok(entries)
    }
}
