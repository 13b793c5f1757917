//! Time entry storage.
//!
//! Reports read closed entries through [`TimeEntryStore`]; the clock-in and
//! clock-out lifecycle writes through it. [`InMemoryTimeEntryStore`] backs the
//! server binary and the tests.

mod in_memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::TimeEntry;

pub use in_memory::InMemoryTimeEntryStore;

/// The data needed to open a time entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
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
}

/// Storage for time entries.
#[async_trait::async_trait]
pub trait TimeEntryStore: Send + Sync {
    /// Returns closed entries clocked in within `[window_start, window_end)`,
    /// optionally for one employee only.
    async fn fetch_closed_entries(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        employee_id: Option<&str>,
    ) -> EngineResult<Vec<TimeEntry>>;

    /// Returns every entry that has not been clocked out.
    async fn active_entries(&self) -> EngineResult<Vec<TimeEntry>>;

    /// Opens a new entry. Fails with a conflict if the employee already has
    /// an open entry.
    async fn clock_in(&self, entry: NewTimeEntry) -> EngineResult<TimeEntry>;

    /// Closes an open entry at `at`, which must be after its clock-in.
    async fn clock_out(&self, entry_id: &str, at: DateTime<Utc>) -> EngineResult<TimeEntry>;
}
