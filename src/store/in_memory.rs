use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::TimeEntry;

use super::{NewTimeEntry, TimeEntryStore};

/// A [`TimeEntryStore`] held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryTimeEntryStore {
    entries: RwLock<Vec<TimeEntry>>,
}

impl InMemoryTimeEntryStore {
    /// Creates a store seeded with existing entries.
    pub fn with_entries(entries: Vec<TimeEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait::async_trait]
impl TimeEntryStore for InMemoryTimeEntryStore {
    async fn fetch_closed_entries(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        employee_id: Option<&str>,
    ) -> EngineResult<Vec<TimeEntry>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| !e.is_open())
            .filter(|e| e.clock_in_time >= window_start && e.clock_in_time < window_end)
            .filter(|e| employee_id.is_none_or(|id| e.employee_id == id))
            .cloned()
            .collect())
    }

    async fn active_entries(&self) -> EngineResult<Vec<TimeEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().filter(|e| e.is_open()).cloned().collect())
    }

    async fn clock_in(&self, entry: NewTimeEntry) -> EngineResult<TimeEntry> {
        let mut entries = self.entries.write().await;

        if let Some(open) = entries
            .iter()
            .find(|e| e.is_open() && e.employee_id == entry.employee_id)
        {
            return Err(EngineError::EntryConflict {
                message: format!(
                    "employee '{}' is already clocked in (entry '{}')",
                    entry.employee_id, open.id
                ),
            });
        }

        let created = TimeEntry {
            id: Uuid::new_v4().to_string(),
            employee_id: entry.employee_id,
            employee_name: entry.employee_name,
            job_site_id: entry.job_site_id,
            job_site_name: entry.job_site_name,
            clock_in_time: entry.clock_in_time,
            clock_out_time: None,
        };
        entries.push(created.clone());

        info!(
            entry_id = %created.id,
            employee_id = %created.employee_id,
            job_site_id = %created.job_site_id,
            "Clocked in"
        );
        Ok(created)
    }

    async fn clock_out(&self, entry_id: &str, at: DateTime<Utc>) -> EngineResult<TimeEntry> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| EngineError::EntryNotFound {
                entry_id: entry_id.to_string(),
            })?;

        if let Some(clock_out_time) = entry.clock_out_time {
            return Err(EngineError::EntryConflict {
                message: format!("entry '{}' was already clocked out at {}", entry_id, clock_out_time),
            });
        }
        if at <= entry.clock_in_time {
            return Err(EngineError::validation(
                "clockOutTime",
                "must be after the clock-in time",
            ));
        }

        entry.clock_out_time = Some(at);

        info!(entry_id = %entry_id, "Clocked out");
        Ok(entry.clone())
    }
}
