//! Application state for the crew hours API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::service::ReportService;
use crate::store::TimeEntryStore;

/// Shared application state.
///
/// Holds the report service (and through it the time entry store) for all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    reports: ReportService,
}

impl AppState {
    /// Creates the state from a store and the loaded configuration.
    pub fn new(store: Arc<dyn TimeEntryStore>, config: &ConfigLoader) -> Self {
        Self {
            reports: ReportService::new(store, config.config().clone()),
        }
    }

    /// Returns the report service.
    pub fn reports(&self) -> &ReportService {
        &self.reports
    }

    /// Returns the time entry store.
    pub fn store(&self) -> &Arc<dyn TimeEntryStore> {
        self.reports.store()
    }
}
