//! Configuration loading and management for the crew hours engine.
//!
//! This module loads the report configuration from YAML: the overtime
//! threshold, the monthly overtime policy, and the data integrity policy.
//!
//! # Example
//!
//! ```no_run
//! use crew_hours::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Monthly policy: {:?}", config.config().overtime.monthly_policy);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, REPORT_CONFIG_FILE};
pub use types::{
    DEFAULT_OVERTIME_THRESHOLD, DataIntegrityConfig, IntegrityPolicy, MonthlyOvertimePolicy,
    OvertimeConfig, ReportConfig,
};
