//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading report
//! configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ReportConfig;

/// File name of the report configuration inside the config directory.
pub const REPORT_CONFIG_FILE: &str = "reports.yaml";

/// Loads and provides access to report configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── reports.yaml   # Overtime threshold and report policies
/// ```
///
/// # Example
///
/// ```no_run
/// use crew_hours::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Overtime after {} hours", loader.overtime_threshold());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `reports.yaml` is missing
    /// - The file contains invalid YAML
    /// - The overtime threshold is not positive
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(REPORT_CONFIG_FILE);
        let path_str = config_path.display().to_string();

        let content = fs::read_to_string(&config_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let config: ReportConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        if config.overtime.threshold_hours <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: origin.to_string(),
                message: "overtime.threshold_hours must be positive".to_string(),
            });
        }

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying report configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Returns the overtime threshold in hours.
    pub fn overtime_threshold(&self) -> Decimal {
        self.config.overtime.threshold_hours
    }
}
