//! Configuration types for report generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `reports.yaml`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default weekly overtime threshold in hours.
pub const DEFAULT_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// How the month-level employee overtime of a monthly report is computed.
///
/// The per-pay-period breakdowns always use the weekly rule. This policy
/// only decides the figures on the month's `employees` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyOvertimePolicy {
    /// One threshold applied to the whole month's total.
    #[default]
    WholeMonth,
    /// Sum of the regular/overtime splits of each pay period.
    PerPayPeriod,
}

/// What to do with a closed entry whose clock-out is not after its clock-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityPolicy {
    /// Leave the entry out, log a warning, and count it as skipped.
    #[default]
    Skip,
    /// Fail the whole report.
    Reject,
}

/// Overtime section of the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeConfig {
    /// Hours per pay period before overtime starts.
    #[serde(default = "default_threshold")]
    pub threshold_hours: Decimal,
    /// Month-level overtime policy.
    #[serde(default)]
    pub monthly_policy: MonthlyOvertimePolicy,
}

impl Default for OvertimeConfig {
    fn default() -> Self {
        Self {
            threshold_hours: DEFAULT_OVERTIME_THRESHOLD,
            monthly_policy: MonthlyOvertimePolicy::default(),
        }
    }
}

fn default_threshold() -> Decimal {
    DEFAULT_OVERTIME_THRESHOLD
}

/// Data integrity section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataIntegrityConfig {
    /// Handling of inconsistent closed entries.
    #[serde(default)]
    pub policy: IntegrityPolicy,
}

/// The complete report configuration.
///
/// # Example
///
/// ```
/// use crew_hours::config::{IntegrityPolicy, MonthlyOvertimePolicy, ReportConfig};
///
/// let config = ReportConfig::default();
/// assert_eq!(config.overtime.threshold_hours.to_string(), "40");
/// assert_eq!(config.overtime.monthly_policy, MonthlyOvertimePolicy::WholeMonth);
/// assert_eq!(config.data_integrity.policy, IntegrityPolicy::Skip);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Overtime settings.
    #[serde(default)]
    pub overtime: OvertimeConfig,
    /// Data integrity settings.
    #[serde(default)]
    pub data_integrity: DataIntegrityConfig,
}
