//! Hour aggregation.
//!
//! Folds closed time entries into nested totals in a single pass: by
//! employee (with a job-site breakdown), by job site (with an employee
//! breakdown) and, when asked, the same pair of groupings per Monday-keyed
//! pay period.
//!
//! Every map is keyed by the stable entity ID, never the display name, so two
//! employees sharing a name stay apart. Sums are kept unrounded.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::IntegrityPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{TimeEntry, monday_of};

/// A display name with the hours accumulated against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedHours {
    /// Display name of the entity, as first seen.
    pub name: String,
    /// Unrounded hours.
    pub hours: Decimal,
}

/// Accumulated hours for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeTotals {
    /// Display name of the employee, as first seen.
    pub employee_name: String,
    /// Unrounded hours across all job sites.
    pub hours: Decimal,
    /// Hours per job site, keyed by job site ID.
    pub job_sites: BTreeMap<String, NamedHours>,
}

/// Accumulated hours for one job site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSiteTotals {
    /// Display name of the job site, as first seen.
    pub job_site_name: String,
    /// Unrounded hours across all employees.
    pub hours: Decimal,
    /// Hours per employee, keyed by employee ID.
    pub employees: BTreeMap<String, NamedHours>,
}

/// Employee and job site groupings over one set of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourTotals {
    /// Unrounded hours across every entry.
    pub total_hours: Decimal,
    /// Totals keyed by employee ID.
    pub employees: BTreeMap<String, EmployeeTotals>,
    /// Totals keyed by job site ID.
    pub job_sites: BTreeMap<String, JobSiteTotals>,
}

impl HourTotals {
    fn add(&mut self, entry: &TimeEntry, hours: Decimal) {
        self.total_hours += hours;

        let employee = self
            .employees
            .entry(entry.employee_id.clone())
            .or_insert_with(|| EmployeeTotals {
                employee_name: entry.employee_name.clone(),
                hours: Decimal::ZERO,
                job_sites: BTreeMap::new(),
            });
        employee.hours += hours;
        add_named(&mut employee.job_sites, &entry.job_site_id, &entry.job_site_name, hours);

        let job_site = self
            .job_sites
            .entry(entry.job_site_id.clone())
            .or_insert_with(|| JobSiteTotals {
                job_site_name: entry.job_site_name.clone(),
                hours: Decimal::ZERO,
                employees: BTreeMap::new(),
            });
        job_site.hours += hours;
        add_named(&mut job_site.employees, &entry.employee_id, &entry.employee_name, hours);
    }
}

fn add_named(map: &mut BTreeMap<String, NamedHours>, id: &str, name: &str, hours: Decimal) {
    map.entry(id.to_string())
        .or_insert_with(|| NamedHours {
            name: name.to_string(),
            hours: Decimal::ZERO,
        })
        .hours += hours;
}

/// Options controlling an aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationOptions {
    /// Also group totals by the Monday of each entry's week.
    pub by_pay_period: bool,
    /// Handling of closed entries that do not end after they start.
    pub integrity_policy: IntegrityPolicy,
}

/// The result of aggregating a set of time entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// Groupings over all aggregated entries.
    pub totals: HourTotals,
    /// Groupings per pay period, keyed by the period's Monday. Empty unless
    /// [`AggregationOptions::by_pay_period`] is set.
    pub pay_periods: BTreeMap<NaiveDate, HourTotals>,
    /// IDs of the closed entries left out for inconsistent clock times.
    pub skipped_entry_ids: Vec<String>,
}

/// Aggregates closed time entries in one pass.
///
/// Open entries are ignored. A closed entry whose clock-out is not after its
/// clock-in is skipped with a warning under [`IntegrityPolicy::Skip`] and
/// fails the whole aggregation under [`IntegrityPolicy::Reject`].
///
/// # Errors
///
/// Returns [`EngineError::DataIntegrity`] for the first inconsistent entry
/// when the policy is `Reject`.
///
/// # Example
///
/// ```
/// use crew_hours::calculation::{aggregate_entries, AggregationOptions};
/// use crew_hours::models::TimeEntry;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let entry = TimeEntry {
///     id: "te_001".to_string(),
///     employee_id: "emp_a".to_string(),
///     employee_name: "Alex".to_string(),
///     job_site_id: "site_x".to_string(),
///     job_site_name: "Harbour Rd".to_string(),
///     clock_in_time: Utc.with_ymd_and_hms(2024, 1, 8, 8, 0, 0).unwrap(),
///     clock_out_time: Some(Utc.with_ymd_and_hms(2024, 1, 8, 16, 30, 0).unwrap()),
/// };
///
/// let aggregation = aggregate_entries(&[entry], AggregationOptions::default()).unwrap();
/// assert_eq!(aggregation.totals.total_hours, Decimal::new(85, 1));
/// assert_eq!(aggregation.totals.employees["emp_a"].job_sites["site_x"].hours, Decimal::new(85, 1));
/// ```
pub fn aggregate_entries<'a, I>(entries: I, options: AggregationOptions) -> EngineResult<Aggregation>
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    entries
        .into_iter()
        .try_fold(Aggregation::default(), |mut aggregation, entry| {
            let Some(hours) = entry.worked_hours() else {
                debug!(entry_id = %entry.id, "Ignoring open time entry");
                return Ok(aggregation);
            };

            if !entry.has_valid_interval() {
                match options.integrity_policy {
                    IntegrityPolicy::Reject => {
                        return Err(EngineError::DataIntegrity {
                            entry_id: entry.id.clone(),
                            message: format!(
                                "clock-out is not after clock-in ({} hours)",
                                hours.normalize()
                            ),
                        });
                    }
                    IntegrityPolicy::Skip => {
                        warn!(
                            entry_id = %entry.id,
                            employee_id = %entry.employee_id,
                            hours = %hours.normalize(),
                            "Skipping time entry whose clock-out is not after clock-in"
                        );
                        aggregation.skipped_entry_ids.push(entry.id.clone());
                        return Ok(aggregation);
                    }
                }
            }

            aggregation.totals.add(entry, hours);
            if options.by_pay_period {
                aggregation
                    .pay_periods
                    .entry(monday_of(entry.clock_in_date()))
                    .or_default()
                    .add(entry, hours);
            }

            Ok(aggregation)
        })
}
