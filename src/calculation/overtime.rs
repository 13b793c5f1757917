//! Overtime split.
//!
//! Hours in a pay period up to the threshold (40 by default) are regular;
//! anything beyond is overtime. Daily reports never split overtime.
//!
//! The month-level figure on a monthly report is computed in one place,
//! [`monthly_overtime`], so its policy can change without touching the
//! weekly rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::MonthlyOvertimePolicy;

/// The result of splitting a period total into regular and overtime hours.
///
/// Values are unrounded; round them when they are emitted.
///
/// # Example
///
/// ```
/// use crew_hours::calculation::{split_overtime, OvertimeSplit};
/// use rust_decimal::Decimal;
///
/// let split = split_overtime(Decimal::new(45, 0), Decimal::new(40, 0));
/// assert_eq!(split, OvertimeSplit {
///     regular_hours: Decimal::new(40, 0),
///     overtime_hours: Decimal::new(5, 0),
///     total_hours: Decimal::new(45, 0),
///     has_overtime: true,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Hours up to the threshold.
    pub regular_hours: Decimal,
    /// Hours beyond the threshold.
    pub overtime_hours: Decimal,
    /// The hours that were split.
    pub total_hours: Decimal,
    /// Whether any overtime was worked.
    pub has_overtime: bool,
}

/// Splits `total_hours` at `threshold`.
///
/// `regular = min(total, threshold)`, `overtime = max(total - threshold, 0)`,
/// and overtime only exists when the total is strictly above the threshold.
pub fn split_overtime(total_hours: Decimal, threshold: Decimal) -> OvertimeSplit {
    let regular_hours = total_hours.min(threshold);
    let overtime_hours = (total_hours - threshold).max(Decimal::ZERO);

    OvertimeSplit {
        regular_hours,
        overtime_hours,
        total_hours,
        has_overtime: total_hours > threshold,
    }
}

/// Month-level overtime for one employee.
///
/// * `month_total` - the employee's hours over the whole month
/// * `period_totals` - the employee's hours in each pay period of the month
///
/// Under [`MonthlyOvertimePolicy::WholeMonth`] the threshold is applied once
/// to the month total, so an employee working 30 hours in each of four weeks
/// shows 80 hours of monthly overtime while none of the periods has any.
/// [`MonthlyOvertimePolicy::PerPayPeriod`] sums the per-period splits instead.
pub fn monthly_overtime<I>(
    policy: MonthlyOvertimePolicy,
    month_total: Decimal,
    period_totals: I,
    threshold: Decimal,
) -> OvertimeSplit
where
    I: IntoIterator<Item = Decimal>,
{
    match policy {
        MonthlyOvertimePolicy::WholeMonth => split_overtime(month_total, threshold),
        MonthlyOvertimePolicy::PerPayPeriod => {
            let (regular_hours, overtime_hours) = period_totals
                .into_iter()
                .map(|hours| split_overtime(hours, threshold))
                .fold((Decimal::ZERO, Decimal::ZERO), |(regular, overtime), split| {
                    (regular + split.regular_hours, overtime + split.overtime_hours)
                });

            OvertimeSplit {
                regular_hours,
                overtime_hours,
                total_hours: month_total,
                has_overtime: overtime_hours > Decimal::ZERO,
            }
        }
    }
}
