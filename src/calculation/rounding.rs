//! Hour rounding.
//!
//! Totals are accumulated unrounded; only figures leaving the engine are
//! rounded, so rounding error never compounds across entries.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on every emitted hour figure.
pub const HOURS_DECIMAL_PLACES: u32 = 2;

/// Rounds an hour figure to two decimal places, halves away from zero.
///
/// # Example
///
/// ```
/// use crew_hours::calculation::round_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_hours(Decimal::from_str("8.335").unwrap()), Decimal::from_str("8.34").unwrap());
/// assert_eq!(round_hours(Decimal::from_str("0.3333333").unwrap()), Decimal::from_str("0.33").unwrap());
/// ```
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(HOURS_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
