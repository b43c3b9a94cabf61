//! Two-decimal display of money and hours.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a value with exactly two decimal places, rounding half away from zero.
///
/// ```
/// use payroll_engine::models::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(95, 0)), "95.00");
/// assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
