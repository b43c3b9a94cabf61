//! Calculation logic for the Payroll Engine.
//!
//! This module contains the record validator (clamping pay rate, hours and
//! sales to policy defaults), the hours threshold split, the three per-scheme
//! pay calculators (salaried, hourly with overtime, commissioned) and the
//! weekly pay dispatch that assembles a pay breakdown.

mod commission;
mod hourly_overtime;
mod hours_split;
mod salaried;
mod validation;
mod weekly_pay;

pub use commission::{CommissionedPayResult, calculate_commissioned_pay};
pub use hourly_overtime::{HourlyOvertimeResult, calculate_hourly_overtime_pay};
pub use hours_split::{HoursSplit, split_hours};
pub use salaried::{SalariedPayResult, calculate_salaried_pay};
pub use validation::{
    Sanitized, ValidatedFields, check_commission_eligibility, sanitize_hours, sanitize_pay_rate,
    sanitize_sales, validate_fields,
};
pub use weekly_pay::{PayInputs, calculate_weekly_pay};
