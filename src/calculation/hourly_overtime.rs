//! Hourly-with-overtime pay calculation.
//!
//! Hours up to the role's threshold are paid at the hourly rate; hours
//! beyond it at the rate times the role's overtime multiplier.
//!
//! ## Role Parameters
//!
//! - Secretary: 40 hours, 1.5x
//! - Human resource: 44 hours, 2.0x

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

use super::hours_split::split_hours;

/// The result of an hourly-with-overtime pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyOvertimeResult {
    /// Hours paid at the plain rate.
    pub normal_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// `normal_hours x pay_rate`.
    pub normal_pay: Decimal,
    /// `overtime_hours x pay_rate x multiplier`.
    pub overtime_pay: Decimal,
    /// Audit steps: the hours split, then the pay calculation.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates normal and overtime pay for an hourly employee.
///
/// # Arguments
///
/// * `hours_worked` - Sanitized hours worked this week
/// * `pay_rate` - Sanitized hourly rate
/// * `threshold` - Hours before overtime applies
/// * `multiplier` - Overtime rate multiplier
/// * `step_number_start` - The first step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_overtime_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_hourly_overtime_pay(
///     Decimal::from_str("45").unwrap(),
///     Decimal::from_str("20").unwrap(),
///     Decimal::from_str("40").unwrap(),
///     Decimal::from_str("1.5").unwrap(),
///     1,
/// );
///
/// assert_eq!(result.normal_pay, Decimal::from_str("800").unwrap());
/// assert_eq!(result.overtime_pay, Decimal::from_str("150").unwrap());
/// ```
pub fn calculate_hourly_overtime_pay(
    hours_worked: Decimal,
    pay_rate: Decimal,
    threshold: Decimal,
    multiplier: Decimal,
    step_number_start: u32,
) -> HourlyOvertimeResult {
    let split = split_hours(hours_worked, threshold, step_number_start);
    let normal_hours = split.within_threshold;
    let overtime_hours = split.beyond_threshold;

    let overtime_rate = pay_rate * multiplier;
    let normal_pay = normal_hours * pay_rate;
    let overtime_pay = overtime_hours * overtime_rate;

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{}h x ${} = ${} normal; {}h x ${} x {} = ${} overtime",
            normal_hours.normalize(),
            pay_rate.normalize(),
            normal_pay.normalize(),
            overtime_hours.normalize(),
            pay_rate.normalize(),
            multiplier.normalize(),
            overtime_pay.normalize()
        )
    } else {
        format!(
            "{}h x ${} = ${} normal; no overtime",
            normal_hours.normalize(),
            pay_rate.normalize(),
            normal_pay.normalize()
        )
    };

    let pay_step = AuditStep {
        step_number: step_number_start + 1,
        rule_id: "hourly_overtime_pay".to_string(),
        rule_name: "Hourly Pay With Overtime".to_string(),
        input: serde_json::json!({
            "normal_hours": normal_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "pay_rate": pay_rate.normalize().to_string(),
            "multiplier": multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "normal_pay": normal_pay.normalize().to_string(),
            "overtime_rate": overtime_rate.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string()
        }),
        reasoning,
    };

    HourlyOvertimeResult {
        normal_hours,
        overtime_hours,
        normal_pay,
        overtime_pay,
        audit_steps: vec![split.audit_step, pay_step],
    }
}
