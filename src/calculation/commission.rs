//! Commissioned pay calculation.
//!
//! Commissioned roles are paid their hourly rate for hours up to the
//! standard week (never overtime), plus a fixed share of their sales.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

use super::hours_split::split_hours;

/// The result of a commissioned pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionedPayResult {
    /// Hours paid, capped at the standard week.
    pub paid_hours: Decimal,
    /// `paid_hours x pay_rate`.
    pub normal_pay: Decimal,
    /// `sales x commission_rate`, or zero when commission is withheld.
    pub commission: Decimal,
    /// Audit steps: the hours split, normal pay, then commission.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates normal pay and commission for a commissioned employee.
///
/// # Arguments
///
/// * `hours_worked` - Sanitized hours worked this week
/// * `pay_rate` - Sanitized hourly rate
/// * `standard_hours` - Hours in the standard week; hours beyond are unpaid
/// * `sales` - Sanitized sales amount
/// * `commission_rate` - The role's share of sales
/// * `commission_eligible` - False when commission is withheld for this week
/// * `step_number_start` - The first step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_commissioned_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = calculate_commissioned_pay(dec("40"), dec("15"), dec("40"), dec("1000"), dec("0.02"), true, 1);
///
/// assert_eq!(result.normal_pay, dec("600"));
/// assert_eq!(result.commission, dec("20"));
/// ```
pub fn calculate_commissioned_pay(
    hours_worked: Decimal,
    pay_rate: Decimal,
    standard_hours: Decimal,
    sales: Decimal,
    commission_rate: Decimal,
    commission_eligible: bool,
    step_number_start: u32,
) -> CommissionedPayResult {
    let split = split_hours(hours_worked, standard_hours, step_number_start);
    let paid_hours = split.within_threshold;
    let normal_pay = paid_hours * pay_rate;

    let normal_step = AuditStep {
        step_number: step_number_start + 1,
        rule_id: "commissioned_normal_pay".to_string(),
        rule_name: "Commissioned Normal Pay".to_string(),
        input: serde_json::json!({
            "paid_hours": paid_hours.normalize().to_string(),
            "pay_rate": pay_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "normal_pay": normal_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{}h x ${} = ${}",
            paid_hours.normalize(),
            pay_rate.normalize(),
            normal_pay.normalize()
        ),
    };

    let (commission, reasoning) = if commission_eligible {
        let commission = sales * commission_rate;
        (
            commission,
            format!(
                "${} sales x {} = ${}",
                sales.normalize(),
                commission_rate.normalize(),
                commission.normalize()
            ),
        )
    } else {
        (
            Decimal::ZERO,
            format!(
                "Commission withheld: ${} in sales reported with no hours worked",
                sales.normalize()
            ),
        )
    };

    let commission_step = AuditStep {
        step_number: step_number_start + 2,
        rule_id: "commission".to_string(),
        rule_name: "Sales Commission".to_string(),
        input: serde_json::json!({
            "sales": sales.normalize().to_string(),
            "commission_rate": commission_rate.normalize().to_string(),
            "commission_eligible": commission_eligible
        }),
        output: serde_json::json!({
            "commission": commission.normalize().to_string()
        }),
        reasoning,
    };

    CommissionedPayResult {
        paid_hours,
        normal_pay,
        commission,
        audit_steps: vec![split.audit_step, normal_step, commission_step],
    }
}
