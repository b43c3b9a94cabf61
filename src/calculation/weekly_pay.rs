//! Weekly pay dispatch.
//!
//! Selects the calculator for a role's pay scheme and assembles the
//! [`PayBreakdown`], flooring the total at zero.

use rust_decimal::Decimal;

use crate::config::PayRules;
use crate::models::{AuditStep, PayBreakdown, PayScheme};

use super::commission::calculate_commissioned_pay;
use super::hourly_overtime::calculate_hourly_overtime_pay;
use super::salaried::calculate_salaried_pay;

/// The sanitized fields pay is calculated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayInputs {
    /// Hourly pay rate.
    pub pay_rate: Decimal,
    /// Hours worked this week.
    pub hours_worked: Decimal,
    /// Sales this week; ignored unless the scheme is commissioned.
    pub sales: Decimal,
    /// False when commission is withheld this week.
    pub commission_eligible: bool,
}

/// Calculates the weekly pay breakdown for one employee.
///
/// A pure function of its inputs: the same inputs always produce the same
/// breakdown, including the audit steps.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{PayInputs, calculate_weekly_pay};
/// use payroll_engine::config::presets;
/// use payroll_engine::models::PayScheme;
/// use rust_decimal::Decimal;
///
/// let rules = presets::basic().rules;
/// let inputs = PayInputs {
///     pay_rate: Decimal::new(50, 0),
///     hours_worked: Decimal::ZERO,
///     sales: Decimal::ZERO,
///     commission_eligible: true,
/// };
///
/// let breakdown = calculate_weekly_pay(&inputs, &PayScheme::Salaried, &rules);
/// assert_eq!(breakdown.weekly_pay, Decimal::new(2000, 0));
/// ```
pub fn calculate_weekly_pay(inputs: &PayInputs, scheme: &PayScheme, rules: &PayRules) -> PayBreakdown {
    let mut breakdown = PayBreakdown::zero();

    match *scheme {
        PayScheme::Salaried => {
            let result = calculate_salaried_pay(
                inputs.pay_rate,
                rules.standard_weekly_hours,
                inputs.hours_worked,
                1,
            );
            breakdown.normal_pay = result.weekly_pay;
            breakdown.audit_steps.push(result.audit_step);
        }
        PayScheme::HourlyOvertime {
            threshold,
            multiplier,
        } => {
            let result = calculate_hourly_overtime_pay(
                inputs.hours_worked,
                inputs.pay_rate,
                threshold,
                multiplier,
                1,
            );
            breakdown.normal_pay = result.normal_pay;
            breakdown.overtime_pay = result.overtime_pay;
            breakdown.audit_steps.extend(result.audit_steps);
        }
        PayScheme::Commissioned { commission_rate } => {
            let result = calculate_commissioned_pay(
                inputs.hours_worked,
                inputs.pay_rate,
                rules.standard_weekly_hours,
                inputs.sales,
                commission_rate,
                inputs.commission_eligible,
                1,
            );
            breakdown.normal_pay = result.normal_pay;
            breakdown.commission = result.commission;
            breakdown.audit_steps.extend(result.audit_steps);
        }
    }

    let total = breakdown.normal_pay + breakdown.overtime_pay + breakdown.commission;
    let weekly_pay = total.max(Decimal::ZERO);
    let reasoning = if total < Decimal::ZERO {
        format!("Total ${} is negative; weekly pay set to $0", total.normalize())
    } else {
        format!(
            "${} normal + ${} overtime + ${} commission = ${}",
            breakdown.normal_pay.normalize(),
            breakdown.overtime_pay.normalize(),
            breakdown.commission.normalize(),
            weekly_pay.normalize()
        )
    };

    let step_number = breakdown.audit_steps.len() as u32 + 1;
    breakdown.audit_steps.push(AuditStep {
        step_number,
        rule_id: "weekly_pay_total".to_string(),
        rule_name: "Weekly Pay Total".to_string(),
        input: serde_json::json!({
            "scheme": scheme.kind(),
            "normal_pay": breakdown.normal_pay.normalize().to_string(),
            "overtime_pay": breakdown.overtime_pay.normalize().to_string(),
            "commission": breakdown.commission.normalize().to_string()
        }),
        output: serde_json::json!({
            "weekly_pay": weekly_pay.normalize().to_string()
        }),
        reasoning,
    });
    breakdown.weekly_pay = weekly_pay;

    breakdown
}
