//! Salaried pay calculation.
//!
//! Salaried roles are paid the standard week at their hourly rate, however
//! many hours they report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// The result of a salaried pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalariedPayResult {
    /// The weekly salary.
    pub weekly_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the weekly pay of a salaried employee.
///
/// `weekly_pay = salaried_hours x pay_rate`. `hours_worked` is recorded in
/// the audit step only; it does not affect the result.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salaried_pay;
/// use rust_decimal::Decimal;
///
/// let result = calculate_salaried_pay(Decimal::new(50, 0), Decimal::new(40, 0), Decimal::ZERO, 1);
/// assert_eq!(result.weekly_pay, Decimal::new(2000, 0));
/// ```
pub fn calculate_salaried_pay(
    pay_rate: Decimal,
    salaried_hours: Decimal,
    hours_worked: Decimal,
    step_number: u32,
) -> SalariedPayResult {
    let weekly_pay = salaried_hours * pay_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "salaried_pay".to_string(),
        rule_name: "Salaried Pay".to_string(),
        input: serde_json::json!({
            "pay_rate": pay_rate.normalize().to_string(),
            "salaried_hours": salaried_hours.normalize().to_string(),
            "hours_worked": hours_worked.normalize().to_string()
        }),
        output: serde_json::json!({
            "weekly_pay": weekly_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} salaried hours x ${} = ${} (hours worked not used)",
            salaried_hours.normalize(),
            pay_rate.normalize(),
            weekly_pay.normalize()
        ),
    };

    SalariedPayResult {
        weekly_pay,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_manager_with_zero_hours_gets_full_week() {
        let result = calculate_salaried_pay(dec("50"), dec("40"), Decimal::ZERO, 1);
        assert_eq!(result.weekly_pay, dec("2000"));
        assert_eq!(result.audit_step.rule_id, "salaried_pay");
        assert_eq!(
            result.audit_step.output["weekly_pay"].as_str().unwrap(),
            "2000"
        );
    }

    #[test]
    fn test_hours_worked_do_not_change_pay() {
        let short = calculate_salaried_pay(dec("32.50"), dec("40"), dec("10"), 1);
        let long = calculate_salaried_pay(dec("32.50"), dec("40"), dec("70"), 1);
        assert_eq!(short.weekly_pay, long.weekly_pay);
        assert_eq!(short.weekly_pay, dec("1300"));
    }

    #[test]
    fn test_reasoning_shows_formula() {
        let result = calculate_salaried_pay(dec("50"), dec("40"), dec("45"), 3);
        assert!(result.audit_step.reasoning.contains("40 salaried hours"));
        assert!(result.audit_step.reasoning.contains("$2000"));
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.input["hours_worked"].as_str().unwrap(), "45");
    }
}
