//! Pay breakdown models for the Payroll Engine.
//!
//! This module contains the [`PayBreakdown`] type produced by the pay
//! calculator and the [`AuditStep`] records explaining how each component
//! was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in a pay calculation, recording a rule decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The weekly pay of one employee, split into its components.
///
/// Only the components that apply to the employee's pay scheme are nonzero:
/// salaried employees only have `normal_pay`, hourly employees may add
/// `overtime_pay`, commissioned employees may add `commission`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown {
///     normal_pay: Decimal::new(800, 0),
///     overtime_pay: Decimal::new(150, 0),
///     commission: Decimal::ZERO,
///     weekly_pay: Decimal::new(950, 0),
///     audit_steps: vec![],
/// };
/// assert_eq!(breakdown.variable_pay(), Decimal::new(150, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Pay excluding overtime and commission.
    pub normal_pay: Decimal,
    /// Pay for hours beyond the overtime threshold.
    pub overtime_pay: Decimal,
    /// Commission earned on sales.
    pub commission: Decimal,
    /// Total pay for the week, never negative.
    pub weekly_pay: Decimal,
    /// Steps explaining how the amounts were derived.
    pub audit_steps: Vec<AuditStep>,
}

impl PayBreakdown {
    /// A breakdown with every amount at zero and no audit steps.
    pub fn zero() -> Self {
        Self {
            normal_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            commission: Decimal::ZERO,
            weekly_pay: Decimal::ZERO,
            audit_steps: vec![],
        }
    }

    /// The overtime or commission part of the weekly pay.
    pub fn variable_pay(&self) -> Decimal {
        self.overtime_pay + self.commission
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
    fn test_zero_breakdown_has_no_pay() {
        let breakdown = PayBreakdown::zero();
        assert_eq!(breakdown.weekly_pay, Decimal::ZERO);
        assert_eq!(breakdown.variable_pay(), Decimal::ZERO);
        assert!(breakdown.audit_steps.is_empty());
    }

    #[test]
    fn test_variable_pay_sums_overtime_and_commission() {
        let breakdown = PayBreakdown {
            normal_pay: dec("600"),
            overtime_pay: dec("0"),
            commission: dec("20"),
            weekly_pay: dec("620"),
            audit_steps: vec![],
        };
        assert_eq!(breakdown.variable_pay(), dec("20"));
    }

    #[test]
    fn test_breakdown_serializes_amounts_as_strings() {
        let breakdown = PayBreakdown {
            normal_pay: dec("800.00"),
            overtime_pay: dec("150.00"),
            commission: dec("0"),
            weekly_pay: dec("950.00"),
            audit_steps: vec![],
        };
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["weekly_pay"].as_str().unwrap(), "950.00");
        assert_eq!(json["overtime_pay"].as_str().unwrap(), "150.00");
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "salaried_pay".to_string(),
            rule_name: "Salaried Pay".to_string(),
            input: serde_json::json!({"pay_rate": "50"}),
            output: serde_json::json!({"weekly_pay": "2000"}),
            reasoning: "40 hours x $50 = $2000".to_string(),
        };
        let json = serde_json::to_string(&step).unwrap();
        let deserialized: AuditStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, deserialized);
    }
}
