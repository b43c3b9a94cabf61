//! Record validation.
//!
//! Every pay-related field is checked against the policy rules before pay
//! is calculated. Invalid values are never rejected: they are replaced by
//! the rule's default (minimum wage for rates, zero for hours and sales) and
//! a [`Diagnostic`] naming the employee is produced and logged.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::PayRules;
use crate::models::{
    Diagnostic, DiagnosticCode, Name, PayScheme, RawRecord, RoleDefinition, format_amount,
};

/// A value after validation, with the diagnostic raised if it was clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized<T> {
    /// The value to use.
    pub value: T,
    /// Present when the input value was replaced.
    pub diagnostic: Option<Diagnostic>,
}

impl<T> Sanitized<T> {
    fn kept(value: T) -> Self {
        Self {
            value,
            diagnostic: None,
        }
    }

    fn clamped(value: T, diagnostic: Diagnostic) -> Self {
        warn!(
            code = ?diagnostic.code,
            employee = %diagnostic.employee,
            role = %diagnostic.role,
            "{}",
            diagnostic.message
        );
        Self {
            value,
            diagnostic: Some(diagnostic),
        }
    }

    /// Returns true when the input value was replaced.
    pub fn was_clamped(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Clamps an hourly pay rate into `[minimum_wage, maximum_company_wage]`.
///
/// Rates outside the range are replaced by the minimum wage, not the
/// nearest bound.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::sanitize_pay_rate;
/// use payroll_engine::config::presets;
/// use payroll_engine::models::Name;
/// use rust_decimal::Decimal;
///
/// let rules = presets::basic().rules;
/// let name = Name::new("Ada", "Lovelace");
///
/// let kept = sanitize_pay_rate(Decimal::new(50, 0), &rules, &name, "manager");
/// assert_eq!(kept.value, Decimal::new(50, 0));
/// assert!(!kept.was_clamped());
///
/// let clamped = sanitize_pay_rate(Decimal::new(200, 0), &rules, &name, "manager");
/// assert_eq!(clamped.value, Decimal::new(14, 0));
/// assert!(clamped.was_clamped());
/// ```
pub fn sanitize_pay_rate(
    pay_rate: Decimal,
    rules: &PayRules,
    name: &Name,
    role: &str,
) -> Sanitized<Decimal> {
    if pay_rate < rules.minimum_wage || pay_rate > rules.maximum_company_wage {
        let message = format!(
            "{} {} is earning ${} per hour. Pay rate will be set to ${} per hour.",
            role,
            name,
            format_amount(pay_rate),
            format_amount(rules.minimum_wage)
        );
        return Sanitized::clamped(
            rules.minimum_wage,
            Diagnostic::new(DiagnosticCode::PayRateOutOfRange, name.to_string(), role, message),
        );
    }
    Sanitized::kept(pay_rate)
}

/// Clamps hours worked to zero when they cannot be right.
///
/// Hours are replaced by zero when negative, when above the hours in a
/// week, or, for hourly-with-overtime roles, when above the legal ceiling.
/// Over-limit values become zero rather than the limit: such a report is
/// treated as wrong, not as long.
pub fn sanitize_hours(
    hours_worked: Decimal,
    scheme: &PayScheme,
    rules: &PayRules,
    name: &Name,
    role: &str,
) -> Sanitized<Decimal> {
    let (code, message) = if hours_worked < Decimal::ZERO {
        (
            DiagnosticCode::NegativeHours,
            format!(
                "{} {} is said to have worked '{}' hours. Hours will be set to 0.",
                role,
                name,
                format_amount(hours_worked)
            ),
        )
    } else if scheme.is_hourly_overtime() && hours_worked > rules.hourly_hours_ceiling {
        (
            DiagnosticCode::HoursExceedCeiling,
            format!(
                "{} {} has worked {} hours which is greater than the legal limit of {}. Hours will be set to 0.",
                role,
                name,
                format_amount(hours_worked),
                rules.hourly_hours_ceiling.normalize()
            ),
        )
    } else if hours_worked > rules.hours_in_week {
        (
            DiagnosticCode::HoursExceedWeek,
            format!(
                "{} {} has worked {} hours which is more than the {} hours in a week. Hours will be set to 0.",
                role,
                name,
                format_amount(hours_worked),
                rules.hours_in_week.normalize()
            ),
        )
    } else {
        return Sanitized::kept(hours_worked);
    };

    Sanitized::clamped(
        Decimal::ZERO,
        Diagnostic::new(code, name.to_string(), role, message),
    )
}

/// Clamps a negative sales amount to zero.
pub fn sanitize_sales(sales: Decimal, name: &Name, role: &str) -> Sanitized<Decimal> {
    if sales < Decimal::ZERO {
        let message = format!(
            "{} {} has ${} in sales. Sales will be set to $0.00.",
            role,
            name,
            format_amount(sales)
        );
        return Sanitized::clamped(
            Decimal::ZERO,
            Diagnostic::new(DiagnosticCode::NegativeSales, name.to_string(), role, message),
        );
    }
    Sanitized::kept(sales)
}

/// Decides whether a commissioned employee may earn commission this week.
///
/// When the policy sets `commission_requires_hours`, sales reported
/// alongside zero hours are treated as a data-entry error: the result is
/// `false` and a diagnostic is raised. Otherwise commission is always
/// allowed, since sales can close on contracts signed in an earlier week.
pub fn check_commission_eligibility(
    hours_worked: Decimal,
    sales: Decimal,
    rules: &PayRules,
    name: &Name,
    role: &str,
) -> Sanitized<bool> {
    if rules.commission_requires_hours && hours_worked.is_zero() && sales > Decimal::ZERO {
        let message = format!(
            "{} {} has worked 0 hours but is said to have earned ${} in sales. Commission has been set to 0.",
            role,
            name,
            format_amount(sales)
        );
        return Sanitized::clamped(
            false,
            Diagnostic::new(
                DiagnosticCode::CommissionWithoutHours,
                name.to_string(),
                role,
                message,
            ),
        );
    }
    Sanitized::kept(true)
}

/// The sanitized pay fields of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields {
    /// Hourly pay rate within the company range.
    pub pay_rate: Decimal,
    /// Plausible hours worked.
    pub hours_worked: Decimal,
    /// Non-negative sales (zero for roles without commission).
    pub sales: Decimal,
    /// Diagnostics raised, in field order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Validates every pay field of a raw record for the given role.
///
/// Commission eligibility is not decided here; it depends on the final
/// hours and sales and is rechecked whenever the employee is re-priced.
pub fn validate_fields(
    record: &RawRecord,
    role: &RoleDefinition,
    rules: &PayRules,
) -> ValidatedFields {
    let name = &record.personal.name;
    let mut diagnostics = Vec::new();

    let pay_rate = sanitize_pay_rate(record.pay_rate, rules, name, &role.title);
    diagnostics.extend(pay_rate.diagnostic);

    let hours_worked = sanitize_hours(record.hours_worked, &role.scheme, rules, name, &role.title);
    diagnostics.extend(hours_worked.diagnostic);

    let sales = if role.scheme.is_commissioned() {
        let sales = sanitize_sales(
            record.sales.unwrap_or(Decimal::ZERO),
            name,
            &role.title,
        );
        diagnostics.extend(sales.diagnostic);
        sales.value
    } else {
        Decimal::ZERO
    };

    ValidatedFields {
        pay_rate: pay_rate.value,
        hours_worked: hours_worked.value,
        sales,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;
    use crate::models::{BirthDate, PersonalInfo};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn name() -> Name {
        Name::new("Grace", "Hopper")
    }

    fn secretary() -> PayScheme {
        PayScheme::HourlyOvertime {
            threshold: dec("40"),
            multiplier: dec("1.5"),
        }
    }

    #[test]
    fn test_rate_at_bounds_is_kept() {
        let rules = presets::basic().rules;
        assert_eq!(sanitize_pay_rate(dec("14"), &rules, &name(), "manager").value, dec("14"));
        assert_eq!(sanitize_pay_rate(dec("100"), &rules, &name(), "manager").value, dec("100"));
    }

    #[test]
    fn test_rate_below_minimum_is_clamped_to_minimum() {
        let rules = presets::basic().rules;
        let result = sanitize_pay_rate(dec("13.99"), &rules, &name(), "secretary");
        assert_eq!(result.value, dec("14"));
        let diagnostic = result.diagnostic.unwrap();
        assert_eq!(diagnostic.code, DiagnosticCode::PayRateOutOfRange);
        assert_eq!(diagnostic.role, "secretary");
        assert!(diagnostic.message.contains("Grace Hopper"));
        assert!(diagnostic.message.contains("$13.99"));
        assert!(diagnostic.message.contains("$14.00"));
    }

    #[test]
    fn test_rate_above_maximum_is_clamped_to_minimum_not_maximum() {
        let rules = presets::basic().rules;
        let result = sanitize_pay_rate(dec("200"), &rules, &name(), "manager");
        assert_eq!(result.value, dec("14"));
    }

    #[test]
    fn test_negative_hours_become_zero() {
        let rules = presets::basic().rules;
        let result = sanitize_hours(dec("-3"), &PayScheme::Salaried, &rules, &name(), "manager");
        assert_eq!(result.value, Decimal::ZERO);
        assert_eq!(result.diagnostic.unwrap().code, DiagnosticCode::NegativeHours);
    }

    #[test]
    fn test_hours_over_week_become_zero() {
        let rules = presets::basic().rules;
        let result = sanitize_hours(dec("169"), &PayScheme::Salaried, &rules, &name(), "manager");
        assert_eq!(result.value, Decimal::ZERO);
        assert_eq!(result.diagnostic.unwrap().code, DiagnosticCode::HoursExceedWeek);
    }

    #[test]
    fn test_salaried_hours_over_ceiling_are_kept() {
        let rules = presets::basic().rules;
        let result = sanitize_hours(dec("65"), &PayScheme::Salaried, &rules, &name(), "manager");
        assert_eq!(result.value, dec("65"));
        assert!(!result.was_clamped());
    }

    #[test]
    fn test_hourly_hours_over_ceiling_become_zero_not_ceiling() {
        let rules = presets::basic().rules;
        let result = sanitize_hours(dec("65"), &secretary(), &rules, &name(), "secretary");
        assert_eq!(result.value, Decimal::ZERO);
        let diagnostic = result.diagnostic.unwrap();
        assert_eq!(diagnostic.code, DiagnosticCode::HoursExceedCeiling);
        assert!(diagnostic.message.contains("legal limit"));
    }

    #[test]
    fn test_hourly_hours_at_ceiling_are_kept() {
        let rules = presets::basic().rules;
        let result = sanitize_hours(dec("60"), &secretary(), &rules, &name(), "secretary");
        assert_eq!(result.value, dec("60"));
        assert!(!result.was_clamped());
    }

    #[test]
    fn test_hourly_hours_over_week_report_ceiling_once() {
        let rules = presets::basic().rules;
        let result = sanitize_hours(dec("200"), &secretary(), &rules, &name(), "secretary");
        assert_eq!(result.value, Decimal::ZERO);
        assert_eq!(result.diagnostic.unwrap().code, DiagnosticCode::HoursExceedCeiling);
    }

    #[test]
    fn test_negative_sales_become_zero() {
        let result = sanitize_sales(dec("-250"), &name(), "salesperson");
        assert_eq!(result.value, Decimal::ZERO);
        assert_eq!(result.diagnostic.unwrap().code, DiagnosticCode::NegativeSales);
    }

    #[test]
    fn test_zero_sales_are_kept() {
        let result = sanitize_sales(Decimal::ZERO, &name(), "salesperson");
        assert!(!result.was_clamped());
    }

    #[test]
    fn test_commission_without_hours_denied_when_required() {
        let rules = presets::basic().rules;
        let result = check_commission_eligibility(Decimal::ZERO, dec("1000"), &rules, &name(), "salesperson");
        assert!(!result.value);
        let diagnostic = result.diagnostic.unwrap();
        assert_eq!(diagnostic.code, DiagnosticCode::CommissionWithoutHours);
        assert!(diagnostic.message.contains("$1000.00"));
    }

    #[test]
    fn test_commission_without_hours_allowed_when_not_required() {
        let rules = presets::extended().rules;
        let result = check_commission_eligibility(Decimal::ZERO, dec("1000"), &rules, &name(), "senior salesperson");
        assert!(result.value);
        assert!(!result.was_clamped());
    }

    #[test]
    fn test_zero_hours_zero_sales_is_eligible() {
        let rules = presets::basic().rules;
        let result = check_commission_eligibility(Decimal::ZERO, Decimal::ZERO, &rules, &name(), "salesperson");
        assert!(result.value);
        assert!(!result.was_clamped());
    }

    #[test]
    fn test_validate_fields_collects_diagnostics_in_field_order() {
        let policy = presets::basic();
        let role = policy.role("salesperson").unwrap();
        let record = RawRecord {
            role: "salesperson".to_string(),
            personal: PersonalInfo {
                name: name(),
                birth_date: BirthDate::new("May", 1, 1970),
                sin: "987654321".to_string(),
            },
            pay_rate: dec("5"),
            hours_worked: dec("-1"),
            sales: Some(dec("-10")),
            line: 1,
        };

        let validated = validate_fields(&record, role, &policy.rules);

        assert_eq!(validated.pay_rate, dec("14"));
        assert_eq!(validated.hours_worked, Decimal::ZERO);
        assert_eq!(validated.sales, Decimal::ZERO);
        let codes: Vec<DiagnosticCode> = validated.diagnostics.iter().map(|d| d.code).collect();
        assert_eq!(
            codes,
            vec![
                DiagnosticCode::PayRateOutOfRange,
                DiagnosticCode::NegativeHours,
                DiagnosticCode::NegativeSales,
            ]
        );
    }

    #[test]
    fn test_validate_fields_ignores_sales_for_salaried() {
        let policy = presets::basic();
        let role = policy.role("manager").unwrap();
        let record = RawRecord {
            role: "manager".to_string(),
            personal: PersonalInfo {
                name: name(),
                birth_date: BirthDate::new("May", 1, 1970),
                sin: "987654321".to_string(),
            },
            pay_rate: dec("50"),
            hours_worked: dec("40"),
            sales: Some(dec("-10")),
            line: 1,
        };

        let validated = validate_fields(&record, role, &policy.rules);

        assert_eq!(validated.sales, Decimal::ZERO);
        assert!(validated.diagnostics.is_empty());
    }
}
