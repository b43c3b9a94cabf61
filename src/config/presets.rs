//! Built-in payroll policies.
//!
//! `basic` is the small company (managers, secretaries, salespeople) and
//! `extended` the larger one with accountants, human resources and two
//! salesperson grades. The YAML files under `config/` describe the same
//! policies.

use rust_decimal::Decimal;

use crate::models::{PayScheme, RoleDefinition};

use super::types::{PayRules, PayrollPolicy};

/// Minimum hourly wage: $14.00.
pub const MINIMUM_WAGE: Decimal = Decimal::from_parts(14, 0, 0, false, 0);

/// Maximum hourly wage the company pays: $100.00.
pub const MAXIMUM_COMPANY_WAGE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Hours in a calendar week (24 x 7).
pub const HOURS_IN_WEEK: Decimal = Decimal::from_parts(168, 0, 0, false, 0);

/// Hours in a standard work week.
pub const STANDARD_WEEKLY_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Legal weekly hours ceiling for hourly employees.
pub const HOURLY_HOURS_CEILING: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

fn rules(commission_requires_hours: bool) -> PayRules {
    PayRules {
        minimum_wage: MINIMUM_WAGE,
        maximum_company_wage: MAXIMUM_COMPANY_WAGE,
        hours_in_week: HOURS_IN_WEEK,
        standard_weekly_hours: STANDARD_WEEKLY_HOURS,
        hourly_hours_ceiling: HOURLY_HOURS_CEILING,
        commission_requires_hours,
    }
}

fn secretary_scheme() -> PayScheme {
    PayScheme::HourlyOvertime {
        threshold: Decimal::new(40, 0),
        multiplier: Decimal::new(15, 1),
    }
}

/// The basic company: 5 managers, 7 secretaries, 15 salespeople.
///
/// Commission is not paid to salespeople reporting zero hours.
pub fn basic() -> PayrollPolicy {
    PayrollPolicy {
        name: "basic".to_string(),
        rules: rules(true),
        roles: vec![
            RoleDefinition::new("manager", PayScheme::Salaried, 5),
            RoleDefinition::new("secretary", secretary_scheme(), 7),
            RoleDefinition::new(
                "salesperson",
                PayScheme::Commissioned {
                    commission_rate: Decimal::new(2, 2),
                },
                15,
            ),
        ],
    }
}

/// The extended company: 4 managers, 3 accountants, 7 secretaries,
/// 2 human resource people and 30 salespeople across both grades.
///
/// Commission is paid on sales even with zero hours worked.
pub fn extended() -> PayrollPolicy {
    PayrollPolicy {
        name: "extended".to_string(),
        rules: rules(false),
        roles: vec![
            RoleDefinition::new("manager", PayScheme::Salaried, 4),
            RoleDefinition::new("accountant", PayScheme::Salaried, 3),
            RoleDefinition::new("secretary", secretary_scheme(), 7),
            RoleDefinition::new(
                "human resource",
                PayScheme::HourlyOvertime {
                    threshold: Decimal::new(44, 0),
                    multiplier: Decimal::new(20, 1),
                },
                2,
            ),
            RoleDefinition::new(
                "junior salesperson",
                PayScheme::Commissioned {
                    commission_rate: Decimal::new(2, 2),
                },
                30,
            )
            .in_group("salespeople"),
            RoleDefinition::new(
                "senior salesperson",
                PayScheme::Commissioned {
                    commission_rate: Decimal::new(3, 2),
                },
                30,
            )
            .in_group("salespeople"),
        ],
    }
}

/// Looks up a preset by name.
pub fn by_name(name: &str) -> Option<PayrollPolicy> {
    match name {
        "basic" => Some(basic()),
        "extended" => Some(extended()),
        _ => None,
    }
}
