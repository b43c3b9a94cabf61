//! Configuration types for payroll policies.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML policy files or built from the presets.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayScheme, RoleDefinition};

/// Company-wide limits and rules applied to every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRules {
    /// Lowest hourly rate the company may pay; also the clamp value.
    pub minimum_wage: Decimal,
    /// Highest hourly rate the company may pay.
    pub maximum_company_wage: Decimal,
    /// Hours in a calendar week; more hours worked than this is impossible.
    pub hours_in_week: Decimal,
    /// Hours in a standard work week, paid to salaried roles and capping commissioned normal pay.
    pub standard_weekly_hours: Decimal,
    /// Legal weekly hours ceiling for hourly-with-overtime roles.
    pub hourly_hours_ceiling: Decimal,
    /// When set, sales reported with zero hours worked earn no commission.
    #[serde(default)]
    pub commission_requires_hours: bool,
}

/// A complete payroll policy: company rules plus the roles it employs.
///
/// Roles keep their declaration order, which is also the order reports
/// group employees in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPolicy {
    /// Human-readable name of the policy.
    pub name: String,
    /// Company-wide rules.
    pub rules: PayRules,
    /// Roles employees can be admitted under.
    pub roles: Vec<RoleDefinition>,
}

impl PayrollPolicy {
    /// Looks up a role by its input token.
    pub fn role(&self, token: &str) -> Option<&RoleDefinition> {
        self.roles.iter().find(|role| role.token == token)
    }

    /// Returns the admission limit for a capacity group, if any role uses it.
    pub fn group_capacity(&self, group: &str) -> Option<usize> {
        self.roles
            .iter()
            .find(|role| role.group_key() == group)
            .map(|role| role.capacity)
    }

    /// Returns a copy of the policy with the commission-without-hours rule overridden.
    pub fn with_commission_requires_hours(mut self, required: bool) -> Self {
        self.rules.commission_requires_hours = required;
        self
    }

    /// Checks that the policy is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] when the wage range is empty,
    /// hour limits are negative, no roles are defined, a role token repeats,
    /// an overtime threshold or commission rate is negative, or roles sharing
    /// a capacity group declare different capacities.
    pub fn validate(&self) -> EngineResult<()> {
        let rules = &self.rules;
        if rules.minimum_wage > rules.maximum_company_wage {
            return Err(invalid(format!(
                "minimum wage {} exceeds maximum company wage {}",
                rules.minimum_wage, rules.maximum_company_wage
            )));
        }
        if rules.minimum_wage < Decimal::ZERO {
            return Err(invalid("minimum wage cannot be negative"));
        }
        for (label, hours) in [
            ("hours_in_week", rules.hours_in_week),
            ("standard_weekly_hours", rules.standard_weekly_hours),
            ("hourly_hours_ceiling", rules.hourly_hours_ceiling),
        ] {
            if hours < Decimal::ZERO {
                return Err(invalid(format!("{} cannot be negative", label)));
            }
        }
        if self.roles.is_empty() {
            return Err(invalid("at least one role must be defined"));
        }

        let mut tokens = HashSet::new();
        let mut group_capacities: HashMap<&str, usize> = HashMap::new();
        for role in &self.roles {
            if role.token.trim().is_empty() {
                return Err(invalid("role tokens cannot be empty"));
            }
            if role.token == "END" {
                return Err(invalid("'END' is reserved as the input terminator"));
            }
            if !tokens.insert(role.token.as_str()) {
                return Err(invalid(format!("duplicate role token '{}'", role.token)));
            }
            match role.scheme {
                PayScheme::Salaried => {}
                PayScheme::HourlyOvertime {
                    threshold,
                    multiplier,
                } => {
                    if threshold < Decimal::ZERO || multiplier < Decimal::ZERO {
                        return Err(invalid(format!(
                            "role '{}' has a negative overtime threshold or multiplier",
                            role.token
                        )));
                    }
                }
                PayScheme::Commissioned { commission_rate } => {
                    if commission_rate < Decimal::ZERO {
                        return Err(invalid(format!(
                            "role '{}' has a negative commission rate",
                            role.token
                        )));
                    }
                }
            }
            match group_capacities.get(role.group_key()) {
                Some(&capacity) if capacity != role.capacity => {
                    return Err(invalid(format!(
                        "roles in capacity group '{}' declare different capacities",
                        role.group_key()
                    )));
                }
                Some(_) => {}
                None => {
                    group_capacities.insert(role.group_key(), role.capacity);
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidPolicy {
        message: message.into(),
    }
}
