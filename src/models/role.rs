//! Role definitions and pay schemes.
//!
//! Every role in a payroll policy is paid under exactly one [`PayScheme`].
//! The scheme carries the constants its formula needs, so calculation is a
//! single `match` on the scheme rather than a type hierarchy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a role's weekly pay is derived.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayScheme;
/// use rust_decimal::Decimal;
///
/// let secretary = PayScheme::HourlyOvertime {
///     threshold: Decimal::new(40, 0),
///     multiplier: Decimal::new(15, 1),
/// };
/// assert!(secretary.is_hourly_overtime());
/// assert_eq!(secretary.kind(), "hourly_overtime");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayScheme {
    /// Paid a fixed number of weekly hours regardless of hours worked.
    Salaried,
    /// Paid per hour, with a multiplier on hours beyond the threshold.
    HourlyOvertime {
        /// Hours worked before overtime applies.
        threshold: Decimal,
        /// Factor applied to the hourly rate for overtime hours.
        multiplier: Decimal,
    },
    /// Paid per hour up to the standard week, plus a share of sales.
    Commissioned {
        /// Fraction of sales paid as commission (e.g. 0.02).
        commission_rate: Decimal,
    },
}

impl PayScheme {
    /// Returns the snake_case name of the scheme, as used in policy files.
    pub fn kind(&self) -> &'static str {
        match self {
            PayScheme::Salaried => "salaried",
            PayScheme::HourlyOvertime { .. } => "hourly_overtime",
            PayScheme::Commissioned { .. } => "commissioned",
        }
    }

    /// Returns true for hourly-with-overtime roles.
    pub fn is_hourly_overtime(&self) -> bool {
        matches!(self, PayScheme::HourlyOvertime { .. })
    }

    /// Returns true for roles that earn commission on sales.
    pub fn is_commissioned(&self) -> bool {
        matches!(self, PayScheme::Commissioned { .. })
    }
}

/// A role employees can be admitted under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// The token identifying the role in input files (e.g. "human resource").
    pub token: String,
    /// The title printed in reports and diagnostics.
    pub title: String,
    /// How employees in this role are paid.
    pub scheme: PayScheme,
    /// Maximum number of employees admitted for this role's capacity group.
    pub capacity: usize,
    /// Name of a limit shared with other roles; defaults to the role token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_group: Option<String>,
}

impl RoleDefinition {
    /// Creates a role whose title equals its token and whose capacity is not shared.
    pub fn new(token: impl Into<String>, scheme: PayScheme, capacity: usize) -> Self {
        let token = token.into();
        Self {
            title: token.clone(),
            token,
            scheme,
            capacity,
            capacity_group: None,
        }
    }

    /// Places the role in a shared capacity group.
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.capacity_group = Some(group.into());
        self
    }

    /// The key under which this role's admissions are counted.
    pub fn group_key(&self) -> &str {
        self.capacity_group.as_deref().unwrap_or(&self.token)
    }
}
