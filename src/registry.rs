//! The employee registry.
//!
//! The registry owns every admitted employee for the duration of a run. It
//! prices records as they are admitted, enforces each role's capacity, and
//! answers the aggregate questions the company summary needs.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Diagnostic, DiagnosticCode, Employee, Name, RawRecord};

/// The outcome of offering a record to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// The record was validated, priced and stored.
    Admitted {
        /// Position of the employee in admission order.
        index: usize,
        /// Diagnostics raised while sanitizing the record.
        diagnostics: Vec<Diagnostic>,
    },
    /// The role's capacity was already reached; the record was discarded.
    Rejected {
        /// The name read from the discarded record.
        name: Name,
        /// The diagnostic reporting the rejection.
        diagnostic: Diagnostic,
    },
}

impl Admission {
    /// Returns true when the record was stored.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }

    /// Every diagnostic this admission produced.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Admission::Admitted { diagnostics, .. } => diagnostics.clone(),
            Admission::Rejected { diagnostic, .. } => vec![diagnostic.clone()],
        }
    }
}

/// A bounded, multi-role collection of priced employees.
///
/// # Example
///
/// ```
/// use payroll_engine::config::presets;
/// use payroll_engine::models::{BirthDate, Name, PersonalInfo, RawRecord};
/// use payroll_engine::registry::EmployeeRegistry;
/// use rust_decimal::Decimal;
///
/// let mut registry = EmployeeRegistry::new(presets::basic());
/// let record = RawRecord {
///     role: "manager".to_string(),
///     personal: PersonalInfo {
///         name: Name::new("Ada", "Lovelace"),
///         birth_date: BirthDate::new("December", 10, 1985),
///         sin: "123456789".to_string(),
///     },
///     pay_rate: Decimal::new(50, 0),
///     hours_worked: Decimal::ZERO,
///     sales: None,
///     line: 1,
/// };
///
/// assert!(registry.admit(record).unwrap().is_admitted());
/// assert_eq!(registry.total_pay(), Decimal::new(2000, 0));
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeRegistry {
    policy: PayrollPolicy,
    employees: Vec<Employee>,
    group_counts: HashMap<String, usize>,
}

impl EmployeeRegistry {
    /// Creates an empty registry for the given policy.
    pub fn new(policy: PayrollPolicy) -> Self {
        Self {
            policy,
            employees: Vec::new(),
            group_counts: HashMap::new(),
        }
    }

    /// The policy this registry admits employees under.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Validates, prices and stores a record if its role has room.
    ///
    /// Over-capacity records are discarded, not queued; the rejection
    /// carries the parsed name so it can be reported.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownRole`] when the record's role is not in
    /// the policy.
    pub fn admit(&mut self, record: RawRecord) -> EngineResult<Admission> {
        let role = self
            .policy
            .role(&record.role)
            .ok_or_else(|| EngineError::UnknownRole {
                token: record.role.clone(),
                line: record.line,
            })?
            .clone();

        let group = role.group_key().to_string();
        let count = self.group_counts.get(&group).copied().unwrap_or(0);
        if count >= role.capacity {
            let name = record.personal.name;
            let message = format!(
                "{} {} could not be stored as the company already has {} {} employees.",
                role.title, name, role.capacity, group
            );
            let diagnostic = Diagnostic::new(
                DiagnosticCode::CapacityExceeded,
                name.to_string(),
                role.title.as_str(),
                message,
            );
            warn!(
                employee = %name,
                role = %role.title,
                capacity = role.capacity,
                "{}",
                diagnostic.message
            );
            return Ok(Admission::Rejected { name, diagnostic });
        }

        let (employee, diagnostics) = Employee::price(record, &role, &self.policy.rules);
        debug!(
            employee = %employee.name(),
            role = %role.title,
            weekly_pay = %employee.weekly_pay(),
            "Admitted employee"
        );
        self.employees.push(employee);
        self.group_counts.insert(group, count + 1);

        Ok(Admission::Admitted {
            index: self.employees.len() - 1,
            diagnostics,
        })
    }

    /// Starts a new week for every employee: hours and sales become zero,
    /// pay rates are kept, and pay is recomputed.
    ///
    /// Salaried employees keep their full weekly pay; everyone else drops to
    /// zero. Calling it twice is the same as calling it once.
    pub fn reset_all(&mut self) {
        for employee in &mut self.employees {
            employee.reset();
        }
        debug!(employees = self.employees.len(), "Reset all employees");
    }

    /// Sum of the current weekly pay of every stored employee.
    pub fn total_pay(&self) -> Decimal {
        self.employees.iter().map(Employee::weekly_pay).sum()
    }

    /// Number of stored employees.
    pub fn count(&self) -> usize {
        self.employees.len()
    }

    /// Number of stored employees holding the given role.
    pub fn count_for(&self, role_token: &str) -> usize {
        self.employees
            .iter()
            .filter(|employee| employee.role().token == role_token)
            .count()
    }

    /// Stored employees in admission order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Mutable access to one stored employee, for rate, hours or sales changes.
    pub fn employee_mut(&mut self, index: usize) -> Option<&mut Employee> {
        self.employees.get_mut(index)
    }

    /// Stored employees grouped by role, in the policy's role order.
    pub fn employees_by_role(&self) -> impl Iterator<Item = &Employee> {
        self.policy.roles.iter().flat_map(move |role| {
            self.employees
                .iter()
                .filter(move |employee| employee.role().token == role.token)
        })
    }
}
