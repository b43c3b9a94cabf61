//! Data-quality diagnostics.
//!
//! A [`Diagnostic`] records one recoverable problem found in an employee
//! record: the value was clamped (or the record discarded) and the run
//! carried on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies the kind of problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// Hourly pay rate outside the company wage range.
    PayRateOutOfRange,
    /// Negative hours worked.
    NegativeHours,
    /// More hours worked than there are hours in a week.
    HoursExceedWeek,
    /// Hourly employee reported more than the legal weekly ceiling.
    HoursExceedCeiling,
    /// Negative sales amount.
    NegativeSales,
    /// Sales reported by an employee who worked no hours.
    CommissionWithoutHours,
    /// The role's capacity was already reached; record discarded.
    CapacityExceeded,
}

/// A recoverable data-quality problem, naming the employee and role involved.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Diagnostic, DiagnosticCode};
///
/// let diagnostic = Diagnostic::new(
///     DiagnosticCode::NegativeSales,
///     "Ada Lovelace",
///     "salesperson",
///     "salesperson Ada Lovelace has $-5.00 in sales. Sales will be set to $0.00.",
/// );
/// assert_eq!(diagnostic.to_string(), diagnostic.message);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The kind of problem.
    pub code: DiagnosticCode,
    /// Display name of the employee ("First Last").
    pub employee: String,
    /// Title of the role the employee was read under.
    pub role: String,
    /// Human-readable description including the offending value and the fix applied.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(
        code: DiagnosticCode,
        employee: impl Into<String>,
        role: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            employee: employee.into(),
            role: role.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
