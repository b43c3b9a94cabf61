//! A single payroll run.
//!
//! A run reads records one at a time, admits each into a fresh registry, prints the
//! reports, captures the company summary, and then resets the registry for
//! the next week. The summary printed last is the captured one.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, info_span};
use uuid::Uuid;

use crate::config::PayrollPolicy;
use crate::error::EngineResult;
use crate::input::RecordReader;
use crate::models::{Diagnostic, Employee, Name};
use crate::registry::{Admission, EmployeeRegistry};
use crate::report::{
    Cheques, CompanySummary, DiagnosticLines, EmployeeInformationReport, PayInformationReport,
};

/// Head count and total weekly pay at one point in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayrollSummary {
    /// Number of stored employees.
    pub employee_count: usize,
    /// Sum of their weekly pay.
    pub weekly_payout: Decimal,
}

impl PayrollSummary {
    /// Captures the registry's current totals.
    pub fn of(registry: &EmployeeRegistry) -> Self {
        Self {
            employee_count: registry.count(),
            weekly_payout: registry.total_pay(),
        }
    }
}

/// Serializable view of a processed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome<'a> {
    /// Identifier attached to the run's log events.
    pub run_id: Uuid,
    /// When processing started.
    pub started_at: DateTime<Utc>,
    /// Name of the policy the run was priced under.
    pub policy: &'a str,
    /// Totals before any reset.
    pub summary: PayrollSummary,
    /// Stored employees in admission order, with their breakdowns.
    pub employees: &'a [Employee],
    /// Diagnostics in the order they were raised.
    pub diagnostics: &'a [Diagnostic],
}

/// The state of one payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::config::presets;
/// use payroll_engine::payroll::PayrollRun;
/// use rust_decimal::Decimal;
///
/// let input = "manager\nLovelace\nAda\n123456789\nDecember\n10\n1985\n50\n0\nEND\n";
/// let mut run = PayrollRun::process(input, presets::basic()).unwrap();
/// assert_eq!(run.summary().weekly_payout, Decimal::new(2000, 0));
///
/// let text = run.issue_reports();
/// assert!(text.contains("Payable to Ada Lovelace in the amount of $2000.00."));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollRun {
    run_id: Uuid,
    started_at: DateTime<Utc>,
    registry: EmployeeRegistry,
    diagnostics: Vec<Diagnostic>,
    rejected: Vec<Name>,
}

impl PayrollRun {
    /// Starts an empty run under `policy`.
    pub fn new(policy: PayrollPolicy) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            registry: EmployeeRegistry::new(policy),
            diagnostics: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Reads `input` under `policy` and admits every record.
    ///
    /// # Errors
    ///
    /// Fails on an unknown role token or a malformed record. Use
    /// [`PayrollRun::new`] with [`PayrollRun::admit_input`] to keep what was
    /// admitted before the failure.
    pub fn process(input: &str, policy: PayrollPolicy) -> EngineResult<Self> {
        let mut run = Self::new(policy);
        run.admit_input(input)?;
        Ok(run)
    }

    /// Reads `input` one record at a time, admitting each as soon as it is read.
    ///
    /// # Errors
    ///
    /// Stops at the first unknown role token or malformed record. Records
    /// before it stay admitted and their diagnostics stay available through
    /// [`PayrollRun::diagnostics`].
    pub fn admit_input(&mut self, input: &str) -> EngineResult<()> {
        let span = info_span!(
            "payroll_run",
            run_id = %self.run_id,
            policy = %self.registry.policy().name
        );
        let _enter = span.enter();

        let policy = self.registry.policy().clone();
        for record in RecordReader::new(input, &policy) {
            match self.registry.admit(record?)? {
                Admission::Admitted {
                    diagnostics: raised,
                    ..
                } => self.diagnostics.extend(raised),
                Admission::Rejected { name, diagnostic } => {
                    self.diagnostics.push(diagnostic);
                    self.rejected.push(name);
                }
            }
        }

        info!(
            employees = self.registry.count(),
            rejected = self.rejected.len(),
            diagnostics = self.diagnostics.len(),
            weekly_payout = %self.registry.total_pay(),
            "Processed payroll input"
        );
        Ok(())
    }

    /// Identifier of this run.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// The registry holding every admitted employee.
    pub fn registry(&self) -> &EmployeeRegistry {
        &self.registry
    }

    /// Diagnostics raised while admitting records, in order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Names read from records discarded for lack of capacity.
    pub fn rejected(&self) -> &[Name] {
        &self.rejected
    }

    /// Current totals of the registry.
    pub fn summary(&self) -> PayrollSummary {
        PayrollSummary::of(&self.registry)
    }

    /// Serializable view of the run as it stands.
    pub fn outcome(&self) -> RunOutcome<'_> {
        RunOutcome {
            run_id: self.run_id,
            started_at: self.started_at,
            policy: &self.registry.policy().name,
            summary: self.summary(),
            employees: self.registry.employees(),
            diagnostics: &self.diagnostics,
        }
    }

    /// Renders the diagnostics, the three reports and the company summary,
    /// then resets every employee for the next week.
    ///
    /// The summary is captured before the reset, so it reports the week that
    /// was just paid.
    pub fn issue_reports(&mut self) -> String {
        let mut text = DiagnosticLines::new(&self.diagnostics).to_string();
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&PayInformationReport::new(&self.registry).to_string());
        text.push_str(&EmployeeInformationReport::new(&self.registry).to_string());
        text.push_str(&Cheques::new(&self.registry).to_string());

        let summary = self.summary();
        self.registry.reset_all();
        info!(
            run_id = %self.run_id,
            employees = summary.employee_count,
            weekly_payout = %summary.weekly_payout,
            "Issued payroll reports"
        );

        text.push_str(&CompanySummary::new(&summary).to_string());
        text
    }
}
