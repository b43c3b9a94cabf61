//! Text reports for a payroll run.
//!
//! Each report is a small borrowing wrapper that implements
//! [`fmt::Display`], so callers can print it directly or collect it with
//! `to_string()`. Money and hours are always shown with two decimals.

use std::fmt;

use rust_decimal::Decimal;

use crate::models::{Diagnostic, Employee, PayScheme, format_amount};
use crate::payroll::PayrollSummary;
use crate::registry::EmployeeRegistry;

const RULE: &str = "--------------";

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{} {} {}", RULE, title, RULE)
}

/// Per-employee pay details: position, name, rate, hours and weekly pay,
/// with the normal/variable split when there is one.
#[derive(Debug, Clone, Copy)]
pub struct PayInformationReport<'a> {
    registry: &'a EmployeeRegistry,
}

impl<'a> PayInformationReport<'a> {
    /// Creates the report over every stored employee.
    pub fn new(registry: &'a EmployeeRegistry) -> Self {
        Self { registry }
    }
}

fn write_pay_information(f: &mut fmt::Formatter<'_>, employee: &Employee) -> fmt::Result {
    writeln!(f, "Position: {}", employee.role().title)?;
    writeln!(f, "Name: {}", employee.name().last_first())?;
    writeln!(f, "Hourly Wage: ${}", format_amount(employee.pay_rate()))?;
    writeln!(f, "Hours Worked: {}", format_amount(employee.hours_worked()))?;
    writeln!(f, "Weekly Pay: ${}", format_amount(employee.weekly_pay()))?;

    let breakdown = employee.breakdown();
    match employee.role().scheme {
        PayScheme::HourlyOvertime { .. } if breakdown.overtime_pay > Decimal::ZERO => {
            writeln!(f, "\tNormal Pay: ${}", format_amount(breakdown.normal_pay))?;
            writeln!(f, "\tOvertime Pay: ${}", format_amount(breakdown.overtime_pay))?;
        }
        PayScheme::Commissioned { .. } if breakdown.commission > Decimal::ZERO => {
            writeln!(f, "\tNormal Pay: ${}", format_amount(breakdown.normal_pay))?;
            writeln!(f, "\tCommission Earned: ${}", format_amount(breakdown.commission))?;
        }
        _ => {}
    }
    writeln!(f)
}

impl fmt::Display for PayInformationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "Printing Pay Information Report")?;
        for employee in self.registry.employees_by_role() {
            write_pay_information(f, employee)?;
        }
        Ok(())
    }
}

/// Identity details: name, position, birthday, SIN and hourly wage.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeInformationReport<'a> {
    registry: &'a EmployeeRegistry,
}

impl<'a> EmployeeInformationReport<'a> {
    /// Creates the report over every stored employee.
    pub fn new(registry: &'a EmployeeRegistry) -> Self {
        Self { registry }
    }
}

impl fmt::Display for EmployeeInformationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "Printing Employee Information Report")?;
        for employee in self.registry.employees_by_role() {
            let personal = employee.personal();
            writeln!(f, "Name: {}", personal.name.last_first())?;
            writeln!(f, "Position: {}", employee.role().title)?;
            writeln!(f, "Birthday: {}", personal.birth_date)?;
            writeln!(f, "SIN: {}", personal.sin)?;
            writeln!(f, "Hourly Wage: ${}", format_amount(employee.pay_rate()))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One cheque per employee owed a nonzero amount.
#[derive(Debug, Clone, Copy)]
pub struct Cheques<'a> {
    registry: &'a EmployeeRegistry,
}

impl<'a> Cheques<'a> {
    /// Creates the cheque run over every stored employee.
    pub fn new(registry: &'a EmployeeRegistry) -> Self {
        Self { registry }
    }
}

impl fmt::Display for Cheques<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "Printing Cheques")?;
        for employee in self.registry.employees_by_role() {
            if employee.weekly_pay().is_zero() {
                continue;
            }
            writeln!(
                f,
                "Payable to {} in the amount of ${}.",
                employee.name(),
                format_amount(employee.weekly_pay())
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Head count and weekly payout.
#[derive(Debug, Clone, Copy)]
pub struct CompanySummary<'a> {
    summary: &'a PayrollSummary,
}

impl<'a> CompanySummary<'a> {
    /// Creates the summary section for a captured run total.
    pub fn new(summary: &'a PayrollSummary) -> Self {
        Self { summary }
    }
}

impl fmt::Display for CompanySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "Company Summary")?;
        writeln!(f, "Number of Employees: {}", self.summary.employee_count)?;
        writeln!(
            f,
            "Weekly Payout: ${}",
            format_amount(self.summary.weekly_payout)
        )
    }
}

/// Diagnostics as `ERROR:` lines, in the order they were raised.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticLines<'a> {
    diagnostics: &'a [Diagnostic],
}

impl<'a> DiagnosticLines<'a> {
    /// Creates the listing.
    pub fn new(diagnostics: &'a [Diagnostic]) -> Self {
        Self { diagnostics }
    }
}

impl fmt::Display for DiagnosticLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in self.diagnostics {
            writeln!(f, "ERROR: {}", diagnostic)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;
    use crate::models::{BirthDate, Name, PersonalInfo, RawRecord};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(role: &str, first: &str, rate: &str, hours: &str, sales: Option<&str>) -> RawRecord {
        RawRecord {
            role: role.to_string(),
            personal: PersonalInfo {
                name: Name::new(first, "Tester"),
                birth_date: BirthDate::new("March", 3, 1980),
                sin: "111222333".to_string(),
            },
            pay_rate: dec(rate),
            hours_worked: dec(hours),
            sales: sales.map(dec),
            line: 1,
        }
    }

    fn registry() -> EmployeeRegistry {
        let mut registry = EmployeeRegistry::new(presets::basic());
        registry
            .admit(record("salesperson", "Sam", "15", "40", Some("1000")))
            .unwrap();
        registry.admit(record("secretary", "Tess", "20", "45", None)).unwrap();
        registry.admit(record("manager", "Max", "50", "0", None)).unwrap();
        registry.admit(record("secretary", "Idle", "20", "0", None)).unwrap();
        registry
    }

    #[test]
    fn test_pay_information_groups_by_role() {
        let text = PayInformationReport::new(&registry()).to_string();

        let manager = text.find("Name: Tester, Max").unwrap();
        let secretary = text.find("Name: Tester, Tess").unwrap();
        let salesperson = text.find("Name: Tester, Sam").unwrap();
        assert!(manager < secretary && secretary < salesperson);
        assert!(text.starts_with("-------------- Printing Pay Information Report --------------\n"));
    }

    #[test]
    fn test_pay_information_shows_breakdowns() {
        let text = PayInformationReport::new(&registry()).to_string();

        assert!(text.contains(
            "Position: secretary\nName: Tester, Tess\nHourly Wage: $20.00\nHours Worked: 45.00\nWeekly Pay: $950.00\n\tNormal Pay: $800.00\n\tOvertime Pay: $150.00\n"
        ));
        assert!(text.contains("Weekly Pay: $620.00\n\tNormal Pay: $600.00\n\tCommission Earned: $20.00\n"));
        assert!(text.contains("Weekly Pay: $2000.00\n\n"));
    }

    #[test]
    fn test_no_breakdown_without_variable_pay() {
        let text = PayInformationReport::new(&registry()).to_string();
        assert_eq!(text.matches("Normal Pay").count(), 2);
    }

    #[test]
    fn test_employee_information_report() {
        let text = EmployeeInformationReport::new(&registry()).to_string();
        assert!(text.contains(
            "Name: Tester, Max\nPosition: manager\nBirthday: March 3, 1980\nSIN: 111222333\nHourly Wage: $50.00\n\n"
        ));
    }

    #[test]
    fn test_cheques_skip_zero_pay() {
        let text = Cheques::new(&registry()).to_string();

        assert!(text.contains("Payable to Max Tester in the amount of $2000.00.\n"));
        assert!(text.contains("Payable to Tess Tester in the amount of $950.00.\n"));
        assert!(text.contains("Payable to Sam Tester in the amount of $620.00.\n"));
        assert!(!text.contains("Idle"));
    }

    #[test]
    fn test_company_summary() {
        let summary = PayrollSummary {
            employee_count: 4,
            weekly_payout: dec("3570"),
        };
        assert_eq!(
            CompanySummary::new(&summary).to_string(),
            "-------------- Company Summary --------------\nNumber of Employees: 4\nWeekly Payout: $3570.00\n"
        );
    }

    #[test]
    fn test_diagnostic_lines() {
        let mut registry = EmployeeRegistry::new(presets::basic());
        let admission = registry.admit(record("manager", "Rich", "200", "40", None)).unwrap();
        let diagnostics = admission.diagnostics();

        let text = DiagnosticLines::new(&diagnostics).to_string();
        assert!(text.starts_with("ERROR: "));
        assert!(text.contains("Rich Tester"));
        assert_eq!(text.lines().count(), 1);
    }
}
