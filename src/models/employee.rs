//! Employee model and related types.
//!
//! An employee starts life as a [`RawRecord`] straight from the input,
//! exactly as read. [`Employee::price`] validates the raw fields against the
//! policy rules and computes the first pay breakdown; afterwards every setter
//! re-validates and re-prices so the stored breakdown always matches the
//! current rate, hours and sales.

use std::fmt;
use std::str::FromStr;

use chrono::{Month, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    PayInputs, calculate_weekly_pay, check_commission_eligibility, sanitize_hours,
    sanitize_pay_rate, sanitize_sales, validate_fields,
};
use crate::config::PayRules;

use super::{Diagnostic, PayBreakdown, RoleDefinition};

/// A person's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
}

impl Name {
    /// Creates a new name.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// The name as printed in reports: "Last, First".
    pub fn last_first(&self) -> String {
        format!("{}, {}", self.last, self.first)
    }
}

/// Displays as "First Last".
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// A birth date as recorded on file: month name, day and year.
///
/// The date is identity data only and is never required to be a real
/// calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    /// Full English month name (e.g. "March"), or the text as read when it
    /// names no month.
    pub month: String,
    /// Day of the month.
    pub day: u32,
    /// Year.
    pub year: i32,
}

impl BirthDate {
    /// Builds a birth date from a month name, day and year.
    ///
    /// A month chrono recognizes, in any case and abbreviated ("mar",
    /// "MARCH"), is stored under its full name. Anything else is kept as read.
    ///
    /// ```
    /// use payroll_engine::models::BirthDate;
    ///
    /// let date = BirthDate::new("mar", 3, 1980);
    /// assert_eq!(date.to_string(), "March 3, 1980");
    ///
    /// let odd = BirthDate::new("Smarch", 31, 1980);
    /// assert_eq!(odd.to_string(), "Smarch 31, 1980");
    /// assert!(!odd.is_calendar_date());
    /// ```
    pub fn new(month: &str, day: u32, year: i32) -> Self {
        let month = month.trim();
        let month = match Month::from_str(month) {
            Ok(known) => known.name().to_string(),
            Err(_) => month.to_string(),
        };
        Self { month, day, year }
    }

    /// Returns the date as a calendar date, if it is one.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let month = Month::from_str(&self.month).ok()?;
        NaiveDate::from_ymd_opt(self.year, month.number_from_month(), self.day)
    }

    /// True when the month is known and the day exists in it.
    pub fn is_calendar_date(&self) -> bool {
        self.to_naive_date().is_some()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month, self.day, self.year)
    }
}

/// Identity fields of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// The employee's name.
    pub name: Name,
    /// The employee's birth date.
    pub birth_date: BirthDate,
    /// Social insurance number, kept as the digit string read from input.
    pub sin: String,
}

/// An employee record as read from input, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Role token as read (e.g. "secretary").
    pub role: String,
    /// Identity fields.
    pub personal: PersonalInfo,
    /// Hourly pay rate as reported.
    pub pay_rate: Decimal,
    /// Hours worked as reported.
    pub hours_worked: Decimal,
    /// Sales amount; only present for commissioned roles.
    pub sales: Option<Decimal>,
    /// 1-based input line the record started on.
    pub line: usize,
}

/// A validated, priced employee.
///
/// Fields are private so that pay can never be observed out of step with
/// the values it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    personal: PersonalInfo,
    role: RoleDefinition,
    #[serde(skip)]
    rules: PayRules,
    pay_rate: Decimal,
    hours_worked: Decimal,
    sales: Decimal,
    commission_eligible: bool,
    breakdown: PayBreakdown,
}

impl Employee {
    /// Validates a raw record and computes its pay.
    ///
    /// Returns the employee together with every diagnostic raised while
    /// sanitizing its fields. Invalid values never fail the record: they are
    /// clamped as the rules dictate.
    pub fn price(
        record: RawRecord,
        role: &RoleDefinition,
        rules: &PayRules,
    ) -> (Self, Vec<Diagnostic>) {
        let validated = validate_fields(&record, role, rules);
        let mut diagnostics = validated.diagnostics;

        let mut employee = Self {
            personal: record.personal,
            role: role.clone(),
            rules: *rules,
            pay_rate: validated.pay_rate,
            hours_worked: validated.hours_worked,
            sales: validated.sales,
            commission_eligible: true,
            breakdown: PayBreakdown::zero(),
        };
        diagnostics.extend(employee.reprice());

        (employee, diagnostics)
    }

    /// Recomputes the pay breakdown from the current fields.
    fn reprice(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        self.commission_eligible = if self.role.scheme.is_commissioned() {
            let eligibility = check_commission_eligibility(
                self.hours_worked,
                self.sales,
                &self.rules,
                &self.personal.name,
                &self.role.title,
            );
            diagnostics.extend(eligibility.diagnostic);
            eligibility.value
        } else {
            true
        };

        let inputs = PayInputs {
            pay_rate: self.pay_rate,
            hours_worked: self.hours_worked,
            sales: self.sales,
            commission_eligible: self.commission_eligible,
        };
        self.breakdown = calculate_weekly_pay(&inputs, &self.role.scheme, &self.rules);

        diagnostics
    }

    /// Changes the hourly pay rate, clamping it into the company wage range.
    pub fn set_pay_rate(&mut self, pay_rate: Decimal) -> Vec<Diagnostic> {
        let sanitized = sanitize_pay_rate(
            pay_rate,
            &self.rules,
            &self.personal.name,
            &self.role.title,
        );
        self.pay_rate = sanitized.value;
        let mut diagnostics: Vec<Diagnostic> = sanitized.diagnostic.into_iter().collect();
        diagnostics.extend(self.reprice());
        diagnostics
    }

    /// Changes the hours worked, clamping impossible values to zero.
    pub fn set_hours_worked(&mut self, hours_worked: Decimal) -> Vec<Diagnostic> {
        let sanitized = sanitize_hours(
            hours_worked,
            &self.role.scheme,
            &self.rules,
            &self.personal.name,
            &self.role.title,
        );
        self.hours_worked = sanitized.value;
        let mut diagnostics: Vec<Diagnostic> = sanitized.diagnostic.into_iter().collect();
        diagnostics.extend(self.reprice());
        diagnostics
    }

    /// Changes the sales amount. Ignored for roles that earn no commission.
    pub fn set_sales(&mut self, sales: Decimal) -> Vec<Diagnostic> {
        if !self.role.scheme.is_commissioned() {
            return vec![];
        }
        let sanitized = sanitize_sales(sales, &self.personal.name, &self.role.title);
        self.sales = sanitized.value;
        let mut diagnostics: Vec<Diagnostic> = sanitized.diagnostic.into_iter().collect();
        diagnostics.extend(self.reprice());
        diagnostics
    }

    /// Starts a new week: hours and sales go to zero, the rate is kept.
    pub fn reset(&mut self) {
        self.hours_worked = Decimal::ZERO;
        self.sales = Decimal::ZERO;
        self.reprice();
    }

    /// Identity fields.
    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    /// The employee's name.
    pub fn name(&self) -> &Name {
        &self.personal.name
    }

    /// The role the employee was admitted under.
    pub fn role(&self) -> &RoleDefinition {
        &self.role
    }

    /// Sanitized hourly pay rate.
    pub fn pay_rate(&self) -> Decimal {
        self.pay_rate
    }

    /// Sanitized hours worked this week.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    /// Sanitized sales this week (always zero for non-commissioned roles).
    pub fn sales(&self) -> Decimal {
        self.sales
    }

    /// False when sales were reported without hours and the policy withholds commission.
    pub fn commission_eligible(&self) -> bool {
        self.commission_eligible
    }

    /// The current pay breakdown.
    pub fn breakdown(&self) -> &PayBreakdown {
        &self.breakdown
    }

    /// The current weekly pay.
    pub fn weekly_pay(&self) -> Decimal {
        self.breakdown.weekly_pay
    }
}
