//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod amount;
mod diagnostic;
mod employee;
mod pay_breakdown;
mod role;

pub use amount::format_amount;
pub use diagnostic::{Diagnostic, DiagnosticCode};
pub use employee::{BirthDate, Employee, Name, PersonalInfo, RawRecord};
pub use pay_breakdown::{AuditStep, PayBreakdown};
pub use role::{PayScheme, RoleDefinition};
