//! Payroll Engine for small company payroll runs
//!
//! This crate reads employee records, validates their pay fields against a
//! company policy, computes each employee's weekly pay by role (salaried,
//! hourly with overtime, or commissioned), and renders the pay, employee
//! information, cheque and company summary reports.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod payroll;
pub mod registry;
pub mod report;
