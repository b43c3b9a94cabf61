//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides the payroll policy (company wage and hours rules
//! plus the roles it employs), loaded from a YAML file or taken from one of
//! the built-in presets.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/extended.yaml").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
pub mod presets;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayRules, PayrollPolicy};
