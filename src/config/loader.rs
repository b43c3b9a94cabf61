//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! policies from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::presets;
use super::types::PayrollPolicy;

/// Loads and provides access to a payroll policy.
///
/// # File Format
///
/// ```yaml
/// name: basic
/// rules:
///   minimum_wage: "14.00"
///   maximum_company_wage: "100.00"
///   hours_in_week: "168"
///   standard_weekly_hours: "40"
///   hourly_hours_ceiling: "60"
///   commission_requires_hours: true
/// roles:
///   - token: manager
///     title: manager
///     capacity: 5
///     scheme:
///       kind: salaried
///   - token: secretary
///     title: secretary
///     capacity: 7
///     scheme:
///       kind: hourly_overtime
///       threshold: "40"
///       multiplier: "1.5"
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/basic.yaml").unwrap();
/// println!("Loaded policy: {}", loader.policy().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PayrollPolicy,
}

impl ConfigLoader {
    /// Loads a policy from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or is missing required fields
    /// - The policy fails [`PayrollPolicy::validate`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let policy = Self::load_yaml::<PayrollPolicy>(path)?;
        policy.validate()?;
        debug!(
            path = %path.display(),
            policy = %policy.name,
            roles = policy.roles.len(),
            "Loaded payroll policy"
        );
        Ok(Self { policy })
    }

    /// Uses one of the built-in presets (`basic` or `extended`).
    pub fn preset(name: &str) -> EngineResult<Self> {
        let policy = presets::by_name(name).ok_or_else(|| EngineError::ConfigNotFound {
            path: format!("preset '{}'", name),
        })?;
        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Consumes the loader, returning the policy.
    pub fn into_policy(self) -> PayrollPolicy {
        self.policy
    }
}
