//! Splitting hours worked around a threshold.
//!
//! Both hourly-with-overtime and commissioned roles pay the hours up to a
//! threshold at the plain hourly rate; this module performs that split.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Hours worked divided into the part up to a threshold and the excess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSplit {
    /// Hours up to the threshold.
    pub within_threshold: Decimal,
    /// Hours beyond the threshold (can be zero).
    pub beyond_threshold: Decimal,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits worked hours into the hours within a threshold and those beyond it.
///
/// `within_threshold = min(worked, threshold)` and
/// `beyond_threshold = max(0, worked - threshold)`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_hours(Decimal::from_str("45").unwrap(), Decimal::from_str("40").unwrap(), 1);
///
/// assert_eq!(split.within_threshold, Decimal::from_str("40").unwrap());
/// assert_eq!(split.beyond_threshold, Decimal::from_str("5").unwrap());
/// ```
///
/// ```
/// use payroll_engine::calculation::split_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_hours(Decimal::from_str("32.5").unwrap(), Decimal::from_str("40").unwrap(), 1);
///
/// assert_eq!(split.within_threshold, Decimal::from_str("32.5").unwrap());
/// assert_eq!(split.beyond_threshold, Decimal::ZERO);
/// ```
pub fn split_hours(worked_hours: Decimal, threshold: Decimal, step_number: u32) -> HoursSplit {
    let within_threshold = worked_hours.min(threshold);
    let beyond_threshold = (worked_hours - threshold).max(Decimal::ZERO);

    let reasoning = if beyond_threshold > Decimal::ZERO {
        format!(
            "{} hours worked exceeds {} hour threshold by {} hours",
            worked_hours.normalize(),
            threshold.normalize(),
            beyond_threshold.normalize()
        )
    } else if worked_hours == threshold {
        format!(
            "{} hours worked equals {} hour threshold",
            worked_hours.normalize(),
            threshold.normalize()
        )
    } else {
        format!(
            "{} hours worked is under {} hour threshold",
            worked_hours.normalize(),
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "hours_split".to_string(),
        rule_name: "Hours Threshold Split".to_string(),
        input: serde_json::json!({
            "worked_hours": worked_hours.normalize().to_string(),
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "within_threshold": within_threshold.normalize().to_string(),
            "beyond_threshold": beyond_threshold.normalize().to_string()
        }),
        reasoning,
    };

    HoursSplit {
        within_threshold,
        beyond_threshold,
        audit_step,
    }
}
