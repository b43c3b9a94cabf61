//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the structural failures that stop a payroll run. Data-quality problems
//! inside a record are not errors: they are clamped and reported as
//! [`Diagnostic`](crate::models::Diagnostic) values instead.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// Every variant is fatal for the run that produced it.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::UnknownRole {
///     token: "janitor".to_string(),
///     line: 12,
/// };
/// assert_eq!(error.to_string(), "Unknown employee role 'janitor' on line 12");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Policy parsed but is internally inconsistent.
    #[error("Invalid payroll policy: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },

    /// The employee input source could not be opened.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that could not be opened.
        path: String,
    },

    /// A role token did not match any role in the active policy.
    #[error("Unknown employee role '{token}' on line {line}")]
    UnknownRole {
        /// The role token as read from the input.
        token: String,
        /// The 1-based input line holding the token.
        line: usize,
    },

    /// A record field was missing or could not be parsed.
    #[error("Malformed record on line {line}: field '{field}' {message}")]
    MalformedRecord {
        /// The 1-based input line of the offending field.
        line: usize,
        /// The name of the field being read.
        field: String,
        /// A description of the problem.
        message: String,
    },
}

impl EngineError {
    /// Process exit status for a run that failed with this error.
    ///
    /// Unknown roles exit with `99`; the other codes follow `sysexits.h`.
    pub fn exit_code(&self) -> u8 {
        match self {
            EngineError::UnknownRole { .. } => 99,
            EngineError::MalformedRecord { .. } => 65,
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidPolicy { .. } => 78,
            EngineError::InputNotFound { .. } => 66,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
