//! Error types for the ElectraCalc calculator suite.
//!
//! This module provides a unified error type [`ElectraCalcError`] that covers
//! all error conditions that can occur while feeding form input into the
//! calculators and while driving the interactive prompt.
//!
//! Every error here is recoverable at the boundary where it occurs: the
//! offending edit or command is dropped and prior state is retained.

use thiserror::Error;

/// Result type alias using [`ElectraCalcError`].
pub type Result<T> = std::result::Result<T, ElectraCalcError>;

/// Unified error type for all ElectraCalc operations.
#[derive(Error, Debug)]
pub enum ElectraCalcError {
    // ============ Form Input Errors ============
    /// Submitted text is non-empty but not parseable as a number
    #[error("Invalid number {input:?} for field '{field}'")]
    InvalidNumber { field: String, input: String },

    /// Unknown electrical field name (solver boundary)
    #[error("Unknown field '{name}' (expected voltage, current, resistance or power)")]
    UnknownField { name: String },

    // ============ Combination Errors ============
    /// Component index outside the current entry list
    #[error("Component index {index} out of range (have {len})")]
    ComponentIndexOutOfRange { index: usize, len: usize },

    /// A combination always keeps at least two components
    #[error("Cannot remove component: a combination needs at least {min} entries")]
    TooFewComponents { min: usize },

    // ============ Preset / Table Lookup Errors ============
    /// Unknown LED preset name
    #[error("Unknown LED preset '{name}'")]
    UnknownPreset { name: String },

    /// Unknown conductor material name
    #[error("Unknown conductor material '{name}'")]
    UnknownMaterial { name: String },

    /// Wire gauge missing from the AWG table
    #[error("No cross-section known for {gauge} AWG")]
    UnknownAwg { gauge: u32 },

    // ============ CLI Errors ============
    /// Unknown calculator name on tab selection
    #[error("Unknown calculator '{name}'")]
    UnknownCalculator { name: String },

    /// Unrecognized prompt command
    #[error("Unknown command '{input}' (try 'help')")]
    UnknownCommand { input: String },

    /// Terminal I/O failure in the interactive prompt
    #[cfg(feature = "cli")]
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ElectraCalcError {
    /// Create an invalid-number error for a named form field.
    pub fn invalid_number(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Create an unknown-field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create an unknown-calculator error.
    pub fn unknown_calculator(name: impl Into<String>) -> Self {
        Self::UnknownCalculator { name: name.into() }
    }

    /// Create an unknown-command error.
    pub fn unknown_command(input: impl Into<String>) -> Self {
        Self::UnknownCommand {
            input: input.into(),
        }
    }
}
