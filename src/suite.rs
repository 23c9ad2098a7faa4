//! Application state for the calculator suite.
//!
//! One user session owns one [`Suite`]: five calculators plus the selector
//! for the active one. The selector is plain data handed top-down to
//! whatever front-end hosts the suite; there is no process-wide state.

use std::fmt;

use crate::calculators::{BatteryRuntime, Combination, LedResistor, VoltageDrop};
use crate::error::{ElectraCalcError, Result};
use crate::solver::OhmSolver;

/// Identifies one of the five calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorKind {
    Led,
    Ohm,
    Combinations,
    Battery,
    VoltageDrop,
}

impl CalculatorKind {
    /// All calculators, in tab order.
    pub const ALL: [CalculatorKind; 5] = [
        CalculatorKind::Led,
        CalculatorKind::Ohm,
        CalculatorKind::Combinations,
        CalculatorKind::Battery,
        CalculatorKind::VoltageDrop,
    ];

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            CalculatorKind::Led => "LED Resistor",
            CalculatorKind::Ohm => "Ohm's Law",
            CalculatorKind::Combinations => "Combinations",
            CalculatorKind::Battery => "Battery Life",
            CalculatorKind::VoltageDrop => "Voltage Drop",
        }
    }

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            CalculatorKind::Led => "led",
            CalculatorKind::Ohm => "ohm",
            CalculatorKind::Combinations => "combinations",
            CalculatorKind::Battery => "battery",
            CalculatorKind::VoltageDrop => "drop",
        }
    }

    /// Resolve a calculator from its short name.
    pub fn from_name(name: &str) -> Result<CalculatorKind> {
        match name.trim().to_ascii_lowercase().as_str() {
            "led" => Ok(CalculatorKind::Led),
            "ohm" => Ok(CalculatorKind::Ohm),
            "combinations" | "combo" => Ok(CalculatorKind::Combinations),
            "battery" => Ok(CalculatorKind::Battery),
            "drop" | "voltage-drop" => Ok(CalculatorKind::VoltageDrop),
            _ => Err(ElectraCalcError::unknown_calculator(name)),
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The whole calculator suite and its active-tab selector.
#[derive(Debug, Clone, Default)]
pub struct Suite {
    active: CalculatorKind,
    pub led: LedResistor,
    pub ohm: OhmSolver,
    pub combinations: Combination,
    pub battery: BatteryRuntime,
    pub voltage_drop: VoltageDrop,
}

impl Default for CalculatorKind {
    fn default() -> Self {
        CalculatorKind::Led
    }
}

impl Suite {
    /// Create a suite with every calculator at its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a suite starting on the given calculator.
    pub fn with_active(kind: CalculatorKind) -> Self {
        Self {
            active: kind,
            ..Self::default()
        }
    }

    /// The currently selected calculator.
    pub fn active(&self) -> CalculatorKind {
        self.active
    }

    /// Switch to another calculator.
    pub fn select(&mut self, kind: CalculatorKind) {
        self.active = kind;
    }
}
