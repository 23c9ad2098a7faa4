//! The suite's single-formula calculators.
//!
//! Each calculator is a small stateful form: a handful of scalar inputs, a
//! closed-form result, and the same raw-text edit contract as the solver
//! (empty clears, unparseable input is rejected with no state change,
//! non-positive values are stored but gate the result).
//!
//! - [`LedResistor`] - series resistor sizing for an LED
//! - [`Combination`] - series/parallel reduction of resistors or capacitors
//! - [`BatteryRuntime`] - runtime estimate from capacity and draw
//! - [`VoltageDrop`] - round-trip cable voltage loss

mod battery;
mod combination;
mod led;
mod voltage_drop;

pub use battery::BatteryRuntime;
pub use combination::{Combination, ComponentKind, Topology};
pub use led::LedResistor;
pub use voltage_drop::VoltageDrop;
