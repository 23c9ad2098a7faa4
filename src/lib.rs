//! # ElectraCalc Core
//!
//! A bidirectional electrical calculator suite.
//!
//! This library provides:
//! - A bidirectional Ohm's-law and power solver: enter any two of
//!   voltage, current, resistance and power and the other two follow
//! - LED series-resistor sizing with common forward-voltage presets
//! - Series/parallel combination of resistors and capacitors
//! - Battery runtime estimation with an optional derating factor
//! - Cable voltage-drop estimation with material and AWG tables
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`solver`] - the bidirectional solver and its edit-recency state
//! - [`calculators`] - the four single-formula calculators
//! - [`presets`] - LED, conductor-material and AWG tables
//! - [`suite`] - application state tying the calculators together
//! - [`repl`] - interactive prompt (CLI only)
//!
//! ## Usage
//!
//! ```
//! use electracalc_core::{Field, OhmSolver};
//!
//! let mut ohm = OhmSolver::new();
//! ohm.set_field(Field::Voltage, "12")?;
//! ohm.set_field(Field::Current, "3")?;
//!
//! assert_eq!(ohm.display(Field::Resistance).as_deref(), Some("4.00"));
//! assert_eq!(ohm.display(Field::Power).as_deref(), Some("36.00"));
//! # Ok::<(), electracalc_core::ElectraCalcError>(())
//! ```
//!
//! ## Solving Method
//!
//! The solver tracks the two most recently edited fields. Every accepted
//! edit dispatches on that unordered pair and recomputes the other two
//! fields from Ohm's law (V = I·R) and the power law (P = V·I). Computed
//! values never count as edits, so derivation cannot feed back on itself,
//! and pairs containing zero or negative values are left underived.

pub mod calculators;
pub mod error;
pub mod input;
pub mod presets;
pub mod solver;
pub mod suite;

#[cfg(feature = "cli")]
pub mod repl;

// Re-export main types for convenience
pub use calculators::{BatteryRuntime, Combination, ComponentKind, LedResistor, Topology, VoltageDrop};
pub use error::{ElectraCalcError, Result};
pub use solver::{ElectricalState, Field, OhmSolver};
pub use suite::{CalculatorKind, Suite};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmOhmSolver;
