//! Bidirectional Ohm's-law and power solver.
//!
//! This module provides the numerical core of the suite.
//!
//! ## Recency-driven dispatch
//!
//! The solver owns four scalar fields (voltage, current, resistance, power)
//! and a record of which two were edited most recently. After every accepted
//! edit it selects one of the six unordered pairs over the four fields and
//! computes the two fields NOT in the pair:
//!
//! ```text
//! {V, I} -> R = V/I        P = V·I
//! {V, R} -> I = V/R        P = V²/R
//! {I, R} -> V = I·R        P = I²·R
//! {V, P} -> I = P/V        R = V²/P
//! {I, P} -> V = P/I        R = P/I²
//! {R, P} -> V = √(P·R)     I = √(P/R)
//! ```
//!
//! Dispatch is driven solely by the edit-recency record, never by which
//! fields happen to hold values. Derived writes do not enter the record,
//! so a computed result is never mistaken for the next user edit.

mod ohm;
mod state;

pub use ohm::OhmSolver;
pub use state::{EditRecency, ElectricalState, Field, FieldPair};

/// How many recent edits the solver tracks.
pub const RECENCY_DEPTH: usize = 2;
