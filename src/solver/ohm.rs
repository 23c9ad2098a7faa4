//! The bidirectional solver itself.

use crate::error::Result;
use crate::input::parse_entry;

use super::state::{EditRecency, ElectricalState, Field, FieldPair};

/// Bidirectional Ohm's-law and power solver.
///
/// Feed it raw text edits via [`set_field`](OhmSolver::set_field); once two
/// distinct fields hold values, every subsequent edit recomputes the other
/// two from the two most recently edited ones.
#[derive(Debug, Clone, Default)]
pub struct OhmSolver {
    state: ElectricalState,
    recency: EditRecency,
}

/// Compute the two derived fields for an edited pair.
///
/// `first` and `second` are the pair's values in the pair's canonical field
/// order. Both are already known to be strictly positive.
fn derive(pair: FieldPair, first: f64, second: f64) -> [(Field, f64); 2] {
    match pair.fields() {
        (Field::Voltage, Field::Current) => {
            let (v, i) = (first, second);
            [(Field::Resistance, v / i), (Field::Power, v * i)]
        }
        (Field::Voltage, Field::Resistance) => {
            let (v, r) = (first, second);
            [(Field::Current, v / r), (Field::Power, v * v / r)]
        }
        (Field::Voltage, Field::Power) => {
            let (v, p) = (first, second);
            [(Field::Current, p / v), (Field::Resistance, v * v / p)]
        }
        (Field::Current, Field::Resistance) => {
            let (i, r) = (first, second);
            [(Field::Voltage, i * r), (Field::Power, i * i * r)]
        }
        (Field::Current, Field::Power) => {
            let (i, p) = (first, second);
            [(Field::Voltage, p / i), (Field::Resistance, p / (i * i))]
        }
        (Field::Resistance, Field::Power) => {
            let (r, p) = (first, second);
            [(Field::Voltage, (p * r).sqrt()), (Field::Current, (p / r).sqrt())]
        }
        // FieldPair is canonically ordered and holds distinct fields
        _ => unreachable!("non-canonical field pair"),
    }
}

impl OhmSolver {
    /// Create a solver with all four fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a user edit to one field.
    ///
    /// Empty input clears the field and drops it from the recency record.
    /// Non-empty input must parse as a finite number, otherwise the edit is
    /// rejected with no state change. Accepted edits trigger recomputation
    /// of the two non-recent fields.
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<()> {
        match parse_entry(field.name(), raw)? {
            Some(value) => {
                self.state.set(field, Some(value));
                self.recency.record(field);
            }
            None => {
                self.state.set(field, None);
                self.recency.forget(field);
            }
        }
        self.recompute();
        Ok(())
    }

    /// Clear all four fields and the recency record.
    pub fn reset(&mut self) {
        self.state = ElectricalState::default();
        self.recency.clear();
    }

    /// Read-only snapshot of the four scalars.
    pub fn state(&self) -> ElectricalState {
        self.state
    }

    /// A single field's full-precision value.
    pub fn value(&self, field: Field) -> Option<f64> {
        self.state.get(field)
    }

    /// A single field formatted at its display precision.
    pub fn display(&self, field: Field) -> Option<String> {
        self.state.display(field)
    }

    /// Whether a field is one of the two most recent user edits.
    ///
    /// Hosts use this to highlight the driving pair in a form.
    pub fn recently_edited(&self, field: Field) -> bool {
        self.recency.contains(field)
    }

    fn recompute(&mut self) {
        let Some(pair) = self.recency.pair() else {
            return;
        };
        let (fa, fb) = pair.fields();
        // Recency only tracks fields whose values are non-empty
        let (Some(a), Some(b)) = (self.state.get(fa), self.state.get(fb)) else {
            return;
        };
        // Zero and negative quantities are stored but never derived from
        if a <= 0.0 || b <= 0.0 {
            return;
        }
        for (field, value) in derive(pair, a, b) {
            // Derived writes bypass the recency record
            self.state.set(field, Some(value));
        }
    }
}
