//! Core types for the bidirectional solver state.

use std::fmt;

use crate::error::{ElectraCalcError, Result};
use crate::input::format_scalar;

use super::RECENCY_DEPTH;

/// One of the four electrical quantities the solver works over.
///
/// The declaration order defines the canonical ordering used by
/// [`FieldPair`]; it carries no physical meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Voltage,
    Current,
    Resistance,
    Power,
}

impl Field {
    /// All fields, in canonical order.
    pub const ALL: [Field; 4] = [
        Field::Voltage,
        Field::Current,
        Field::Resistance,
        Field::Power,
    ];

    /// Lowercase field name, as used in form and prompt input.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Voltage => "voltage",
            Field::Current => "current",
            Field::Resistance => "resistance",
            Field::Power => "power",
        }
    }

    /// Display unit for the field.
    pub fn unit(&self) -> &'static str {
        match self {
            Field::Voltage => "V",
            Field::Current => "A",
            Field::Resistance => "Ω",
            Field::Power => "W",
        }
    }

    /// Decimal places used when formatting the field for display.
    ///
    /// Current is typically sub-ampere in this domain and gets finer
    /// resolution than the other three quantities.
    pub fn decimals(&self) -> usize {
        match self {
            Field::Current => 3,
            _ => 2,
        }
    }

    /// Resolve a field from its name or single-letter abbreviation.
    pub fn from_name(name: &str) -> Result<Field> {
        match name.trim().to_ascii_lowercase().as_str() {
            "v" | "voltage" => Ok(Field::Voltage),
            "i" | "current" => Ok(Field::Current),
            "r" | "resistance" => Ok(Field::Resistance),
            "p" | "power" => Ok(Field::Power),
            _ => Err(ElectraCalcError::unknown_field(name)),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The four solver scalars. Unset means "no value entered".
///
/// Values keep full `f64` precision; rounding is applied only when
/// formatting via [`ElectricalState::display`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElectricalState {
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub resistance: Option<f64>,
    pub power: Option<f64>,
}

impl ElectricalState {
    /// Get a field's value.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Voltage => self.voltage,
            Field::Current => self.current,
            Field::Resistance => self.resistance,
            Field::Power => self.power,
        }
    }

    /// Set or clear a field's value.
    pub fn set(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::Voltage => self.voltage = value,
            Field::Current => self.current = value,
            Field::Resistance => self.resistance = value,
            Field::Power => self.power = value,
        }
    }

    /// Format a field at its display precision, if set.
    pub fn display(&self, field: Field) -> Option<String> {
        self.get(field)
            .map(|value| format_scalar(value, field.decimals()))
    }
}

/// An unordered pair of distinct fields, stored in canonical order so that
/// `{a, b}` and `{b, a}` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPair(Field, Field);

impl FieldPair {
    /// Build a pair from two distinct fields, in either order.
    pub fn new(a: Field, b: Field) -> FieldPair {
        debug_assert!(a != b, "a field pair holds two distinct fields");
        if a <= b {
            FieldPair(a, b)
        } else {
            FieldPair(b, a)
        }
    }

    /// The pair's fields in canonical order.
    pub fn fields(&self) -> (Field, Field) {
        (self.0, self.1)
    }

    /// Check whether the pair contains a field.
    pub fn contains(&self, field: Field) -> bool {
        self.0 == field || self.1 == field
    }
}

/// Ordered record of the (at most two) most recently edited fields,
/// most-recent-first, without duplicates.
///
/// A field appears here only while its state value is non-empty; clearing
/// a field drops it from the record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditRecency {
    entries: Vec<Field>,
}

impl EditRecency {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user edit: push-front, dedupe, truncate.
    pub fn record(&mut self, field: Field) {
        self.entries.retain(|f| *f != field);
        self.entries.insert(0, field);
        self.entries.truncate(RECENCY_DEPTH);
    }

    /// Drop a field from the record (its value was cleared).
    pub fn forget(&mut self, field: Field) {
        self.entries.retain(|f| *f != field);
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Check whether a field is currently tracked.
    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains(&field)
    }

    /// The tracked pair, once two distinct edits have been seen.
    pub fn pair(&self) -> Option<FieldPair> {
        match self.entries.as_slice() {
            [last, prev] => Some(FieldPair::new(*last, *prev)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recency_push_front_and_truncate() {
        let mut recency = EditRecency::new();
        recency.record(Field::Voltage);
        recency.record(Field::Current);
        recency.record(Field::Power);
        // Voltage fell off the end; the tracked pair is {current, power}
        assert!(!recency.contains(Field::Voltage));
        assert_eq!(
            recency.pair(),
            Some(FieldPair::new(Field::Current, Field::Power))
        );
    }

    #[test]
    fn test_recency_dedupes_re_edits() {
        let mut recency = EditRecency::new();
        recency.record(Field::Voltage);
        recency.record(Field::Current);
        recency.record(Field::Voltage);
        assert_eq!(
            recency.pair(),
            Some(FieldPair::new(Field::Voltage, Field::Current))
        );
    }

    #[test]
    fn test_recency_forget_breaks_pair() {
        let mut recency = EditRecency::new();
        recency.record(Field::Voltage);
        recency.record(Field::Current);
        recency.forget(Field::Voltage);
        assert_eq!(recency.pair(), None);
        assert!(recency.contains(Field::Current));
    }

    #[test]
    fn test_pair_is_unordered() {
        let a = FieldPair::new(Field::Voltage, Field::Power);
        let b = FieldPair::new(Field::Power, Field::Voltage);
        assert_eq!(a, b);
        assert!(a.contains(Field::Power));
        assert!(!a.contains(Field::Current));
    }

    #[test]
    fn test_state_display_precision() {
        let mut state = ElectricalState::default();
        state.set(Field::Voltage, Some(12.0));
        state.set(Field::Current, Some(0.2));
        assert_eq!(state.display(Field::Voltage).as_deref(), Some("12.00"));
        assert_eq!(state.display(Field::Current).as_deref(), Some("0.200"));
        assert_eq!(state.display(Field::Resistance), None);
    }

    #[test]
    fn test_field_from_name() {
        assert_eq!(Field::from_name("v").unwrap(), Field::Voltage);
        assert_eq!(Field::from_name("Resistance").unwrap(), Field::Resistance);
        assert!(Field::from_name("z").is_err());
    }
}
