//! Series/parallel combination of resistors or capacitors.

use crate::error::{ElectraCalcError, Result};
use crate::input::{format_scalar, parse_entry};

/// Value every freshly added entry starts with.
const DEFAULT_ENTRY: f64 = 100.0;

/// A combination never shrinks below this many entries.
const MIN_ENTRIES: usize = 2;

/// Which component family is being combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Resistor,
    Capacitor,
}

impl ComponentKind {
    /// Display unit for the component values.
    pub fn unit(&self) -> &'static str {
        match self {
            ComponentKind::Resistor => "Ω",
            ComponentKind::Capacitor => "μF",
        }
    }

    /// Reference-designator prefix for labelling entries (R1, C2, ...).
    pub fn prefix(&self) -> &'static str {
        match self {
            ComponentKind::Resistor => "R",
            ComponentKind::Capacitor => "C",
        }
    }
}

/// How the components are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Series,
    Parallel,
}

/// Combined-value calculator over a list of like components.
///
/// Resistors in series sum directly and combine reciprocally in parallel;
/// capacitors behave the opposite way.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    pub kind: ComponentKind,
    pub topology: Topology,
    entries: Vec<Option<f64>>,
}

impl Default for Combination {
    fn default() -> Self {
        Self {
            kind: ComponentKind::Resistor,
            topology: Topology::Series,
            entries: vec![Some(DEFAULT_ENTRY); MIN_ENTRIES],
        }
    }
}

impl Combination {
    /// Create a calculator with two default entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current entry values.
    pub fn entries(&self) -> &[Option<f64>] {
        &self.entries
    }

    /// Append a new entry at the default value.
    pub fn add_entry(&mut self) {
        self.entries.push(Some(DEFAULT_ENTRY));
    }

    /// Remove the entry at `index` (0-based).
    pub fn remove_entry(&mut self, index: usize) -> Result<()> {
        if self.entries.len() <= MIN_ENTRIES {
            return Err(ElectraCalcError::TooFewComponents { min: MIN_ENTRIES });
        }
        if index >= self.entries.len() {
            return Err(ElectraCalcError::ComponentIndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.remove(index);
        Ok(())
    }

    /// Set the entry at `index` from raw text.
    pub fn set_entry(&mut self, index: usize, raw: &str) -> Result<()> {
        if index >= self.entries.len() {
            return Err(ElectraCalcError::ComponentIndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let label = format!("{}{}", self.kind.prefix(), index + 1);
        self.entries[index] = parse_entry(&label, raw)?;
        Ok(())
    }

    /// Whether the values sum directly (otherwise reciprocally).
    fn sums_directly(&self) -> bool {
        matches!(
            (self.kind, self.topology),
            (ComponentKind::Resistor, Topology::Series)
                | (ComponentKind::Capacitor, Topology::Parallel)
        )
    }

    /// The combined value over all positive entries.
    ///
    /// Unset and non-positive entries are skipped; `None` when no entry
    /// qualifies.
    pub fn combined(&self) -> Option<f64> {
        let values: Vec<f64> = self
            .entries
            .iter()
            .flatten()
            .copied()
            .filter(|v| *v > 0.0)
            .collect();
        if values.is_empty() {
            return None;
        }
        if self.sums_directly() {
            Some(values.iter().sum())
        } else {
            Some(1.0 / values.iter().map(|v| 1.0 / v).sum::<f64>())
        }
    }

    /// The result formatted for display (two decimal places).
    pub fn display_combined(&self) -> Option<String> {
        self.combined().map(|total| format_scalar(total, 2))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_series_resistors_sum() {
        let mut combo = Combination::new();
        combo.set_entry(0, "220").unwrap();
        combo.set_entry(1, "330").unwrap();
        assert_eq!(combo.combined(), Some(550.0));
    }

    #[test]
    fn test_parallel_resistors_halve() {
        let mut combo = Combination::new();
        combo.topology = Topology::Parallel;
        assert_eq!(combo.display_combined().as_deref(), Some("50.00"));
    }

    #[test]
    fn test_capacitors_behave_oppositely() {
        let mut combo = Combination::new();
        combo.kind = ComponentKind::Capacitor;
        // Series capacitors combine reciprocally
        assert_relative_eq!(combo.combined().unwrap(), 50.0);
        combo.topology = Topology::Parallel;
        assert_relative_eq!(combo.combined().unwrap(), 200.0);
    }

    #[test]
    fn test_three_way_parallel() {
        let mut combo = Combination::new();
        combo.topology = Topology::Parallel;
        combo.add_entry();
        for i in 0..3 {
            combo.set_entry(i, "300").unwrap();
        }
        assert_relative_eq!(combo.combined().unwrap(), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_non_positive_entries_are_skipped() {
        let mut combo = Combination::new();
        combo.set_entry(0, "-10").unwrap();
        combo.set_entry(1, "470").unwrap();
        assert_eq!(combo.combined(), Some(470.0));
    }

    #[test]
    fn test_no_qualifying_entries_gives_no_result() {
        let mut combo = Combination::new();
        combo.set_entry(0, "").unwrap();
        combo.set_entry(1, "0").unwrap();
        assert_eq!(combo.combined(), None);
    }

    #[test]
    fn test_cannot_shrink_below_two_entries() {
        let mut combo = Combination::new();
        assert!(matches!(
            combo.remove_entry(0),
            Err(ElectraCalcError::TooFewComponents { .. })
        ));
        combo.add_entry();
        combo.remove_entry(2).unwrap();
        assert_eq!(combo.entries().len(), 2);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut combo = Combination::new();
        assert!(combo.set_entry(5, "100").is_err());
        combo.add_entry();
        assert!(matches!(
            combo.remove_entry(9),
            Err(ElectraCalcError::ComponentIndexOutOfRange { .. })
        ));
    }
}
