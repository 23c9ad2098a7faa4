//! DC / single-phase voltage drop over a cable run.

use crate::error::{ElectraCalcError, Result};
use crate::input::{format_scalar, parse_entry};
use crate::presets::{awg_to_mm2, WireMaterial, WIRE_MATERIALS};

/// Voltage-drop estimator for a two-conductor run.
///
/// The cable length is entered one-way; the loop resistance doubles it:
/// `R = 2·ρ·L / A`, and `Vdrop = I·R`.
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageDrop {
    /// Supply voltage in volts
    pub supply_voltage: Option<f64>,
    /// Load current in amps
    pub load_current: Option<f64>,
    /// One-way cable length in meters
    pub length_m: Option<f64>,
    /// Conductor cross-section in mm²
    pub area_mm2: Option<f64>,
    /// Conductor resistivity in Ω·mm²/m
    pub resistivity: f64,
}

impl Default for VoltageDrop {
    fn default() -> Self {
        // A 12V / 5A load over 10m of 14AWG copper
        Self {
            supply_voltage: Some(12.0),
            load_current: Some(5.0),
            length_m: Some(10.0),
            area_mm2: Some(2.08),
            resistivity: WIRE_MATERIALS[0].resistivity,
        }
    }
}

impl VoltageDrop {
    /// Create an estimator with the default form values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the supply voltage from raw text.
    pub fn set_supply_voltage(&mut self, raw: &str) -> Result<()> {
        self.supply_voltage = parse_entry("supply voltage", raw)?;
        Ok(())
    }

    /// Set the load current from raw text.
    pub fn set_load_current(&mut self, raw: &str) -> Result<()> {
        self.load_current = parse_entry("load current", raw)?;
        Ok(())
    }

    /// Set the one-way cable length from raw text.
    pub fn set_length(&mut self, raw: &str) -> Result<()> {
        self.length_m = parse_entry("cable length", raw)?;
        Ok(())
    }

    /// Set the conductor cross-section from raw text.
    pub fn set_area(&mut self, raw: &str) -> Result<()> {
        self.area_mm2 = parse_entry("cross section", raw)?;
        Ok(())
    }

    /// Take the resistivity from a conductor material.
    pub fn set_material(&mut self, material: &WireMaterial) {
        self.resistivity = material.resistivity;
    }

    /// Set the cross-section from an AWG gauge.
    pub fn apply_awg(&mut self, gauge: u32) -> Result<()> {
        self.area_mm2 = Some(awg_to_mm2(gauge).ok_or(ElectraCalcError::UnknownAwg { gauge })?);
        Ok(())
    }

    /// Round-trip conductor resistance in ohms.
    pub fn loop_resistance(&self) -> Option<f64> {
        let length = self.length_m.filter(|l| *l > 0.0)?;
        let area = self.area_mm2.filter(|a| *a > 0.0)?;
        Some(2.0 * self.resistivity * length / area)
    }

    /// Voltage lost over the run, when all four inputs are positive.
    pub fn drop_volts(&self) -> Option<f64> {
        self.supply_voltage.filter(|v| *v > 0.0)?;
        let current = self.load_current.filter(|i| *i > 0.0)?;
        Some(current * self.loop_resistance()?)
    }

    /// Percentage of the supply that reaches the load, floored at zero.
    pub fn efficiency_percent(&self) -> Option<f64> {
        let supply = self.supply_voltage?;
        let drop = self.drop_volts()?;
        Some((100.0 - drop / supply * 100.0).max(0.0))
    }

    /// The drop formatted for display (two decimal places).
    pub fn display_drop(&self) -> Option<String> {
        self.drop_volts().map(|d| format_scalar(d, 2))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::presets::wire_material;

    #[test]
    fn test_default_form_drop() {
        let drop = VoltageDrop::new();
        // 2 * 0.0172 * 10 / 2.08 = 0.16538...Ω at 5A
        assert_relative_eq!(drop.loop_resistance().unwrap(), 0.344 / 2.08, max_relative = 1e-12);
        assert_relative_eq!(drop.drop_volts().unwrap(), 5.0 * 0.344 / 2.08, max_relative = 1e-12);
        assert_eq!(drop.display_drop().as_deref(), Some("0.83"));
    }

    #[test]
    fn test_efficiency_tracks_drop() {
        let drop = VoltageDrop::new();
        // ~93.1% of the supply reaches the load
        let expected = 100.0 - (5.0 * 0.344 / 2.08) / 12.0 * 100.0;
        assert_relative_eq!(drop.efficiency_percent().unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_efficiency_floors_at_zero() {
        let mut drop = VoltageDrop::new();
        drop.set_supply_voltage("0.1").unwrap();
        drop.set_length("1000").unwrap();
        assert_eq!(drop.efficiency_percent(), Some(0.0));
    }

    #[test]
    fn test_material_changes_resistivity() {
        let mut drop = VoltageDrop::new();
        drop.set_material(wire_material("aluminum").unwrap());
        assert_eq!(drop.resistivity, 0.0265);
        assert_relative_eq!(
            drop.loop_resistance().unwrap(),
            2.0 * 0.0265 * 10.0 / 2.08,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_awg_sets_area() {
        let mut drop = VoltageDrop::new();
        drop.apply_awg(18).unwrap();
        assert_eq!(drop.area_mm2, Some(0.823));
        assert!(matches!(
            drop.apply_awg(13),
            Err(ElectraCalcError::UnknownAwg { gauge: 13 })
        ));
        // The failed lookup left the area alone
        assert_eq!(drop.area_mm2, Some(0.823));
    }

    #[test]
    fn test_non_positive_inputs_give_no_result() {
        let mut drop = VoltageDrop::new();
        drop.set_load_current("0").unwrap();
        assert_eq!(drop.drop_volts(), None);
        assert_eq!(drop.efficiency_percent(), None);
        drop.set_load_current("5").unwrap();
        drop.set_area("").unwrap();
        assert_eq!(drop.drop_volts(), None);
    }
}
