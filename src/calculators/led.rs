//! LED series resistor sizing.

use crate::error::Result;
use crate::input::{format_scalar, parse_entry};
use crate::presets::LedPreset;

/// Series resistor calculator for driving an LED from a fixed supply.
///
/// The required resistance is `R = (Vs - Vf) / If`, with the forward
/// current entered in milliamps as on a datasheet.
#[derive(Debug, Clone, PartialEq)]
pub struct LedResistor {
    /// Supply voltage in volts
    pub source_voltage: Option<f64>,
    /// LED forward voltage in volts
    pub forward_voltage: Option<f64>,
    /// LED forward current in milliamps
    pub forward_current_ma: Option<f64>,
}

impl Default for LedResistor {
    fn default() -> Self {
        // A 5V rail driving a generic red LED at 20mA
        Self {
            source_voltage: Some(5.0),
            forward_voltage: Some(2.0),
            forward_current_ma: Some(20.0),
        }
    }
}

impl LedResistor {
    /// Create a calculator with the default form values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the supply voltage from raw text.
    pub fn set_source_voltage(&mut self, raw: &str) -> Result<()> {
        self.source_voltage = parse_entry("source voltage", raw)?;
        Ok(())
    }

    /// Set the forward voltage from raw text.
    pub fn set_forward_voltage(&mut self, raw: &str) -> Result<()> {
        self.forward_voltage = parse_entry("forward voltage", raw)?;
        Ok(())
    }

    /// Set the forward current (mA) from raw text.
    pub fn set_forward_current(&mut self, raw: &str) -> Result<()> {
        self.forward_current_ma = parse_entry("forward current", raw)?;
        Ok(())
    }

    /// Take the forward voltage from an LED preset.
    pub fn apply_preset(&mut self, preset: &LedPreset) {
        self.forward_voltage = Some(preset.forward_voltage);
    }

    /// The required series resistance in ohms.
    ///
    /// `None` when the supply does not exceed the forward voltage or the
    /// current is not strictly positive.
    pub fn required_resistance(&self) -> Option<f64> {
        let vs = self.source_voltage?;
        let vf = self.forward_voltage?;
        let if_amps = self.forward_current_ma? / 1000.0;
        if vs > vf && if_amps > 0.0 {
            Some((vs - vf) / if_amps)
        } else {
            None
        }
    }

    /// The result formatted for display (one decimal place).
    pub fn display_resistance(&self) -> Option<String> {
        self.required_resistance().map(|r| format_scalar(r, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::led_preset;

    #[test]
    fn test_default_form_gives_150_ohms() {
        let led = LedResistor::new();
        assert_eq!(led.required_resistance(), Some(150.0));
        assert_eq!(led.display_resistance().as_deref(), Some("150.0"));
    }

    #[test]
    fn test_preset_overwrites_forward_voltage() {
        let mut led = LedResistor::new();
        led.apply_preset(led_preset("white").unwrap());
        assert_eq!(led.forward_voltage, Some(3.3));
        // (5 - 3.3) / 0.02 = 85 ohms
        assert_eq!(led.display_resistance().as_deref(), Some("85.0"));
    }

    #[test]
    fn test_supply_must_exceed_forward_voltage() {
        let mut led = LedResistor::new();
        led.set_source_voltage("1.8").unwrap();
        assert_eq!(led.required_resistance(), None);
    }

    #[test]
    fn test_zero_current_gives_no_result() {
        let mut led = LedResistor::new();
        led.set_forward_current("0").unwrap();
        assert_eq!(led.required_resistance(), None);
    }

    #[test]
    fn test_cleared_field_gives_no_result() {
        let mut led = LedResistor::new();
        led.set_forward_current("").unwrap();
        assert_eq!(led.forward_current_ma, None);
        assert_eq!(led.required_resistance(), None);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let mut led = LedResistor::new();
        assert!(led.set_source_voltage("five").is_err());
        assert_eq!(led.source_voltage, Some(5.0));
    }
}
