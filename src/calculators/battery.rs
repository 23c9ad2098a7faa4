//! Battery runtime estimation.

use crate::error::Result;
use crate::input::{format_scalar, parse_entry};

/// Battery runtime estimator from capacity and average draw.
///
/// `hours = capacity · factor / draw`, with an optional derating factor
/// covering discharge efficiency and self-discharge.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryRuntime {
    /// Battery capacity in mAh
    pub capacity_mah: Option<f64>,
    /// Average consumption in mA
    pub draw_ma: Option<f64>,
    /// Whether the derating factor is applied
    pub safety_factor: bool,
}

impl BatteryRuntime {
    /// Derating multiplier applied while the safety factor is enabled.
    pub const SAFETY_FACTOR: f64 = 0.7;

    /// Create an estimator with the default form values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity (mAh) from raw text.
    pub fn set_capacity(&mut self, raw: &str) -> Result<()> {
        self.capacity_mah = parse_entry("capacity", raw)?;
        Ok(())
    }

    /// Set the average draw (mA) from raw text.
    pub fn set_draw(&mut self, raw: &str) -> Result<()> {
        self.draw_ma = parse_entry("consumption", raw)?;
        Ok(())
    }

    /// Enable or disable the safety factor.
    pub fn set_safety_factor(&mut self, enabled: bool) {
        self.safety_factor = enabled;
    }

    /// Flip the safety factor.
    pub fn toggle_safety_factor(&mut self) {
        self.safety_factor = !self.safety_factor;
    }

    /// Estimated runtime in hours, when capacity and draw are positive.
    pub fn runtime_hours(&self) -> Option<f64> {
        let capacity = self.capacity_mah.filter(|c| *c > 0.0)?;
        let draw = self.draw_ma.filter(|d| *d > 0.0)?;
        let factor = if self.safety_factor {
            Self::SAFETY_FACTOR
        } else {
            1.0
        };
        Some(capacity * factor / draw)
    }

    /// Estimated runtime in days.
    pub fn runtime_days(&self) -> Option<f64> {
        self.runtime_hours().map(|h| h / 24.0)
    }

    /// Estimated runtime in weeks.
    pub fn runtime_weeks(&self) -> Option<f64> {
        self.runtime_hours().map(|h| h / 168.0)
    }

    /// The hours figure formatted for display (one decimal place).
    pub fn display_hours(&self) -> Option<String> {
        self.runtime_hours().map(|h| format_scalar(h, 1))
    }
}

impl Default for BatteryRuntime {
    fn default() -> Self {
        // A 2500mAh cell under a 100mA load, derated
        Self {
            capacity_mah: Some(2500.0),
            draw_ma: Some(100.0),
            safety_factor: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_default_form_gives_derated_hours() {
        let battery = BatteryRuntime::new();
        // 2500 * 0.7 / 100
        assert_eq!(battery.runtime_hours(), Some(17.5));
        assert_eq!(battery.display_hours().as_deref(), Some("17.5"));
    }

    #[test]
    fn test_toggle_removes_derating() {
        let mut battery = BatteryRuntime::new();
        battery.toggle_safety_factor();
        assert_eq!(battery.runtime_hours(), Some(25.0));
        battery.set_safety_factor(true);
        assert_eq!(battery.runtime_hours(), Some(17.5));
    }

    #[test]
    fn test_days_and_weeks_derive_from_hours() {
        let mut battery = BatteryRuntime::new();
        battery.set_capacity("24000").unwrap();
        battery.set_draw("100").unwrap();
        battery.set_safety_factor(false);
        assert_relative_eq!(battery.runtime_days().unwrap(), 10.0);
        assert_relative_eq!(battery.runtime_weeks().unwrap(), 240.0 / 168.0);
    }

    #[test]
    fn test_zero_draw_gives_no_result() {
        let mut battery = BatteryRuntime::new();
        battery.set_draw("0").unwrap();
        assert_eq!(battery.runtime_hours(), None);
        assert_eq!(battery.runtime_days(), None);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let mut battery = BatteryRuntime::new();
        assert!(battery.set_capacity("lots").is_err());
        assert_eq!(battery.capacity_mah, Some(2500.0));
    }
}
