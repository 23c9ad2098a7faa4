//! Built-in component tables: LED presets, conductor materials, AWG sizes.

/// A common LED type with its typical forward voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedPreset {
    pub name: &'static str,
    /// Forward voltage in volts at rated operating current
    pub forward_voltage: f64,
}

/// Forward voltages for common LED colors.
pub const LED_PRESETS: [LedPreset; 6] = [
    LedPreset { name: "Red", forward_voltage: 2.0 },
    LedPreset { name: "Green", forward_voltage: 3.2 },
    LedPreset { name: "Blue", forward_voltage: 3.2 },
    LedPreset { name: "Yellow", forward_voltage: 2.1 },
    LedPreset { name: "White", forward_voltage: 3.3 },
    LedPreset { name: "Infrared", forward_voltage: 1.2 },
];

/// A conductor material and its resistivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireMaterial {
    pub name: &'static str,
    /// Resistivity in Ω·mm²/m at 20°C
    pub resistivity: f64,
}

/// Resistivities of common conductor materials.
pub const WIRE_MATERIALS: [WireMaterial; 4] = [
    WireMaterial { name: "Copper", resistivity: 0.0172 },
    WireMaterial { name: "Aluminum", resistivity: 0.0265 },
    WireMaterial { name: "Silver", resistivity: 0.0159 },
    WireMaterial { name: "Gold", resistivity: 0.0244 },
];

/// American Wire Gauge mapped to cross-sectional area in mm².
pub const AWG_SIZES: [(u32, f64); 8] = [
    (10, 5.26),
    (12, 3.31),
    (14, 2.08),
    (16, 1.31),
    (18, 0.823),
    (20, 0.518),
    (22, 0.326),
    (24, 0.205),
];

/// Look up an LED preset by name (case-insensitive).
pub fn led_preset(name: &str) -> Option<&'static LedPreset> {
    LED_PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Look up a conductor material by name (case-insensitive).
pub fn wire_material(name: &str) -> Option<&'static WireMaterial> {
    WIRE_MATERIALS.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}

/// Look up the cross-sectional area for an AWG gauge.
pub fn awg_to_mm2(gauge: u32) -> Option<f64> {
    AWG_SIZES
        .iter()
        .find(|(g, _)| *g == gauge)
        .map(|(_, area)| *area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_preset_lookup() {
        assert_eq!(led_preset("red").unwrap().forward_voltage, 2.0);
        assert_eq!(led_preset("WHITE").unwrap().forward_voltage, 3.3);
        assert!(led_preset("ultraviolet").is_none());
    }

    #[test]
    fn test_wire_material_lookup() {
        assert_eq!(wire_material("copper").unwrap().resistivity, 0.0172);
        assert!(wire_material("unobtainium").is_none());
    }

    #[test]
    fn test_awg_lookup() {
        assert_eq!(awg_to_mm2(14), Some(2.08));
        assert_eq!(awg_to_mm2(18), Some(0.823));
        assert_eq!(awg_to_mm2(11), None);
    }
}
