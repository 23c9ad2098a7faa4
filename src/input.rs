//! Shared handling of raw form input.
//!
//! Every calculator in the suite accepts its numbers as raw text, exactly as
//! a host form would hand them over. The contract is uniform: empty text
//! clears the field, parseable text stores the value, anything else is
//! rejected with [`ElectraCalcError::InvalidNumber`] and no state change.

use crate::error::{ElectraCalcError, Result};

/// Parse a raw text entry for a named form field.
///
/// Returns `Ok(None)` for empty (or whitespace-only) input, `Ok(Some(v))`
/// for a parseable finite number, and an error otherwise. Values are not
/// range-checked here; non-positive entries are stored and gated at
/// computation time instead.
pub fn parse_entry(field: &str, raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        // "NaN" and "inf" parse as f64 but are not meaningful form input
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ElectraCalcError::invalid_number(field, raw)),
    }
}

/// Format a scalar at a fixed number of decimal places.
///
/// Rounding happens only here, at presentation time; calculator state keeps
/// full `f64` precision.
pub fn format_scalar(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_clears() {
        assert_eq!(parse_entry("voltage", "").unwrap(), None);
        assert_eq!(parse_entry("voltage", "   ").unwrap(), None);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_entry("voltage", "12").unwrap(), Some(12.0));
        assert_eq!(parse_entry("voltage", "-3.5").unwrap(), Some(-3.5));
        assert_eq!(parse_entry("voltage", "1e3").unwrap(), Some(1000.0));
        assert_eq!(parse_entry("voltage", " 2.5 ").unwrap(), Some(2.5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_entry("voltage", "abc").is_err());
        assert!(parse_entry("voltage", "12V").is_err());
        assert!(parse_entry("voltage", "NaN").is_err());
        assert!(parse_entry("voltage", "inf").is_err());
    }

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(4.0, 2), "4.00");
        assert_eq!(format_scalar(0.2, 3), "0.200");
        assert_eq!(format_scalar(17.54, 1), "17.5");
    }
}
