//! Numeric formatting for stylesheet values.

use serde::{Deserialize, Serialize};

/// Length unit used for spacing, radii, and typography values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    #[default]
    #[serde(rename = "px")]
    Px,
    /// `rem` on a 16px root font size.
    #[serde(rename = "rem")]
    Rem,
    /// `rem` on a 10px root font size (`html { font-size: 62.5% }`).
    #[serde(rename = "remAs10px")]
    RemAs10px,
}

impl UnitType {
    /// Root font size in pixels that one `rem` stands for.
    fn rem_base(self) -> Option<f64> {
        match self {
            Self::Px => None,
            Self::Rem => Some(16.0),
            Self::RemAs10px => Some(10.0),
        }
    }
}

/// Format a number the way a stylesheet expects it: shortest round-trip
/// representation, no trailing `.0`, and no negative zero.
pub fn format_number(value: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{}", value + 0.0)
}

/// Format a pixel magnitude in the requested unit.
///
/// The magnitude is rounded to a whole pixel first. Non-finite input cannot be
/// expressed and degrades to `0px`.
pub fn format_size(pixels: f64, unit: UnitType) -> String {
    if !pixels.is_finite() {
        tracing::warn!(value = pixels, "non-finite size, substituting 0px");
        return "0px".to_string();
    }
    let rounded = pixels.round();
    match unit.rem_base() {
        None => format!("{}px", format_number(rounded)),
        Some(base) => format!("{}rem", format_number(rounded / base)),
    }
}

/// Literal pixel value floored to a whole pixel, independent of unit mode.
pub fn format_px_floor(pixels: f64) -> String {
    if !pixels.is_finite() {
        tracing::warn!(value = pixels, "non-finite size, substituting 0px");
        return "0px".to_string();
    }
    format!("{}px", format_number(pixels.floor()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_rounds_to_whole_pixels() {
        assert_eq!(format_size(12.0, UnitType::Px), "12px");
        assert_eq!(format_size(12.6, UnitType::Px), "13px");
        assert_eq!(format_size(-0.2, UnitType::Px), "0px");
    }

    #[test]
    fn test_rem_bases() {
        assert_eq!(format_size(16.0, UnitType::Rem), "1rem");
        assert_eq!(format_size(8.0, UnitType::Rem), "0.5rem");
        assert_eq!(format_size(1.0, UnitType::Rem), "0.0625rem");
        assert_eq!(format_size(14.0, UnitType::RemAs10px), "1.4rem");
        assert_eq!(format_size(0.0, UnitType::RemAs10px), "0rem");
    }

    #[test]
    fn test_non_finite_recovers_to_zero() {
        assert_eq!(format_size(f64::NAN, UnitType::Rem), "0px");
        assert_eq!(format_size(f64::INFINITY, UnitType::Px), "0px");
        assert_eq!(format_px_floor(f64::NEG_INFINITY), "0px");
    }

    #[test]
    fn test_floor_ignores_unit() {
        assert_eq!(format_px_floor(99.9), "99px");
        assert_eq!(format_px_floor(0.0), "0px");
    }

    #[test]
    fn test_unit_serde_names() {
        assert_eq!(serde_json::to_string(&UnitType::RemAs10px).unwrap(), "\"remAs10px\"");
        let unit: UnitType = serde_json::from_str("\"rem\"").unwrap();
        assert_eq!(unit, UnitType::Rem);
    }
}
