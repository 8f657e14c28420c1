//! Color bucket definitions for QTL label text.
//!
//! Map images annotate each QTL and its flanking markers in a shared text
//! color. A `ColorSpec` names one such bucket and carries the HSV ranges
//! that classify a pixel into it. Ranges live in configuration (not code)
//! so they can be recalibrated when source colors drift.

use serde::{Deserialize, Serialize};

/// An inclusive HSV box, channels ordered (hue, saturation, value).
///
/// Hue is stored halved (degrees / 2, so 0-180) with saturation and value
/// on 0-255, the scale the calibrated ranges are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    /// True if every channel falls within the bounds, inclusive.
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| self.lower[i] <= hsv[i] && hsv[i] <= self.upper[i])
    }
}

/// A named color bucket: one or more HSV sub-ranges.
///
/// Most colors need a single range; red needs two because its hue wraps
/// around the top of the hue axis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub name: String,
    pub ranges: Vec<HsvRange>,
}

impl ColorSpec {
    /// Calibrated red label text (e.g. #e1321f), split across the hue
    /// wraparound into two sub-ranges.
    pub fn red() -> Self {
        Self {
            name: "Red".to_string(),
            ranges: vec![
                HsvRange {
                    lower: [0, 100, 100],
                    upper: [10, 255, 255],
                },
                HsvRange {
                    lower: [170, 100, 100],
                    upper: [180, 255, 255],
                },
            ],
        }
    }

    /// Calibrated blue label text (e.g. #2f2c57).
    pub fn blue() -> Self {
        Self {
            name: "Blue".to_string(),
            ranges: vec![HsvRange {
                lower: [110, 50, 50],
                upper: [130, 255, 255],
            }],
        }
    }

    /// True if the pixel belongs to this bucket (any sub-range matches).
    pub fn matches(&self, hsv: [u8; 3]) -> bool {
        self.ranges.iter().any(|range| range.contains(hsv))
    }
}

/// The conventional bucket set, in processing order: Red before Blue.
pub fn default_colors() -> Vec<ColorSpec> {
    vec![ColorSpec::red(), ColorSpec::blue()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_inclusive() {
        let range = HsvRange {
            lower: [0, 100, 100],
            upper: [10, 255, 255],
        };
        assert!(range.contains([0, 100, 100]));
        assert!(range.contains([10, 255, 255]));
        assert!(range.contains([5, 200, 180]));
        assert!(!range.contains([11, 200, 180]));
        assert!(!range.contains([5, 99, 180]));
    }

    #[test]
    fn test_red_matches_both_hue_ends() {
        let red = ColorSpec::red();
        // Low-hue red
        assert!(red.matches([3, 220, 225]));
        // Wrapped high-hue red
        assert!(red.matches([174, 255, 200]));
        // Mid-spectrum green is not red
        assert!(!red.matches([60, 255, 255]));
    }

    #[test]
    fn test_blue_single_range() {
        let blue = ColorSpec::blue();
        assert_eq!(blue.ranges.len(), 1);
        assert!(blue.matches([122, 126, 87]));
        assert!(!blue.matches([122, 30, 87]));
    }

    #[test]
    fn test_default_color_order() {
        let colors = default_colors();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].name, "Red");
        assert_eq!(colors[1].name, "Blue");
        assert_eq!(colors[0].ranges.len(), 2);
    }

    #[test]
    fn test_spec_roundtrips_through_json() {
        let red = ColorSpec::red();
        let json = serde_json::to_string(&red).unwrap();
        let back: ColorSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, red);
    }
}
