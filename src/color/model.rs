//! Value types shared by extraction and mixing

use palette::{white_point::D65, Lab, Srgb};
use serde::{Deserialize, Serialize};

use crate::color::{conversion, naming};

/// CIE Lab coordinates under D65. Internal to distance computations.
pub type LabColor = Lab<D65, f64>;

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from floating channels on the 0-255 scale.
    ///
    /// Each channel is rounded half away from zero and clamped to `[0, 255]`.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        fn quantize(v: f64) -> u8 {
            v.round().clamp(0.0, 255.0) as u8
        }
        Self::new(quantize(r), quantize(g), quantize(b))
    }

    /// Channels as floats on the 0-255 scale
    pub fn channels(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    /// Uppercase `#RRGGBB`
    pub fn to_hex(self) -> String {
        conversion::rgb_to_hex(self)
    }
}

impl From<Srgb<u8>> for RgbColor {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<RgbColor> for Srgb<u8> {
    fn from(rgb: RgbColor) -> Self {
        Srgb::new(rgb.r, rgb.g, rgb.b)
    }
}

/// HSV color derived from an [`RgbColor`]
///
/// `h` is in degrees `[0, 360)`, `s` and `v` are integer percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HsvColor {
    pub h: f64,
    pub s: u8,
    pub v: u8,
}

impl HsvColor {
    pub fn new(h: f64, s: u8, v: u8) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.min(100),
            v: v.min(100),
        }
    }

    /// Same saturation and value, hue rotated by `degrees`
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.v)
    }
}

/// One entry of an extracted palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAnalysis {
    pub rgb: RgbColor,
    pub hsv: HsvColor,
    pub hex: String,
    pub color_name: String,
    /// Fraction of sampled pixels represented by this color, in `[0, 1]`
    pub frequency: f64,
}

impl ColorAnalysis {
    /// Derive every representation of `rgb` and attach `frequency`
    pub fn from_rgb(rgb: RgbColor, frequency: f64) -> Self {
        Self {
            rgb,
            hsv: conversion::rgb_to_hsv(rgb),
            hex: conversion::rgb_to_hex(rgb),
            color_name: naming::color_name(rgb).to_string(),
            frequency: frequency.clamp(0.0, 1.0),
        }
    }

    /// Entry with a fixed display name instead of the classified one
    pub fn with_name(rgb: RgbColor, name: &str, frequency: f64) -> Self {
        Self {
            color_name: name.to_string(),
            ..Self::from_rgb(rgb, frequency)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_channels_rounds_and_clamps() {
        let c = RgbColor::from_channels(-3.0, 127.5, 300.0);
        assert_eq!(c, RgbColor::new(0, 128, 255));

        let c = RgbColor::from_channels(233.5, 233.49, f64::NAN);
        assert_eq!(c, RgbColor::new(234, 233, 0));
    }

    #[test]
    fn test_srgb_conversion() {
        let srgb: Srgb<u8> = RgbColor::new(1, 2, 3).into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (1, 2, 3));
        assert_eq!(RgbColor::from(srgb), RgbColor::new(1, 2, 3));
    }

    #[test]
    fn test_hsv_rotation_wraps() {
        let hsv = HsvColor::new(300.0, 50, 60).rotate(180.0);
        assert!((hsv.h - 120.0).abs() < 1e-9);
        assert_eq!((hsv.s, hsv.v), (50, 60));
    }

    #[test]
    fn test_color_analysis_serialization() {
        let entry = ColorAnalysis::from_rgb(RgbColor::new(0x8B, 0x45, 0x13), 0.25);
        assert_eq!(entry.hex, "#8B4513");
        assert_eq!(entry.color_name, "茶色");

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"colorName\""));
        let back: ColorAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rgb, entry.rgb);
        assert_eq!(back.color_name, entry.color_name);
        assert!((back.hsv.h - entry.hsv.h).abs() < 1e-9);
        assert_eq!(back.frequency, 0.25);
    }

    #[test]
    fn test_frequency_is_clamped() {
        assert_eq!(ColorAnalysis::from_rgb(RgbColor::WHITE, 1.7).frequency, 1.0);
        assert_eq!(ColorAnalysis::from_rgb(RgbColor::WHITE, -0.2).frequency, 0.0);
    }
}
