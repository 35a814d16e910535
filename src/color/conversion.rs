//! Color space conversion utilities
//!
//! Provides the conversions both the extractor and the mixing solver rely on:
//! - HEX <-> RGB
//! - RGB <-> HSV
//! - RGB -> Lab (sRGB linearization, D65 white point)
//! - Euclidean Lab distance (ΔE76 approximation)
//!
//! HSV, Lab and the distance are computed by `palette`.

use palette::color_difference::EuclideanDistance;
use palette::{encoding, FromColor, Hsv, Srgb};

use crate::color::{HsvColor, LabColor, RgbColor};
use crate::{ColorError, Result};

type SrgbHsv = Hsv<encoding::Srgb, f64>;

/// Parse a hexadecimal color string
///
/// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive.
///
/// # Errors
///
/// Returns `ColorError::InvalidHex` for any other shape. Malformed input is
/// reported rather than mapped to black.
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(ColorError::invalid_hex(
            hex,
            format!("expected 6 hex digits, got {}", digits.len()),
        ));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_hex(hex, "non-hex digit"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|e| ColorError::invalid_hex(hex, e.to_string()))
    };

    Ok(RgbColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format as uppercase `#RRGGBB`
pub fn rgb_to_hex(rgb: RgbColor) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Convert RGB to HSV
///
/// Hue keeps its fractional part; saturation and value are rounded to
/// integer percentages.
pub fn rgb_to_hsv(rgb: RgbColor) -> HsvColor {
    let srgb: Srgb<f64> = Srgb::<u8>::from(rgb).into_format();
    let hsv = SrgbHsv::from_color(srgb);
    HsvColor::new(hsv.hue.into_positive_degrees(), percent(hsv.saturation), percent(hsv.value))
}

/// Convert HSV back to RGB
pub fn hsv_to_rgb(hsv: HsvColor) -> RgbColor {
    let hsv = SrgbHsv::new(hsv.h, f64::from(hsv.s.min(100)) / 100.0, f64::from(hsv.v.min(100)) / 100.0);
    let srgb = Srgb::<f64>::from_color(hsv);
    RgbColor::from_channels(srgb.red * 255.0, srgb.green * 255.0, srgb.blue * 255.0)
}

fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Convert an 8-bit color to Lab
pub fn rgb_to_lab(rgb: RgbColor) -> LabColor {
    LabColor::from_color(Srgb::<u8>::from(rgb).into_format::<f64>())
}

/// Convert floating RGB channels (0-255 scale) to Lab
///
/// Blended paint colors are not quantized before this step, so the search
/// compares the exact mixture rather than its rounded display color.
pub fn channels_to_lab(channels: [f64; 3]) -> LabColor {
    let [r, g, b] = channels.map(|c| c / 255.0);
    LabColor::from_color(Srgb::new(r, g, b))
}

/// Euclidean distance between two Lab colors (ΔE76)
///
/// Good enough to rank a small candidate set; not CIEDE2000.
pub fn lab_distance(lab1: LabColor, lab2: LabColor) -> f64 {
    lab1.distance(lab2)
}
