//! Palette assembly and derived metadata
//!
//! Whatever tier produced the raw colors, the palette is finished the same
//! way: sort by frequency, pick the dominant entry, derive its complement,
//! classify temperature and score complexity.

use serde::{Deserialize, Serialize};

use crate::color::{hsv_to_rgb, ColorAnalysis};
use crate::constants::extraction::TEMPERATURE_DOMINANCE;
use crate::error::ExtractionError;

/// Overall color temperature of a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

/// Extracted palette with derived metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    /// Sorted by descending frequency
    pub colors: Vec<ColorAnalysis>,
    /// Always `colors[0]`
    pub dominant_color: ColorAnalysis,
    /// Hue-rotated from the dominant color, not sampled from the image
    pub complementary_colors: Vec<ColorAnalysis>,
    pub temperature: Temperature,
    /// Integer in `[1, 10]`
    pub complexity: u8,
}

impl ColorPalette {
    /// Finish a palette from raw tier output
    ///
    /// # Errors
    ///
    /// `NoClusters` when `colors` is empty.
    pub fn from_colors(mut colors: Vec<ColorAnalysis>, complementary_frequency: f64) -> Result<Self, ExtractionError> {
        colors.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
        let dominant_color = colors.first().cloned().ok_or(ExtractionError::NoClusters)?;

        Ok(Self {
            complementary_colors: vec![complementary(&dominant_color, complementary_frequency)],
            temperature: temperature(&colors),
            complexity: complexity(&colors),
            dominant_color,
            colors,
        })
    }
}

/// Color opposite `base` on the hue wheel with the same S and V
pub fn complementary(base: &ColorAnalysis, frequency: f64) -> ColorAnalysis {
    let rgb = hsv_to_rgb(base.hsv.rotate(180.0));
    ColorAnalysis::from_rgb(rgb, frequency)
}

/// Compare frequency mass in the warm and cool hue bands
///
/// Warm: hue in `[0, 60]` or `[300, 360)`. Cool: hue in `[120, 240]`.
pub fn temperature(colors: &[ColorAnalysis]) -> Temperature {
    let mut warm = 0.0;
    let mut cool = 0.0;
    for color in colors {
        let h = color.hsv.h;
        if h <= 60.0 || h >= 300.0 {
            warm += color.frequency;
        } else if (120.0..=240.0).contains(&h) {
            cool += color.frequency;
        }
    }

    if warm > cool * TEMPERATURE_DOMINANCE {
        Temperature::Warm
    } else if cool > warm * TEMPERATURE_DOMINANCE {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}

/// `min(10, round(0.8 * count + 2 * stddev(saturation) / 100))`, at least 1
pub fn complexity(colors: &[ColorAnalysis]) -> u8 {
    if colors.is_empty() {
        return 1;
    }

    let n = colors.len() as f64;
    let mean = colors.iter().map(|c| f64::from(c.hsv.s)).sum::<f64>() / n;
    let variance = colors
        .iter()
        .map(|c| {
            let d = f64::from(c.hsv.s) - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    let score = (0.8 * n + 2.0 * variance.sqrt() / 100.0).round();
    score.clamp(1.0, 10.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RgbColor;

    fn entry(r: u8, g: u8, b: u8, frequency: f64) -> ColorAnalysis {
        ColorAnalysis::from_rgb(RgbColor::new(r, g, b), frequency)
    }

    #[test]
    fn test_from_colors_sorts_and_picks_dominant() {
        let palette = ColorPalette::from_colors(
            vec![entry(0, 0, 255, 0.2), entry(255, 0, 0, 0.5), entry(0, 255, 0, 0.3)],
            0.1,
        )
        .unwrap();

        let freqs: Vec<f64> = palette.colors.iter().map(|c| c.frequency).collect();
        assert_eq!(freqs, vec![0.5, 0.3, 0.2]);
        assert_eq!(palette.dominant_color, palette.colors[0]);
        assert_eq!(palette.dominant_color.hex, "#FF0000");
    }

    #[test]
    fn test_from_colors_empty() {
        assert_eq!(
            ColorPalette::from_colors(vec![], 0.1).unwrap_err(),
            ExtractionError::NoClusters
        );
    }

    #[test]
    fn test_complementary_of_red_is_cyan() {
        let comp = complementary(&entry(255, 0, 0, 1.0), 0.1);
        assert_eq!(comp.rgb, RgbColor::new(0, 255, 255));
        assert_eq!(comp.frequency, 0.1);
    }

    #[test]
    fn test_complementary_keeps_saturation_and_value() {
        let base = entry(0xAD, 0x00, 0x36, 1.0);
        let comp = complementary(&base, 0.1);
        assert_eq!(comp.hsv.s, base.hsv.s);
        assert!((comp.hsv.v as i16 - base.hsv.v as i16).abs() <= 1);
    }

    #[test]
    fn test_temperature() {
        let warm = vec![entry(255, 0, 0, 0.6), entry(0, 0, 255, 0.3)];
        assert_eq!(temperature(&warm), Temperature::Warm);

        let cool = vec![entry(255, 0, 0, 0.2), entry(0, 0, 255, 0.7)];
        assert_eq!(temperature(&cool), Temperature::Cool);

        let balanced = vec![entry(255, 0, 0, 0.5), entry(0, 0, 255, 0.5)];
        assert_eq!(temperature(&balanced), Temperature::Neutral);

        // Hue 90 and 270 belong to neither band
        let outside = vec![entry(128, 255, 0, 0.5), entry(128, 0, 255, 0.5)];
        assert_eq!(temperature(&outside), Temperature::Neutral);
    }

    #[test]
    fn test_complexity_bounds() {
        assert_eq!(complexity(&[]), 1);
        assert_eq!(complexity(&[entry(10, 20, 30, 1.0)]), 1);

        let many: Vec<ColorAnalysis> = (0..12)
            .map(|i| if i % 2 == 0 { entry(255, 0, 0, 0.1) } else { entry(128, 128, 128, 0.1) })
            .collect();
        // 0.8 * 12 + 2 * 50 / 100 = 10.6
        assert_eq!(complexity(&many), 10);

        let three = vec![entry(255, 0, 0, 0.3), entry(0, 255, 0, 0.3), entry(0, 0, 255, 0.3)];
        // 2.4 with zero saturation spread
        assert_eq!(complexity(&three), 2);
    }
}
