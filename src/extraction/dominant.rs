//! Dominant-color fallback tier
//!
//! Computes one statistical color for the whole buffer and pads the palette
//! with random variations of it so the output keeps the requested shape.
//! Only the first entry says anything about the image.

use rand::Rng;

use crate::buffer::PixelBuffer;
use crate::color::{ColorAnalysis, RgbColor};
use crate::error::ExtractionError;

/// Per-channel mean of the buffer, sampling at most `max_pixels` pixels
pub fn dominant_color(buffer: &PixelBuffer, max_pixels: usize) -> Result<RgbColor, ExtractionError> {
    buffer.validate()?;

    let stride = buffer.pixel_count().div_ceil(max_pixels.max(1)).max(1);
    let mut sums = [0.0f64; 3];
    let mut count = 0usize;

    for pixel in buffer.rgb_pixels().step_by(stride) {
        for (acc, v) in sums.iter_mut().zip(pixel.channels()) {
            *acc += v;
        }
        count += 1;
    }

    if count == 0 {
        return Err(ExtractionError::EmptyBuffer);
    }

    let mean = sums.map(|s| s / count as f64);
    if mean.iter().any(|v| !v.is_finite()) {
        return Err(ExtractionError::NumericalFailure("non-finite channel mean".into()));
    }
    Ok(RgbColor::from_channels(mean[0], mean[1], mean[2]))
}

/// Dominant color followed by `count - 1` perturbed variants
///
/// Entry `i` has each channel shifted by up to `spread * i`, and frequencies
/// decrease linearly with the index and sum to 1.
pub fn synthesize_palette<R: Rng + ?Sized>(
    dominant: RgbColor,
    count: usize,
    spread: f64,
    rng: &mut R,
) -> Vec<ColorAnalysis> {
    let count = count.max(1);
    let weight_total = (count * (count + 1) / 2) as f64;

    (0..count)
        .map(|i| {
            let frequency = (count - i) as f64 / weight_total;
            if i == 0 {
                return ColorAnalysis::from_rgb(dominant, frequency);
            }

            let variation = (spread * i as f64).abs();
            let [r, g, b] = dominant.channels().map(|c| {
                let offset = if variation > 0.0 && variation.is_finite() {
                    rng.gen_range(-variation..=variation)
                } else {
                    0.0
                };
                c + offset
            });
            ColorAnalysis::from_rgb(RgbColor::from_channels(r, g, b), frequency)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dominant_color_mean() {
        let buffer = PixelBuffer::new(vec![0, 0, 0, 100, 200, 50], 2, 1, 3);
        assert_eq!(dominant_color(&buffer, 1000).unwrap(), RgbColor::new(50, 100, 25));
    }

    #[test]
    fn test_dominant_color_subsamples() {
        let buffer = PixelBuffer::solid(RgbColor::new(9, 8, 7), 50, 50);
        assert_eq!(dominant_color(&buffer, 10).unwrap(), RgbColor::new(9, 8, 7));
    }

    #[test]
    fn test_dominant_color_rejects_bad_buffer() {
        let buffer = PixelBuffer::new(vec![1, 2], 1, 1, 3);
        assert!(dominant_color(&buffer, 100).is_err());
        let empty = PixelBuffer::new(vec![], 0, 0, 3);
        assert_eq!(dominant_color(&empty, 100), Err(ExtractionError::EmptyBuffer));
    }

    #[test]
    fn test_synthesized_shape() {
        let mut rng = StdRng::seed_from_u64(2);
        let colors = synthesize_palette(RgbColor::new(120, 80, 40), 5, 24.0, &mut rng);

        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0].rgb, RgbColor::new(120, 80, 40));
        for pair in colors.windows(2) {
            assert!(pair[0].frequency > pair[1].frequency);
        }
        let total: f64 = colors.iter().map(|c| c.frequency).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_perturbation_bounded_by_index() {
        let mut rng = StdRng::seed_from_u64(8);
        let base = RgbColor::new(128, 128, 128);
        let colors = synthesize_palette(base, 4, 10.0, &mut rng);
        for (i, entry) in colors.iter().enumerate() {
            let limit = 10 * i as i16 + 1;
            assert!((entry.rgb.r as i16 - 128).abs() <= limit);
            assert!((entry.rgb.g as i16 - 128).abs() <= limit);
            assert!((entry.rgb.b as i16 - 128).abs() <= limit);
        }
    }

    #[test]
    fn test_zero_spread_repeats_dominant() {
        let mut rng = StdRng::seed_from_u64(0);
        let colors = synthesize_palette(RgbColor::new(1, 2, 3), 3, 0.0, &mut rng);
        assert!(colors.iter().all(|c| c.rgb == RgbColor::new(1, 2, 3)));
    }
}
