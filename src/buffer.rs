//! Raw pixel input for palette extraction

use image::RgbImage;

use crate::color::RgbColor;
use crate::error::ExtractionError;

/// Decoded image as interleaved 8-bit samples
///
/// The first three channels of every pixel are read as R, G, B; any further
/// channels (alpha, etc.) are ignored. The buffer is never mutated by the
/// extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl PixelBuffer {
    /// Wrap raw samples without checking them
    ///
    /// Shape problems surface later as [`ExtractionError`]s from
    /// [`PixelBuffer::validate`], which the extractor turns into a tier
    /// fallback.
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// Buffer of `width * height` copies of one color
    pub fn solid(color: RgbColor, width: u32, height: u32) -> Self {
        let pixels = width as usize * height as usize;
        let data = std::iter::repeat([color.r, color.g, color.b])
            .take(pixels)
            .flatten()
            .collect();
        Self::new(data, width, height, 3)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check dimensions, channel count and length
    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.channels < 3 {
            return Err(ExtractionError::UnsupportedChannels(self.channels));
        }
        if self.width == 0 || self.height == 0 {
            if self.data.is_empty() {
                return Err(ExtractionError::EmptyBuffer);
            }
            return Err(ExtractionError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let expected = self.pixel_count() * self.channels as usize;
        if self.data.len() != expected {
            return Err(ExtractionError::BufferLengthMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Iterate the RGB part of every pixel
    pub fn rgb_pixels(&self) -> impl Iterator<Item = RgbColor> + '_ {
        self.data
            .chunks_exact(self.channels.max(1) as usize)
            .filter(|px| px.len() >= 3)
            .map(|px| RgbColor::new(px[0], px[1], px[2]))
    }

    /// Copy into an `RgbImage`, dropping extra channels
    pub fn to_rgb_image(&self) -> Result<RgbImage, ExtractionError> {
        self.validate()?;
        let rgb: Vec<u8> = self.rgb_pixels().flat_map(|c| [c.r, c.g, c.b]).collect();
        RgbImage::from_raw(self.width, self.height, rgb).ok_or(ExtractionError::BufferLengthMismatch {
            expected: self.pixel_count() * 3,
            actual: self.data.len(),
        })
    }
}
