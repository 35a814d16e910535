//! Palette extraction
//!
//! Reduces a pixel buffer to a handful of representative colors. Extraction
//! never fails: it tries three tiers in order and reports which one produced
//! the palette.
//!
//! 1. k-means over a downscaled copy of the image
//! 2. dominant color plus synthesized variations
//! 3. a built-in static palette

pub mod dominant;
pub mod fallback;
pub mod kmeans;
pub mod metadata;

use image::imageops::{self, FilterType};
use image::RgbImage;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::buffer::PixelBuffer;
use crate::color::{ColorAnalysis, RgbColor};
use crate::config::ExtractionConfig;
use crate::constants::extraction::{MAX_COLORS, MIN_COLORS};
use crate::error::ExtractionError;
use crate::image_loader;

pub use kmeans::{Cluster, KMeans, KMeansResult};
pub use metadata::{ColorPalette, Temperature};

/// Which tier produced a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    Kmeans,
    Dominant,
    Fallback,
}

/// Painting material chosen by the user. Carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Watercolor,
    Acrylic,
    Oil,
    Pencil,
    Pastel,
    #[default]
    Other,
}

/// Palette plus the tier that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub palette: ColorPalette,
    pub method: ExtractionMethod,
}

/// Boundary response for palette extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPaletteResponse {
    pub palette: ColorPalette,
    pub material: Material,
    pub extraction_method: ExtractionMethod,
}

impl ColorPaletteResponse {
    pub fn new(extraction: Extraction, material: Material) -> Self {
        Self {
            palette: extraction.palette,
            material,
            extraction_method: extraction.method,
        }
    }
}

/// One palette-producing strategy
///
/// [`PaletteExtractor`] tries its tiers in order and keeps the first palette
/// that succeeds. The static palette closes the chain and cannot fail.
pub trait ExtractionTier: fmt::Debug + Send + Sync {
    /// Tag reported when this tier produces the palette
    fn method(&self) -> ExtractionMethod;

    /// Raw colors for up to `k` clusters, in any order
    fn colors(
        &self,
        buffer: &PixelBuffer,
        k: usize,
        config: &ExtractionConfig,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ColorAnalysis>, ExtractionError>;
}

/// k-means over a downscaled copy of the image
#[derive(Debug, Clone, Copy, Default)]
pub struct KmeansTier;

impl ExtractionTier for KmeansTier {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::Kmeans
    }

    fn colors(
        &self,
        buffer: &PixelBuffer,
        k: usize,
        config: &ExtractionConfig,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ColorAnalysis>, ExtractionError> {
        let image = buffer.to_rgb_image()?;
        let working = downscale(&image, config.working_size);
        let points: Vec<kmeans::Point> = working.pixels().map(|p| p.0.map(f64::from)).collect();

        let result = KMeans::new(k, config.max_iterations, config.convergence_threshold).run(&points, rng)?;
        let total = result.total_points as f64;

        Ok(result
            .clusters
            .iter()
            .map(|cluster| {
                let [r, g, b] = cluster.centroid;
                ColorAnalysis::from_rgb(RgbColor::from_channels(r, g, b), cluster.size as f64 / total)
            })
            .collect())
    }
}

/// Dominant color plus `k - 1` synthesized variations
#[derive(Debug, Clone, Copy, Default)]
pub struct DominantTier;

impl ExtractionTier for DominantTier {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::Dominant
    }

    fn colors(
        &self,
        buffer: &PixelBuffer,
        k: usize,
        config: &ExtractionConfig,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ColorAnalysis>, ExtractionError> {
        let color = dominant::dominant_color(buffer, config.max_pixels_for_dominant)?;
        Ok(dominant::synthesize_palette(color, k, config.dominant_spread, rng))
    }
}

/// Palette extractor with tiered fallback
#[derive(Debug, Clone)]
pub struct PaletteExtractor {
    config: ExtractionConfig,
    tiers: Vec<Arc<dyn ExtractionTier>>,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self {
            config: ExtractionConfig::default(),
            tiers: default_tiers(),
        }
    }
}

impl PaletteExtractor {
    /// Create an extractor with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom parameters
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidParameter` when `config` fails
    /// [`ExtractionConfig::validate`].
    pub fn with_config(config: ExtractionConfig) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tiers: default_tiers(),
        })
    }

    /// Replace the tiers tried before the static palette
    pub fn with_tiers(mut self, tiers: Vec<Arc<dyn ExtractionTier>>) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Methods of the configured tiers, in the order they are tried
    pub fn tier_methods(&self) -> Vec<ExtractionMethod> {
        self.tiers.iter().map(|tier| tier.method()).collect()
    }

    /// Extract up to `max_colors` colors from `buffer`
    ///
    /// `max_colors` is clamped to `[3, 12]`. Randomness comes from the
    /// configured seed, or from system entropy when no seed is set.
    pub fn extract(&self, buffer: &PixelBuffer, max_colors: usize) -> Extraction {
        let mut rng = self.rng();
        self.extract_with_rng(buffer, max_colors, &mut rng)
    }

    /// Same as [`extract`](Self::extract) with an injected random source
    pub fn extract_with_rng<R: RngCore>(&self, buffer: &PixelBuffer, max_colors: usize, rng: &mut R) -> Extraction {
        let k = clamp_max_colors(max_colors);
        let rng: &mut dyn RngCore = rng;

        for tier in &self.tiers {
            let method = tier.method();
            match tier
                .colors(buffer, k, &self.config, rng)
                .and_then(|colors| self.finish(colors, method))
            {
                Ok(extraction) => {
                    info!("palette extracted by {:?} tier ({} colors)", method, extraction.palette.colors.len());
                    return extraction;
                }
                Err(err) => warn!("{:?} tier failed: {}", method, err),
            }
        }

        warn!("no extraction tier succeeded; using static palette");
        self.fallback(k)
    }

    /// Decode encoded image bytes (PNG, JPEG, ...) and extract
    ///
    /// Bytes that cannot be decoded go straight to the static palette.
    pub fn extract_encoded(&self, bytes: &[u8], max_colors: usize) -> Extraction {
        match image_loader::decode_pixel_buffer(bytes) {
            Ok(buffer) => self.extract(&buffer, max_colors),
            Err(err) => {
                warn!("image decoding unavailable: {}; using static palette", err);
                self.fallback(clamp_max_colors(max_colors))
            }
        }
    }

    /// Extract and wrap in the boundary response
    pub fn extract_response(&self, buffer: &PixelBuffer, max_colors: usize, material: Material) -> ColorPaletteResponse {
        ColorPaletteResponse::new(self.extract(buffer, max_colors), material)
    }

    fn finish(&self, colors: Vec<ColorAnalysis>, method: ExtractionMethod) -> Result<Extraction, ExtractionError> {
        let palette = ColorPalette::from_colors(colors, self.config.complementary_frequency)?;
        Ok(Extraction { palette, method })
    }

    fn fallback(&self, k: usize) -> Extraction {
        let colors = fallback::fallback_colors(k);
        let dominant_color = fallback::FALLBACK_PALETTE[0].to_analysis();
        Extraction {
            palette: ColorPalette {
                complementary_colors: vec![metadata::complementary(&dominant_color, self.config.complementary_frequency)],
                temperature: metadata::temperature(&colors),
                complexity: metadata::complexity(&colors),
                dominant_color,
                colors,
            },
            method: ExtractionMethod::Fallback,
        }
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn default_tiers() -> Vec<Arc<dyn ExtractionTier>> {
    vec![Arc::new(KmeansTier), Arc::new(DominantTier)]
}

fn clamp_max_colors(max_colors: usize) -> usize {
    let k = max_colors.clamp(MIN_COLORS, MAX_COLORS);
    if k != max_colors {
        debug!("max_colors {} clamped to {}", max_colors, k);
    }
    k
}

/// Shrink so the longest side is at most `max_side`, keeping aspect ratio
fn downscale(image: &RgbImage, max_side: u32) -> RgbImage {
    let (w, h) = image.dimensions();
    let longest = w.max(h);
    if max_side == 0 || longest <= max_side {
        return image.clone();
    }

    let scale = max_side as f64 / longest as f64;
    let new_w = ((w as f64 * scale).round() as u32).max(1);
    let new_h = ((h as f64 * scale).round() as u32).max(1);
    imageops::resize(image, new_w, new_h, FilterType::Triangle)
}
