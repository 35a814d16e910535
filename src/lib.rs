//! # Paint Palette
//!
//! Color palette extraction and paint mixing recipes.
//!
//! This library provides:
//! - Palette extraction from pixel buffers with k-means clustering, falling
//!   back to a dominant-color estimate and finally a built-in palette
//! - Palette metadata: dominant and complementary colors, temperature and
//!   complexity
//! - Mixing recipes that approximate a target color with a fixed 12-paint set
//! - Shared color math (hex, HSV, CIE Lab, ΔE76) and heuristic color naming
//!
//! ## Example
//!
//! ```rust,no_run
//! use paint_palette::{extract_palette, solve_recipe, Material};
//! use std::path::Path;
//!
//! let response = extract_palette(Path::new("photo.jpg"), 6, Material::Watercolor)?;
//! println!("Dominant: {}", response.palette.dominant_color.hex);
//!
//! let recipes = solve_recipe("#FF6B6B")?;
//! for recipe in &recipes.recipes {
//!     println!("{}: {}", recipe.name, recipe.sentence_ja);
//! }
//! # Ok::<(), paint_palette::ColorError>(())
//! ```

use std::path::Path;

pub mod buffer;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extraction;
pub mod image_loader;
pub mod mixing;

pub use buffer::PixelBuffer;
pub use color::{ColorAnalysis, ColorFamily, HsvColor, RgbColor};
pub use config::{EngineConfig, ExtractionConfig, MixingConfig};
pub use error::{ColorError, ExtractionError, Result};
pub use extraction::{
    ColorPalette, ColorPaletteResponse, DominantTier, ExtractionMethod, ExtractionTier, KmeansTier, Material, PaletteExtractor,
    Temperature,
};
pub use mixing::{ColorRecipe, ColorRecipeResponse, MixColor, MixRecipeSolver, PaintColor};

/// Extract a palette from an image file
///
/// This is the main entry point for palette extraction. Once the file is
/// decoded, extraction itself cannot fail.
///
/// # Errors
///
/// Returns `ColorError::ImageLoadError` if the file cannot be read or decoded.
pub fn extract_palette(image_path: &Path, max_colors: usize, material: Material) -> Result<ColorPaletteResponse> {
    let buffer = image_loader::load_pixel_buffer(image_path)?;
    Ok(PaletteExtractor::new().extract_response(&buffer, max_colors, material))
}

/// Mixing recipes for a `#RRGGBB` target using the built-in paint set
///
/// # Errors
///
/// Returns `ColorError::InvalidHex` if `target_hex` is malformed.
pub fn solve_recipe(target_hex: &str) -> Result<ColorRecipeResponse> {
    MixRecipeSolver::new().solve_hex(target_hex)
}
