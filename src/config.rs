//! Configuration structures for palette extraction and paint mixing.
//!
//! All tunable parameters live here, grouped by component. Defaults
//! reproduce the fixed behavior of the engine; a JSON file can override them
//! for experiments.
//!
//! ```no_run
//! use paint_palette::EngineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = EngineConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = EngineConfig::default();
//! # Ok::<(), paint_palette::ColorError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{extraction, mixing};
use crate::{ColorError, Result};

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Palette extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Mixing solver configuration
    #[serde(default)]
    pub mixing: MixingConfig,
}

/// Palette extraction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Longest side of the k-means working image
    pub working_size: u32,

    /// Lloyd's algorithm iteration cap
    pub max_iterations: usize,

    /// Stop once no centroid moves further than this (RGB units)
    pub convergence_threshold: f64,

    /// Seed for centroid initialization and dominant-tier perturbation.
    /// `None` draws from system randomness on every call.
    pub seed: Option<u64>,

    /// Channel perturbation step per synthesized dominant-tier entry
    pub dominant_spread: f64,

    /// Pixel budget for the dominant-color statistics
    pub max_pixels_for_dominant: usize,

    /// Frequency given to derived complementary colors
    pub complementary_frequency: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            working_size: extraction::WORKING_SIZE,
            max_iterations: extraction::MAX_ITERATIONS,
            convergence_threshold: extraction::CONVERGENCE_THRESHOLD,
            seed: None,
            dominant_spread: extraction::DOMINANT_SPREAD,
            max_pixels_for_dominant: extraction::MAX_PIXELS_FOR_DOMINANT,
            complementary_frequency: extraction::COMPLEMENTARY_FREQUENCY,
        }
    }
}

/// Mixing solver parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixingConfig {
    /// Two-color sweep step in percent; ratios run from `step` to `100 - step`
    pub ratio_step: u8,

    /// Ratio menu for the three-color search, each summing to 100
    pub three_color_patterns: Vec<[u8; 3]>,
}

impl Default for MixingConfig {
    fn default() -> Self {
        Self {
            ratio_step: mixing::RATIO_STEP,
            three_color_patterns: mixing::THREE_COLOR_PATTERNS.to_vec(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ColorError::config(format!("Failed to read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ColorError::config(format!("Failed to parse {}", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| ColorError::config(format!("Failed to write {}", path.display()), e))?;
        Ok(())
    }

    /// Reject values the algorithms cannot run with
    pub fn validate(&self) -> Result<()> {
        self.extraction.validate()?;
        self.mixing.validate()
    }
}

impl ExtractionConfig {
    /// Reject values the extraction tiers cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.working_size == 0 {
            return Err(invalid("extraction.working_size", self.working_size));
        }
        if self.max_iterations == 0 {
            return Err(invalid("extraction.max_iterations", self.max_iterations));
        }
        if self.convergence_threshold.is_nan() || self.convergence_threshold < 0.0 {
            return Err(invalid("extraction.convergence_threshold", self.convergence_threshold));
        }
        if !(0.0..=1.0).contains(&self.complementary_frequency) {
            return Err(invalid("extraction.complementary_frequency", self.complementary_frequency));
        }
        Ok(())
    }
}

impl MixingConfig {
    /// Reject step sizes outside `1..50` and patterns not summing to 100
    pub fn validate(&self) -> Result<()> {
        if self.ratio_step == 0 || self.ratio_step >= 50 {
            return Err(invalid("mixing.ratio_step", self.ratio_step));
        }
        for pattern in &self.three_color_patterns {
            let total: u32 = pattern.iter().map(|&p| u32::from(p)).sum();
            if total != 100 {
                return Err(invalid("mixing.three_color_patterns", format!("{:?}", pattern)));
            }
        }
        Ok(())
    }
}

fn invalid(parameter: &str, value: impl ToString) -> ColorError {
    ColorError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extraction.working_size, 200);
        assert_eq!(config.extraction.max_iterations, 20);
        assert_eq!(config.mixing.ratio_step, 10);
        assert_eq!(config.mixing.three_color_patterns.len(), 4);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"extraction": {"seed": 7}}"#).unwrap();
        assert_eq!(config.extraction.seed, Some(7));
        assert_eq!(config.extraction.max_iterations, 20);
        assert_eq!(config.mixing, MixingConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = EngineConfig::default();
        config.mixing.three_color_patterns.push([50, 50, 10]);
        assert!(matches!(config.validate(), Err(ColorError::InvalidParameter { .. })));

        let mut config = EngineConfig::default();
        config.mixing.ratio_step = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.extraction.convergence_threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("paint_palette_config_{}.json", std::process::id()));
        let mut config = EngineConfig::default();
        config.extraction.seed = Some(42);
        config.to_json_file(&path).unwrap();

        let loaded = EngineConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = EngineConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ColorError::ConfigError { .. }));
    }
}
