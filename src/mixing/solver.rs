//! Brute-force recipe search over a fixed paint set
//!
//! Blending is a linear RGB average weighted by ratio. Candidates are ranked
//! by Euclidean distance in Lab, so the search is deterministic: the first
//! candidate with the lowest distance in palette order wins.

use log::debug;

use crate::color::{channels_to_lab, hex_to_rgb, lab_distance, rgb_to_hex, rgb_to_lab, LabColor, RgbColor};
use crate::config::MixingConfig;
use crate::constants::mixing::{ALT_LABEL, BEST_LABEL};
use crate::error::Result;

use super::paints::{PaintColor, PAINT_PALETTE, PRIMARY_PAINTS};
use super::recipe::{ColorRecipe, ColorRecipeResponse, MixColor};

/// Lowest-distance blend found by one sub-search
#[derive(Debug, Clone)]
struct Candidate<'p> {
    paints: Vec<&'p PaintColor>,
    ratios: Vec<u8>,
    channels: [f64; 3],
    distance: f64,
}

impl Candidate<'_> {
    fn into_recipe(self, label: &str) -> ColorRecipe {
        let mix = self
            .paints
            .iter()
            .zip(&self.ratios)
            .map(|(paint, &ratio)| MixColor::new(paint, ratio))
            .collect();
        let [r, g, b] = self.channels;
        ColorRecipe::new(label, mix, RgbColor::from_channels(r, g, b).to_hex(), self.distance)
    }
}

/// Finds two- and three-paint mixes approximating a target color
#[derive(Debug, Clone)]
pub struct MixRecipeSolver<'p> {
    paints: &'p [PaintColor],
    primaries: &'p [PaintColor],
    config: MixingConfig,
}

impl Default for MixRecipeSolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl MixRecipeSolver<'static> {
    /// Solver over the built-in 12-color set
    pub fn new() -> Self {
        Self::with_palette(&PAINT_PALETTE, &PRIMARY_PAINTS)
    }
}

impl<'p> MixRecipeSolver<'p> {
    /// Solver over a caller-supplied paint set
    ///
    /// `primaries` feeds the three-color search and `paints` the two-color one.
    pub fn with_palette(paints: &'p [PaintColor], primaries: &'p [PaintColor]) -> Self {
        Self {
            paints,
            primaries,
            config: MixingConfig::default(),
        }
    }

    /// Replace the search parameters
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidParameter` when `config` fails
    /// [`MixingConfig::validate`], e.g. a pattern not summing to 100.
    pub fn with_config(mut self, config: MixingConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &MixingConfig {
        &self.config
    }

    /// Parse `target_hex` and solve
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` for anything other than six hex digits
    /// with an optional leading `#`.
    pub fn solve_hex(&self, target_hex: &str) -> Result<ColorRecipeResponse> {
        let target = hex_to_rgb(target_hex)?;
        Ok(self.solve(target))
    }

    /// Best two-color recipe (`"best"`) and best three-color recipe (`"alt"`)
    ///
    /// A sub-search with no candidates leaves its slot out of `recipes`.
    pub fn solve(&self, target: RgbColor) -> ColorRecipeResponse {
        let target_lab = rgb_to_lab(target);

        let recipes: Vec<ColorRecipe> = [
            self.best_pair(target_lab).map(|c| c.into_recipe(BEST_LABEL)),
            self.best_triple(target_lab).map(|c| c.into_recipe(ALT_LABEL)),
        ]
        .into_iter()
        .flatten()
        .collect();

        debug!("solved {} with {} recipe(s)", rgb_to_hex(target), recipes.len());

        ColorRecipeResponse {
            target: rgb_to_hex(target),
            recipes,
        }
    }

    /// Every unordered pair of distinct paints at every ratio step
    ///
    /// A paint is never paired with itself, so a target equal to one paint
    /// is matched by that paint at `100 - step` percent plus the closest
    /// partner, not with zero error. `#FFFFFF` lands on 90% ホワイト.
    fn best_pair(&self, target: LabColor) -> Option<Candidate<'p>> {
        let step = self.config.ratio_step.max(1);
        let mut best: Option<Candidate<'p>> = None;

        for (i, first) in self.paints.iter().enumerate() {
            for second in self.paints.iter().skip(i + 1) {
                for ratio in (step..100).step_by(usize::from(step)) {
                    consider(&mut best, vec![first, second], vec![ratio, 100 - ratio], target);
                }
            }
        }
        best
    }

    /// Every unordered triple of primaries against each ratio pattern
    fn best_triple(&self, target: LabColor) -> Option<Candidate<'p>> {
        let mut best: Option<Candidate<'p>> = None;

        for (i, a) in self.primaries.iter().enumerate() {
            for (j, b) in self.primaries.iter().enumerate().skip(i + 1) {
                for c in self.primaries.iter().skip(j + 1) {
                    for pattern in &self.config.three_color_patterns {
                        consider(&mut best, vec![a, b, c], pattern.to_vec(), target);
                    }
                }
            }
        }
        best
    }
}

/// Replace `best` when this blend is strictly closer
fn consider<'p>(best: &mut Option<Candidate<'p>>, paints: Vec<&'p PaintColor>, ratios: Vec<u8>, target: LabColor) {
    let Some(channels) = blend(&paints, &ratios) else {
        return;
    };
    let distance = lab_distance(channels_to_lab(channels), target);
    if !distance.is_finite() {
        return;
    }
    if best.as_ref().map_or(true, |b| distance < b.distance) {
        *best = Some(Candidate {
            paints,
            ratios,
            channels,
            distance,
        });
    }
}

/// Ratio-weighted channel average on the 0-255 scale
fn blend(paints: &[&PaintColor], ratios: &[u8]) -> Option<[f64; 3]> {
    let total: u32 = ratios.iter().map(|&r| u32::from(r)).sum();
    if total == 0 {
        return None;
    }

    let mut sums = [0u32; 3];
    for (paint, &ratio) in paints.iter().zip(ratios) {
        let rgb = paint.rgb;
        for (acc, channel) in sums.iter_mut().zip([rgb.r, rgb.g, rgb.b]) {
            *acc += u32::from(ratio) * u32::from(channel);
        }
    }
    Some(sums.map(|s| f64::from(s) / f64::from(total)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::paints::{COBALT_BLUE, WHITE};

    #[test]
    fn test_white_target() {
        let response = MixRecipeSolver::new().solve_hex("#FFFFFF").unwrap();
        let best = response.recipe("best").unwrap();

        // White cannot pair with itself, so the nearest blend is 90% white
        assert_eq!(best.estimated_result_hex, "#F3ECEA");
        assert_eq!(best.estimated_error.value, 6.8);
        assert_eq!(best.order[0], "ホワイト");
        assert_eq!(best.mix.iter().find(|m| m.name == "ホワイト").map(|m| m.ratio), Some(90));
    }

    #[test]
    fn test_black_target() {
        let response = MixRecipeSolver::new().solve_hex("#001400").unwrap();
        let best = response.recipe("best").unwrap();

        assert_eq!(best.order[0], "ジェットブラック");
        assert_eq!(best.estimated_error.value, 3.3);
        assert_eq!(best.estimated_result_hex, "#0D1804");
    }

    #[test]
    fn test_mid_color_returns_best_and_alt() {
        let response = MixRecipeSolver::new().solve_hex("#FF6B6B").unwrap();
        assert_eq!(response.target, "#FF6B6B");
        assert_eq!(response.recipes.len(), 2);

        let best = &response.recipes[0];
        let alt = &response.recipes[1];
        assert_eq!(best.name, "best");
        assert_eq!(alt.name, "alt");
        assert_eq!(best.mix.len(), 2);
        assert_eq!(alt.mix.len(), 3);
        assert_eq!(best.estimated_error.value, 20.0);
        assert_eq!(alt.estimated_error.value, 32.9);
        assert_eq!(best.order, vec!["パーマネントレッド", "パーマネントイエローディープ"]);
        assert_eq!(alt.order, vec!["ホワイト", "パーマネントレッド", "パーマネントイエロー"]);
    }

    #[test]
    fn test_deterministic() {
        let solver = MixRecipeSolver::new();
        let first = solver.solve(RgbColor::new(0x40, 0x80, 0x20));
        for _ in 0..3 {
            assert_eq!(solver.solve(RgbColor::new(0x40, 0x80, 0x20)), first);
        }
    }

    #[test]
    fn test_ratios_sum_to_hundred() {
        let solver = MixRecipeSolver::new();
        for hex in ["#123456", "#ABCDEF", "#808080", "#FA8000", "#00FF00"] {
            for recipe in solver.solve_hex(hex).unwrap().recipes {
                assert_eq!(recipe.total_ratio(), 100, "{} {}", hex, recipe.name);
                assert!(recipe.estimated_error.value >= 0.0);
            }
        }
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(MixRecipeSolver::new().solve_hex("#GGGGGG").is_err());
        assert!(MixRecipeSolver::new().solve_hex("#FFF").is_err());
    }

    #[test]
    fn test_small_palette_omits_slots() {
        let single = [WHITE];
        let response = MixRecipeSolver::with_palette(&single, &single).solve(RgbColor::WHITE);
        assert!(response.recipes.is_empty());

        let pair = [WHITE, COBALT_BLUE];
        let response = MixRecipeSolver::with_palette(&pair, &pair).solve(RgbColor::WHITE);
        assert_eq!(response.recipes.len(), 1);
        assert_eq!(response.recipes[0].name, "best");
    }

    #[test]
    fn test_coarser_ratio_step() {
        let config = MixingConfig {
            ratio_step: 25,
            ..MixingConfig::default()
        };
        let solver = MixRecipeSolver::new().with_config(config).unwrap();
        let best = solver.solve_hex("#808080").unwrap().recipes.remove(0);
        assert!(best.mix.iter().all(|m| m.ratio % 25 == 0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MixingConfig {
            three_color_patterns: vec![[50, 50, 10]],
            ..MixingConfig::default()
        };
        let err = MixRecipeSolver::new().with_config(config).unwrap_err();
        assert!(matches!(err, crate::ColorError::InvalidParameter { .. }));

        let config = MixingConfig {
            ratio_step: 0,
            ..MixingConfig::default()
        };
        assert!(MixRecipeSolver::new().with_config(config).is_err());
    }
}
