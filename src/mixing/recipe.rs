//! Recipe types returned by the mixing solver

use serde::{Deserialize, Serialize};

use crate::constants::mixing::ERROR_METHOD;

use super::paints::PaintColor;

/// One paint in a mix with its integer percentage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixColor {
    pub name: String,
    pub hex: String,
    pub ratio: u8,
}

impl MixColor {
    pub fn new(paint: &PaintColor, ratio: u8) -> Self {
        Self {
            name: paint.name.to_string(),
            hex: paint.hex.to_string(),
            ratio,
        }
    }
}

/// Distance between the blended result and the target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedError {
    pub method: String,
    pub value: f64,
}

impl EstimatedError {
    /// ΔE approximation rounded to one decimal
    pub fn delta_e(distance: f64) -> Self {
        Self {
            method: ERROR_METHOD.to_string(),
            value: (distance * 10.0).round() / 10.0,
        }
    }
}

/// A mixing recipe for one target color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRecipe {
    /// `"best"` for the two-color winner, `"alt"` for the three-color winner
    pub name: String,
    pub mix: Vec<MixColor>,
    /// Paint names by descending ratio
    pub order: Vec<String>,
    pub estimated_result_hex: String,
    pub estimated_error: EstimatedError,
    #[serde(rename = "sentence_ja")]
    pub sentence_ja: String,
}

impl ColorRecipe {
    pub fn new(name: &str, mix: Vec<MixColor>, estimated_result_hex: String, distance: f64) -> Self {
        let order = mix_order(&mix);
        let sentence_ja = instruction_ja(&mix);
        Self {
            name: name.to_string(),
            mix,
            order,
            estimated_result_hex,
            estimated_error: EstimatedError::delta_e(distance),
            sentence_ja,
        }
    }

    /// Sum of the mix ratios
    pub fn total_ratio(&self) -> u32 {
        self.mix.iter().map(|m| u32::from(m.ratio)).sum()
    }
}

/// Solver output: the target and at most two recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecipeResponse {
    pub target: String,
    pub recipes: Vec<ColorRecipe>,
}

impl ColorRecipeResponse {
    /// Recipe with the given label, if present
    pub fn recipe(&self, name: &str) -> Option<&ColorRecipe> {
        self.recipes.iter().find(|r| r.name == name)
    }
}

/// Stable sort by descending ratio, names only
fn mix_order(mix: &[MixColor]) -> Vec<String> {
    let mut sorted: Vec<&MixColor> = mix.iter().collect();
    sorted.sort_by(|a, b| b.ratio.cmp(&a.ratio));
    sorted.into_iter().map(|m| m.name.clone()).collect()
}

/// Japanese instruction for a two or three paint mix
fn instruction_ja(mix: &[MixColor]) -> String {
    let mut sorted: Vec<&MixColor> = mix.iter().collect();
    sorted.sort_by(|a, b| b.ratio.cmp(&a.ratio));

    match sorted.as_slice() {
        [base, other] => format!("{}をベースに、{}を{}%加えて混ぜてください。", base.name, other.name, other.ratio),
        [base, second, third] => format!(
            "{}をベースに、{}を{}%、{}を{}%加えて混ぜてください。",
            base.name, second.name, second.ratio, third.name, third.ratio
        ),
        [only] => format!("{}をそのまま使ってください。", only.name),
        _ => String::new(),
    }
}
