//! Built-in palette returned when no extraction tier succeeds

use crate::color::{ColorAnalysis, RgbColor};

/// One hardcoded fallback entry
#[derive(Debug, Clone, Copy)]
pub struct FallbackEntry {
    pub rgb: RgbColor,
    pub name: &'static str,
    pub frequency: f64,
}

/// Static fallback palette, sorted by frequency
pub static FALLBACK_PALETTE: [FallbackEntry; 8] = [
    FallbackEntry { rgb: RgbColor::new(0x8B, 0x45, 0x13), name: "茶色", frequency: 0.25 },
    FallbackEntry { rgb: RgbColor::new(0x22, 0x8B, 0x22), name: "緑", frequency: 0.20 },
    FallbackEntry { rgb: RgbColor::new(0x41, 0x69, 0xE1), name: "青", frequency: 0.15 },
    FallbackEntry { rgb: RgbColor::new(0xFF, 0xFF, 0xFF), name: "白", frequency: 0.12 },
    FallbackEntry { rgb: RgbColor::new(0x00, 0x00, 0x00), name: "黒", frequency: 0.10 },
    FallbackEntry { rgb: RgbColor::new(0xFF, 0x63, 0x47), name: "オレンジ", frequency: 0.08 },
    FallbackEntry { rgb: RgbColor::new(0xFF, 0xD7, 0x00), name: "黄色", frequency: 0.06 },
    FallbackEntry { rgb: RgbColor::new(0x93, 0x70, 0xDB), name: "紫", frequency: 0.04 },
];

impl FallbackEntry {
    pub fn to_analysis(self) -> ColorAnalysis {
        ColorAnalysis::with_name(self.rgb, self.name, self.frequency)
    }
}

/// The first `limit` fallback entries (at least one)
pub fn fallback_colors(limit: usize) -> Vec<ColorAnalysis> {
    FALLBACK_PALETTE
        .iter()
        .take(limit.max(1))
        .map(|entry| entry.to_analysis())
        .collect()
}
