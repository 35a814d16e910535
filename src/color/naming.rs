//! Heuristic color naming
//!
//! Colors are bucketed into coarse families by an ordered rule table.
//! The first rule whose predicate matches decides the family, so the
//! achromatic and brown checks must stay ahead of the hue bands.

use serde::{Deserialize, Serialize};

use crate::color::{conversion, HsvColor, RgbColor};

/// Coarse color family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorFamily {
    White,
    Black,
    Gray,
    Red,
    Orange,
    Yellow,
    YellowGreen,
    Green,
    BlueGreen,
    Cyan,
    Blue,
    Purple,
    Pink,
    Brown,
}

impl ColorFamily {
    /// Display label used in palettes
    pub fn label(self) -> &'static str {
        match self {
            ColorFamily::White => "白",
            ColorFamily::Black => "黒",
            ColorFamily::Gray => "グレー",
            ColorFamily::Red => "赤",
            ColorFamily::Orange => "オレンジ",
            ColorFamily::Yellow => "黄色",
            ColorFamily::YellowGreen => "黄緑",
            ColorFamily::Green => "緑",
            ColorFamily::BlueGreen => "青緑",
            ColorFamily::Cyan => "水色",
            ColorFamily::Blue => "青",
            ColorFamily::Purple => "紫",
            ColorFamily::Pink => "ピンク",
            ColorFamily::Brown => "茶色",
        }
    }
}

/// Everything a naming predicate may look at
#[derive(Debug, Clone, Copy)]
pub struct ColorSample {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub hsv: HsvColor,
}

impl ColorSample {
    pub fn new(rgb: RgbColor) -> Self {
        let [r, g, b] = rgb.channels();
        Self {
            r,
            g,
            b,
            hsv: conversion::rgb_to_hsv(rgb),
        }
    }
}

/// `(predicate, family)` pair evaluated in table order
pub struct NamingRule {
    pub family: ColorFamily,
    pub matches: fn(&ColorSample) -> bool,
}

// Thresholds are tunable; only the ordering of the families is load-bearing.
const ACHROMATIC_MAX_SATURATION: u8 = 12;
const WHITE_MIN_VALUE: u8 = 90;
const BLACK_MAX_VALUE: u8 = 18;
const BROWN_MAX_RED: f64 = 200.0;
const BROWN_MIN_RED_BLUE_RATIO: f64 = 0.2;
const BROWN_MIN_GREEN_BLUE_GAP: f64 = 20.0;
const PINK_MAX_SATURATION: u8 = 60;
const PINK_MIN_VALUE: u8 = 70;

fn is_white(p: &ColorSample) -> bool {
    p.hsv.s <= ACHROMATIC_MAX_SATURATION && p.hsv.v >= WHITE_MIN_VALUE
}

fn is_black(p: &ColorSample) -> bool {
    p.hsv.v <= BLACK_MAX_VALUE
}

fn is_gray(p: &ColorSample) -> bool {
    p.hsv.s <= ACHROMATIC_MAX_SATURATION
}

/// R > G > B with a muted red channel and a real green/blue gap
fn is_brown(p: &ColorSample) -> bool {
    p.r >= p.g
        && p.g >= p.b
        && p.r < BROWN_MAX_RED
        && (p.r - p.b) / p.r > BROWN_MIN_RED_BLUE_RATIO
        && p.g - p.b >= BROWN_MIN_GREEN_BLUE_GAP
        && p.g <= p.r * 0.8
}

fn is_pink(p: &ColorSample) -> bool {
    (p.hsv.h >= 300.0 || p.hsv.h < 15.0) && p.hsv.s < PINK_MAX_SATURATION && p.hsv.v >= PINK_MIN_VALUE
}

/// Ordered naming rules. The final band always matches.
pub const NAMING_RULES: &[NamingRule] = &[
    NamingRule { family: ColorFamily::White, matches: is_white },
    NamingRule { family: ColorFamily::Black, matches: is_black },
    NamingRule { family: ColorFamily::Gray, matches: is_gray },
    NamingRule { family: ColorFamily::Brown, matches: is_brown },
    NamingRule { family: ColorFamily::Pink, matches: is_pink },
    NamingRule { family: ColorFamily::Red, matches: |p| p.hsv.h < 8.0 || p.hsv.h >= 330.0 },
    NamingRule { family: ColorFamily::Orange, matches: |p| p.hsv.h < 40.0 },
    NamingRule { family: ColorFamily::Yellow, matches: |p| p.hsv.h < 65.0 },
    NamingRule { family: ColorFamily::YellowGreen, matches: |p| p.hsv.h < 90.0 },
    NamingRule { family: ColorFamily::Green, matches: |p| p.hsv.h < 160.0 },
    NamingRule { family: ColorFamily::BlueGreen, matches: |p| p.hsv.h < 180.0 },
    NamingRule { family: ColorFamily::Cyan, matches: |p| p.hsv.h < 200.0 },
    NamingRule { family: ColorFamily::Blue, matches: |p| p.hsv.h < 255.0 },
    NamingRule { family: ColorFamily::Purple, matches: |_| true },
];

/// Classify `rgb` into a color family
pub fn classify(rgb: RgbColor) -> ColorFamily {
    let sample = ColorSample::new(rgb);
    NAMING_RULES
        .iter()
        .find(|rule| (rule.matches)(&sample))
        .map(|rule| rule.family)
        .unwrap_or(ColorFamily::Gray)
}

/// Japanese display name for `rgb`
pub fn color_name(rgb: RgbColor) -> &'static str {
    classify(rgb).label()
}
