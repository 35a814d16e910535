//! Physical paint set available for mixing

use serde::Serialize;

use crate::color::RgbColor;

/// One tube of paint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaintColor {
    pub name: &'static str,
    pub hex: &'static str,
    #[serde(skip)]
    pub rgb: RgbColor,
}

impl PaintColor {
    pub const fn new(name: &'static str, hex: &'static str, rgb: RgbColor) -> Self {
        Self { name, hex, rgb }
    }
}

pub const WHITE: PaintColor = PaintColor::new("ホワイト", "#FFFFFF", RgbColor::new(0xFF, 0xFF, 0xFF));
pub const PERMANENT_RED: PaintColor = PaintColor::new("パーマネントレッド", "#AD0036", RgbColor::new(0xAD, 0x00, 0x36));
pub const COBALT_BLUE: PaintColor = PaintColor::new("コバルトブルー", "#005EAD", RgbColor::new(0x00, 0x5E, 0xAD));
pub const JET_BLACK: PaintColor = PaintColor::new("ジェットブラック", "#001400", RgbColor::new(0x00, 0x14, 0x00));
pub const BURNT_SIENNA: PaintColor = PaintColor::new("バーナントシェナー", "#864028", RgbColor::new(0x86, 0x40, 0x28));
pub const VIOLET: PaintColor = PaintColor::new("バイオレット", "#7F1084", RgbColor::new(0x7F, 0x10, 0x84));
pub const PERMANENT_YELLOW: PaintColor =
    PaintColor::new("パーマネントイエロー", "#FFF100", RgbColor::new(0xFF, 0xF1, 0x00));
pub const PERMANENT_GREEN_LIGHT: PaintColor =
    PaintColor::new("パーマネントグリーンライト", "#00A95F", RgbColor::new(0x00, 0xA9, 0x5F));
pub const PERMANENT_GREEN_MIDDLE: PaintColor =
    PaintColor::new("パーマネントグリーンミドル", "#00703B", RgbColor::new(0x00, 0x70, 0x3B));
pub const PERMANENT_YELLOW_DEEP: PaintColor =
    PaintColor::new("パーマネントイエローディープ", "#FBCE28", RgbColor::new(0xFB, 0xCE, 0x28));
pub const PERMANENT_SCARLET: PaintColor =
    PaintColor::new("パーマネントスカーレット", "#C8002E", RgbColor::new(0xC8, 0x00, 0x2E));
pub const SKY_BLUE: PaintColor = PaintColor::new("スカイブルー", "#007FC9", RgbColor::new(0x00, 0x7F, 0xC9));

/// The 12-color paint set, in search order
pub static PAINT_PALETTE: [PaintColor; 12] = [
    WHITE,
    PERMANENT_RED,
    COBALT_BLUE,
    JET_BLACK,
    BURNT_SIENNA,
    VIOLET,
    PERMANENT_YELLOW,
    PERMANENT_GREEN_LIGHT,
    PERMANENT_GREEN_MIDDLE,
    PERMANENT_YELLOW_DEEP,
    PERMANENT_SCARLET,
    SKY_BLUE,
];

/// Subset used by the three-color search
pub static PRIMARY_PAINTS: [PaintColor; 5] = [WHITE, JET_BLACK, PERMANENT_RED, COBALT_BLUE, PERMANENT_YELLOW];

/// Look up a paint of the full set by name
pub fn find_paint(name: &str) -> Option<&'static PaintColor> {
    PAINT_PALETTE.iter().find(|paint| paint.name == name)
}
