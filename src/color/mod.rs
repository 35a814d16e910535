//! Color value types, conversions and naming
//!
//! This module is shared by palette extraction and the mixing solver and
//! depends on neither of them.

pub mod conversion;
pub mod model;
pub mod naming;

pub use conversion::{channels_to_lab, hex_to_rgb, hsv_to_rgb, lab_distance, rgb_to_hex, rgb_to_hsv, rgb_to_lab};
pub use model::{ColorAnalysis, HsvColor, LabColor, RgbColor};
pub use naming::{classify, color_name, ColorFamily};
