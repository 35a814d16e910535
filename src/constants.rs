//! Fixed reference values for palette extraction and paint mixing
//!
//! Everything here is compile-time constant and shared read-only across
//! threads for the life of the process.

/// Palette extraction limits and defaults
pub mod extraction {
    /// Smallest accepted `max_colors`
    pub const MIN_COLORS: usize = 3;

    /// Largest accepted `max_colors`
    pub const MAX_COLORS: usize = 12;

    /// Longest side of the k-means working image
    pub const WORKING_SIZE: u32 = 200;

    /// Hard iteration cap for Lloyd's algorithm
    pub const MAX_ITERATIONS: usize = 20;

    /// Centroid movement (RGB units) below which k-means has converged
    pub const CONVERGENCE_THRESHOLD: f64 = 1.0;

    /// Per-entry channel perturbation step for the dominant tier
    pub const DOMINANT_SPREAD: f64 = 24.0;

    /// Pixel budget sampled by the dominant tier
    pub const MAX_PIXELS_FOR_DOMINANT: usize = 40_000;

    /// Nominal frequency assigned to derived complementary colors
    pub const COMPLEMENTARY_FREQUENCY: f64 = 0.1;

    /// Warm sum must exceed cool sum by this factor (and vice versa)
    pub const TEMPERATURE_DOMINANCE: f64 = 1.5;
}

/// Paint-mixing search parameters
pub mod mixing {
    /// Two-color sweep step in percent (10%, 20%, ... 90%)
    pub const RATIO_STEP: u8 = 10;

    /// Ratio menu for the three-color search
    pub const THREE_COLOR_PATTERNS: [[u8; 3]; 4] = [[50, 30, 20], [40, 40, 20], [60, 25, 15], [45, 35, 20]];

    /// Tag recorded in `EstimatedError::method`
    pub const ERROR_METHOD: &str = "delta_e_approx";

    /// Recipe label for the best two-color mix
    pub const BEST_LABEL: &str = "best";

    /// Recipe label for the best three-color mix
    pub const ALT_LABEL: &str = "alt";
}
