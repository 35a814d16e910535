//! Paint mixing recipes
//!
//! Given a target color, [`MixRecipeSolver`] searches the fixed paint set for
//! the closest two-paint blend and the closest three-paint blend.

pub mod paints;
pub mod recipe;
pub mod solver;

pub use paints::{PaintColor, PAINT_PALETTE, PRIMARY_PAINTS};
pub use recipe::{ColorRecipe, ColorRecipeResponse, EstimatedError, MixColor};
pub use solver::MixRecipeSolver;
