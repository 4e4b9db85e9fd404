//! Data models
//!
//! Plain values passed into and out of the nutrition calculations.

mod consumption;
mod food;
mod nutrition;
mod substitution;

pub use consumption::{ConsumedItem, MealTotals, ProteinSplit};
pub use food::{Food, MacroGroup, ProteinOrigin, DEFAULT_REFERENCE_QUANTITY};
pub use nutrition::{Macros, NutritionTotals};
pub use substitution::{SubstitutionCandidate, SubstitutionCriterion};
