//! Nutrition calculation module
//!
//! Pure functions: normalizing raw food records, scaling and totaling macros,
//! energy checks, coaching targets and food substitution.

pub mod energy;
pub mod normalize;
pub mod scaler;
pub mod substitution;
pub mod targets;

pub use energy::{
    calories_from_macros, check_energy_consistency, check_fiber, energy_breakdown,
    validate_against_target, EnergyBreakdown, EnergyInconsistency, FiberCheck, TargetCheck,
    CALORIE_TOLERANCE_PERCENT, ENERGY_CONSISTENCY_TOLERANCE_PERCENT, FIBER_DAILY_LIMIT_GRAMS,
};
pub use normalize::{normalize, normalize_all};
pub use scaler::{aggregate, aggregate_by_meal, protein_by_origin, scale};
pub use substitution::{find_substitutes, DEFAULT_SUBSTITUTION_LIMIT};
pub use targets::{compute_targets, ProfileTargets};
