//! Coaching targets derived from body weight

use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, NutritionResult};

/// Lower bound of recommended water intake, ml per kg of body weight
pub const WATER_MIN_ML_PER_KG: f64 = 25.0;
/// Upper bound of recommended water intake, ml per kg of body weight
pub const WATER_MAX_ML_PER_KG: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileTargets {
    pub calorie_target: f64,
    pub protein_target_grams: f64,
    pub water_min_ml: f64,
    pub water_max_ml: f64,
}

/// Daily targets for a student weighing `weight_kg`, from the coach's
/// kcal/kg and protein g/kg prescriptions
pub fn compute_targets(weight_kg: f64, kcal_per_kg: f64, protein_per_kg: f64) -> NutritionResult<ProfileTargets> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(NutritionError::invalid_argument(
            "weight_kg",
            format!("must be a positive number, got {}", weight_kg),
        ));
    }
    if !kcal_per_kg.is_finite() || kcal_per_kg < 0.0 {
        return Err(NutritionError::invalid_argument(
            "kcal_per_kg",
            format!("must be a non-negative number, got {}", kcal_per_kg),
        ));
    }
    if !protein_per_kg.is_finite() || protein_per_kg < 0.0 {
        return Err(NutritionError::invalid_argument(
            "protein_per_kg",
            format!("must be a non-negative number, got {}", protein_per_kg),
        ));
    }

    Ok(ProfileTargets {
        calorie_target: weight_kg * kcal_per_kg,
        protein_target_grams: weight_kg * protein_per_kg,
        water_min_ml: weight_kg * WATER_MIN_ML_PER_KG,
        water_max_ml: weight_kg * WATER_MAX_ML_PER_KG,
    })
}
