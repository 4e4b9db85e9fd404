//! Substitution models

use serde::{Deserialize, Serialize};

use super::{Food, Macros};

/// What an equivalent portion must hold constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionCriterion {
    /// Same energy, for general calorie control
    #[default]
    Calories,
    /// Same carbohydrate, for glycemic control
    Carbs,
}

impl SubstitutionCriterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubstitutionCriterion::Calories => "calories",
            SubstitutionCriterion::Carbs => "carbs",
        }
    }

    /// Accepts the English names and the short kcal/cho forms
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "calories" | "kcal" | "energy" => Some(SubstitutionCriterion::Calories),
            "carbs" | "cho" | "carbohydrate" | "carbohydrates" => Some(SubstitutionCriterion::Carbs),
            _ => None,
        }
    }

    /// The criterion's value in a set of macros
    pub fn pick(&self, macros: &Macros) -> f64 {
        match self {
            SubstitutionCriterion::Calories => macros.calories,
            SubstitutionCriterion::Carbs => macros.carbs,
        }
    }

    /// The criterion's value for a food at its reference quantity
    pub fn per_reference(&self, food: &Food) -> f64 {
        match self {
            SubstitutionCriterion::Calories => food.calories_per_reference,
            SubstitutionCriterion::Carbs => food.carbs_per_reference,
        }
    }
}

/// A replacement food and the quantity that matches the current portion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionCandidate {
    pub food: Food,
    pub equivalent_quantity: f64,
    pub criterion: SubstitutionCriterion,
    /// The candidate scaled to `equivalent_quantity`
    pub provides: Macros,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criterion_from_str() {
        assert_eq!(SubstitutionCriterion::from_str("kcal"), Some(SubstitutionCriterion::Calories));
        assert_eq!(SubstitutionCriterion::from_str(" Carbs "), Some(SubstitutionCriterion::Carbs));
        assert_eq!(SubstitutionCriterion::from_str("cho"), Some(SubstitutionCriterion::Carbs));
        assert_eq!(SubstitutionCriterion::from_str("protein"), None);
    }
}
