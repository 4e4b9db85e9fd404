//! Consumption models
//!
//! A food eaten in some quantity, and the totals derived from lists of them.

use serde::{Deserialize, Serialize};

use super::{Food, Macros};

/// A food and the quantity eaten, in the food's reference unit (g or ml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumedItem {
    pub food: Food,
    pub quantity: f64,
    /// Meal label such as "breakfast" or "pre-workout"
    #[serde(default)]
    pub meal: Option<String>,
}

impl ConsumedItem {
    pub fn new(food: Food, quantity: f64) -> Self {
        Self {
            food,
            quantity,
            meal: None,
        }
    }

    pub fn in_meal(mut self, meal: impl Into<String>) -> Self {
        self.meal = Some(meal.into());
        self
    }
}

/// Totals for one meal label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTotals {
    /// `None` groups the items that had no label
    pub meal: Option<String>,
    pub item_count: usize,
    pub totals: Macros,
}

/// Protein grams split by animal and non-animal sources
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProteinSplit {
    pub animal: f64,
    pub non_animal: f64,
    pub total: f64,
}
