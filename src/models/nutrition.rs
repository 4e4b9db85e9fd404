//! Shared macro totals
//!
//! Used for scaled portions, meal totals and whole-diet totals.

use serde::{Deserialize, Serialize};

/// Energy and macronutrient content of some amount of food
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64, // kcal
    pub carbs: f64,    // grams
    pub protein: f64,  // grams
    pub fat: f64,      // grams
}

/// Sum of scaled macros across consumed items. Recomputed on every call.
pub type NutritionTotals = Macros;

impl Macros {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Multiply every field by `factor`
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            carbs: self.carbs * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
        }
    }

    pub fn add(&self, other: &Macros) -> Self {
        Self {
            calories: self.calories + other.calories,
            carbs: self.carbs + other.carbs,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros::add(&self, &other)
    }
}

impl std::ops::AddAssign for Macros {
    fn add_assign(&mut self, other: Macros) {
        *self = Macros::add(self, &other);
    }
}

impl std::ops::Mul<f64> for Macros {
    type Output = Macros;

    fn mul(self, factor: f64) -> Macros {
        self.scale(factor)
    }
}

impl std::iter::Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::zero(), |acc, m| acc + m)
    }
}
