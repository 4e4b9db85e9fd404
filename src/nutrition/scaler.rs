//! Macro scaler
//!
//! Proportional scaling of a food's reference macros to an eaten quantity,
//! and the totals built from lists of eaten items.

use crate::models::{ConsumedItem, Food, Macros, MealTotals, NutritionTotals, ProteinOrigin, ProteinSplit};

/// Macros for `quantity` of `food`: `quantity / reference_quantity` times each
/// reference value.
///
/// A non-positive or non-finite reference quantity, or a non-finite quantity,
/// yields all zeros instead of NaN or infinity. Negative quantities are passed
/// through and produce negative macros.
pub fn scale(food: &Food, quantity: f64) -> Macros {
    if !quantity.is_finite() {
        tracing::warn!("Non-finite quantity {} for food '{}'; scaling to zero", quantity, food.name);
        return Macros::zero();
    }
    if !food.reference_quantity.is_finite() || food.reference_quantity <= 0.0 {
        return Macros::zero();
    }

    let factor = quantity / food.reference_quantity;
    Macros {
        calories: factor * food.calories_per_reference,
        carbs: factor * food.carbs_per_reference,
        protein: factor * food.protein_per_reference,
        fat: factor * food.fat_per_reference,
    }
}

/// Sum of [`scale`] over every item. An empty list gives zero totals.
pub fn aggregate(items: &[ConsumedItem]) -> NutritionTotals {
    items.iter().map(|item| scale(&item.food, item.quantity)).sum()
}

/// Totals per meal label, in order of each label's first appearance
pub fn aggregate_by_meal(items: &[ConsumedItem]) -> Vec<MealTotals> {
    let mut meals: Vec<MealTotals> = Vec::new();

    for item in items {
        let scaled = scale(&item.food, item.quantity);
        match meals.iter_mut().find(|m| m.meal == item.meal) {
            Some(meal) => {
                meal.item_count += 1;
                meal.totals += scaled;
            }
            None => meals.push(MealTotals {
                meal: item.meal.clone(),
                item_count: 1,
                totals: scaled,
            }),
        }
    }

    meals
}

/// Protein from animal sources versus everything else
pub fn protein_by_origin(items: &[ConsumedItem]) -> ProteinSplit {
    let mut split = ProteinSplit::default();

    for item in items {
        let protein = scale(&item.food, item.quantity).protein;
        if item.food.protein_origin == ProteinOrigin::Animal {
            split.animal += protein;
        } else {
            split.non_animal += protein;
        }
    }

    split.total = split.animal + split.non_animal;
    split
}
