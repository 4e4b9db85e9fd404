//! Nutrition MCP Tools
//!
//! Shapes calculation results into tool responses. Raw food records are
//! normalized here, so every tool accepts stored rows or API payloads alike.

use serde::Serialize;
use serde_json::Value;

use crate::error::{NutritionError, NutritionResult};
use crate::models::{
    ConsumedItem, Food, MacroGroup, Macros, MealTotals, NutritionTotals, ProteinSplit,
    SubstitutionCandidate, SubstitutionCriterion,
};
use crate::nutrition::{self, EnergyBreakdown, EnergyInconsistency, TargetCheck};

/// A raw consumed item as received from a caller
#[derive(Debug, Clone)]
pub struct RawConsumedItem {
    pub food: Value,
    pub quantity: f64,
    pub meal: Option<String>,
}

impl RawConsumedItem {
    fn normalize(&self) -> ConsumedItem {
        ConsumedItem {
            food: nutrition::normalize(&self.food),
            quantity: self.quantity,
            meal: self.meal.clone(),
        }
    }
}

/// Response for normalize_food
#[derive(Debug, Serialize)]
pub struct NormalizeFoodResponse {
    pub food: Food,
    pub macro_group: MacroGroup,
    /// Present when declared energy strays from the 4/4/9 estimate
    pub energy_inconsistency: Option<EnergyInconsistency>,
}

/// Response for scale_food
#[derive(Debug, Serialize)]
pub struct ScaleFoodResponse {
    pub food_id: String,
    pub food_name: String,
    pub quantity: f64,
    pub reference_quantity: f64,
    pub macros: Macros,
}

/// Response for aggregate_consumption
#[derive(Debug, Serialize)]
pub struct AggregateResponse {
    pub item_count: usize,
    pub totals: NutritionTotals,
    pub meals: Vec<MealTotals>,
}

/// Response for summarize_diet
#[derive(Debug, Serialize)]
pub struct DietSummary {
    pub item_count: usize,
    pub totals: NutritionTotals,
    pub meals: Vec<MealTotals>,
    pub energy: EnergyBreakdown,
    pub protein: ProteinSplit,
    pub target_check: Option<TargetCheck>,
}

/// Response for find_substitutes
#[derive(Debug, Serialize)]
pub struct FindSubstitutesResponse {
    pub current_food: Food,
    pub current_quantity: f64,
    pub macro_group: MacroGroup,
    pub criterion: SubstitutionCriterion,
    /// Criterion value (kcal or g carbs) the substitutes must match
    pub current_criterion_total: f64,
    pub candidates: Vec<SubstitutionCandidate>,
}

pub fn normalize_food(raw: &Value) -> NormalizeFoodResponse {
    let food = nutrition::normalize(raw);
    NormalizeFoodResponse {
        macro_group: food.macro_group(),
        energy_inconsistency: nutrition::check_energy_consistency(&food),
        food,
    }
}

pub fn scale_food(raw: &Value, quantity: f64) -> ScaleFoodResponse {
    let food = nutrition::normalize(raw);
    let macros = nutrition::scale(&food, quantity);
    ScaleFoodResponse {
        food_id: food.id,
        food_name: food.name,
        quantity,
        reference_quantity: food.reference_quantity,
        macros,
    }
}

pub fn aggregate_consumption(items: &[RawConsumedItem]) -> AggregateResponse {
    let items: Vec<ConsumedItem> = items.iter().map(RawConsumedItem::normalize).collect();
    AggregateResponse {
        item_count: items.len(),
        totals: nutrition::aggregate(&items),
        meals: nutrition::aggregate_by_meal(&items),
    }
}

/// Full diet report. A target is optional, but when given it must be positive.
pub fn summarize_diet(items: &[RawConsumedItem], target_calories: Option<f64>) -> NutritionResult<DietSummary> {
    let items: Vec<ConsumedItem> = items.iter().map(RawConsumedItem::normalize).collect();
    let totals = nutrition::aggregate(&items);

    let target_check = target_calories
        .map(|target| nutrition::validate_against_target(totals.calories, target))
        .transpose()?;

    Ok(DietSummary {
        item_count: items.len(),
        energy: nutrition::energy_breakdown(totals.carbs, totals.protein, totals.fat, target_calories),
        protein: nutrition::protein_by_origin(&items),
        meals: nutrition::aggregate_by_meal(&items),
        totals,
        target_check,
    })
}

pub fn find_substitutes(
    current: &Value,
    current_quantity: f64,
    pool: &[Value],
    criterion: &str,
    limit: usize,
) -> NutritionResult<FindSubstitutesResponse> {
    let criterion = SubstitutionCriterion::from_str(criterion).ok_or_else(|| {
        NutritionError::invalid_argument(
            "criterion",
            format!("expected \"calories\" or \"carbs\", got \"{}\"", criterion),
        )
    })?;

    let current_food = nutrition::normalize(current);
    let pool = nutrition::normalize_all(pool);
    let candidates = nutrition::find_substitutes(&current_food, current_quantity, &pool, criterion, limit);
    let current_criterion_total = criterion.pick(&nutrition::scale(&current_food, current_quantity));

    Ok(FindSubstitutesResponse {
        macro_group: current_food.macro_group(),
        current_food,
        current_quantity,
        criterion,
        current_criterion_total,
        candidates,
    })
}
