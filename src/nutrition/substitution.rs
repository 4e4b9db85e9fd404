//! Substitution engine
//!
//! Proposes same-group foods in the quantity that keeps either total energy
//! or total carbohydrate equal to the current portion.

use crate::models::{Food, SubstitutionCandidate, SubstitutionCriterion};

use super::scaler::scale;

/// How many candidates a query returns unless told otherwise
pub const DEFAULT_SUBSTITUTION_LIMIT: usize = 5;

/// Rank replacements for `current_quantity` of `current` from `pool`.
///
/// Candidates must share the current food's [`crate::models::MacroGroup`],
/// must not be the current food (matched by id, so id-less records exclude
/// every other id-less record), and need a
/// positive finite criterion value per unit. Results are ordered by how close
/// the equivalent quantity is to `current_quantity`; ties keep pool order. At
/// most `limit` results are returned.
pub fn find_substitutes(
    current: &Food,
    current_quantity: f64,
    pool: &[Food],
    criterion: SubstitutionCriterion,
    limit: usize,
) -> Vec<SubstitutionCandidate> {
    let group = current.macro_group();
    let current_total = criterion.pick(&scale(current, current_quantity));

    let mut candidates: Vec<SubstitutionCandidate> = pool
        .iter()
        .filter(|food| food.macro_group() == group)
        .filter(|food| food.id != current.id)
        .filter_map(|food| {
            let per_unit = per_unit_value(food, criterion)?;
            let equivalent_quantity = equivalent_quantity(current_total, per_unit, criterion);
            Some(SubstitutionCandidate {
                food: food.clone(),
                equivalent_quantity,
                criterion,
                provides: scale(food, equivalent_quantity),
            })
        })
        .collect();

    tracing::debug!(
        "Substitution for '{}' ({} {}): {} of {} pool foods qualify",
        current.name,
        group.as_str(),
        criterion.as_str(),
        candidates.len(),
        pool.len()
    );

    // sort_by is stable, so equal distances keep pool order
    candidates.sort_by(|a, b| {
        let da = (a.equivalent_quantity - current_quantity).abs();
        let db = (b.equivalent_quantity - current_quantity).abs();
        da.total_cmp(&db)
    });
    candidates.truncate(limit);
    candidates
}

/// Criterion amount per gram/ml, or `None` when it cannot be divided by
fn per_unit_value(food: &Food, criterion: SubstitutionCriterion) -> Option<f64> {
    let per_reference = criterion.per_reference(food);
    if !(per_reference.is_finite() && per_reference > 0.0) {
        return None;
    }
    if !(food.reference_quantity.is_finite() && food.reference_quantity > 0.0) {
        return None;
    }
    Some(per_reference / food.reference_quantity)
}

fn equivalent_quantity(current_total: f64, per_unit: f64, criterion: SubstitutionCriterion) -> f64 {
    if criterion == SubstitutionCriterion::Carbs && (current_total == 0.0 || per_unit == 0.0) {
        return 0.0;
    }
    let quantity = current_total / per_unit;
    if quantity.is_finite() {
        quantity
    } else {
        0.0
    }
}
