//! Energy calculations
//!
//! Atwater conversion of macro grams to kcal, energy shares, and the checks
//! coaches run against a calorie target or a food's declared energy.

use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, NutritionResult};
use crate::models::Food;

pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// A diet within this percentage of its calorie target is on target (inclusive)
pub const CALORIE_TOLERANCE_PERCENT: f64 = 5.0;

/// Declared vs macro-derived energy may differ by this much before it is flagged
pub const ENERGY_CONSISTENCY_TOLERANCE_PERCENT: f64 = 10.0;

/// Daily fiber ceiling in grams
pub const FIBER_DAILY_LIMIT_GRAMS: f64 = 30.0;

/// Share of energy coming from each macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub percent_carbs: f64,
    pub percent_protein: f64,
    pub percent_fat: f64,
    /// Energy implied by the macro grams
    pub total_calories: f64,
}

/// Result of comparing a diet's calories to its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetCheck {
    pub within_tolerance: bool,
    pub absolute_difference: f64,
    pub percent_difference: f64,
}

/// A food whose declared energy disagrees with its macros
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyInconsistency {
    pub declared_calories: f64,
    pub calculated_calories: f64,
    pub difference: f64,
    pub percent_difference: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiberCheck {
    pub exceeded: bool,
    /// Grams above the daily limit, zero when under it
    pub excess: f64,
}

/// kcal implied by macro grams (4/4/9)
pub fn calories_from_macros(carbs: f64, protein: f64, fat: f64) -> f64 {
    carbs * KCAL_PER_GRAM_CARBS + protein * KCAL_PER_GRAM_PROTEIN + fat * KCAL_PER_GRAM_FAT
}

/// Energy share of each macro.
///
/// Percentages are relative to `target_calories` when it is given and
/// non-zero, otherwise to the macro-derived total. A denominator that is not
/// positive makes every percentage 0.
pub fn energy_breakdown(
    carbs: f64,
    protein: f64,
    fat: f64,
    target_calories: Option<f64>,
) -> EnergyBreakdown {
    let kcal_carbs = carbs * KCAL_PER_GRAM_CARBS;
    let kcal_protein = protein * KCAL_PER_GRAM_PROTEIN;
    let kcal_fat = fat * KCAL_PER_GRAM_FAT;
    let total_calories = kcal_carbs + kcal_protein + kcal_fat;

    let base = match target_calories {
        Some(target) if target != 0.0 && !target.is_nan() => target,
        _ => total_calories,
    };
    let percent = |kcal: f64| {
        if base.is_finite() && base > 0.0 {
            kcal * 100.0 / base
        } else {
            0.0
        }
    };

    EnergyBreakdown {
        percent_carbs: percent(kcal_carbs),
        percent_protein: percent(kcal_protein),
        percent_fat: percent(kcal_fat),
        total_calories,
    }
}

/// Compare `total_calories` to `target_calories` with a
/// [`CALORIE_TOLERANCE_PERCENT`] band.
///
/// A target that is not a positive finite number is rejected.
pub fn validate_against_target(total_calories: f64, target_calories: f64) -> NutritionResult<TargetCheck> {
    if !target_calories.is_finite() || target_calories <= 0.0 {
        return Err(NutritionError::invalid_argument(
            "target_calories",
            format!("must be a positive number, got {}", target_calories),
        ));
    }
    if !total_calories.is_finite() {
        return Err(NutritionError::invalid_argument(
            "total_calories",
            format!("must be a finite number, got {}", total_calories),
        ));
    }

    let absolute_difference = (total_calories - target_calories).abs();
    let percent_difference = absolute_difference * 100.0 / target_calories;

    Ok(TargetCheck {
        within_tolerance: percent_difference <= CALORIE_TOLERANCE_PERCENT,
        absolute_difference,
        percent_difference,
    })
}

/// Flag a food whose declared calories stray more than
/// [`ENERGY_CONSISTENCY_TOLERANCE_PERCENT`] from its macros. Nothing is
/// corrected; a food with zero declared or zero derived energy is not judged.
pub fn check_energy_consistency(food: &Food) -> Option<EnergyInconsistency> {
    let declared = food.calories_per_reference;
    let calculated = calories_from_macros(
        food.carbs_per_reference,
        food.protein_per_reference,
        food.fat_per_reference,
    );

    if declared == 0.0 || calculated == 0.0 {
        return None;
    }

    let difference = (declared - calculated).abs();
    let percent_difference = difference * 100.0 / calculated;

    if percent_difference > ENERGY_CONSISTENCY_TOLERANCE_PERCENT {
        Some(EnergyInconsistency {
            declared_calories: declared,
            calculated_calories: calculated,
            difference,
            percent_difference,
        })
    } else {
        None
    }
}

pub fn check_fiber(total_fiber: f64) -> FiberCheck {
    FiberCheck {
        exceeded: total_fiber > FIBER_DAILY_LIMIT_GRAMS,
        excess: (total_fiber - FIBER_DAILY_LIMIT_GRAMS).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProteinOrigin;

    fn food(calories: f64, carbs: f64, protein: f64, fat: f64) -> Food {
        Food {
            id: "f".to_string(),
            name: "test".to_string(),
            reference_quantity: 100.0,
            calories_per_reference: calories,
            carbs_per_reference: carbs,
            protein_per_reference: protein,
            fat_per_reference: fat,
            protein_origin: ProteinOrigin::Unspecified,
        }
    }

    #[test]
    fn test_calories_from_macros() {
        assert_eq!(calories_from_macros(10.0, 10.0, 10.0), 170.0);
        assert_eq!(calories_from_macros(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_energy_breakdown_against_own_total() {
        let b = energy_breakdown(50.0, 25.0, 10.0, None);
        assert_eq!(b.total_calories, 390.0);
        assert!((b.percent_carbs - 200.0 / 390.0 * 100.0).abs() < 1e-9);
        assert!((b.percent_protein - 100.0 / 390.0 * 100.0).abs() < 1e-9);
        assert!((b.percent_fat - 90.0 / 390.0 * 100.0).abs() < 1e-9);
        assert!((b.percent_carbs + b.percent_protein + b.percent_fat - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_energy_breakdown_against_target() {
        let b = energy_breakdown(250.0, 150.0, 50.0, Some(2000.0));
        assert_eq!(b.total_calories, 2050.0);
        assert_eq!(b.percent_carbs, 50.0);
        assert_eq!(b.percent_protein, 30.0);
        assert_eq!(b.percent_fat, 22.5);
    }

    #[test]
    fn test_energy_breakdown_zero_target_uses_total() {
        let with_zero = energy_breakdown(50.0, 25.0, 10.0, Some(0.0));
        let without = energy_breakdown(50.0, 25.0, 10.0, None);
        assert_eq!(with_zero, without);
    }

    #[test]
    fn test_energy_breakdown_zero_denominator() {
        let b = energy_breakdown(0.0, 0.0, 0.0, None);
        assert_eq!(
            b,
            EnergyBreakdown { percent_carbs: 0.0, percent_protein: 0.0, percent_fat: 0.0, total_calories: 0.0 }
        );
    }

    #[test]
    fn test_energy_breakdown_negative_target() {
        let b = energy_breakdown(10.0, 10.0, 10.0, Some(-100.0));
        assert_eq!(b.percent_carbs, 0.0);
        assert_eq!(b.total_calories, 170.0);
    }

    #[test]
    fn test_validate_boundary_inclusive() {
        let check = validate_against_target(2100.0, 2000.0).unwrap();
        assert_eq!(check.percent_difference, 5.0);
        assert_eq!(check.absolute_difference, 100.0);
        assert!(check.within_tolerance);
    }

    #[test]
    fn test_validate_just_outside() {
        let check = validate_against_target(2101.0, 2000.0).unwrap();
        assert!((check.percent_difference - 5.05).abs() < 1e-9);
        assert!(!check.within_tolerance);
    }

    #[test]
    fn test_validate_under_target() {
        let check = validate_against_target(1950.0, 2000.0).unwrap();
        assert_eq!(check.absolute_difference, 50.0);
        assert!(check.within_tolerance);
    }

    #[test]
    fn test_validate_rejects_bad_target() {
        for target in [0.0, -2000.0, f64::NAN, f64::INFINITY] {
            match validate_against_target(2000.0, target) {
                Err(NutritionError::InvalidArgument { argument, .. }) => {
                    assert_eq!(argument, "target_calories")
                }
                other => panic!("expected InvalidArgument, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_energy_consistency_flags_large_gap() {
        // macros imply 170 kcal
        let report = check_energy_consistency(&food(250.0, 10.0, 10.0, 10.0)).unwrap();
        assert_eq!(report.calculated_calories, 170.0);
        assert_eq!(report.difference, 80.0);
        assert!(report.percent_difference > ENERGY_CONSISTENCY_TOLERANCE_PERCENT);
    }

    #[test]
    fn test_energy_consistency_accepts_small_gap() {
        assert_eq!(check_energy_consistency(&food(130.0, 28.0, 2.7, 0.3)), None);
        assert_eq!(check_energy_consistency(&food(187.0, 10.0, 10.0, 10.0)), None);
    }

    #[test]
    fn test_energy_consistency_skips_zero() {
        assert_eq!(check_energy_consistency(&food(0.0, 10.0, 10.0, 10.0)), None);
        assert_eq!(check_energy_consistency(&food(50.0, 0.0, 0.0, 0.0)), None);
    }

    #[test]
    fn test_check_fiber() {
        assert_eq!(check_fiber(25.0), FiberCheck { exceeded: false, excess: 0.0 });
        assert_eq!(check_fiber(30.0), FiberCheck { exceeded: false, excess: 0.0 });
        assert_eq!(check_fiber(34.5), FiberCheck { exceeded: true, excess: 4.5 });
    }
}
