//! Food model
//!
//! Canonical food record with macros calibrated to a reference portion.

use serde::{Deserialize, Serialize};

/// Portion size assumed when a record has no usable reference quantity
pub const DEFAULT_REFERENCE_QUANTITY: f64 = 100.0;

/// Where a food's protein predominantly comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProteinOrigin {
    Animal,
    Plant,
    Mixed,
    #[default]
    Unspecified,
}

impl ProteinOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProteinOrigin::Animal => "animal",
            ProteinOrigin::Plant => "plant",
            ProteinOrigin::Mixed => "mixed",
            ProteinOrigin::Unspecified => "unspecified",
        }
    }

    /// Classify free text such as "animal", "Vegetal" or "mista"
    pub fn classify(s: &str) -> Self {
        let lower = s.to_lowercase();
        if lower.contains("animal") {
            ProteinOrigin::Animal
        } else if lower.contains("veget") || lower.contains("plant") {
            ProteinOrigin::Plant
        } else if lower.contains("mist") || lower.contains("mix") {
            ProteinOrigin::Mixed
        } else {
            ProteinOrigin::Unspecified
        }
    }
}

/// Macro-dominant group used to decide which foods can replace each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroGroup {
    Protein,
    Carb,
    Fat,
    Mixed,
}

impl MacroGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MacroGroup::Protein => "protein",
            MacroGroup::Carb => "carb",
            MacroGroup::Fat => "fat",
            MacroGroup::Mixed => "mixed",
        }
    }
}

/// A food with energy and macros for exactly `reference_quantity` g or ml.
///
/// Build these through [`crate::nutrition::normalize`]; it guarantees a
/// positive reference quantity and finite macro values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Empty when the source record had no id
    pub id: String,
    pub name: String,
    pub reference_quantity: f64,
    pub calories_per_reference: f64,
    pub carbs_per_reference: f64,
    pub protein_per_reference: f64,
    pub fat_per_reference: f64,
    #[serde(default)]
    pub protein_origin: ProteinOrigin,
}

impl Food {
    /// Dominant macro at the reference quantity.
    ///
    /// Ties go to protein, then carbs, then fat. A food with no positive
    /// macro is `Mixed`.
    pub fn macro_group(&self) -> MacroGroup {
        let protein = self.protein_per_reference;
        let carbs = self.carbs_per_reference;
        let fat = self.fat_per_reference;
        let max = protein.max(carbs).max(fat);

        if max.is_nan() || max <= 0.0 {
            MacroGroup::Mixed
        } else if protein == max {
            MacroGroup::Protein
        } else if carbs == max {
            MacroGroup::Carb
        } else {
            MacroGroup::Fat
        }
    }
}
