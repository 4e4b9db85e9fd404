//! Reference normalizer
//!
//! Turns a loosely-typed food record into a canonical [`Food`]. Stored records
//! use localized column names, API payloads use short English names, and our
//! own serialized `Food` uses the long snake_case names; all are accepted.

use serde_json::Value;

use crate::models::{Food, ProteinOrigin, DEFAULT_REFERENCE_QUANTITY};

// Aliases are tried in order. The first key holding a non-null value wins,
// even if that value then fails to parse.
const ID_KEYS: &[&str] = &["id"];
const NAME_KEYS: &[&str] = &["name", "nome"];
const REFERENCE_KEYS: &[&str] = &["portion", "reference_quantity", "quantidade_referencia_g"];
const CALORIE_KEYS: &[&str] = &["calories", "calories_per_reference", "kcal_por_referencia"];
const CARB_KEYS: &[&str] = &["carbs", "carbs_per_reference", "cho_por_referencia"];
const PROTEIN_KEYS: &[&str] = &["protein", "protein_per_reference", "ptn_por_referencia"];
const FAT_KEYS: &[&str] = &["fat", "fat_per_reference", "lip_por_referencia"];
const ORIGIN_KEYS: &[&str] = &["protein_origin", "origem_ptn"];

/// Normalize one raw record. Never fails; anything unusable falls back to a
/// default (0 for missing or negative macros, 100 for the reference quantity,
/// "" for text).
pub fn normalize(raw: &Value) -> Food {
    let reference_quantity = match lookup(raw, REFERENCE_KEYS).and_then(to_number) {
        Some(q) if q > 0.0 => q,
        other => {
            tracing::debug!(
                "Food record has no usable reference quantity ({:?}); using {}",
                other,
                DEFAULT_REFERENCE_QUANTITY
            );
            DEFAULT_REFERENCE_QUANTITY
        }
    };

    Food {
        id: lookup(raw, ID_KEYS).map(to_text).unwrap_or_default(),
        name: lookup(raw, NAME_KEYS).map(to_text).unwrap_or_default(),
        reference_quantity,
        calories_per_reference: number_or_zero(raw, CALORIE_KEYS),
        carbs_per_reference: number_or_zero(raw, CARB_KEYS),
        protein_per_reference: number_or_zero(raw, PROTEIN_KEYS),
        fat_per_reference: number_or_zero(raw, FAT_KEYS),
        protein_origin: lookup(raw, ORIGIN_KEYS)
            .map(|v| ProteinOrigin::classify(&to_text(v)))
            .unwrap_or_default(),
    }
}

/// Normalize every record of a pool, keeping order
pub fn normalize_all(raws: &[Value]) -> Vec<Food> {
    raws.iter().map(normalize).collect()
}

/// First non-null value among `keys`. Non-object input has no keys.
fn lookup<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let map = raw.as_object()?;
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
}

/// Macro amounts cannot be negative; those count as unusable
fn number_or_zero(raw: &Value, keys: &[&str]) -> f64 {
    lookup(raw, keys)
        .and_then(to_number)
        .filter(|n| *n >= 0.0)
        .unwrap_or(0.0)
}

/// Lenient numeric coercion: numbers and numeric strings, finite only
fn to_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_english_aliases() {
        let food = normalize(&json!({
            "id": "rice",
            "name": "White rice",
            "portion": 100,
            "calories": 130,
            "carbs": 28,
            "protein": 2.7,
            "fat": 0.3
        }));
        assert_eq!(food.id, "rice");
        assert_eq!(food.name, "White rice");
        assert_eq!(food.reference_quantity, 100.0);
        assert_eq!(food.calories_per_reference, 130.0);
        assert_eq!(food.carbs_per_reference, 28.0);
        assert_eq!(food.protein_per_reference, 2.7);
        assert_eq!(food.fat_per_reference, 0.3);
        assert_eq!(food.protein_origin, ProteinOrigin::Unspecified);
    }

    #[test]
    fn test_normalize_localized_aliases() {
        let food = normalize(&json!({
            "id": 17,
            "nome": "Frango grelhado",
            "quantidade_referencia_g": "100",
            "kcal_por_referencia": "165",
            "cho_por_referencia": 0,
            "ptn_por_referencia": "31",
            "lip_por_referencia": "3.6",
            "origem_ptn": "animal"
        }));
        assert_eq!(food.id, "17");
        assert_eq!(food.name, "Frango grelhado");
        assert_eq!(food.calories_per_reference, 165.0);
        assert_eq!(food.protein_per_reference, 31.0);
        assert_eq!(food.fat_per_reference, 3.6);
        assert_eq!(food.protein_origin, ProteinOrigin::Animal);
    }

    #[test]
    fn test_english_alias_takes_precedence() {
        let food = normalize(&json!({ "name": "Potato", "nome": "Batata", "calories": 77, "kcal_por_referencia": 999 }));
        assert_eq!(food.name, "Potato");
        assert_eq!(food.calories_per_reference, 77.0);
    }

    #[test]
    fn test_null_falls_through_to_next_alias() {
        let food = normalize(&json!({ "calories": null, "kcal_por_referencia": 86 }));
        assert_eq!(food.calories_per_reference, 86.0);
    }

    #[test]
    fn test_unparsable_value_does_not_fall_through() {
        let food = normalize(&json!({ "calories": "n/a", "kcal_por_referencia": 86 }));
        assert_eq!(food.calories_per_reference, 0.0);
    }

    #[test]
    fn test_empty_record_gets_defaults() {
        let food = normalize(&json!({}));
        assert_eq!(food.id, "");
        assert_eq!(food.name, "");
        assert_eq!(food.reference_quantity, 100.0);
        assert_eq!(food.calories_per_reference, 0.0);
        assert_eq!(food.carbs_per_reference, 0.0);
        assert_eq!(food.protein_per_reference, 0.0);
        assert_eq!(food.fat_per_reference, 0.0);
    }

    #[test]
    fn test_non_object_gets_defaults() {
        assert_eq!(normalize(&json!(null)), normalize(&json!({})));
        assert_eq!(normalize(&json!([1, 2, 3])), normalize(&json!({})));
    }

    #[test]
    fn test_zero_or_negative_reference_defaults() {
        assert_eq!(normalize(&json!({ "portion": 0 })).reference_quantity, 100.0);
        assert_eq!(normalize(&json!({ "portion": "0" })).reference_quantity, 100.0);
        assert_eq!(normalize(&json!({ "portion": -30 })).reference_quantity, 100.0);
        assert_eq!(normalize(&json!({ "portion": "abc" })).reference_quantity, 100.0);
        assert_eq!(normalize(&json!({ "portion": 200 })).reference_quantity, 200.0);
    }

    #[test]
    fn test_non_finite_strings_rejected() {
        let food = normalize(&json!({ "calories": "inf", "fat": "NaN", "carbs": " 12.5 " }));
        assert_eq!(food.calories_per_reference, 0.0);
        assert_eq!(food.fat_per_reference, 0.0);
        assert_eq!(food.carbs_per_reference, 12.5);
    }

    #[test]
    fn test_negative_macros_default_to_zero() {
        let food = normalize(&json!({ "calories": -50, "carbs": "-10", "protein": 5, "fat": -1 }));
        assert_eq!(food.calories_per_reference, 0.0);
        assert_eq!(food.carbs_per_reference, 0.0);
        assert_eq!(food.protein_per_reference, 5.0);
        assert_eq!(food.fat_per_reference, 0.0);
        assert_eq!(food.macro_group(), crate::models::MacroGroup::Protein);
    }

    #[test]
    fn test_booleans_are_not_numbers() {
        let food = normalize(&json!({ "calories": true }));
        assert_eq!(food.calories_per_reference, 0.0);
    }

    #[test]
    fn test_serialized_food_normalizes_to_itself() {
        let original = normalize(&json!({
            "id": "egg", "name": "Egg", "portion": 50, "calories": 72,
            "carbs": 0.5, "protein": 6.25, "fat": 4.75, "protein_origin": "animal"
        }));
        let round_tripped = normalize(&serde_json::to_value(&original).unwrap());
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn test_normalize_all_keeps_order() {
        let foods = normalize_all(&[json!({ "id": "a" }), json!({ "id": "b" })]);
        let ids: Vec<_> = foods.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
